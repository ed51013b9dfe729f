//! stylereport CLI - style mismatch report tool

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use stylereport::{
    ConsoleOptions, InputFormat, JsonFormat, NormalizeOptions, PdfOptions, PdfPalette, PdfSummary,
    Report, Reporter, Rgb,
};

const DEFAULT_INPUT: &str = "font_mismatches.json";
const DEFAULT_OUTPUT: &str = "report_fontcheck.pdf";
const DEMO_OUTPUT: &str = "report_demo.pdf";

#[derive(Parser)]
#[command(name = "stylereport")]
#[command(version)]
#[command(about = "Render document style mismatches as a console table and a PDF report", long_about = None)]
struct Cli {
    /// Input JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every command.
#[derive(Args, Clone)]
struct StyleArgs {
    /// Expected font when a mismatch reason names none
    #[arg(long, global = true, env = "STYLEREPORT_DEFAULT_FONT", default_value = "Montserrat")]
    default_font: String,

    /// PDF title
    #[arg(long, global = true, env = "STYLEREPORT_TITLE")]
    title: Option<String>,

    /// Logo placed at the top right of the PDF
    #[arg(long, global = true, env = "STYLEREPORT_LOGO", default_value = "logo.png")]
    logo: PathBuf,

    /// Leave the logo out
    #[arg(long, global = true)]
    no_logo: bool,

    /// Record shape of the input file
    #[arg(long, global = true, value_enum, default_value = "auto")]
    format: FormatArg,

    /// Disable console colors
    #[arg(long, global = true)]
    no_color: bool,

    /// PDF row color for high severity (#RRGGBB)
    #[arg(long, global = true, value_name = "HEX", value_parser = parse_color)]
    high_color: Option<Rgb>,

    /// PDF row color for medium severity (#RRGGBB)
    #[arg(long, global = true, value_name = "HEX", value_parser = parse_color)]
    medium_color: Option<Rgb>,

    /// PDF row color for low severity (#RRGGBB)
    #[arg(long, global = true, value_name = "HEX", value_parser = parse_color)]
    low_color: Option<Rgb>,
}

fn parse_color(value: &str) -> Result<Rgb, String> {
    Rgb::from_hex(value).ok_or_else(|| format!("expected #RRGGBB, got '{}'", value))
}

#[derive(Subcommand)]
enum Commands {
    /// Print the console table and write the PDF report (default)
    Report {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the console table only
    Console {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Write the PDF report only
    Pdf {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export normalized rows as JSON
    Json {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render the built-in demonstration dataset
    Demo {
        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Detect from the first record
    Auto,
    /// Font-check output (line, text, reason)
    Fonts,
    /// Canonical rows (element, type, expected, found, page, severity)
    Canonical,
}

impl From<FormatArg> for InputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Auto => InputFormat::Auto,
            FormatArg::Fonts => InputFormat::FontMismatch,
            FormatArg::Canonical => InputFormat::Canonical,
        }
    }
}

impl StyleArgs {
    fn logo(&self) -> Option<&Path> {
        if self.no_logo {
            None
        } else {
            Some(self.logo.as_path())
        }
    }

    fn pdf_palette(&self) -> PdfPalette {
        let mut palette = PdfPalette::default();
        if let Some(red) = self.high_color {
            palette.red = red;
        }
        if let Some(yellow) = self.medium_color {
            palette.yellow = yellow;
        }
        if let Some(green) = self.low_color {
            palette.green = green;
        }
        palette
    }

    fn reporter(&self) -> Reporter {
        let color = !self.no_color && colored::control::SHOULD_COLORIZE.should_colorize();

        let mut pdf_options = PdfOptions::new().with_palette(self.pdf_palette());
        if let Some(ref title) = self.title {
            pdf_options = pdf_options.with_title(title);
        }

        let mut reporter = Reporter::new()
            .with_format(self.format.into())
            .with_normalize_options(NormalizeOptions::new().with_default_font(&self.default_font))
            .with_console_options(ConsoleOptions::new().with_color(color))
            .with_pdf_options(pdf_options);
        if let Some(logo) = self.logo() {
            reporter = reporter.with_logo(logo);
        }
        reporter
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let style = cli.style;

    let result = match cli.command {
        Some(Commands::Report { input, output }) => {
            cmd_report(&style, input.as_deref(), output.as_deref())
        }
        Some(Commands::Console { input }) => cmd_console(&style, input.as_deref()),
        Some(Commands::Pdf { input, output }) => {
            cmd_pdf(&style, input.as_deref(), output.as_deref())
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&style, input.as_deref(), output.as_deref(), compact),
        Some(Commands::Demo { output }) => cmd_demo(&style, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_report(&style, cli.input.as_deref(), cli.output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(style: &StyleArgs, input: Option<&Path>) -> Result<Report, Box<dyn std::error::Error>> {
    let input = input.unwrap_or_else(|| Path::new(DEFAULT_INPUT));
    log::debug!("loading {}", input.display());
    style
        .reporter()
        .load(input)
        .map_err(|e| format!("{}: {}", input.display(), e).into())
}

fn cmd_report(
    style: &StyleArgs,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load(style, input)?;
    report.print_console()?;
    save_pdf(style, &report, output.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT)))
}

fn cmd_console(style: &StyleArgs, input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let report = load(style, input)?;
    report.print_console()?;
    Ok(())
}

fn cmd_pdf(
    style: &StyleArgs,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load(style, input)?;
    save_pdf(style, &report, output.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT)))
}

fn cmd_json(
    style: &StyleArgs,
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load(style, input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if let Some(path) = output {
        let mut writer = BufWriter::new(File::create(path)?);
        report.write_json(&mut writer, format)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", report.to_json(format)?);
    }

    Ok(())
}

fn cmd_demo(style: &StyleArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let report = style.reporter().demo();
    report.print_console()?;
    save_pdf(style, &report, output.unwrap_or_else(|| Path::new(DEMO_OUTPUT)))
}

fn save_pdf(
    style: &StyleArgs,
    report: &Report,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = report.save_pdf(output)?;
    print_summary(style, &summary, output);
    Ok(())
}

fn print_summary(style: &StyleArgs, summary: &PdfSummary, output: &Path) {
    if let Some(logo) = style.logo() {
        if !summary.logo_embedded {
            println!("{} {}", "Could not load logo:".yellow(), logo.display());
        }
    }

    println!(
        "\n{} {} ({} rows, {} {})",
        "PDF report written:".green().bold(),
        output.display(),
        summary.rows,
        summary.pages,
        if summary.pages == 1 { "page" } else { "pages" }
    );
}

fn cmd_version() {
    println!("{} {}", "stylereport".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document style mismatch report tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_input_runs_report() {
        let cli = Cli::try_parse_from(["stylereport", "mismatches.json", "-o", "out.pdf"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("mismatches.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.pdf")));
    }

    #[test]
    fn test_global_style_flags() {
        let cli = Cli::try_parse_from([
            "stylereport",
            "pdf",
            "in.json",
            "--no-logo",
            "--format",
            "canonical",
            "--title",
            "Audit",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Pdf { .. })));
        assert!(cli.style.logo().is_none());
        assert!(cli.style.format == FormatArg::Canonical);
        assert_eq!(cli.style.title.as_deref(), Some("Audit"));
    }

    #[test]
    fn test_palette_flags() {
        let cli = Cli::try_parse_from([
            "stylereport",
            "demo",
            "--high-color",
            "#FF0000",
            "--low-color",
            "00aa00",
        ])
        .unwrap();
        let palette = cli.style.pdf_palette();
        assert_eq!(palette.red, Rgb::new(0xFF, 0, 0));
        assert_eq!(palette.green, Rgb::new(0, 0xAA, 0));
        assert_eq!(palette.yellow, PdfPalette::default().yellow);
    }

    #[test]
    fn test_invalid_palette_color_is_rejected() {
        let result = Cli::try_parse_from(["stylereport", "--medium-color", "yellowish"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_input_names_the_file() {
        let cli = Cli::try_parse_from(["stylereport"]).unwrap();
        let missing = Path::new("/nonexistent/mismatches.json");
        let message = match load(&cli.style, Some(missing)) {
            Ok(_) => panic!("expected an error"),
            Err(e) => e.to_string(),
        };
        assert!(message.starts_with("/nonexistent/mismatches.json: "));
    }

    #[test]
    fn test_logo_defaults_to_logo_png() {
        let cli = Cli::try_parse_from(["stylereport", "demo"]).unwrap();
        if std::env::var_os("STYLEREPORT_LOGO").is_none() {
            assert_eq!(cli.style.logo(), Some(Path::new("logo.png")));
        }
    }
}
