//! Severity levels and the severity-to-color classification.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How significant a style mismatch is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic deviation
    #[default]
    #[serde(alias = "laag")]
    Low,
    /// Noticeable deviation
    #[serde(alias = "gemiddeld")]
    Medium,
    /// Deviation that breaks the house style
    #[serde(alias = "hoog")]
    High,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    /// Lower-case label used in tables and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Capitalized label used in the legend.
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Color token shared by the console and PDF renderers.
    pub fn color(&self) -> ColorToken {
        match self {
            Severity::Low => ColorToken::Green,
            Severity::Medium => ColorToken::Yellow,
            Severity::High => ColorToken::Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "laag" => Ok(Severity::Low),
            "medium" | "gemiddeld" => Ok(Severity::Medium),
            "high" | "hoog" => Ok(Severity::High),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// Renderer-independent color of a severity.
///
/// Each renderer maps tokens onto its own palette, so a given row has the
/// same color class on the terminal and in the PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Low severity
    Green,
    /// Medium severity
    Yellow,
    /// High severity
    Red,
}

impl ColorToken {
    /// Name used in the legend.
    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Red => "red",
        }
    }
}

/// Classify a severity into its color token.
pub fn color_for(severity: Severity) -> ColorToken {
    severity.color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_is_total() {
        assert_eq!(color_for(Severity::Low), ColorToken::Green);
        assert_eq!(color_for(Severity::Medium), ColorToken::Yellow);
        assert_eq!(color_for(Severity::High), ColorToken::Red);
    }

    #[test]
    fn test_parse_english_and_dutch_labels() {
        assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
        assert_eq!(" Medium ".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!("laag".parse::<Severity>().unwrap(), Severity::Low);
        assert_eq!("gemiddeld".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!("hoog".parse::<Severity>().unwrap(), Severity::High);
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "critical".parse::<Severity>().unwrap_err();
        assert!(matches!(err, Error::InvalidSeverity(ref s) if s == "critical"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Severity = serde_json::from_str("\"hoog\"").unwrap();
        assert_eq!(back, Severity::High);
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }
}
