//! Built-in demonstration dataset.

use crate::model::{ReportRow, Severity};

/// Five canonical rows covering every severity and several mismatch kinds.
pub fn demo_rows() -> Vec<ReportRow> {
    vec![
        ReportRow::new("Title slide 1", "color", "#000000", "#111111", 1, Severity::High),
        ReportRow::new("Text box 1", "font", "Calibri", "Arial", 2, Severity::Low),
        ReportRow::new("Paragraph 3", "margins", "2 cm", "1.5 cm", 3, Severity::Medium),
        ReportRow::new("Logo", "logo", "top right", "bottom left", 1, Severity::High),
        ReportRow::new("List slide 4", "bullet-style", "bullets", "numbering", 4, Severity::Low),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_rows_cover_all_severities() {
        let rows = demo_rows();
        assert_eq!(rows.len(), 5);
        for severity in Severity::ALL {
            assert!(rows.iter().any(|r| r.severity == severity));
        }
        assert!(rows.iter().all(|r| r.page >= 1 && r.text.is_none()));
    }
}
