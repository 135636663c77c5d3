//! Google Ads Editor CSV export.
//!
//! Ads Editor imports tab-separated sheets encoded as UTF-16 with a byte order
//! mark. A UTF-8 copy is written alongside for viewing in ordinary tools.

pub mod columns;
pub mod rows;

pub use columns::COLUMNS;
pub use rows::{build_rows, Row};

use crate::models::AdsDocument;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid ads document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result of a finished export.
#[derive(Debug)]
pub struct ExportSummary {
    pub rows: usize,
    pub utf16_path: PathBuf,
    pub utf8_path: PathBuf,
}

/// Read the Ads Document at `input` and write the sheet to `output` (UTF-16)
/// and its `_utf8` sibling.
pub fn export_file(input: &Path, output: &Path) -> Result<ExportSummary, ExportError> {
    let text = fs::read_to_string(input)?;
    let document: AdsDocument = serde_json::from_str(&text)?;
    let rows = build_rows(&document);
    let sheet = render(&rows)?;

    fs::write(output, encode_utf16(&sheet))?;
    tracing::info!(rows = rows.len(), path = %output.display(), "Exported sheet");

    let utf8_path = utf8_path(output);
    fs::write(&utf8_path, sheet.as_bytes())?;
    tracing::info!(path = %utf8_path.display(), "Wrote UTF-8 copy");

    Ok(ExportSummary {
        rows: rows.len(),
        utf16_path: output.to_path_buf(),
        utf8_path,
    })
}

/// Render the header and `rows` as tab-separated text with CRLF line endings.
///
/// Cells are quoted only when they contain a tab, quote or line break.
pub fn render(rows: &[Row]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// UTF-16LE with a leading byte order mark.
pub fn encode_utf16(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + text.len() * 2);
    out.extend_from_slice(&[0xFF, 0xFE]);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// `export.csv` -> `export_utf8.csv`; other names get `_utf8.csv` appended.
pub fn utf8_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".csv").unwrap_or(&name);
    output.with_file_name(format!("{stem}_utf8.csv"))
}

/// Default export file name for an export started at `at`.
pub fn default_output_name(at: NaiveDateTime) -> String {
    format!("Ads_Editor_Export_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn decode_utf16(bytes: &[u8]) -> String {
        assert_eq!(&bytes[..2], &[0xFF, 0xFE], "missing byte order mark");
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).unwrap()
    }

    #[test]
    fn test_render_header_only() {
        let sheet = render(&[]).unwrap();
        assert_eq!(sheet, format!("{}\r\n", COLUMNS.join("\t")));
    }

    #[test]
    fn test_render_quotes_only_when_needed() {
        let mut row = Row::default();
        row.set("Campaign", "Plain");
        row.set("Comment", "has\ttab");
        row.set("Headline 1 position", " -");
        row.set("Keyword", "say \"hi\"");

        let sheet = render(&[row]).unwrap();
        let line = sheet.lines().nth(1).unwrap();
        let cells: Vec<&str> = line.split('\t').collect();

        assert_eq!(cells[0], "Plain");
        assert!(line.contains("\t -\t"));
        assert!(line.contains("\"say \"\"hi\"\"\""));
        assert!(line.ends_with("\"has\ttab\""));
    }

    #[test]
    fn test_encode_utf16() {
        assert_eq!(encode_utf16("A"), vec![0xFF, 0xFE, 0x41, 0x00]);
        assert_eq!(decode_utf16(&encode_utf16("Café ✓")), "Café ✓");
    }

    #[test]
    fn test_utf8_path() {
        assert_eq!(
            utf8_path(Path::new("/tmp/out/export.csv")),
            PathBuf::from("/tmp/out/export_utf8.csv")
        );
        assert_eq!(utf8_path(Path::new("sheet.tsv")), PathBuf::from("sheet.tsv_utf8.csv"));
    }

    #[test]
    fn test_default_output_name() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(default_output_name(at), "Ads_Editor_Export_20250102_030405.csv");
    }

    #[test]
    fn test_export_file_writes_both_encodings() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("ads_data.json");
        std::fs::write(
            &input,
            r#"{
                "campaigns": [{
                    "name": "Café Campaign",
                    "locations": ["Perth"],
                    "ad_groups": [{
                        "name": "Group",
                        "keywords": [{"keyword": "homes", "match_type": "Exact"}],
                        "ads": [{"headlines": ["Hi"], "descriptions": ["There"]}]
                    }]
                }]
            }"#,
        )
        .unwrap();
        let output = temp_dir.path().join("export.csv");

        let summary = export_file(&input, &output).unwrap();

        assert_eq!(summary.rows, 5);
        assert_eq!(summary.utf16_path, output);
        assert_eq!(summary.utf8_path, temp_dir.path().join("export_utf8.csv"));

        let utf8 = std::fs::read_to_string(&summary.utf8_path).unwrap();
        let utf16 = decode_utf16(&std::fs::read(&output).unwrap());
        assert_eq!(utf8, utf16);

        let lines: Vec<&str> = utf8.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Campaign\tLabels\tCampaign Type"));
        assert!(lines[1].starts_with("Café Campaign\t\tSearch\tGoogle search"));
        assert!(lines.iter().skip(1).all(|l| l.split('\t').count() == COLUMNS.len()));
    }

    #[test]
    fn test_export_file_rejects_invalid_document() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("ads_data.json");
        std::fs::write(&input, r#"{"campaigns": [{"type": "Search"}]}"#).unwrap();

        let result = export_file(&input, &temp_dir.path().join("out.csv"));
        assert!(matches!(result, Err(ExportError::Json(_))));
    }

    #[test]
    fn test_export_file_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let result = export_file(
            &temp_dir.path().join("missing.json"),
            &temp_dir.path().join("out.csv"),
        );
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
