//! CSV exporter for ranked results.
//!
//! Output format:
//!
//! ```text
//! Alternatif,Score,Rank
//! Koloni,0.7312,1
//! "Roastery, Ltd",0.5100,2
//! ```
//!
//! Scores always carry four decimals, lines end in `\n`, and names are
//! quoted per RFC 4180 only when they need it.

use async_trait::async_trait;

use crate::domain::decision::RankedResult;
use crate::ports::{ExportError, ExportedResult, ResultExporter};

/// Default download name.
pub const DEFAULT_CSV_FILENAME: &str = "hasil_ahp_smart.csv";

const HEADER: &str = "Alternatif,Score,Rank";

/// Renders ranked results as CSV.
#[derive(Debug, Clone)]
pub struct CsvResultExporter {
    filename: String,
}

impl Default for CsvResultExporter {
    fn default() -> Self {
        Self::new(DEFAULT_CSV_FILENAME)
    }
}

impl CsvResultExporter {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// The CSV text for a result, header included.
    pub fn render(result: &RankedResult) -> String {
        let mut out = String::with_capacity(32 * (result.len() + 1));
        out.push_str(HEADER);
        out.push('\n');
        for entry in result.entries() {
            out.push_str(&quote_field(&entry.alternative));
            out.push_str(&format!(",{:.4},{}\n", entry.score, entry.rank));
        }
        out
    }
}

/// Quotes a field when it holds a comma, quote or line break.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[async_trait]
impl ResultExporter for CsvResultExporter {
    async fn export(&self, result: &RankedResult) -> Result<ExportedResult, ExportError> {
        if result.is_empty() {
            return Err(ExportError::EmptyResult);
        }

        Ok(ExportedResult {
            content: Self::render(result).into_bytes(),
            content_type: "text/csv; charset=utf-8".to_string(),
            filename: self.filename.clone(),
        })
    }
}
