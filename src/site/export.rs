// JSON export of a query result, for external download.

use std::fs;

use log::debug;
use serde::Serialize;
use snafu::prelude::*;

use candidate_board::CandidateRecord;

use crate::site::*;

/// The export document. Records serialize through their own derived
/// shape, so the download and the in-memory model cannot drift apart.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument<'a> {
    pub total: usize,
    pub candidates: &'a [CandidateRecord],
}

/// Assembles the export document for a record sequence.
pub fn board_export(records: &[CandidateRecord]) -> ExportDocument<'_> {
    ExportDocument {
        total: records.len(),
        candidates: records,
    }
}

/// Pretty-prints the export to the given path, or to stdout when the
/// path is absent or the literal 'stdout'.
pub fn write_export(doc: &ExportDocument<'_>, out: &Option<String>) -> SiteResult<()> {
    let pretty = serde_json::to_string_pretty(doc).context(SerializingExportSnafu {})?;
    match out.as_deref() {
        None | Some("stdout") => println!("{}", pretty),
        Some(path) => {
            debug!("write_export: {}", path);
            fs::write(path, pretty).context(WritingExportSnafu { path })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use candidate_board::samples::sample_records;
    use serde_json::json;

    #[test]
    fn export_carries_every_candidate_and_policy() {
        let records = sample_records();
        let js = serde_json::to_value(board_export(&records)).unwrap();
        assert_eq!(js["total"], json!(records.len()));
        let candidates = js["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), records.len());
        let first = &candidates[0];
        assert_eq!(first["name"], json!("田中 太郎"));
        assert_eq!(first["status"], json!("現職"));
        let policies = first["policies"].as_object().unwrap();
        assert_eq!(policies.len(), records[0].policies.len());
        assert_eq!(policies["子育て支援の充実"], json!("積極的に推進"));
        assert_eq!(policies["環境保護"], json!("未回答"));
    }

    #[test]
    fn export_of_an_empty_view_is_well_formed() {
        let js = serde_json::to_value(board_export(&[])).unwrap();
        assert_eq!(js["total"], json!(0));
        assert!(js["candidates"].as_array().unwrap().is_empty());
    }
}
