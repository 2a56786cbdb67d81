use log::{info, warn};

use candidate_board::*;
use snafu::{prelude::*, Snafu};

pub mod export;
pub mod source;

/// The published sheet the campaign site reads from.
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/17ticqNQf202Qww_0YdprDHnHdXvLDYCEM-rzh2iuBQc/export?format=csv&gid=1238380915";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SiteError {
    #[snafu(display("Error fetching {url}"))]
    Fetch {
        source: Box<ureq::Error>,
        url: String,
    },
    #[snafu(display("Unexpected HTTP status {status} from {url}"))]
    HttpStatus { status: u16, url: String },
    #[snafu(display("Error reading response body from {url}"))]
    ReadingBody {
        source: std::io::Error,
        url: String,
    },
    #[snafu(display("Error reading CSV file {path}"))]
    ReadingCsv {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The survey data could not be used: {source}"))]
    Board { source: BoardError },
    #[snafu(display("Error serializing the export"))]
    SerializingExport { source: serde_json::Error },
    #[snafu(display("Error writing export to {path}"))]
    WritingExport {
        source: std::io::Error,
        path: String,
    },
    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SiteResult<T> = Result<T, SiteError>;

/// Where the CSV document comes from.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum CsvSource {
    File(String),
    Url(String),
}

/// What to do when the source fails or yields nothing.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum LoadPolicy {
    /// Populate the board from the built-in sample set (what the site
    /// ships with, so there is always something to display).
    FallbackSamples,
    /// Propagate the typed error to the caller.
    Propagate,
}

/// What actually populated the board.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum DataOrigin {
    Remote,
    File,
    FallbackSamples,
}

/// Why the source data was not used. Exposed so the presentation layer
/// can choose its own messaging rather than this crate deciding it.
#[derive(Debug)]
pub enum LoadFailure {
    /// The document could not be obtained at all.
    SourceUnavailable(SiteError),
    /// The document was obtained but was malformed or yielded zero
    /// admitted candidates.
    BadData(BoardError),
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub origin: DataOrigin,
    /// `Some` when the board holds the fallback samples.
    pub failure: Option<LoadFailure>,
}

fn acquire_text(src: &CsvSource) -> SiteResult<String> {
    match src {
        CsvSource::File(path) => source::read_file(path),
        CsvSource::Url(url) => source::fetch_url(url),
    }
}

fn load_records(
    src: &CsvSource,
    policy: LoadPolicy,
) -> SiteResult<(Vec<CandidateRecord>, LoadOutcome)> {
    let origin = match src {
        CsvSource::File(_) => DataOrigin::File,
        CsvSource::Url(_) => DataOrigin::Remote,
    };

    let failure = match acquire_text(src) {
        Ok(text) => match parse_records(&text) {
            Ok(records) => {
                info!("loaded {} candidates from {:?}", records.len(), src);
                return Ok((
                    records,
                    LoadOutcome {
                        origin,
                        failure: None,
                    },
                ));
            }
            Err(e) => LoadFailure::BadData(e),
        },
        Err(e) => LoadFailure::SourceUnavailable(e),
    };

    match policy {
        LoadPolicy::FallbackSamples => {
            warn!("using the built-in sample records: {:?}", failure);
            Ok((
                samples::sample_records(),
                LoadOutcome {
                    origin: DataOrigin::FallbackSamples,
                    failure: Some(failure),
                },
            ))
        }
        LoadPolicy::Propagate => match failure {
            LoadFailure::SourceUnavailable(e) => Err(e),
            LoadFailure::BadData(e) => Err(SiteError::Board { source: e }),
        },
    }
}

/// Builds a fresh board from the source, applying the failure policy.
pub fn load_board(src: &CsvSource, policy: LoadPolicy) -> SiteResult<(CandidateBoard, LoadOutcome)> {
    let (records, outcome) = load_records(src, policy)?;
    Ok((CandidateBoard::from_records(records), outcome))
}

/// Reloads an existing board in place.
///
/// The board's load token makes the latest reload win: if another
/// reload started while this one was in flight, this one is dropped.
pub fn reload_board(
    board: &mut CandidateBoard,
    src: &CsvSource,
    policy: LoadPolicy,
) -> SiteResult<LoadOutcome> {
    let token = board.begin_load();
    let (records, outcome) = load_records(src, policy)?;
    if board.publish(token, records) {
        Ok(outcome)
    } else {
        whatever!("reload superseded by a newer request")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_csv(name: &str, contents: &str) -> String {
        let mut p = std::env::temp_dir();
        p.push(format!("candboard_test_{}_{}", std::process::id(), name));
        fs::write(&p, contents).unwrap();
        p.display().to_string()
    }

    #[test]
    fn missing_file_falls_back_to_the_whole_sample_set() {
        let src = CsvSource::File("/nonexistent/candboard.csv".to_string());
        let (board, outcome) = load_board(&src, LoadPolicy::FallbackSamples).unwrap();
        assert_eq!(outcome.origin, DataOrigin::FallbackSamples);
        assert!(matches!(
            outcome.failure,
            Some(LoadFailure::SourceUnavailable(_))
        ));
        // The whole fixed set, never a partial mix.
        assert_eq!(board.records(), samples::sample_records().as_slice());
    }

    #[test]
    fn missing_file_propagates_when_asked_to() {
        let src = CsvSource::File("/nonexistent/candboard.csv".to_string());
        let err = load_board(&src, LoadPolicy::Propagate).unwrap_err();
        assert!(matches!(err, SiteError::ReadingCsv { .. }));
    }

    #[test]
    fn empty_result_is_distinguished_from_unavailable_source() {
        let path = temp_csv("empty", "氏名,年代\n,40代\n");
        let src = CsvSource::File(path.clone());

        let err = load_board(&src, LoadPolicy::Propagate).unwrap_err();
        assert!(matches!(
            err,
            SiteError::Board {
                source: BoardError::EmptyResult
            }
        ));

        let (_, outcome) = load_board(&src, LoadPolicy::FallbackSamples).unwrap();
        assert!(matches!(
            outcome.failure,
            Some(LoadFailure::BadData(BoardError::EmptyResult))
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn well_formed_file_loads_without_fallback() {
        let path = temp_csv(
            "ok",
            "氏名,ふりがな,立候補区分\n田中 太郎,たなか たろう,現職\n佐藤 花子,さとう はなこ,新人\n",
        );
        let src = CsvSource::File(path.clone());
        let (board, outcome) = load_board(&src, LoadPolicy::Propagate).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(outcome.origin, DataOrigin::File);
        assert!(outcome.failure.is_none());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn reload_replaces_the_board_wholesale() {
        let path = temp_csv("reload", "氏名\n山本 一郎\n");
        let src = CsvSource::File(path.clone());
        let mut board = CandidateBoard::from_records(samples::sample_records());
        let outcome = reload_board(&mut board, &src, LoadPolicy::Propagate).unwrap();
        assert_eq!(board.len(), 1);
        assert!(outcome.failure.is_none());
        fs::remove_file(path).unwrap();
    }
}
