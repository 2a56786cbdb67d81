mod config;
pub mod csv;
pub mod manual;
pub mod mapper;
pub mod samples;
pub mod stance;

use log::{debug, info, warn};

pub use crate::config::*;
pub use crate::stance::Stance;

/// Parses a CSV blob into the admitted candidate records.
///
/// Rows that cannot be mapped are skipped with a warning, parsing
/// continues. An input without a header plus data rows fails with
/// [`BoardError::MalformedInput`]; an input where no row is admitted
/// fails with [`BoardError::EmptyResult`], so a caller can tell an
/// unusable document from an empty one.
pub fn parse_records(text: &str) -> Result<Vec<CandidateRecord>, BoardError> {
    let (header, rows) = csv::split_rows(text)?;
    debug!("parse_records: header: {:?}", header);

    let mut records: Vec<CandidateRecord> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        // Line numbers are 1-based and the header is line 1.
        match mapper::map_row(&header, row) {
            Some(record) => records.push(record),
            None => warn!("parse_records: skipping line {}", idx + 2),
        }
    }
    if records.is_empty() {
        return Err(BoardError::EmptyResult);
    }
    info!("parse_records: admitted {} candidates", records.len());
    Ok(records)
}

/// A ticket for one reload cycle, handed out by [`CandidateBoard::begin_load`].
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct LoadToken(u64);

/// The in-memory collection of candidate records.
///
/// The board owns the full loaded sequence and derives filtered/sorted
/// views on demand. It is rebuilt wholesale on reload, never patched
/// incrementally; the only in-place mutation is the administrative
/// photo replacement.
#[derive(Debug, Clone, Default)]
pub struct CandidateBoard {
    records: Vec<CandidateRecord>,
    load_seq: u64,
}

impl CandidateBoard {
    pub fn new() -> CandidateBoard {
        CandidateBoard::default()
    }

    pub fn from_records(records: Vec<CandidateRecord>) -> CandidateBoard {
        CandidateBoard {
            records,
            load_seq: 0,
        }
    }

    pub fn from_csv(text: &str) -> Result<CandidateBoard, BoardError> {
        parse_records(text).map(CandidateBoard::from_records)
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Starts a reload cycle and returns its token.
    ///
    /// Reloads are not serialized by the board: two cycles may be in
    /// flight at once, and only the latest one may publish.
    pub fn begin_load(&mut self) -> LoadToken {
        self.load_seq += 1;
        LoadToken(self.load_seq)
    }

    /// Replaces the record sequence wholesale.
    ///
    /// Returns `false` without touching the board when a newer load has
    /// started since `token` was handed out: the latest request wins.
    pub fn publish(&mut self, token: LoadToken, records: Vec<CandidateRecord>) -> bool {
        if token.0 < self.load_seq {
            warn!(
                "publish: dropping stale load {} (latest is {})",
                token.0, self.load_seq
            );
            return false;
        }
        self.records = records;
        true
    }

    /// The filtered and sorted view of the board.
    ///
    /// Recomputed eagerly on every call; the base sequence is never
    /// mutated. All sorts are stable, so records that compare equal keep
    /// their load order.
    pub fn query(&self, filter: StatusFilter, sort: SortKey) -> Vec<CandidateRecord> {
        let mut view: Vec<CandidateRecord> = self
            .records
            .iter()
            .filter(|r| filter.admits(r.status))
            .cloned()
            .collect();
        match sort {
            SortKey::ByName => {
                view.sort_by(|a, b| a.reading_key().cmp(b.reading_key()));
            }
            SortKey::ByStatusThenName => {
                view.sort_by(|a, b| {
                    status_rank(a.status)
                        .cmp(&status_rank(b.status))
                        .then_with(|| a.reading_key().cmp(b.reading_key()))
                });
            }
            SortKey::ByAgeBracket => {
                view.sort_by_key(|r| age_bracket_rank(&r.age_bracket));
            }
        }
        debug!(
            "query: {:?}/{:?} selected {} of {}",
            filter,
            sort,
            view.len(),
            self.records.len()
        );
        view
    }

    /// The single administrative mutation: swaps the photo reference of
    /// one candidate, identified by name.
    pub fn replace_photo(&mut self, name: &str, photo: &str) -> Result<(), BoardError> {
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(record) => {
                record.photo = photo.to_string();
                Ok(())
            }
            None => Err(BoardError::UnknownCandidate(name.to_string())),
        }
    }
}

fn status_rank(status: CandidacyStatus) -> u8 {
    match status {
        CandidacyStatus::Incumbent => 0,
        CandidacyStatus::Newcomer => 1,
    }
}
