// Primitives for obtaining the CSV document.

use std::fs;

use log::{debug, info};
use snafu::prelude::*;

use crate::site::*;

pub fn read_file(path: &str) -> SiteResult<String> {
    debug!("read_file: {}", path);
    fs::read_to_string(path).context(ReadingCsvSnafu { path })
}

/// Fetches the published sheet. One blocking request, no retry; the
/// client's default timeout applies.
pub fn fetch_url(url: &str) -> SiteResult<String> {
    info!("fetching candidate data from {}", url);
    let response = ureq::get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => SiteError::HttpStatus {
            status,
            url: url.to_string(),
        },
        other => SiteError::Fetch {
            source: Box::new(other),
            url: url.to_string(),
        },
    })?;
    response.into_string().context(ReadingBodySnafu { url })
}
