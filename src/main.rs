use clap::Parser;
use log::info;
use snafu::prelude::*;

use candidate_board::{SortKey, StatusFilter};

mod args;
mod site;

use crate::args::Args;
use crate::site::*;

fn parse_filter(s: &str) -> SiteResult<StatusFilter> {
    match s {
        "all" => Ok(StatusFilter::All),
        "incumbent" => Ok(StatusFilter::Incumbent),
        "newcomer" => Ok(StatusFilter::Newcomer),
        x => whatever!("unknown status filter {:?} (expected all, incumbent or newcomer)", x),
    }
}

fn parse_sort(s: &str) -> SiteResult<SortKey> {
    match s {
        "name" => Ok(SortKey::ByName),
        "status" => Ok(SortKey::ByStatusThenName),
        "age" => Ok(SortKey::ByAgeBracket),
        x => whatever!("unknown sort key {:?} (expected name, status or age)", x),
    }
}

fn run(args: &Args) -> SiteResult<()> {
    let src = match (&args.input, &args.url) {
        (Some(path), _) => CsvSource::File(path.clone()),
        (None, Some(url)) => CsvSource::Url(url.clone()),
        (None, None) => CsvSource::Url(DEFAULT_SHEET_URL.to_string()),
    };
    let policy = if args.no_fallback {
        LoadPolicy::Propagate
    } else {
        LoadPolicy::FallbackSamples
    };
    let filter = parse_filter(args.filter.as_str())?;
    let sort = parse_sort(args.sort.as_str())?;

    let (mut board, outcome) = load_board(&src, policy)?;
    info!(
        "board populated from {:?} with {} candidates",
        outcome.origin,
        board.len()
    );
    if let Some(failure) = &outcome.failure {
        info!("source was not used: {:?}", failure);
    }

    for assignment in &args.set_photo {
        match assignment.split_once('=') {
            Some((name, photo)) => {
                board
                    .replace_photo(name, photo)
                    .context(BoardSnafu {})?;
            }
            None => whatever!("--set-photo expects 'name=url', got {:?}", assignment),
        }
    }

    let records = board.query(filter, sort);
    info!("query returned {} candidates", records.len());

    let doc = export::board_export(&records);
    export::write_export(&doc, &args.out)
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    if let Err(e) = run(&args) {
        eprintln!("candboard: {}", e);
        std::process::exit(1);
    }
}
