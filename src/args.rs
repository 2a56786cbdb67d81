use clap::Parser;

/// Loads a published candidate-survey spreadsheet, normalizes it and
/// writes the filtered/sorted candidate list as JSON.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A CSV export of the candidate survey. Takes
    /// precedence over --url when both are given.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (URL, optional) The published spreadsheet to fetch (CSV export link).
    /// Defaults to the configured sheet of the campaign site.
    #[clap(short, long, value_parser)]
    pub url: Option<String>,

    /// (all, incumbent or newcomer) Keep only candidates with this candidacy status.
    #[clap(short, long, value_parser, default_value = "all")]
    pub filter: String,

    /// (name, status or age) The sort key for the output sequence. 'status'
    /// places incumbents before newcomers, ties broken by name.
    #[clap(short, long, value_parser, default_value = "name")]
    pub sort: String,

    /// (file path or 'stdout') Where to write the JSON export. Defaults to stdout.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// ('name=url', repeatable) Replace the photo reference of one candidate
    /// before exporting.
    #[clap(long, value_parser)]
    pub set_photo: Vec<String>,

    /// If passed, a load failure is reported as an error instead of falling
    /// back to the built-in sample records.
    #[clap(long, takes_value = false)]
    pub no_fallback: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
