use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aoc-index",
    about = "Regenerate the year/day index between <!-- INDEX-START --> and <!-- INDEX-END --> in a README",
    version
)]
pub struct Cli {
    /// Directory containing <year>/day<N> solution folders
    #[arg(short = 'C', long, default_value = ".")]
    pub dir: PathBuf,

    /// Markdown file to update, relative to --dir unless absolute
    #[arg(short, long, default_value = "README.md")]
    pub file: PathBuf,

    /// Exit with an error and print a diff if the index is out of date, without writing
    #[arg(long)]
    pub check: bool,

    /// Fail when the document has no index markers
    #[arg(long)]
    pub strict: bool,

    /// List discovered years and days without touching the document
    #[arg(short, long, conflicts_with = "check")]
    pub list: bool,

    /// Log each discovered directory
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors and stale-index reports
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
