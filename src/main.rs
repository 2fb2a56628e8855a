use aoc_index::cli::Cli;
use aoc_index::generate::{IndexGenerator, Mode, Outcome};
use aoc_index::output::Output;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color, cli.quiet);

    let generator = IndexGenerator::new(&cli.dir, &cli.file).strict(cli.strict);

    if cli.list {
        let index = generator.scan()?;
        output.print_list(&index)?;
        return Ok(());
    }

    let mode = if cli.check { Mode::Check } else { Mode::Write };
    let (outcome, stats) = generator.run(mode)?;
    output.print_outcome(generator.document(), &outcome, stats)?;

    if matches!(outcome, Outcome::Stale { .. }) {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AOC_INDEX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
