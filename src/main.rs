//! `shelfsort` CLI: list authors or look up books by author from a `title,author` file.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, reload, util::SubscriberInitExt};

use shelfsort::config::DEFAULT_LOG_FILTER;
use shelfsort::{Catalog, Config};

#[derive(Debug, Parser)]
#[command(name = "shelfsort", version, about = "Look up books by author")]
struct Cli {
    /// TOML config file.
    #[arg(long, default_value = "shelfsort.toml")]
    config: PathBuf,

    /// Catalog source; overrides the config file and environment.
    #[arg(long)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every author in the catalog.
    Authors,
    /// Print the books by one author.
    Search {
        /// Author name, matched case-insensitively.
        author: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    // Installed before the config is read so config loading can log; the filter is
    // swapped once the configured directive is known.
    let (filter, filter_handle) =
        reload::Layer::new(env_filter(&log_directive(rust_log.as_deref(), DEFAULT_LOG_FILTER)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let mut config = Config::load(&cli.config)?;
    config.apply_env_overrides();
    if let Some(source) = cli.source {
        config.source = source;
    }
    filter_handle.reload(env_filter(&log_directive(rust_log.as_deref(), &config.log_filter)))?;

    let catalog = Catalog::from_config(&config);
    let mut out = io::stdout().lock();
    run(cli.command, &catalog, io::stdin().lock(), &mut out)
}

/// `RUST_LOG` wins when set and non-blank; otherwise the configured directive.
fn log_directive(rust_log: Option<&str>, configured: &str) -> String {
    match rust_log.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => configured.to_string(),
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("invalid log filter {directive:?}: {err}; using {DEFAULT_LOG_FILTER:?}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

fn run<R: BufRead, W: Write>(
    command: Option<Command>,
    catalog: &Catalog,
    input: R,
    out: &mut W,
) -> Result<()> {
    match command {
        Some(Command::Authors) => writeln!(out, "{}", catalog.list_authors())?,
        Some(Command::Search { author }) => writeln!(out, "{}", catalog.search(author.as_str()))?,
        None => interactive(catalog, input, out)?,
    }
    Ok(())
}

fn interactive<R: BufRead, W: Write>(catalog: &Catalog, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "Authors in database:")?;
    writeln!(out, "{}", catalog.list_authors())?;
    write!(out, "\nEnter author name to search: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let author = line.trim_end_matches(['\r', '\n']);

    writeln!(out, "\n{}", catalog.search(author))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Catalog {
        Catalog::from_lines(["Dune,Frank Herbert", "1984,George Orwell"])
    }

    fn run_to_string(command: Option<Command>, catalog: &Catalog, stdin: &str) -> String {
        let mut out = Vec::new();
        run(command, catalog, stdin.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn interactive_prints_authors_prompt_and_matches() {
        let output = run_to_string(None, &shelf(), "frank herbert\n");
        assert_eq!(
            output,
            "Authors in database:\n\
             Frank Herbert\nGeorge Orwell\n\
             \nEnter author name to search: \
             \n1 book by author 'frank herbert':\n\
             Dune by Frank Herbert\n"
        );
    }

    #[test]
    fn interactive_without_input_selects_nobody() {
        for stdin in ["", "\n", "\r\n"] {
            let output = run_to_string(None, &shelf(), stdin);
            assert!(
                output.ends_with("Enter author name to search: \nNo author selected.\n"),
                "stdin {stdin:?} gave {output:?}"
            );
        }
    }

    #[test]
    fn interactive_on_empty_catalog() {
        let output = run_to_string(None, &Catalog::default(), "Anyone\n");
        assert_eq!(
            output,
            "Authors in database:\n\
             No authors found.\n\
             \nEnter author name to search: \
             \n0 books by author 'Anyone':\n\
             No books found.\n"
        );
    }

    #[test]
    fn authors_subcommand() {
        assert_eq!(
            run_to_string(Some(Command::Authors), &shelf(), ""),
            "Frank Herbert\nGeorge Orwell\n"
        );
        assert_eq!(
            run_to_string(Some(Command::Authors), &Catalog::default(), ""),
            "No authors found.\n"
        );
    }

    #[test]
    fn search_subcommand() {
        let search = |author: &str| Some(Command::Search { author: author.to_string() });

        assert_eq!(
            run_to_string(search("GEORGE ORWELL"), &shelf(), ""),
            "1 book by author 'GEORGE ORWELL':\n1984 by George Orwell\n"
        );
        assert_eq!(
            run_to_string(search("Nobody"), &shelf(), ""),
            "0 books by author 'Nobody':\nNo books found.\n"
        );
        assert_eq!(run_to_string(search(""), &shelf(), ""), "No author selected.\n");
    }

    #[test]
    fn cli_parses_subcommands() {
        let args = ["shelfsort", "--source", "b.csv", "search", "Frank"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.source, Some(PathBuf::from("b.csv")));
        assert!(matches!(cli.command, Some(Command::Search { ref author }) if author == "Frank"));

        let cli = Cli::try_parse_from(["shelfsort"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("shelfsort.toml"));
    }

    #[test]
    fn rust_log_overrides_configured_filter() {
        assert_eq!(log_directive(Some("shelfsort=debug"), "warn"), "shelfsort=debug");
        assert_eq!(log_directive(Some("  "), "info"), "info");
        assert_eq!(log_directive(None, "info"), "info");
    }
}
