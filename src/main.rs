use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use bst_view::layout::{LayoutConfig, DEFAULT_SPREAD};
use bst_view::render;
use bst_view::session::{Command, Outcome, Reply, Session, HELP};

/// Interactive binary search tree: type commands, see the tree's layout
#[derive(Parser, Debug)]
#[command(name = "bst-view")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Horizontal distance between the root and its children
    #[arg(long, env = "BST_VIEW_SPREAD", default_value_t = DEFAULT_SPREAD)]
    spread: f64,

    /// Don't print the tree after every change
    #[arg(short, long)]
    quiet: bool,

    /// Debug level: -d, -dd or -ddd
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Keys to insert before reading commands
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut session = start_session(cli.spread, &cli.keys)?;
    info!(keys = session.tree().len(), spread = cli.spread, "session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.keys.is_empty() && !cli.quiet {
        write!(out, "{}", render::snapshot(&session.snapshot()))?;
    }

    repl(&mut session, io::stdin().lock(), &mut out, cli.quiet)
}

/// Builds the session the REPL works on, inserting `keys` up front.
fn start_session(spread: f64, keys: &[String]) -> Result<Session> {
    let layout = LayoutConfig::with_spread(spread)?;
    let mut session = Session::new(layout);

    for key in keys {
        session
            .add(key)
            .with_context(|| format!("preloading key {key:?}"))?;
    }
    Ok(session)
}

/// Reads one command per line until EOF or `quit`. A bad line is reported
/// on stderr and the loop carries on.
fn repl(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    quiet: bool,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };
        debug!(?command, "running");

        match session.run(&command) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Help) => writeln!(out, "{HELP}")?,
            Ok(Reply::Show) => write!(out, "{}", render::snapshot(&session.snapshot()))?,
            Ok(Reply::Found { key, found }) => {
                let verdict = if found { "found" } else { "not found" };
                writeln!(out, "{key}: {verdict}")?
            }
            Ok(Reply::Changed(Outcome::Applied)) => {
                if !quiet {
                    write!(out, "{}", render::snapshot(&session.snapshot()))?
                }
            }
            Ok(Reply::Changed(Outcome::Unchanged)) => info!(?command, "no change"),
            Err(e) => eprintln!("error: {e}"),
        }
        out.flush()?;
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .compact(),
        )
        .with(filter)
        .init();
}
