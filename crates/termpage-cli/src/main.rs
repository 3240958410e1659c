use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use termpage_core::config::{APP_NAME, APP_VERSION, DEFAULT_HOME};
use termpage_core::{Session, SessionConfig};
use termpage_cli::{TerminalRenderer, load_tree, run, run_script};

/// Browse a termpage filesystem from the command line.
#[derive(Parser, Debug)]
#[command(name = "termpage-cli", version, about)]
struct Args {
    /// Tree file to browse (TOML, or JSON with a .json extension).
    /// Defaults to the site tree compiled into the binary.
    #[arg(long, value_name = "FILE")]
    tree: Option<PathBuf>,

    /// Starting directory.
    #[arg(long, value_name = "PATH")]
    home: Option<String>,

    /// Run these lines instead of reading stdin. Repeatable.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn build_config(args: &Args) -> Result<SessionConfig> {
    let home = args.home.as_deref().unwrap_or(DEFAULT_HOME);
    let config = match &args.tree {
        Some(path) => SessionConfig::new(home, load_tree(path)?)?,
        None if args.home.is_some() => {
            let site = SessionConfig::default_site()?;
            SessionConfig::new(home, site.tree().clone())?
        }
        None => SessionConfig::default_site()?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::info!("{} {}", APP_NAME, APP_VERSION);

    let config = build_config(&args)?;
    let interactive = args.commands.is_empty();
    let renderer = TerminalRenderer::new(io::stdout()).with_echo(!interactive);
    let mut session = Session::new(config, renderer);

    if interactive {
        run(&mut session, io::stdin().lock())?;
    } else {
        run_script(&mut session, &args.commands)?;
    }

    // Finish the dangling prompt line
    println!();
    Ok(())
}
