use std::io::{self, IsTerminal};

use clap::Parser;
use gallery_core::Gallery;
use tracing::Level;

mod cli;
mod menu;
mod render;
mod session;
mod settings;

use render::Painter;
use session::{Session, SessionOptions};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let config = settings::load_config(&cli)?;
    let options = SessionOptions {
        format: cli.format,
        painter: Painter::for_stdout(!cli.no_color, io::stdout().is_terminal()),
    };

    let mut session = Session::new(
        Gallery::with_config(config),
        io::stdin().lock(),
        io::stdout().lock(),
        options,
    );
    session.run()?;
    Ok(())
}

/// Logs go to stderr; stdout belongs to the menu.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
