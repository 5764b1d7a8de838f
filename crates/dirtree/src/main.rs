use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use dirtree::TreeRenderer;
use tracing::error;

/// Prints a directory as a tree, directories before files.
#[derive(Debug, Parser)]
#[command(name = "dirtree", version, about)]
struct Cli {
    /// Directory to render.
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli, &mut io::stdout().lock()) {
        error!("{err}");
        exit(1);
    }
}

fn run(cli: &Cli, out: &mut dyn Write) -> Result<(), String> {
    let tree = TreeRenderer::new()
        .render(&cli.path)
        .map_err(|err| err.to_string())?;

    out.write_all(tree.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| format!("Failed to write tree: {err}"))
}
