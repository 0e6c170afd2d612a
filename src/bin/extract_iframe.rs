//! Print the first iframe source found in a saved HTML dump.
//!
//! Usage: `extract_iframe [path]` (defaults to `sejm_dump.html`).
//! Set `RUST_LOG=debug` to see which encoding was used on stderr.

use std::env;
use std::io::{self, Write};

use iframe_extract::{run, Options};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let options = env::args_os()
        .nth(1)
        .map_or_else(Options::default, Options::with_path);

    let mut stdout = io::stdout().lock();
    run(&options, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
