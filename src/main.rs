//! Calendar grid CLI application.
//!
//! # Usage
//! ```ignore
//! calgrid                                   // Current week
//! calgrid -M 2026-02-01                     // February 2026
//! calgrid -N -e '2026-02-17|2026-02-21|Trip'
//! calgrid -l -f events.txt                  // Numeric layout
//! ```

use calgrid::GridError;
use calgrid::args::{Args, load_events};
use calgrid::formatter::print_view;
use calgrid::types::GridContext;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so the grid on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calgrid=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("calgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GridError> {
    let ctx = GridContext::new(args)?;
    let events = load_events(args)?;
    debug!(events = events.len(), view = ?ctx.view, date = %ctx.display_date, "rendering");

    print_view(&ctx, &events)
}
