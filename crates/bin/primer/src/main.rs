//! # primer — demonstration driver
//!
//! Composition root that wires the demo together and prints its output.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the tracing subscriber (logs go to stderr; the demo owns stdout)
//! - Construct the use-case, injecting the system clock via its port trait
//! - Print each output line and exit 0
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use primer_app::clock::SystemClock;
use primer_app::demo::Demo;

mod config;

use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(filter = %config.logging.filter, "tracing initialised");

    let demo = Demo::new(SystemClock::new());
    for line in demo.run()? {
        println!("{line}");
    }

    Ok(())
}
