//! Tridot Application
//!
//! Command line front end for point and triangle measurements.
//!
//! Points are written as `x,y,z`, `(x,y,z)` or `label(x,y,z)`:
//!
//! ```text
//! tridot distance 0,0,0 3,4,12
//! tridot add 'A(1,2,3)' 'B(4,5,6)'
//! tridot --area-policy strict triangle 0,0,0 3,0,0 0,4,0
//! ```

mod app;
mod errors;

use clap::Parser;
use tridot_data::AreaPolicy;

use crate::app::{AppConfig, Command, LoggingConfig};

/// Tridot - 3D point and triangle measurements
#[derive(Parser, Debug)]
#[command(name = "tridot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// How a negative Heron radicand is reported (clamp, nan, strict)
    #[arg(long, default_value_t = AreaPolicy::Clamp, global = true)]
    area_policy: AreaPolicy,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            logging: LoggingConfig {
                level: self.log_level.clone(),
            },
            area_policy: self.area_policy,
        }
    }
}

fn main() {
    let args = Args::parse();
    let config = args.config();

    let result = app::init_logging(&config.logging).and_then(|()| app::run(&args.command, &config));
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Application error: {}", e);
            std::process::exit(1);
        }
    }
}
