//! Runtime configuration and command dispatch.

use clap::Subcommand;
use tracing::{debug, warn};
use tridot_data::{AreaPolicy, Point3D, Triangle3D};

use crate::errors::AppError;

/// Area at or below which a triangle is reported as degenerate.
const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// Measurement to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Euclidean distance between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
    },
    /// Componentwise sum of two labeled points
    Add {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
    },
    /// Edges, perimeter and area of the triangle a-b-c
    Triangle {
        #[arg(allow_hyphen_values = true)]
        a: Point3D,
        #[arg(allow_hyphen_values = true)]
        b: Point3D,
        #[arg(allow_hyphen_values = true)]
        c: Point3D,
    },
}

/// Logging configuration.
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub area_policy: AreaPolicy,
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so results on stdout stay machine readable.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Run `command` and return the text to print.
#[tracing::instrument(skip_all, fields(area_policy = %config.area_policy))]
pub fn run(command: &Command, config: &AppConfig) -> Result<String, AppError> {
    match command {
        Command::Distance { a, b } => {
            debug!("Measuring distance from {} to {}", a, b);
            Ok(a.distance_to(b).to_string())
        }
        Command::Add { a, b } => {
            let sum = a.add_vector(b)?;
            debug!("Added {} and {}", a, b);
            Ok(sum.to_string())
        }
        Command::Triangle { a, b, c } => {
            let triangle = Triangle3D::new(a, b, c);
            let [edge1, edge2, edge3] = triangle.edges();
            let area = triangle.area_with_policy(config.area_policy)?;

            if triangle.is_degenerate(DEGENERATE_TOLERANCE) {
                warn!("Triangle {} {} {} is degenerate", a, b, c);
            }

            Ok(format!(
                "edges: {edge1} {edge2} {edge3}\nperimeter: {}\narea: {area}",
                triangle.calculate_perimeter()
            ))
        }
    }
}
