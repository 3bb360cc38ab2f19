use std::path::Path;

use fittrack_rs::config::Config;
use fittrack_rs::error::AppError;
use fittrack_rs::types::reading::SensorPackage;
use fittrack_rs::workout;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let packages = match load_packages(&config) {
        Ok(packages) => packages,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Processing {} sensor package(s)", packages.len());

    let mut failures = 0usize;
    for package in &packages {
        match process_package(package) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                failures += 1;
                tracing::error!("Skipping '{}' package: {}", package.workout_type, e);
                if config.abort_on_error {
                    std::process::exit(1);
                }
            }
        }
    }

    if failures > 0 {
        tracing::warn!("{} of {} package(s) failed", failures, packages.len());
    }
}

fn load_packages(config: &Config) -> Result<Vec<SensorPackage>, AppError> {
    let Some(path) = config.readings_path.as_deref() else {
        return Ok(SensorPackage::sample_set());
    };

    tracing::info!("Loading sensor packages from {}", path.display());
    read_packages_file(path)
}

fn read_packages_file(path: &Path) -> Result<Vec<SensorPackage>, AppError> {
    let bytes = std::fs::read(path).map_err(|source| AppError::ReadingsFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| AppError::ReadingsFormat {
        path: path.to_path_buf(),
        source,
    })
}

fn process_package(package: &SensorPackage) -> Result<String, AppError> {
    let record = workout::read_package(&package.workout_type, &package.data)?;
    let report = record.summary()?;
    Ok(report.to_string())
}
