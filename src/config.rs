use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub readings_path: Option<PathBuf>,
    pub abort_on_error: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let readings_path = std::env::var("READINGS_FILE").ok().map(PathBuf::from);

        let abort_on_error = std::env::var("ABORT_ON_ERROR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);

        Self {
            readings_path,
            abort_on_error,
        }
    }
}
