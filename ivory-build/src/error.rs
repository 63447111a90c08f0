use thiserror::Error;

/// Errors that abort a build run.
///
/// Missing inputs are not errors; they read as empty content.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("Config error in {path}: {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },
}

impl BuildError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}
