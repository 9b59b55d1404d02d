use thiserror::Error;

/// Errors raised while building or loading a [`BenchConfig`](crate::BenchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config version {version}; expected >= 1")]
    InvalidVersion { version: u32 },

    #[error("invalid config: iterations must be >= 1")]
    ZeroIterations,

    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Errors returned by [`run_benchmark`](crate::run_benchmark) and the binary.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced when reading back the 17-line report format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportParseError {
    #[error("expected {expected} lines, found {found}")]
    LineCount { expected: usize, found: usize },

    #[error("elapsed line is missing the `ms` suffix: {0:?}")]
    MissingUnit(String),

    #[error("elapsed value is not a non-negative number: {0:?}")]
    InvalidElapsed(String),

    #[error("line {line}: {value:?} is not an i32")]
    InvalidValue { line: usize, value: String },
}
