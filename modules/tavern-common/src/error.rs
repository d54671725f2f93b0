use thiserror::Error;

/// Per-post failures never cross component boundaries as errors; they are
/// absorbed into fallback content or a boolean publish outcome. The only
/// failure that propagates is bad configuration, which is fatal at startup.
#[derive(Debug, Error)]
pub enum TavernError {
    #[error("Configuration error: {0}")]
    Config(String),
}
