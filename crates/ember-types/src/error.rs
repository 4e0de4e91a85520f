//! Error types for the EMBER console.

/// Errors produced by the EMBER console.
///
/// The dispatch variants (`BadParameterCount`, `ParameterParse`,
/// `UnknownCommand`) render as the exact diagnostic text written to the
/// message sink; they are always recovered by discarding the input line.
#[derive(Debug, thiserror::Error)]
pub enum EmberError {
    /// Token count does not match the registered signature.
    #[error("bad number of parameters")]
    BadParameterCount,

    /// A specific argument failed its type/format check (1-based position).
    #[error("parameter {0} parse error")]
    ParameterParse(usize),

    /// No registry entry matches the command name.
    #[error("unknown command")]
    UnknownCommand,

    #[error("config error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, EmberError>;
