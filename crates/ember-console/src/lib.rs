//! Command interpreter core for the EMBER console.
//!
//! The console is a registry-based dispatch system. Components register
//! named commands with one of eight fixed argument signatures; input lines
//! are tokenized, the first token is matched against the registry, and the
//! matching handler runs with type-checked, converted arguments. User-visible
//! diagnostics go to the injected [`ember_platform::MessageSink`]; scheduler
//! primitives come from [`ember_platform::Scheduler`].

pub mod interpreter;
pub mod registry;
pub mod tokenizer;

/// The interpreter: registration surface, `parse_line`, and `help`.
pub use interpreter::Interpreter;
/// A registered command: name plus typed handler.
pub use registry::CommandDescriptor;
/// Append-only collection of command descriptors.
pub use registry::CommandRegistry;
/// Typed handler, one variant per argument signature.
pub use registry::Handler;
/// Token spans produced from one input line.
pub use tokenizer::TokenSet;
/// Maximum number of stored token spans per line.
pub use tokenizer::MAX_TOKENS;
