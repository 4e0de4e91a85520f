//! Collaborator traits consumed by the EMBER console.
//!
//! The console itself creates no threads and owns no output channel. The
//! scheduler primitives (critical section, task priority, delay) and the
//! diagnostic sink are injected through the traits in this crate, satisfied
//! by real RTOS bindings on embedded targets and by the std stand-ins here
//! everywhere else.

pub mod services;

/// Capturing sink for headless use and tests.
pub use services::BufferSink;
/// RAII critical-section guard.
pub use services::CriticalGuard;
/// Std stand-in scheduler (no-op critical sections, real delays).
pub use services::DesktopScheduler;
/// Diagnostic/message output channel.
pub use services::MessageSink;
/// RAII task-priority guard.
pub use services::PriorityGuard;
/// Scheduler primitives consumed by the console.
pub use services::Scheduler;
/// Line-buffered stdout sink.
pub use services::StdoutSink;
