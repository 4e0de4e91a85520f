//! Scheduler and message-sink traits with std stand-in implementations.

use std::cell::{Cell, RefCell};

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Abstraction over the cooperative scheduler the console runs under.
///
/// On an RTOS target this maps to preemption disable/enable, task priority
/// get/set, and a tick delay. The console uses critical sections only to
/// serialize registry appends, and priority/delay only to pace help output.
pub trait Scheduler {
    /// Enter a mutual-exclusion critical section.
    fn enter_critical(&self);

    /// Leave the critical section entered last.
    fn exit_critical(&self);

    /// Priority of the calling task.
    fn priority(&self) -> u8;

    /// Set the priority of the calling task.
    fn set_priority(&self, priority: u8);

    /// Suspend the calling task for at least `ms` milliseconds.
    fn delay_ms(&self, ms: u32);
}

/// Scoped critical section. Exits on drop, on every path.
pub struct CriticalGuard<'a> {
    sched: &'a dyn Scheduler,
}

impl<'a> CriticalGuard<'a> {
    /// Enter a critical section held until the guard is dropped.
    pub fn enter(sched: &'a dyn Scheduler) -> Self {
        sched.enter_critical();
        Self { sched }
    }
}

impl Drop for CriticalGuard<'_> {
    fn drop(&mut self) {
        self.sched.exit_critical();
    }
}

/// Scoped priority elevation. Restores the previous priority on drop, on
/// every path.
pub struct PriorityGuard<'a> {
    sched: &'a dyn Scheduler,
    previous: u8,
}

impl<'a> PriorityGuard<'a> {
    /// Raise the calling task to `priority` until the guard is dropped.
    pub fn raise(sched: &'a dyn Scheduler, priority: u8) -> Self {
        let previous = sched.priority();
        sched.set_priority(priority);
        Self { sched, previous }
    }
}

impl Drop for PriorityGuard<'_> {
    fn drop(&mut self) {
        self.sched.set_priority(self.previous);
    }
}

// ---------------------------------------------------------------------------
// Message sink
// ---------------------------------------------------------------------------

/// Output channel for user-visible console messages.
///
/// Dispatch diagnostics and help listings go here; internal tracing uses
/// the `log` facade instead.
pub trait MessageSink {
    /// Write one line of output (newline handling is the sink's concern).
    fn write_line(&self, line: &str);
}

// ---------------------------------------------------------------------------
// Std stand-ins
// ---------------------------------------------------------------------------

/// Scheduler stand-in for desktop/hosted builds.
///
/// Critical sections only track nesting (a single-threaded process needs no
/// preemption control), priority is a stored value, and delays are real
/// sleeps so help pacing behaves as it would on target.
pub struct DesktopScheduler {
    priority: Cell<u8>,
    critical_depth: Cell<u32>,
}

impl DesktopScheduler {
    pub fn new(priority: u8) -> Self {
        Self {
            priority: Cell::new(priority),
            critical_depth: Cell::new(0),
        }
    }
}

impl Default for DesktopScheduler {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Scheduler for DesktopScheduler {
    fn enter_critical(&self) {
        self.critical_depth.set(self.critical_depth.get() + 1);
    }

    fn exit_critical(&self) {
        let depth = self.critical_depth.get();
        if depth == 0 {
            log::warn!("unbalanced exit_critical");
            return;
        }
        self.critical_depth.set(depth - 1);
    }

    fn priority(&self) -> u8 {
        self.priority.get()
    }

    fn set_priority(&self, priority: u8) {
        self.priority.set(priority);
    }

    fn delay_ms(&self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Sink that prints each message as a line on stdout.
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Sink that captures messages in memory.
#[derive(Default)]
pub struct BufferSink {
    lines: RefCell<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl MessageSink for BufferSink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_scheduler_stores_priority() {
        let sched = DesktopScheduler::new(3);
        assert_eq!(sched.priority(), 3);
        sched.set_priority(7);
        assert_eq!(sched.priority(), 7);
    }

    #[test]
    fn critical_guard_balances_depth() {
        let sched = DesktopScheduler::default();
        {
            let _outer = CriticalGuard::enter(&sched);
            let _inner = CriticalGuard::enter(&sched);
            assert_eq!(sched.critical_depth.get(), 2);
        }
        assert_eq!(sched.critical_depth.get(), 0);
    }

    #[test]
    fn priority_guard_restores_on_drop() {
        let sched = DesktopScheduler::new(2);
        {
            let _guard = PriorityGuard::raise(&sched, 9);
            assert_eq!(sched.priority(), 9);
        }
        assert_eq!(sched.priority(), 2);
    }

    #[test]
    fn priority_guard_restores_on_early_exit() {
        let sched = DesktopScheduler::new(2);
        let walk = |fail: bool| -> Result<(), ()> {
            let _guard = PriorityGuard::raise(&sched, 9);
            if fail {
                return Err(());
            }
            Ok(())
        };
        assert!(walk(true).is_err());
        assert_eq!(sched.priority(), 2);
    }

    #[test]
    fn buffer_sink_captures_in_order() {
        let sink = BufferSink::new();
        sink.write_line("first");
        sink.write_line("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }
}
