//! Build progress reporting.

/// Trait for receiving build progress updates.
pub trait BuildProgress {
    /// Called when a phase starts (e.g., "Building client catalogs").
    fn on_phase(&self, message: &str);

    /// Called after an output file has been written.
    fn on_output(&self, file: &str, count: usize);

    /// Called when the build is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl BuildProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_output(&self, _file: &str, _count: usize) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl BuildProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_output(&self, file: &str, count: usize) {
        log::info!("  {} ({} entries)", file, count);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
