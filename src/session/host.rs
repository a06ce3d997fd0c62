use log::debug;

/// Notification hook into the host environment
pub trait Host {
    /// Called once after a confirmed run has renamed its items
    fn refresh(&mut self);
}

/// Host that has nothing to refresh
#[derive(Debug, Default)]
pub struct LogHost;

impl Host for LogHost {
    fn refresh(&mut self) {
        debug!("Refresh requested");
    }
}
