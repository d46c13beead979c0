use std::future::Future;
use std::time::Duration;

/// Source of the artificial latency in the simulated flows.
///
/// The UI backs this with real timers. Tests substitute a delay that returns
/// at once and records the requested duration.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
