#![forbid(unsafe_code)]

//! Background driver: startup pass, resize wakes, poll ticks.
//!
//! The driver runs on a dedicated thread and owns the surface for its
//! lifetime. Each wake performs a single measure → decide → toggle pass;
//! since every pass is a pure read-then-write, overlapping triggers
//! (a resize landing next to a poll tick) collapse into sequential passes
//! and last-write-wins stays self-consistent.
//!
//! Teardown follows the subscription rule: [`PositionerHandle::dispose`]
//! stops the loop and joins the thread, while dropping the handle only
//! signals the loop so drop never blocks.

use footpin_core::{reconcile, ConfigError, LayoutSurface, Placement, PositionerConfig};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;

/// Control messages from the handle to the driver thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    /// The viewport was resized; re-measure now.
    Resize,
    /// Stop the loop.
    Stop,
}

/// Handle to a running positioner.
///
/// The handle is the registration: keep it alive for as long as the
/// footer should track the viewport, feed resize events in through
/// [`notify_resize`](Self::notify_resize), and call
/// [`dispose`](Self::dispose) for a clean teardown.
#[derive(Debug)]
pub struct PositionerHandle {
    sender: Sender<Control>,
    thread: Option<thread::JoinHandle<()>>,
}

impl PositionerHandle {
    /// Notify the driver of a viewport resize.
    ///
    /// Bursts are coalesced into a single pass. A no-op once the driver
    /// has stopped.
    pub fn notify_resize(&self) {
        let _ = self.sender.send(Control::Resize);
    }

    /// Stop the driver and join its thread.
    ///
    /// After this returns, no further passes run.
    pub fn dispose(mut self) {
        let _ = self.sender.send(Control::Stop);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PositionerHandle {
    fn drop(&mut self) {
        // Signal only; never join in drop.
        let _ = self.sender.send(Control::Stop);
    }
}

/// Start a positioner over `surface`.
///
/// Validates `config`, runs one reconciliation pass immediately, then
/// re-runs on every resize notification and every poll interval until
/// the returned handle is disposed or dropped.
pub fn spawn<S>(surface: S, config: PositionerConfig) -> Result<PositionerHandle, ConfigError>
where
    S: LayoutSurface + Send + 'static,
{
    config.validate()?;
    let (sender, receiver) = mpsc::channel();
    let thread = thread::spawn(move || run_loop(surface, &config, &receiver));
    Ok(PositionerHandle {
        sender,
        thread: Some(thread),
    })
}

fn run_loop<S: LayoutSurface>(
    mut surface: S,
    config: &PositionerConfig,
    receiver: &Receiver<Control>,
) {
    tracing::debug!(
        selector = %config.footer_selector,
        class = %config.pinned_class,
        poll_ms = config.poll_interval.as_millis() as u64,
        "footer positioner started"
    );

    let mut last = pass(&mut surface, config, None, "startup");
    loop {
        let trigger = match receiver.recv_timeout(config.poll_interval) {
            Ok(Control::Resize) => {
                if stop_queued_behind_resizes(receiver) {
                    break;
                }
                "resize"
            }
            Ok(Control::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => "poll",
        };
        last = pass(&mut surface, config, last, trigger);
    }

    tracing::debug!("footer positioner stopped");
}

/// One reconciliation pass, with transitions logged.
fn pass<S: LayoutSurface>(
    surface: &mut S,
    config: &PositionerConfig,
    last: Option<Placement>,
    trigger: &str,
) -> Option<Placement> {
    let next = reconcile(surface, config);
    match (last, next) {
        (Some(prev), Some(now)) if prev != now => {
            tracing::debug!(%prev, %now, trigger, "footer placement changed");
        }
        (None, Some(now)) => {
            tracing::debug!(%now, trigger, "footer placement applied");
        }
        (Some(_), None) => {
            tracing::debug!(trigger, "footer no longer measurable, placement left as-is");
        }
        _ => {
            tracing::trace!(?next, trigger, "footer placement unchanged");
        }
    }
    next
}

/// Collapse a burst of queued resize notifications into one pass.
///
/// Returns `true` when a stop request was queued behind them.
fn stop_queued_behind_resizes(receiver: &Receiver<Control>) -> bool {
    loop {
        match receiver.try_recv() {
            Ok(Control::Resize) => {}
            Ok(Control::Stop) | Err(TryRecvError::Disconnected) => return true,
            Err(TryRecvError::Empty) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::spawn;
    use footpin_core::{ConfigError, MockSurface, PositionerConfig};

    #[test]
    fn spawn_rejects_invalid_config() {
        let surface = MockSurface::with_viewport(800.0);
        let config = PositionerConfig::default().with_footer_selector("");
        let result = spawn(surface, config);
        assert!(matches!(result, Err(ConfigError::EmptySelector)));
    }

    #[test]
    fn spawn_and_dispose_on_empty_surface() {
        // No window, no elements: every pass is a no-op, and teardown
        // still completes.
        let handle = spawn(MockSurface::new(), PositionerConfig::default()).unwrap();
        handle.notify_resize();
        handle.dispose();
    }

    #[test]
    fn drop_without_dispose_does_not_block() {
        let handle = spawn(MockSurface::new(), PositionerConfig::default()).unwrap();
        drop(handle);
    }
}
