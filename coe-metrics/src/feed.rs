//! Timer-driven refresh feed.
//!
//! [`start`] publishes an initial snapshot synchronously and then a fresh one
//! on every tick until the returned [`FeedHandle`] is stopped or dropped.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::ReentrantMutex;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::FeedError;
use crate::generator::MetricsGenerator;
use crate::random::RandomSource;
use crate::snapshot::MetricsSnapshot;

/// Callback slot shared between the handle and the tick task.
///
/// `stop` and every tick take the same lock, so once `stop` has returned no
/// callback is running and none will run again. The lock is reentrant so a
/// callback may stop its own feed; that path only touches `stopped`.
struct Subscriber<F> {
    on_update: RefCell<F>,
    stopped: AtomicBool,
}

/// Start a refresh feed.
///
/// The initial snapshot is passed to `on_update` before this function
/// returns; afterwards a new snapshot is generated every `interval`.
/// Must be called from within a tokio runtime, otherwise
/// [`FeedError::NoRuntime`] is returned.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use coe_metrics::{feed, std_source, MetricsGenerator};
///
/// # tokio_test::block_on(async {
/// let generator = MetricsGenerator::new(std_source(None));
/// let handle = feed::start(Duration::from_secs(3), generator, |snapshot| {
///     println!("{} active users", snapshot.active_users);
/// })
/// .unwrap();
///
/// handle.stop();
/// # });
/// ```
pub fn start<R, F>(
    interval: Duration,
    mut generator: MetricsGenerator<R>,
    mut on_update: F,
) -> Result<FeedHandle, FeedError>
where
    R: RandomSource + Send + 'static,
    F: FnMut(MetricsSnapshot) + Send + 'static,
{
    if interval.is_zero() {
        return Err(FeedError::ZeroInterval);
    }
    let runtime = tokio::runtime::Handle::try_current().map_err(|_| FeedError::NoRuntime)?;

    on_update(generator.generate());

    let subscriber = Arc::new(ReentrantMutex::new(Subscriber {
        on_update: RefCell::new(on_update),
        stopped: AtomicBool::new(false),
    }));
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let state = stop_tx.subscribe();
    let task_subscriber = subscriber.clone();
    runtime.spawn(async move {
        let mut ticker = interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let slot = task_subscriber.lock();
                    if slot.stopped.load(Ordering::Acquire) {
                        break;
                    }
                    let snapshot = generator.generate();
                    tracing::trace!(active_users = snapshot.active_users, "metrics tick");
                    let mut on_update = slot.on_update.borrow_mut();
                    (*on_update)(snapshot);
                }
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }

        tracing::debug!("metrics feed task exited");
    });

    tracing::debug!(interval_ms = interval.as_millis() as u64, "metrics feed started");

    let stop: Arc<dyn Fn() + Send + Sync> = Arc::new(move || {
        let slot = subscriber.lock();
        if !slot.stopped.swap(true, Ordering::AcqRel) {
            let _ = stop_tx.send(true);
            tracing::debug!("metrics feed stopped");
        }
    });

    Ok(FeedHandle { stop, state })
}

/// Start a feed that publishes into a watch channel.
///
/// The receiver already holds the initial snapshot when this returns.
pub fn start_watch<R>(
    interval: Duration,
    mut generator: MetricsGenerator<R>,
) -> Result<(FeedHandle, watch::Receiver<MetricsSnapshot>), FeedError>
where
    R: RandomSource + Send + 'static,
{
    if interval.is_zero() {
        return Err(FeedError::ZeroInterval);
    }

    let (tx, rx) = watch::channel(generator.generate());
    let mut first = true;
    let handle = start(interval, generator, move |snapshot| {
        // The channel was seeded with a snapshot already; skip the duplicate
        // initial publish so receivers see exactly one value per tick.
        if std::mem::take(&mut first) {
            return;
        }
        let _ = tx.send(snapshot);
    })?;

    Ok((handle, rx))
}

/// Handle for a running feed.
///
/// Call [`FeedHandle::stop`] to cancel future ticks. Dropping the handle
/// stops the feed as well.
pub struct FeedHandle {
    stop: Arc<dyn Fn() + Send + Sync>,
    state: watch::Receiver<bool>,
}

impl FeedHandle {
    /// Cancel all future ticks.
    ///
    /// Idempotent. When this returns, no callback is running on another
    /// thread and none will be invoked again. Calling it from inside the
    /// feed's own callback is allowed; that callback finishes normally.
    pub fn stop(&self) {
        (self.stop)();
    }

    /// Whether [`FeedHandle::stop`] has been called.
    pub fn is_stopped(&self) -> bool {
        *self.state.borrow()
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for FeedHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedHandle")
            .field("stopped", &self.is_stopped())
            .finish_non_exhaustive()
    }
}
