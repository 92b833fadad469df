//! Typewriter Effect Runtime
//!
//! Drives a [`TypewriterMachine`] on a tokio task and hands every text change
//! to subscribers.
//!
//! # Lifecycle
//!
//! ```text
//! start() ──► task: sleep(next_delay) ──► step ──► notify ──┐
//!                      ▲                                    │
//!                      └────────────────────────────────────┘
//! stop() / drop ──► stop flag set, in-flight delivery drained, task aborted
//! ```
//!
//! Exactly one timer is pending per effect at any time: the task sleeps,
//! steps, notifies, and only then schedules the next sleep.
//!
//! # Teardown
//!
//! After [`TypewriterEffect::stop`] returns, no subscriber will be called
//! again. Delivery runs under a re-entrant lock that `stop` also takes, so a
//! concurrent stop waits for the current delivery to finish, and a
//! subscriber may stop its own effect from inside the callback.
//!
//! A `stop` issued from inside any effect's callback does not wait on the
//! target's lock: two effects stopping each other from their callbacks
//! would otherwise each hold one lock and wait on the other. In that case a
//! callback of the target that is already running may finish after `stop`
//! returns; none starts afterwards.

use std::cell::Cell;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::machine::{EffectState, StepOutcome, TypewriterMachine};
use super::{TypewriterConfig, TypewriterError};

/// Subscriber callback, invoked with the new display text
type OnChange = Box<dyn FnMut(&str) + Send + 'static>;

thread_local! {
    /// Number of effect deliveries running on this thread
    static DELIVERY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks this thread as delivering for as long as it lives
struct DeliveryMarker;

impl DeliveryMarker {
    fn enter() -> Self {
        DELIVERY_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self
    }

    fn active() -> bool {
        DELIVERY_DEPTH.with(|depth| depth.get() > 0)
    }
}

impl Drop for DeliveryMarker {
    fn drop(&mut self) {
        DELIVERY_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// State shared between the handle and the driving task
struct Shared {
    /// Set once by `stop`; checked before every step and every callback
    stopped: AtomicBool,
    /// Held for the whole of step + delivery
    delivery: ReentrantMutex<()>,
    /// Latest state, for readers that poll instead of subscribing
    state: RwLock<EffectState>,
}

/// Owned handle to one running typewriter effect
///
/// Dropping the handle stops the effect.
pub struct TypewriterEffect {
    name: Arc<str>,
    shared: Arc<Shared>,
    subscribe_tx: mpsc::UnboundedSender<OnChange>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl TypewriterEffect {
    /// Validate `config` and start ticking on the current tokio runtime
    ///
    /// The first character is typed one typing interval after this returns.
    ///
    /// # Errors
    ///
    /// - [`TypewriterError::InvalidConfiguration`] if a timing constant is zero
    /// - [`TypewriterError::StartFailure`] if called outside a tokio runtime
    pub fn start(config: TypewriterConfig) -> Result<Self, TypewriterError> {
        config.validate()?;

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| TypewriterError::StartFailure(e.to_string()))?;

        let name: Arc<str> = Arc::from(config.name.as_str());
        let machine = TypewriterMachine::from_config(&config);
        let shared = Arc::new(Shared {
            stopped: AtomicBool::new(false),
            delivery: ReentrantMutex::new(()),
            state: RwLock::new(machine.state().clone()),
        });
        let (subscribe_tx, subscribe_rx) = mpsc::unbounded_channel();

        let task = runtime.spawn(drive(
            machine,
            Arc::clone(&shared),
            subscribe_rx,
            Arc::clone(&name),
        ));

        debug!(
            effect = %name,
            phrases = config.phrases.len(),
            timing = ?config.timing,
            "Typewriter effect started"
        );

        Ok(Self {
            name,
            shared,
            subscribe_tx,
            task: Mutex::new(Some(task)),
        })
    }

    /// Effect label from its config
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a callback for every text change
    ///
    /// Callbacks run on the effect's task, in subscription order, once per
    /// text-changing tick. The dwell transition does not change text and is
    /// not delivered. Subscribing after [`stop`](Self::stop) does nothing.
    pub fn subscribe<F>(&self, on_change: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        if self.is_stopped() {
            debug!(effect = %self.name, "Ignoring subscription to stopped effect");
            return;
        }
        if self.subscribe_tx.send(Box::new(on_change)).is_err() {
            debug!(effect = %self.name, "Effect task already gone, subscription dropped");
        }
    }

    /// Channel flavour of [`subscribe`](Self::subscribe)
    ///
    /// The receiver yields every display text in tick order and closes once
    /// the effect stops.
    pub fn updates(&self) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribe(move |text| {
            let _ = tx.send(text.to_owned());
        });
        rx
    }

    /// Snapshot of the latest state
    #[must_use]
    pub fn state(&self) -> EffectState {
        self.shared.state.read().clone()
    }

    /// Text currently displayed
    #[must_use]
    pub fn display_text(&self) -> String {
        self.shared.state.read().display_text.clone()
    }

    /// Whether [`stop`](Self::stop) has been called
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.shared.stopped.load(Ordering::Acquire)
    }

    /// Stop the effect and cancel its pending timer
    ///
    /// Idempotent. Once this returns no subscriber is called again. Called
    /// from inside a subscriber of some other effect, it does not wait for a
    /// callback of this effect that is already running on another thread.
    pub fn stop(&self) {
        if self.shared.stopped.swap(true, Ordering::AcqRel) {
            return;
        }

        // Wait out a delivery in progress on another thread. Skipped inside a
        // callback: holding our own delivery lock while waiting on another
        // effect's lock can cycle. The flag alone blocks further callbacks.
        if DeliveryMarker::active() {
            trace!(effect = %self.name, "Stop issued from a callback, not waiting on delivery");
        } else {
            drop(self.shared.delivery.lock());
        }

        if let Some(task) = self.task.lock().take() {
            task.abort();
        }

        debug!(effect = %self.name, "Typewriter effect stopped");
    }
}

impl Drop for TypewriterEffect {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for TypewriterEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypewriterEffect")
            .field("name", &self.name)
            .field("stopped", &self.is_stopped())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Task body: one sleep, one step, one delivery, repeat
async fn drive(
    mut machine: TypewriterMachine,
    shared: Arc<Shared>,
    mut new_subscribers: mpsc::UnboundedReceiver<OnChange>,
    name: Arc<str>,
) {
    let mut subscribers: Vec<OnChange> = Vec::new();

    loop {
        tokio::time::sleep(machine.next_delay()).await;

        if tick(&mut machine, &shared, &mut new_subscribers, &mut subscribers, &name).is_break() {
            break;
        }
    }

    trace!(effect = %name, "Typewriter task exiting");
}

/// Step the machine and notify subscribers, all under the delivery lock
fn tick(
    machine: &mut TypewriterMachine,
    shared: &Shared,
    new_subscribers: &mut mpsc::UnboundedReceiver<OnChange>,
    subscribers: &mut Vec<OnChange>,
    name: &str,
) -> ControlFlow<()> {
    let _delivery = shared.delivery.lock();

    if shared.stopped.load(Ordering::Acquire) {
        return ControlFlow::Break(());
    }

    let outcome = machine.step();
    *shared.state.write() = machine.state().clone();

    trace!(
        effect = %name,
        index = machine.current_index(),
        phase = %machine.phase(),
        text = machine.display_text(),
        ?outcome,
        "Typewriter tick"
    );

    if let StepOutcome::PhraseCleared { next_index } = outcome {
        debug!(effect = %name, next_index, "Advancing to next phrase");
    }

    if !outcome.changes_text() {
        return ControlFlow::Continue(());
    }

    while let Ok(subscriber) = new_subscribers.try_recv() {
        subscribers.push(subscriber);
    }

    let text = machine.display_text();
    let _marker = DeliveryMarker::enter();
    for on_change in subscribers.iter_mut() {
        if shared.stopped.load(Ordering::Acquire) {
            return ControlFlow::Break(());
        }
        on_change(text);
    }

    ControlFlow::Continue(())
}
