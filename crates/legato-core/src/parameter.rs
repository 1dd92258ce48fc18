//! The authoritative parameter value and its change stream.
//!
//! A [`Parameter`] holds the single source of truth for one control point of
//! an audio engine. Everything mutates through [`set_value`](Parameter::set_value):
//! editors pushing user gestures, preset recall, and host automation all
//! funnel into the same clamp-store-notify step, so every subscriber sees
//! every applied value exactly once, in order.
//!
//! # Example
//!
//! ```
//! use legato_core::{AutomationEvent, Parameter, ParameterDefinition, ParameterUnit};
//!
//! let gain = Parameter::new(ParameterDefinition::float(
//!     "gain", "Gain", 1, -80.0, 10.0, ParameterUnit::Decibels,
//! ));
//!
//! let (_token, events) = gain.subscribe();
//! gain.set(-12.0);
//!
//! let change = events.try_next().unwrap();
//! assert_eq!(change.value, -12.0);
//! assert_eq!(change.event, AutomationEvent::Value);
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use atomic_float::AtomicF32;
use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

use crate::definition::{ParameterDefinition, ParameterUnit};
use crate::event::{AutomationEvent, ParameterChange};
use crate::parametric::{DisplayTransform, ParametricValue};

/// Cache-line aligned atomic f32 holding the authoritative value.
#[derive(Debug)]
#[repr(align(64))]
struct AtomicValue(AtomicF32);

impl AtomicValue {
    fn new(value: f32) -> Self {
        Self(AtomicF32::new(value))
    }

    #[inline]
    fn get(&self) -> f32 {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    fn set(&self, value: f32) {
        self.0.store(value, Ordering::Release);
    }
}

/// Opaque identity of a subscription, used both to cancel it and to tag
/// `set_value` calls so the originator is excluded from its own notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverToken(u64);

/// The receiving half of a parameter subscription.
///
/// Deliveries may be produced on any thread; consumers that touch UI state
/// drain this on their own UI-affine loop. [`Parameter::unsubscribe`]
/// invalidates the stream as a whole: values queued but not yet drained are
/// never handed out afterwards.
#[derive(Debug)]
pub struct ParameterEvents {
    receiver: Receiver<ParameterChange>,
    cancelled: Arc<AtomicBool>,
}

impl ParameterEvents {
    /// Take the next pending delivery, if any. Never blocks.
    pub fn try_next(&self) -> Option<ParameterChange> {
        if self.cancelled.load(Ordering::Acquire) {
            return None;
        }
        self.receiver.try_recv().ok()
    }

    /// Take every pending delivery, in apply order.
    pub fn drain(&self) -> Vec<ParameterChange> {
        if self.cancelled.load(Ordering::Acquire) {
            return Vec::new();
        }
        self.receiver.try_iter().collect()
    }

    /// Block up to `timeout` for the next delivery. For cross-thread tests
    /// and non-UI consumers.
    pub fn next_timeout(&self, timeout: std::time::Duration) -> Option<ParameterChange> {
        if self.cancelled.load(Ordering::Acquire) {
            return None;
        }
        let change = self.receiver.recv_timeout(timeout).ok()?;
        // Cancellation may have happened while blocked.
        if self.cancelled.load(Ordering::Acquire) {
            return None;
        }
        Some(change)
    }
}

/// Engine-side hook invoked synchronously with every accepted value.
pub type ValueObserver = Arc<dyn Fn(u64, f32) + Send + Sync>;

struct Subscriber {
    token: ObserverToken,
    sender: Sender<ParameterChange>,
    cancelled: Arc<AtomicBool>,
}

struct Inner {
    definition: ParameterDefinition,
    value: AtomicValue,
    subscribers: Mutex<Vec<Subscriber>>,
    next_token: AtomicU64,
    value_observer: Mutex<Option<ValueObserver>>,
}

/// Cheaply clonable handle to one authoritative parameter value.
///
/// Multiple editors may hold clones of the same `Parameter`; writes are
/// last-write-wins on a single atomic scalar, and notification is serialized
/// with the store so each subscriber observes values in apply order.
#[derive(Clone)]
pub struct Parameter {
    inner: Arc<Inner>,
}

impl Parameter {
    /// Create a standalone parameter from its definition.
    ///
    /// The initial value is the definition's default, clamped to the range.
    /// Engines publishing a whole set use
    /// [`ParameterTree`](crate::ParameterTree) instead, which also validates
    /// ranges and address uniqueness.
    pub fn new(definition: ParameterDefinition) -> Self {
        let initial = definition.default_value.clamp(definition.min, definition.max);
        Self {
            inner: Arc::new(Inner {
                value: AtomicValue::new(initial),
                definition,
                subscribers: Mutex::new(Vec::new()),
                next_token: AtomicU64::new(1),
                value_observer: Mutex::new(None),
            }),
        }
    }

    /// Stable address within the parameter tree.
    pub fn address(&self) -> u64 {
        self.inner.definition.address
    }

    /// Unique identifier string.
    pub fn identifier(&self) -> &str {
        &self.inner.definition.identifier
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &str {
        &self.inner.definition.display_name
    }

    /// Inclusive minimum value.
    pub fn min_value(&self) -> f32 {
        self.inner.definition.min
    }

    /// Inclusive maximum value.
    pub fn max_value(&self) -> f32 {
        self.inner.definition.max
    }

    /// The definition's default value.
    pub fn default_value(&self) -> f32 {
        self.inner.definition.default_value
    }

    /// Unit type of the value.
    pub fn unit(&self) -> ParameterUnit {
        self.inner.definition.unit
    }

    /// Custom unit name, if any.
    pub fn unit_name(&self) -> Option<&str> {
        self.inner.definition.unit_name.as_deref()
    }

    /// Display curve used when presenting the value on a linear control.
    pub fn transform(&self) -> DisplayTransform {
        self.inner.definition.transform
    }

    /// Whether this is a boolean parameter (`unit == Boolean`).
    pub fn is_boolean(&self) -> bool {
        self.inner.definition.is_boolean()
    }

    /// The current value. Always within `[min_value, max_value]`.
    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    /// Boolean view of the current value: `>= 0.5` denotes "true".
    pub fn bool_value(&self) -> bool {
        self.value() >= 0.5
    }

    /// Apply a new value with no originator, a `Value` event, and immediate
    /// timing. This is the path engine writes and preset recall take.
    pub fn set(&self, value: f32) {
        self.set_value(value, None, AutomationEvent::Value, 0);
    }

    /// Apply a new value.
    ///
    /// The value is silently clamped to the parameter range; range violations
    /// are never an error. Every subscriber except `originator` receives one
    /// [`ParameterChange`], in the order values were applied. `host_time` is
    /// carried on each delivery; 0 means "apply immediately, not scheduled",
    /// and scheduling for other values is the host's concern, not this
    /// crate's.
    pub fn set_value(
        &self,
        value: f32,
        originator: Option<ObserverToken>,
        event: AutomationEvent,
        host_time: u64,
    ) {
        let clamped = value.clamp(self.min_value(), self.max_value());
        tracing::trace!(
            address = self.address(),
            value = clamped,
            ?event,
            host_time,
            "set_value"
        );

        let change = ParameterChange {
            address: self.address(),
            value: clamped,
            event,
            host_time,
        };

        // Store and notify under the subscriber lock so a subscriber never
        // observes values out of apply order.
        {
            let mut subscribers = self.inner.subscribers.lock();
            self.inner.value.set(clamped);
            subscribers.retain(|subscriber| {
                if originator == Some(subscriber.token) {
                    return true;
                }
                subscriber.sender.send(change).is_ok()
            });
        }

        let observer = self.inner.value_observer.lock().clone();
        if let Some(observer) = observer {
            observer(self.address(), clamped);
        }
    }

    /// Begin observing value changes.
    ///
    /// Returns a token for cancellation (and for originator exclusion) plus
    /// the receiving half of the change stream. The subscription lives until
    /// [`unsubscribe`](Self::unsubscribe) is called or the `Parameter` is
    /// dropped.
    pub fn subscribe(&self) -> (ObserverToken, ParameterEvents) {
        let token = ObserverToken(self.inner.next_token.fetch_add(1, Ordering::Relaxed));
        let (sender, receiver) = crossbeam_channel::unbounded();
        let cancelled = Arc::new(AtomicBool::new(false));
        self.inner.subscribers.lock().push(Subscriber {
            token,
            sender,
            cancelled: cancelled.clone(),
        });
        (token, ParameterEvents { receiver, cancelled })
    }

    /// Cancel a subscription.
    ///
    /// Idempotent: a second call with the same token is a no-op, as is a call
    /// with a token from another parameter. Safe to call from within a
    /// delivery drain. After this returns no further values are handed out by
    /// the matching [`ParameterEvents`], including values that were already
    /// queued when cancellation was requested.
    pub fn unsubscribe(&self, token: ObserverToken) {
        self.inner.subscribers.lock().retain(|subscriber| {
            if subscriber.token == token {
                subscriber.cancelled.store(true, Ordering::Release);
                return false;
            }
            true
        });
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    /// The current value as a parametric `[0, 1]` display position, with the
    /// display curve applied.
    pub fn to_parametric(&self) -> ParametricValue {
        let span = self.max_value() - self.min_value();
        let normalized = ParametricValue::new((self.value() - self.min_value()) / span);
        self.transform().to_parametric(normalized)
    }

    /// Apply a parametric `[0, 1]` display position as the new value,
    /// inverting the display curve first.
    pub fn set_parametric(
        &self,
        t: ParametricValue,
        originator: Option<ObserverToken>,
        event: AutomationEvent,
        host_time: u64,
    ) {
        let normalized = self.transform().from_parametric(t);
        let span = self.max_value() - self.min_value();
        self.set_value(
            normalized.value() * span + self.min_value(),
            originator,
            event,
            host_time,
        );
    }

    /// Install the engine-side observer. Called once at tree construction;
    /// replaces any previous observer.
    pub(crate) fn install_value_observer(&self, observer: ValueObserver) {
        *self.inner.value_observer.lock() = Some(observer);
    }
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("address", &self.address())
            .field("identifier", &self.identifier())
            .field("value", &self.value())
            .finish()
    }
}
