//! Minimal synchronous publish/subscribe bus.
//!
//! # Responsibilities
//! - Hold ordered subscriber lists per event kind
//! - Publish events synchronously, short-circuiting on subscriber failure
//!
//! # Design Decisions
//! - No global bus: each kernel owns its own, so kernels coexist in tests
//! - Subscription happens at boot (`&mut self`); publishing is `&self`
//!   and safe for concurrent in-flight requests

use std::collections::HashMap;

use crate::controller::Invocable;
use crate::error::{BoxError, KernelError};
use crate::http::Response;
use crate::kernel::DispatchState;
use crate::routing::MatchResult;

/// The pipeline points a subscriber can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Published after a route matched, before controller resolution.
    RouteMatched,
    /// Published after the controller resolved, before argument binding.
    ControllerResolved,
    /// Published after a response exists, before it is returned.
    ResponseProduced,
    /// Published whenever the kernel transitions into its error state.
    ExceptionRaised,
}

/// An in-flight lifecycle notification.
///
/// Subscribers may mutate the carried values; the kernel continues with
/// whatever the last subscriber left in place.
#[derive(Debug)]
pub enum Event {
    /// Routing resolved for the current request.
    RouteMatched {
        /// The match; replacing it reroutes the request.
        matched: MatchResult,
    },
    /// The controller reference reduced to an invocable.
    ControllerResolved {
        /// The invocable about to be called; replaceable.
        invocable: Invocable,
        /// The match that produced it.
        matched: MatchResult,
    },
    /// A response exists for the current request.
    ResponseProduced {
        /// The outgoing response; replaceable.
        response: Response,
    },
    /// The kernel entered its error state.
    ExceptionRaised {
        /// What failed. `KernelError::Controller` marks an application
        /// failure as opposed to a kernel-internal one.
        error: KernelError,
        /// How far the state machine got before failing.
        state: DispatchState,
        /// The response the kernel will emit; replacing it installs a
        /// custom error page.
        response: Response,
    },
}

impl Event {
    /// The kind used for subscriber lookup.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::RouteMatched { .. } => EventKind::RouteMatched,
            Self::ControllerResolved { .. } => EventKind::ControllerResolved,
            Self::ResponseProduced { .. } => EventKind::ResponseProduced,
            Self::ExceptionRaised { .. } => EventKind::ExceptionRaised,
        }
    }
}

type Handler = Box<dyn Fn(&mut Event) -> Result<(), BoxError> + Send + Sync>;

/// Ordered, synchronous subscriber lists per event kind.
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<EventKind, Vec<Handler>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind. Handlers run in
    /// subscription order.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.subscribers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Invoke all handlers for the event's kind, in order. The first
    /// handler failure aborts publication and is returned to the kernel.
    pub fn publish(&self, event: &mut Event) -> Result<(), BoxError> {
        if let Some(handlers) = self.subscribers.get(&event.kind()) {
            for handler in handlers {
                handler(event)?;
            }
        }
        Ok(())
    }

    /// Number of subscribers for a kind.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.get(&kind).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> = self
            .subscribers
            .iter()
            .map(|(kind, handlers)| (*kind, handlers.len()))
            .collect();
        f.debug_struct("EventBus").field("subscribers", &counts).finish()
    }
}
