//! Conductor: a front-controller dispatch kernel.
//!
//! # Architecture Overview
//!
//! ```text
//!   Request ──▶ routing (table scan, pattern match)
//!                  │ RouteMatched
//!                  ▼
//!              controller (reference → instance → invocable)
//!                  │ ControllerResolved
//!                  ▼
//!              kernel (argument binding, invocation, smart wrapping)
//!                  │ ResponseProduced / ExceptionRaised
//!                  ▼
//!   Response ◀── events (synchronous subscribers may substitute values)
//! ```
//!
//! The kernel orchestrates match → resolve → bind → invoke → respond and
//! converts any failure into an error response; `Kernel::handle` never
//! raises past its boundary. Templating, persistence, DI wiring and the
//! transport itself are external collaborators reached only through the
//! event seam.

// Core subsystems
pub mod controller;
pub mod http;
pub mod kernel;
pub mod routing;

// Extensibility
pub mod events;

// Cross-cutting concerns
pub mod config;
pub mod error;

pub use controller::{
    ArgValue, Controller, ControllerReference, ControllerRegistry, Invocable, Outcome, ParamSpec,
    ParamType,
};
pub use error::{BoxError, KernelError};
pub use events::{Event, EventBus, EventKind, RequestLogger};
pub use self::http::{Request, Response};
pub use kernel::{DispatchState, Kernel};
pub use routing::{MatchResult, Route, RouteTable};
