//! The front controller: match → resolve → bind → invoke → respond.
//!
//! # Responsibilities
//! - Drive the dispatch state machine for one request
//! - Publish lifecycle events and honor subscriber substitutions
//! - Convert every failure into an error response (handle() is total)
//!
//! # Design Decisions
//! - Controller-body and subscriber failures are carried as
//!   `KernelError::Controller`, distinct from kernel-internal errors
//! - A bare-body controller return is smart-wrapped into `200 OK` text
//! - Each request gets a UUID correlation id for structured logs

use std::sync::Arc;

use http::header::HeaderName;
use uuid::Uuid;

use crate::controller::{resolve, ControllerRegistry, Outcome};
use crate::error::KernelError;
use crate::events::{Event, EventBus};
use crate::http::{Request, Response};
use crate::kernel::arguments::resolve_arguments;
use crate::routing::RouteTable;

/// How far a request got through the pipeline.
///
/// Carried by `ExceptionRaised` so observers can tell a routing failure
/// from a failure deep inside the controller call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// The request entered the kernel.
    Received,
    /// A route matched.
    Matched,
    /// The controller reference resolved to an invocable.
    Resolved,
    /// The controller ran to completion.
    Invoked,
    /// A response exists.
    Responded,
}

/// The dispatch kernel. Routes and controller registry are frozen at
/// construction; `handle` is safe to call from concurrent requests.
#[derive(Debug)]
pub struct Kernel {
    routes: Arc<RouteTable>,
    registry: Arc<ControllerRegistry>,
    bus: EventBus,
}

impl Kernel {
    /// Create a kernel over a built route table and controller registry.
    pub fn new(routes: RouteTable, registry: ControllerRegistry) -> Self {
        Self {
            routes: Arc::new(routes),
            registry: Arc::new(registry),
            bus: EventBus::new(),
        }
    }

    /// The event bus, for subscribing collaborators at boot.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// The route table (e.g. for URL generation by collaborators).
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Dispatch one request. Total: every failure along the pipeline is
    /// converted to an error response, nothing escapes this boundary.
    pub fn handle(&self, request: &Request) -> Response {
        let request_id = Uuid::new_v4();
        tracing::debug!(
            request_id = %request_id,
            method = %request.method(),
            path = request.path(),
            "Dispatching request"
        );

        let mut state = DispatchState::Received;
        let response = match self.dispatch(request, &mut state) {
            Ok(response) => response,
            Err(error) => self.errored(&request_id, error, state),
        };

        tracing::debug!(
            request_id = %request_id,
            status = %response.status(),
            "Request handled"
        );
        response.with_header(
            HeaderName::from_static("x-request-id"),
            &request_id.to_string(),
        )
    }

    fn dispatch(
        &self,
        request: &Request,
        state: &mut DispatchState,
    ) -> Result<Response, KernelError> {
        // Received → Matched
        let matched = self.routes.match_path(request.path())?;
        *state = DispatchState::Matched;

        let mut event = Event::RouteMatched { matched };
        self.bus.publish(&mut event).map_err(KernelError::Controller)?;
        let matched = match event {
            Event::RouteMatched { matched } => matched,
            _ => return Err(KernelError::Controller("subscriber replaced event kind".into())),
        };

        // Matched → Resolved. The lookup is repeated because a subscriber
        // may have substituted a different match result.
        let route = self
            .routes
            .find_by_name(matched.route_name())
            .ok_or_else(|| KernelError::RouteNotFound {
                path: request.path().to_string(),
            })?;
        let invocable = resolve(route.controller(), &self.registry)?;
        *state = DispatchState::Resolved;

        let mut event = Event::ControllerResolved { invocable, matched };
        self.bus.publish(&mut event).map_err(KernelError::Controller)?;
        let (invocable, matched) = match event {
            Event::ControllerResolved { invocable, matched } => (invocable, matched),
            _ => return Err(KernelError::Controller("subscriber replaced event kind".into())),
        };

        // Resolved → Invoked
        let args = resolve_arguments(invocable.params(), matched.params(), request)?;
        let outcome = invocable.invoke(args).map_err(KernelError::Controller)?;
        *state = DispatchState::Invoked;

        // Invoked → Responded, smart-wrapping bare bodies
        let response = match outcome {
            Outcome::Response(response) => response,
            Outcome::Body(body) => Response::text(body),
        };
        *state = DispatchState::Responded;

        let mut event = Event::ResponseProduced { response };
        self.bus.publish(&mut event).map_err(KernelError::Controller)?;
        match event {
            Event::ResponseProduced { response } => Ok(response),
            _ => Err(KernelError::Controller("subscriber replaced event kind".into())),
        }
    }

    /// Convert a pipeline failure into a response, giving `ExceptionRaised`
    /// subscribers the chance to substitute their own.
    fn errored(&self, request_id: &Uuid, error: KernelError, state: DispatchState) -> Response {
        if error.is_controller_error() {
            tracing::error!(request_id = %request_id, %error, ?state, "Controller failed");
        } else {
            tracing::warn!(request_id = %request_id, %error, ?state, "Dispatch failed");
        }

        let default = Response::text(error.public_message()).with_status(error.status());
        let mut event = Event::ExceptionRaised {
            error,
            state,
            response: default,
        };
        if let Err(subscriber_error) = self.bus.publish(&mut event) {
            // A failing ExceptionRaised subscriber cannot re-enter the
            // error path; log it and keep the response the event carries.
            tracing::error!(
                request_id = %request_id,
                error = %subscriber_error,
                "ExceptionRaised subscriber failed"
            );
        }
        match event {
            Event::ExceptionRaised { response, .. } => response,
            _ => Response::text("Internal Server Error")
                .with_status(http::StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
