//! Built-in event subscribers.
//!
//! Collaborators (custom error pages, authorization, metrics) integrate
//! through the same seam; only request logging ships with the kernel.

use crate::events::bus::{Event, EventBus, EventKind};

/// Logs each pipeline stage through `tracing`, with kernel failures and
/// application failures at different severities.
pub struct RequestLogger;

impl RequestLogger {
    /// Attach the logger's handlers to a bus.
    pub fn attach(bus: &mut EventBus) {
        bus.subscribe(EventKind::RouteMatched, |event| {
            if let Event::RouteMatched { matched } = event {
                tracing::info!(route = matched.route_name(), "Route matched");
            }
            Ok(())
        });
        bus.subscribe(EventKind::ResponseProduced, |event| {
            if let Event::ResponseProduced { response } = event {
                tracing::info!(status = %response.status(), "Response produced");
            }
            Ok(())
        });
        bus.subscribe(EventKind::ExceptionRaised, |event| {
            if let Event::ExceptionRaised { error, state, .. } = event {
                if error.is_controller_error() {
                    tracing::error!(%error, ?state, "Controller raised an error");
                } else {
                    tracing::warn!(%error, ?state, "Dispatch failed");
                }
            }
            Ok(())
        });
    }
}
