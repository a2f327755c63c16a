//! Error taxonomy for the dispatch kernel.
//!
//! # Responsibilities
//! - One enum covering routing, configuration, resolution and argument errors
//! - Distinguish kernel-internal failures from controller-body failures
//! - Map every per-request error to an HTTP status code
//!
//! # Design Decisions
//! - Registration-time errors (`DuplicateRouteName`, `InvalidRoutePattern`)
//!   share the enum but are raised at boot and never reach `Kernel::handle`
//! - Controller-body failures are carried as an opaque boxed error so the
//!   kernel never inspects application-level error types
//! - No stack traces or internal identifiers in user-facing messages

use http::StatusCode;
use thiserror::Error;

/// Opaque error type for controller bodies and event subscribers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// All failure modes of the dispatch pipeline.
#[derive(Debug, Error)]
pub enum KernelError {
    /// No registered route matched the request path.
    #[error("no route matches path `{path}`")]
    RouteNotFound {
        /// The path that failed to match.
        path: String,
    },

    /// A route with this name is already registered.
    ///
    /// Raised at registration time; fatal to application startup.
    #[error("route name `{0}` is already registered")]
    DuplicateRouteName(String),

    /// A route pattern or one of its constraints failed to compile.
    ///
    /// Raised at registration time; fatal to application startup.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidRoutePattern {
        /// The offending pattern.
        pattern: String,
        /// Why compilation failed.
        reason: String,
    },

    /// The referenced controller type is not registered.
    #[error("controller type `{0}` is not registered")]
    ControllerTypeNotFound(String),

    /// The referenced controller type has no such method.
    #[error("controller `{type_name}` has no method `{method}`")]
    ControllerMethodNotFound {
        /// The controller type that was located.
        type_name: String,
        /// The method that could not be bound.
        method: String,
    },

    /// A qualified controller name did not parse as `Type::method`.
    #[error("invalid controller reference `{0}`: expected `Type::method`")]
    InvalidControllerReference(String),

    /// A controller parameter had no route capture, no query parameter
    /// and no declared default.
    #[error("missing required argument `{0}`")]
    MissingRequiredArgument(String),

    /// A captured value could not be coerced to the declared scalar type.
    #[error("argument `{name}`: cannot coerce `{value}` to {expected}")]
    ArgumentTypeMismatch {
        /// The parameter being bound.
        name: String,
        /// The raw text that failed coercion.
        value: String,
        /// The declared scalar type.
        expected: &'static str,
    },

    /// The controller body (or an event subscriber) itself failed.
    ///
    /// Kept distinct from the kernel's own errors so observers can tell
    /// "the framework failed to route/resolve" apart from "the
    /// application logic failed".
    #[error("controller raised an error: {0}")]
    Controller(#[source] BoxError),
}

impl KernelError {
    /// HTTP status this error surfaces as when no subscriber intervenes.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True when the failure originated inside the controller body (or an
    /// event subscriber) rather than in the kernel's own pipeline.
    pub fn is_controller_error(&self) -> bool {
        matches!(self, Self::Controller(_))
    }

    /// Short user-facing body text for the default error response.
    ///
    /// Kernel-internal errors carry their own short diagnostic; controller
    /// failures are deliberately reduced to a generic message so
    /// application details never leak to the caller.
    pub(crate) fn public_message(&self) -> String {
        match self {
            Self::RouteNotFound { .. } => "Not Found".to_string(),
            Self::Controller(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = KernelError::RouteNotFound {
            path: "/missing".into(),
        };
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let missing = KernelError::MissingRequiredArgument("id".into());
        assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: BoxError = "boom".into();
        assert_eq!(
            KernelError::Controller(body).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_controller_errors_are_distinguished() {
        let body: BoxError = "boom".into();
        let err = KernelError::Controller(body);
        assert!(err.is_controller_error());
        assert!(!KernelError::MissingRequiredArgument("id".into()).is_controller_error());
    }

    #[test]
    fn test_controller_error_message_does_not_leak() {
        let body: BoxError = "database password rejected".into();
        let err = KernelError::Controller(body);
        assert_eq!(err.public_message(), "Internal Server Error");
    }

    #[test]
    fn test_kernel_error_message_is_diagnostic() {
        let err = KernelError::MissingRequiredArgument("id".into());
        assert!(err.public_message().contains("id"));
    }
}
