//! Controller type registry.
//!
//! # Responsibilities
//! - Map a type identifier to a zero-argument factory for that type
//! - Expose declared methods via the `Controller` trait
//!
//! # Design Decisions
//! - The registry is this kernel's construction strategy: factories take
//!   no arguments, so controller instances stay stateless and
//!   request-scoped; richer wiring belongs to an external container
//! - `Controller::action` is the signature-introspection seam Rust
//!   implements natively instead of reflection

use std::collections::HashMap;
use std::sync::Arc;

use crate::controller::invocable::Invocable;
use crate::error::KernelError;

/// A unit of application logic locatable by type name and method name.
///
/// Implementors hand back an [`Invocable`] per named method, capturing
/// `self` into the callable. Returning `None` for an unknown name
/// surfaces as [`KernelError::ControllerMethodNotFound`].
pub trait Controller: Send + Sync {
    /// Bind the named method on this instance, if it exists.
    fn action(self: Arc<Self>, name: &str) -> Option<Invocable>;
}

impl std::fmt::Debug for dyn Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Controller")
    }
}

type Factory = Arc<dyn Fn() -> Arc<dyn Controller> + Send + Sync>;

/// Registry of controller types, keyed by their public type identifier.
///
/// Built at boot alongside the route table; read-only during dispatch.
#[derive(Clone, Default)]
pub struct ControllerRegistry {
    factories: HashMap<String, Factory>,
}

impl ControllerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller type under `type_name` with its
    /// zero-argument constructor.
    pub fn register<C, F>(&mut self, type_name: &str, factory: F)
    where
        C: Controller + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.factories.insert(
            type_name.to_string(),
            Arc::new(move || Arc::new(factory()) as Arc<dyn Controller>),
        );
    }

    /// Construct a fresh instance of the named type.
    pub(crate) fn instantiate(&self, type_name: &str) -> Result<Arc<dyn Controller>, KernelError> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| KernelError::ControllerTypeNotFound(type_name.to_string()))?;
        Ok(factory())
    }
}

impl std::fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerRegistry")
            .field("types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
