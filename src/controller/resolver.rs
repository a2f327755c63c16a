//! Per-request reduction of a controller reference to one invocable.
//!
//! # Design Decisions
//! - Resolution is re-done for every request so controller instances are
//!   never shared across requests; the only side effect is the one
//!   instance construction
//! - `QualifiedName` is parsed first, then treated exactly like
//!   `TypeAndMethod`

use crate::controller::invocable::Invocable;
use crate::controller::reference::ControllerReference;
use crate::controller::registry::ControllerRegistry;
use crate::error::KernelError;

/// Reduce any reference shape to a single invocable plus its signature.
pub fn resolve(
    reference: &ControllerReference,
    registry: &ControllerRegistry,
) -> Result<Invocable, KernelError> {
    match reference {
        ControllerReference::Direct(invocable) => Ok(invocable.clone()),
        ControllerReference::TypeAndMethod(type_name, method) => {
            bind(registry, type_name, method)
        }
        ControllerReference::QualifiedName(name) => {
            let (type_name, method) = ControllerReference::parse_qualified(name)?;
            bind(registry, type_name, method)
        }
    }
}

fn bind(
    registry: &ControllerRegistry,
    type_name: &str,
    method: &str,
) -> Result<Invocable, KernelError> {
    let instance = registry.instantiate(type_name)?;
    instance
        .action(method)
        .ok_or_else(|| KernelError::ControllerMethodNotFound {
            type_name: type_name.to_string(),
            method: method.to_string(),
        })
}
