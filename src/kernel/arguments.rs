//! Argument binding for a resolved invocable.
//!
//! # Responsibilities
//! - Produce one value per formal parameter, in declaration order
//! - Apply the binding precedence: request sentinel, then route capture,
//!   then query parameter, then declared default
//! - Coerce captured text into the declared scalar type
//!
//! # Design Decisions
//! - Binding is by name, never by position in the route pattern
//! - Route captures outrank query parameters: they are more specific to
//!   this URL
//! - Coercion is an explicit conversion table with defined failure, no
//!   silent truncation

use std::collections::HashMap;

use crate::controller::{ArgValue, ParamSpec, ParamType};
use crate::error::KernelError;
use crate::http::Request;

/// Bind concrete arguments for `params`, one per parameter.
pub fn resolve_arguments(
    params: &[ParamSpec],
    captures: &HashMap<String, String>,
    request: &Request,
) -> Result<Vec<ArgValue>, KernelError> {
    params
        .iter()
        .map(|param| resolve_one(param, captures, request))
        .collect()
}

fn resolve_one(
    param: &ParamSpec,
    captures: &HashMap<String, String>,
    request: &Request,
) -> Result<ArgValue, KernelError> {
    // 1. The request sentinel is always the most specific binding.
    if param.ty() == ParamType::Request {
        return Ok(ArgValue::Request(request.clone()));
    }
    // 2. Route captures are more specific to this URL than query params.
    if let Some(value) = captures.get(param.name()) {
        return coerce(param.name(), value, param.ty());
    }
    // 3. Ambient query parameters.
    if let Some(value) = request.query(param.name()) {
        return coerce(param.name(), value, param.ty());
    }
    // 4. Declared default.
    if let Some(default) = param.default() {
        return Ok(default.clone());
    }
    Err(KernelError::MissingRequiredArgument(param.name().to_string()))
}

/// Convert captured text into the declared scalar type.
fn coerce(name: &str, value: &str, ty: ParamType) -> Result<ArgValue, KernelError> {
    let mismatch = || KernelError::ArgumentTypeMismatch {
        name: name.to_string(),
        value: value.to_string(),
        expected: ty.label(),
    };
    match ty {
        ParamType::Str => Ok(ArgValue::Str(value.to_string())),
        ParamType::Int => value.parse().map(ArgValue::Int).map_err(|_| mismatch()),
        ParamType::Float => value.parse().map(ArgValue::Float).map_err(|_| mismatch()),
        ParamType::Bool => match value.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(ArgValue::Bool(true)),
            "false" | "0" => Ok(ArgValue::Bool(false)),
            _ => Err(mismatch()),
        },
        // Request parameters are bound before coercion is reached.
        ParamType::Request => Err(mismatch()),
    }
}
