//! The invocable unit of work and its declared signature.
//!
//! # Responsibilities
//! - Carry a callable plus the formal parameters it declares
//! - Define the scalar value types arguments are coerced into
//! - Define the two controller return shapes (full response or bare body)
//!
//! # Design Decisions
//! - Parameters are declared explicitly (name, type, optional default)
//!   rather than introspected via reflection
//! - `ArgValue::Request` lets a controller receive the live request as the
//!   sentinel "current request" binding

use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;
use crate::http::{Request, Response};

/// Declared type of a controller parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// The sentinel "current request" type; always bound to the live request.
    Request,
    /// Bound as captured text, no coercion.
    Str,
    /// Coerced with `str::parse::<i64>`.
    Int,
    /// Coerced with `str::parse::<f64>`.
    Float,
    /// Coerced from `true`/`false` (case-insensitive) or `1`/`0`.
    Bool,
}

impl ParamType {
    /// Short label used in diagnostics.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Str => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

/// A concrete argument value bound for one parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// The live request, bound for `ParamType::Request` parameters.
    Request(Request),
}

impl ArgValue {
    /// The value as a string slice, when it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer, when it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a float, when it is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a boolean, when it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as the bound request, when it is one.
    pub fn as_request(&self) -> Option<&Request> {
        match self {
            Self::Request(r) => Some(r),
            _ => None,
        }
    }
}

/// One formal parameter of an invocable: name, declared type, optional
/// default.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    name: String,
    ty: ParamType,
    default: Option<ArgValue>,
}

impl ParamSpec {
    /// A parameter bound to the live request.
    pub fn request(name: &str) -> Self {
        Self::typed(name, ParamType::Request)
    }

    /// A string parameter.
    pub fn str(name: &str) -> Self {
        Self::typed(name, ParamType::Str)
    }

    /// An integer parameter.
    pub fn int(name: &str) -> Self {
        Self::typed(name, ParamType::Int)
    }

    /// A float parameter.
    pub fn float(name: &str) -> Self {
        Self::typed(name, ParamType::Float)
    }

    /// A boolean parameter.
    pub fn bool(name: &str) -> Self {
        Self::typed(name, ParamType::Bool)
    }

    fn typed(name: &str, ty: ParamType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            default: None,
        }
    }

    /// Attach a default value, making the parameter optional.
    pub fn with_default(mut self, value: ArgValue) -> Self {
        self.default = Some(value);
        self
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    pub fn ty(&self) -> ParamType {
        self.ty
    }

    /// The declared default, if any.
    pub fn default(&self) -> Option<&ArgValue> {
        self.default.as_ref()
    }
}

/// What a controller returns: a full response, or a bare body that the
/// kernel smart-wraps into `200 OK` text.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A complete response, used unchanged.
    Response(Response),
    /// A bare body, wrapped into a default `200 OK` text response.
    Body(String),
}

type CallFn = dyn Fn(Vec<ArgValue>) -> Result<Outcome, BoxError> + Send + Sync;

/// A resolved, ready-to-call unit of work plus its declared signature.
///
/// Arguments are passed in declaration order, one [`ArgValue`] per
/// [`ParamSpec`], already coerced by the argument resolver.
#[derive(Clone)]
pub struct Invocable {
    params: Vec<ParamSpec>,
    call: Arc<CallFn>,
}

impl Invocable {
    /// Create an invocable from a parameter list and a callable.
    pub fn new(
        params: Vec<ParamSpec>,
        call: impl Fn(Vec<ArgValue>) -> Result<Outcome, BoxError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            params,
            call: Arc::new(call),
        }
    }

    /// The declared formal parameters, in declaration order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Call the unit of work with already-bound arguments.
    pub fn invoke(&self, args: Vec<ArgValue>) -> Result<Outcome, BoxError> {
        (self.call)(args)
    }
}

impl fmt::Debug for Invocable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocable")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
