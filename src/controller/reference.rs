//! The three equivalent shapes a controller can be referenced by.

use crate::controller::invocable::Invocable;
use crate::error::KernelError;

/// How to locate the callable unit of work for a route.
///
/// All three shapes reduce to a single [`Invocable`] at resolution time;
/// registering the same logical action under any of them produces
/// identical responses.
#[derive(Debug, Clone)]
pub enum ControllerReference {
    /// An inline function value, already invocable.
    Direct(Invocable),
    /// A registered type name plus a method name; requires instantiation
    /// then a method bind.
    TypeAndMethod(String, String),
    /// A single `"Type::method"` string, parsed into the
    /// `TypeAndMethod` shape before use.
    QualifiedName(String),
}

impl ControllerReference {
    /// Reference an inline invocable.
    pub fn direct(invocable: Invocable) -> Self {
        Self::Direct(invocable)
    }

    /// Reference a registered type and one of its methods.
    pub fn type_and_method(type_name: &str, method: &str) -> Self {
        Self::TypeAndMethod(type_name.to_string(), method.to_string())
    }

    /// Reference a controller by its `"Type::method"` qualified name.
    pub fn qualified(name: &str) -> Self {
        Self::QualifiedName(name.to_string())
    }

    /// Split a qualified name into its type and method parts.
    ///
    /// The string must contain exactly one `::` separator with non-empty
    /// text on both sides.
    pub(crate) fn parse_qualified(name: &str) -> Result<(&str, &str), KernelError> {
        let parts: Vec<&str> = name.split("::").collect();
        match parts.as_slice() {
            [type_name, method] if !type_name.is_empty() && !method.is_empty() => {
                Ok((type_name, method))
            }
            _ => Err(KernelError::InvalidControllerReference(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified_name() {
        let (ty, method) = ControllerReference::parse_qualified("Greeter::hello").unwrap();
        assert_eq!(ty, "Greeter");
        assert_eq!(method, "hello");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        for bad in ["Greeter", "Greeter::", "::hello", "A::b::c", "::", ""] {
            let err = ControllerReference::parse_qualified(bad).unwrap_err();
            assert!(
                matches!(err, KernelError::InvalidControllerReference(_)),
                "{bad}"
            );
        }
    }
}
