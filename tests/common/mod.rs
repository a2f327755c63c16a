//! Shared fixtures for integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use conductor::{
    ArgValue, Controller, ControllerReference, ControllerRegistry, Invocable, Kernel, Outcome,
    ParamSpec, Route, RouteTable,
};

/// Initialize tracing for test output. Safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "conductor=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// A controller type with a `hello` action taking `(name: string)`.
pub struct Greeter;

impl Controller for Greeter {
    fn action(self: Arc<Self>, name: &str) -> Option<Invocable> {
        match name {
            "hello" => Some(Invocable::new(vec![ParamSpec::str("name")], |args| {
                let name = args[0].as_str().unwrap_or_default();
                Ok(Outcome::Body(format!("Hello {name}")))
            })),
            _ => None,
        }
    }
}

/// A blog controller whose `show` action takes `(id: int)`.
pub struct BlogController;

impl Controller for BlogController {
    fn action(self: Arc<Self>, name: &str) -> Option<Invocable> {
        match name {
            "show" => Some(Invocable::new(vec![ParamSpec::int("id")], |args| {
                let id = args[0].as_int().unwrap_or_default();
                Ok(Outcome::Body(format!("post {id}")))
            })),
            _ => None,
        }
    }
}

/// Registry with the fixture controller types registered.
pub fn registry() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry.register("Greeter", || Greeter);
    registry.register("Blog", || BlogController);
    registry
}

/// The same logical greeting action as an inline invocable.
pub fn direct_greeting() -> Invocable {
    Invocable::new(vec![ParamSpec::str("name")], |args| {
        let name = args[0].as_str().unwrap_or_default();
        Ok(Outcome::Body(format!("Hello {name}")))
    })
}

/// Build a kernel over the given `(name, pattern, controller)` routes and
/// the fixture registry.
#[allow(dead_code)]
pub fn kernel(routes: &[(&str, &str, ControllerReference)]) -> Kernel {
    let mut table = RouteTable::new();
    for (name, pattern, controller) in routes {
        table
            .add(Route::new(name, pattern, controller.clone()).unwrap())
            .unwrap();
    }
    Kernel::new(table, registry())
}

/// A page controller taking `(number: int = 1)`.
#[allow(dead_code)]
pub fn page_controller() -> Invocable {
    Invocable::new(
        vec![ParamSpec::int("number").with_default(ArgValue::Int(1))],
        |args| {
            let number = args[0].as_int().unwrap_or(1);
            Ok(Outcome::Body(format!("page {number}")))
        },
    )
}

/// Route with options, unwrapped for test brevity.
#[allow(dead_code)]
pub fn constrained_route(
    name: &str,
    pattern: &str,
    controller: ControllerReference,
    constraints: &[(&str, &str)],
) -> Route {
    let constraints: HashMap<String, String> = constraints
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Route::with_options(name, pattern, controller, constraints, HashMap::new()).unwrap()
}
