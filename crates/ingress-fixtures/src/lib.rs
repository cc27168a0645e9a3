//! Composable builders for ingress routing-resource test fixtures.
//!
//! Expected values in equality-based tests are deeply nested, and writing
//! the full literal for every case buries the one field a test cares
//! about. This crate assembles them from small mutation units instead:
//! each unit applies one change to a freshly allocated value, and nesting
//! is expressed by passing child-level units to a parent-level factory, so
//! an entire multi-rule resource reads as a single expression.
//!
//! ```
//! use ingress_fixtures::{backend, build, host, namespace, one_path, path, paths, rule, spec};
//! use ingress_types::{Ingress, ServiceBackendPort};
//!
//! let ingress: Ingress = build(vec![
//! 	namespace("staging"),
//! 	spec(vec![rule(vec![
//! 		host("example.com"),
//! 		paths(vec![one_path(vec![
//! 			path("/api"),
//! 			backend("api-svc", ServiceBackendPort::number(8080)),
//! 		])]),
//! 	])]),
//! ]);
//!
//! assert_eq!(ingress.metadata.namespace, "staging");
//! assert_eq!(ingress.spec.rules[0].host, "example.com");
//! ```
//!
//! The builders guarantee structural assembly only: units apply in the
//! order given, unset fields keep their zero value, and nothing checks
//! that the finished resource is deployable.

/// The generic apply-in-order construction engine.
pub mod compose;
/// Mutation-unit factories for the ingress schema.
pub mod ingress;

pub use compose::{build, Mutation};
pub use ingress::{
	annotation, backend, default_backend, host, ingress_class, label, name, namespace, one_path,
	path, path_type, paths, rule, service, spec, tls, tls_entries,
};
