//! Typed model of the ingress routing resource.
//!
//! This crate defines the nested schema that the builders in
//! `ingress-fixtures` assemble: a root resource carrying metadata and a
//! spec, routing rules with their HTTP paths, the service backends those
//! paths forward to, and TLS bindings. The serde model reproduces the
//! external networking schema on the wire: camelCase keys, absent optional
//! fields omitted, zero values filled in on deserialization.

/// Service backend references and port selection.
pub mod backend;
/// The root resource and its routing spec.
pub mod ingress;
/// Object metadata: name, namespace, labels, annotations.
pub mod metadata;
/// Routing rules and the HTTP paths they carry.
pub mod rule;
/// TLS bindings between certificate secrets and the hosts they cover.
pub mod tls;

pub use backend::{IngressBackend, IngressServiceBackend, ServiceBackendPort};
pub use ingress::{Ingress, IngressSpec};
pub use metadata::ObjectMeta;
pub use rule::{HttpIngressPath, HttpIngressRuleValue, IngressRule, PathType, UnknownPathType};
pub use tls::IngressTls;
