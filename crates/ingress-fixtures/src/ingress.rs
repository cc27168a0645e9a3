//! Mutation-unit factories for the ingress routing resource.
//!
//! One factory per schema field: scalar factories capture a value and
//! assign it, singular-child factories build the child from its own units
//! and assign it, repeated-child factories build one child per call and
//! append it. Composition order is preserved exactly.

use crate::compose::{build, Mutation};
use ingress_types::{
	HttpIngressPath, HttpIngressRuleValue, Ingress, IngressBackend, IngressRule,
	IngressServiceBackend, IngressSpec, IngressTls, PathType, ServiceBackendPort,
};
use std::collections::HashMap;

/// Sets the resource namespace.
pub fn namespace(value: impl Into<String>) -> Mutation<Ingress> {
	let value = value.into();
	Box::new(move |ingress: &mut Ingress| ingress.metadata.namespace = value)
}

/// Sets the resource name.
pub fn name(value: impl Into<String>) -> Mutation<Ingress> {
	let value = value.into();
	Box::new(move |ingress: &mut Ingress| ingress.metadata.name = value)
}

/// Adds one annotation, initializing the annotation map on first use.
pub fn annotation(key: impl Into<String>, value: impl Into<String>) -> Mutation<Ingress> {
	let key = key.into();
	let value = value.into();
	Box::new(move |ingress: &mut Ingress| {
		ingress
			.metadata
			.annotations
			.get_or_insert_with(HashMap::new)
			.insert(key, value);
	})
}

/// Adds one label, initializing the label map on first use.
pub fn label(key: impl Into<String>, value: impl Into<String>) -> Mutation<Ingress> {
	let key = key.into();
	let value = value.into();
	Box::new(move |ingress: &mut Ingress| {
		ingress
			.metadata
			.labels
			.get_or_insert_with(HashMap::new)
			.insert(key, value);
	})
}

/// Builds a spec from `mutations` and assigns it to the resource,
/// replacing any previously assigned spec.
pub fn spec(mutations: Vec<Mutation<IngressSpec>>) -> Mutation<Ingress> {
	Box::new(move |ingress: &mut Ingress| ingress.spec = build(mutations))
}

/// Appends one TLS binding per supplied unit to the spec's TLS list, each
/// built on its own fresh entry, in the order given.
pub fn tls_entries(entries: Vec<Mutation<IngressTls>>) -> Mutation<Ingress> {
	Box::new(move |ingress: &mut Ingress| {
		for entry in entries {
			let mut binding = IngressTls::default();
			entry(&mut binding);
			ingress.spec.tls.push(binding);
		}
	})
}

/// Sets a TLS binding's secret name and covered hosts.
pub fn tls<S, H>(secret: S, hosts: H) -> Mutation<IngressTls>
where
	S: Into<String>,
	H: IntoIterator,
	H::Item: Into<String>,
{
	let secret = secret.into();
	let hosts: Vec<String> = hosts.into_iter().map(Into::into).collect();
	Box::new(move |binding: &mut IngressTls| {
		binding.secret_name = secret;
		binding.hosts = hosts;
	})
}

/// Sets the spec's ingress class name.
pub fn ingress_class(value: impl Into<String>) -> Mutation<IngressSpec> {
	let value = value.into();
	Box::new(move |spec: &mut IngressSpec| spec.ingress_class_name = Some(value))
}

/// Builds a backend from `mutations` and assigns it as the spec's default
/// backend, replacing any previous one.
pub fn default_backend(mutations: Vec<Mutation<IngressBackend>>) -> Mutation<IngressSpec> {
	Box::new(move |spec: &mut IngressSpec| spec.default_backend = Some(build(mutations)))
}

/// Points a backend at the named service and port.
pub fn service(name: impl Into<String>, port: ServiceBackendPort) -> Mutation<IngressBackend> {
	let name = name.into();
	Box::new(move |backend: &mut IngressBackend| {
		backend.service = Some(IngressServiceBackend { name, port });
	})
}

/// Builds one rule from `mutations` and appends it to the spec's rule
/// list. Calling this N times yields N rules in call order.
pub fn rule(mutations: Vec<Mutation<IngressRule>>) -> Mutation<IngressSpec> {
	Box::new(move |spec: &mut IngressSpec| spec.rules.push(build(mutations)))
}

/// Sets a rule's host name.
pub fn host(value: impl Into<String>) -> Mutation<IngressRule> {
	let value = value.into();
	Box::new(move |rule: &mut IngressRule| rule.host = value)
}

/// Builds a rule value from `mutations` and attaches it to the rule. A
/// rule this is never applied to keeps no value at all, which is distinct
/// from an attached value with an empty path list.
pub fn paths(mutations: Vec<Mutation<HttpIngressRuleValue>>) -> Mutation<IngressRule> {
	Box::new(move |rule: &mut IngressRule| rule.http = Some(build(mutations)))
}

/// Builds one path entry from `mutations` and appends it to the rule
/// value's path list.
pub fn one_path(mutations: Vec<Mutation<HttpIngressPath>>) -> Mutation<HttpIngressRuleValue> {
	Box::new(move |value: &mut HttpIngressRuleValue| value.paths.push(build(mutations)))
}

/// Sets a path entry's path string.
pub fn path(value: impl Into<String>) -> Mutation<HttpIngressPath> {
	let value = value.into();
	Box::new(move |entry: &mut HttpIngressPath| entry.path = value)
}

/// Sets a path entry's match type.
pub fn path_type(value: PathType) -> Mutation<HttpIngressPath> {
	Box::new(move |entry: &mut HttpIngressPath| entry.path_type = Some(value))
}

/// Points a path entry at the named service and port.
pub fn backend(name: impl Into<String>, port: ServiceBackendPort) -> Mutation<HttpIngressPath> {
	let name = name.into();
	Box::new(move |entry: &mut HttpIngressPath| {
		entry.backend = IngressBackend {
			service: Some(IngressServiceBackend { name, port }),
		};
	})
}
