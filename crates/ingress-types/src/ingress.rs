//! The root routing resource and its spec.

use crate::backend::IngressBackend;
use crate::metadata::ObjectMeta;
use crate::rule::IngressRule;
use crate::tls::IngressTls;
use serde::{Deserialize, Serialize};

/// A routing resource: identifying metadata plus the routing spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingress {
	#[serde(default)]
	pub metadata: ObjectMeta,
	#[serde(default)]
	pub spec: IngressSpec,
}

/// The routing behavior of a resource.
///
/// `rules` and `tls` accumulate in the order they were added; the class
/// name and default backend stay absent until assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressSpec {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ingress_class_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default_backend: Option<IngressBackend>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tls: Vec<IngressTls>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub rules: Vec<IngressRule>,
}
