//! Routing rules: a host and the ordered HTTP paths served under it.

use crate::backend::IngressBackend;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One routing rule.
///
/// `http` stays `None` until a rule value is attached. A rule whose value
/// holds an empty path list is a different value than a rule with no value
/// at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressRule {
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub host: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub http: Option<HttpIngressRuleValue>,
}

/// The ordered path list carried by a rule. Paths keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpIngressRuleValue {
	#[serde(default)]
	pub paths: Vec<HttpIngressPath>,
}

/// A single HTTP path entry: the path string, an optional match type, and
/// the backend traffic is forwarded to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpIngressPath {
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub path: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub path_type: Option<PathType>,
	#[serde(default)]
	pub backend: IngressBackend,
}

/// How a path string is matched against request URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathType {
	/// Match the URL path exactly.
	Exact,
	/// Match by URL path prefix, split on `/`.
	Prefix,
	/// Matching is delegated to the class controller.
	ImplementationSpecific,
}

impl PathType {
	/// Returns the string representation used on the wire.
	pub fn as_str(&self) -> &'static str {
		match self {
			PathType::Exact => "Exact",
			PathType::Prefix => "Prefix",
			PathType::ImplementationSpecific => "ImplementationSpecific",
		}
	}
}

impl fmt::Display for PathType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a path type string is not recognized.
#[derive(Debug, Error)]
#[error("unknown path type: {0}")]
pub struct UnknownPathType(pub String);

impl FromStr for PathType {
	type Err = UnknownPathType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Exact" => Ok(PathType::Exact),
			"Prefix" => Ok(PathType::Prefix),
			"ImplementationSpecific" => Ok(PathType::ImplementationSpecific),
			other => Err(UnknownPathType(other.to_string())),
		}
	}
}
