//! TLS bindings between certificate secrets and hosts.

use serde::{Deserialize, Serialize};

/// One TLS binding: the hosts covered and the secret holding their
/// certificate. Hosts keep the order they were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressTls {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub hosts: Vec<String>,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub secret_name: String,
}
