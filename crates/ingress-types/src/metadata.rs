//! Object metadata carried by the root resource.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifying metadata for a routing resource.
///
/// The label and annotation maps stay absent until something writes to
/// them; an omitted map and a present-but-empty map are distinct values,
/// matching the external schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub namespace: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub labels: Option<HashMap<String, String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub annotations: Option<HashMap<String, String>>,
}
