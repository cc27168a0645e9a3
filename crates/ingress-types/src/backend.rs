//! Service backends that matched traffic is forwarded to.

use serde::{Deserialize, Serialize};

/// The destination for traffic matched by a path or used as the spec's
/// default.
///
/// `service` is absent on a freshly allocated backend; it is filled in when
/// a target service is named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressBackend {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub service: Option<IngressServiceBackend>,
}

/// A service name plus the port traffic is delivered to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressServiceBackend {
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,
	#[serde(default)]
	pub port: ServiceBackendPort,
}

/// A service port selected either by name or by number.
///
/// # Examples
///
/// ```
/// use ingress_types::ServiceBackendPort;
///
/// let by_number = ServiceBackendPort::number(80);
/// let by_name = ServiceBackendPort::named("https");
/// assert_eq!(by_number.number, Some(80));
/// assert_eq!(by_name.name.as_deref(), Some("https"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBackendPort {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub number: Option<i32>,
}

impl ServiceBackendPort {
	/// Selects a port by number.
	pub fn number(number: i32) -> Self {
		Self {
			name: None,
			number: Some(number),
		}
	}

	/// Selects a port by its name on the target service.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			number: None,
		}
	}
}
