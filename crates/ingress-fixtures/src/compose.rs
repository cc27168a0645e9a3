//! The construction engine behind the fixture builders.
//!
//! A fixture is assembled by applying an ordered sequence of mutation
//! units to a freshly allocated value. Each unit receives exclusive
//! mutable access to the value under construction and applies one change;
//! once every unit has run, the finished value is returned by move and the
//! construction window is over.

/// A single deferred change to a value under construction.
///
/// Units are single-use and carry no state beyond their captured
/// arguments.
pub type Mutation<T> = Box<dyn FnOnce(&mut T)>;

/// Allocates a zero-valued `T`, applies `mutations` in order, and returns
/// the finished value.
///
/// An empty sequence yields `T::default()`. Units cannot fail; a unit that
/// assigns a field already set by an earlier unit replaces the value.
pub fn build<T: Default>(mutations: Vec<Mutation<T>>) -> T {
	let mut target = T::default();
	for mutation in mutations {
		mutation(&mut target);
	}
	target
}

#[cfg(test)]
mod tests {
	use super::*;
	use ingress_types::{Ingress, IngressRule, IngressSpec, ServiceBackendPort};

	fn push_rule(host: &str) -> Mutation<IngressSpec> {
		let host = host.to_string();
		Box::new(move |spec: &mut IngressSpec| {
			spec.rules.push(IngressRule {
				host,
				..Default::default()
			});
		})
	}

	#[test]
	fn test_empty_sequence_yields_default() {
		assert_eq!(build::<Ingress>(vec![]), Ingress::default());
		assert_eq!(build::<IngressSpec>(vec![]), IngressSpec::default());
		assert_eq!(
			build::<ServiceBackendPort>(vec![]),
			ServiceBackendPort::default()
		);
	}

	#[test]
	fn test_mutations_apply_in_call_order() {
		let spec = build(vec![push_rule("a"), push_rule("b"), push_rule("c")]);

		let hosts: Vec<&str> = spec.rules.iter().map(|r| r.host.as_str()).collect();
		assert_eq!(hosts, vec!["a", "b", "c"]);
	}

	#[test]
	fn test_repeated_units_each_append_one_entry() {
		let spec = build(vec![push_rule("dup"), push_rule("dup"), push_rule("dup")]);
		assert_eq!(spec.rules.len(), 3);
	}

	#[test]
	fn test_later_write_replaces_earlier() {
		let port = build(vec![
			Box::new(|p: &mut ServiceBackendPort| p.number = Some(80))
				as Mutation<ServiceBackendPort>,
			Box::new(|p: &mut ServiceBackendPort| p.number = Some(8080)),
		]);
		assert_eq!(port.number, Some(8080));
	}

	#[test]
	fn test_scalar_write_leaves_other_fields_at_zero() {
		let rule = build(vec![Box::new(|r: &mut IngressRule| {
			r.host = "lonely".to_string();
		}) as Mutation<IngressRule>]);

		assert_eq!(rule.host, "lonely");
		assert_eq!(rule.http, None);
	}

	#[test]
	fn test_rebuild_from_same_arguments_is_equal() {
		let first = build(vec![push_rule("a"), push_rule("b")]);
		let second = build(vec![push_rule("a"), push_rule("b")]);
		assert_eq!(first, second);
	}
}
