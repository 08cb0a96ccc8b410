//! Nested value resolution over raw YAML mappings.
//!
//! The manifest is kept as a dynamic [`serde_yaml::Value`] tree rather than
//! a typed schema: compose files carry arbitrary service keys that dcm must
//! pass through untouched, and only a handful of well-known paths
//! (`<service>.image`, `<service>.labels.<key>`) are ever read. [`lookup`]
//! walks such a path defensively, degrading to "absent" instead of erroring
//! when the shape does not match.

use serde_yaml::Value;

/// Resolve a key path inside a YAML value.
///
/// - An empty path returns `value` itself.
/// - Each step descends only when the current value is a mapping; a present
///   but non-mapping intermediate yields `None`.
/// - `None` means "no such key along the path". Callers that care about the
///   difference between a missing key and a present-but-empty value match on
///   the returned `Option` before interpreting the leaf.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let Some((key, rest)) = path.split_first() else {
        return Some(value);
    };

    match value.as_mapping()?.get(*key) {
        Some(next) => lookup(next, rest),
        None => None,
    }
}

/// Resolve a key path and return the leaf only if it is a string.
pub fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn empty_path_is_identity() {
        let value = yaml("foo: bar");
        assert_eq!(lookup(&value, &[]), Some(&value));
    }

    #[test]
    fn single_key_returns_leaf() {
        let value = yaml("foo: bar");
        assert_eq!(lookup_str(&value, &["foo"]), Some("bar"));
    }

    #[test]
    fn missing_key_is_absent() {
        let value = yaml("foo: bar");
        assert_eq!(lookup(&value, &["missing"]), None);
    }

    #[test]
    fn descending_into_a_scalar_is_absent_not_an_error() {
        let value = yaml("foo: bar");
        assert_eq!(lookup(&value, &["foo", "baz"]), None);
    }

    #[test]
    fn nested_path_resolves() {
        let value = yaml("aaa:\n  bbb: ccc");
        assert_eq!(lookup_str(&value, &["aaa", "bbb"]), Some("ccc"));
    }

    #[test]
    fn deep_label_path_resolves() {
        let value = yaml(
            "web:\n  labels:\n    dcm.repository: git@example.com:org/web.git",
        );
        assert_eq!(
            lookup_str(&value, &["web", "labels", "dcm.repository"]),
            Some("git@example.com:org/web.git"),
        );
    }

    #[test]
    fn absent_differs_from_present_but_falsy() {
        let value = yaml("flag: false\nempty: \"\"");
        assert!(lookup(&value, &["flag"]).is_some());
        assert_eq!(lookup(&value, &["flag"]).and_then(Value::as_bool), Some(false));
        assert_eq!(lookup_str(&value, &["empty"]), Some(""));
        assert!(lookup(&value, &["gone"]).is_none());
    }

    #[test]
    fn lookup_str_rejects_non_string_leaf() {
        let value = yaml("count: 3");
        assert!(lookup(&value, &["count"]).is_some());
        assert_eq!(lookup_str(&value, &["count"]), None);
    }

    #[test]
    fn sequences_are_not_descended() {
        let value = yaml("items:\n  - one\n  - two");
        assert_eq!(lookup(&value, &["items", "one"]), None);
    }
}
