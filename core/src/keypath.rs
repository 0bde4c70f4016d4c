//! Dot-delimited descent into a parsed JSON tree.

use std::fmt;

use serde_json::Value;

/// A dot-separated path of object keys, e.g. `"user.name"`.
///
/// Traversal descends by object key only; there is no array-index syntax. A
/// segment applied to anything that is not a JSON object, or naming an
/// absent key, makes the whole path miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypath(String);

impl Keypath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Follow the path from `root`, one object key per segment. Returns
    /// `None` as soon as the current value is not an object or the key is
    /// absent; the extracted leaf may be any JSON value, scalars included.
    pub fn extract<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in self.0.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for Keypath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Keypath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for Keypath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "users": [{"userId": 32}, {"userId": 2}],
            "user": {"name": {"firstname": "henning", "lastname": "mankel"}}
        })
    }

    #[test]
    fn single_segment_extracts_array() {
        let root = fixture();
        let sub = Keypath::new("users").extract(&root).unwrap();
        assert_eq!(sub[0]["userId"], 32);
        assert_eq!(sub[1]["userId"], 2);
    }

    #[test]
    fn nested_segments_extract_object() {
        let root = fixture();
        let sub = Keypath::new("user.name").extract(&root).unwrap();
        assert_eq!(sub["firstname"], "henning");
        assert_eq!(sub["lastname"], "mankel");
    }

    #[test]
    fn leaf_may_be_a_scalar() {
        let root = fixture();
        let sub = Keypath::new("user.name.firstname").extract(&root).unwrap();
        assert_eq!(sub, &json!("henning"));
    }

    #[test]
    fn missing_top_level_key_misses() {
        assert!(Keypath::new("uss").extract(&fixture()).is_none());
    }

    #[test]
    fn missing_final_segment_misses() {
        assert!(Keypath::new("user.name.ad").extract(&fixture()).is_none());
    }

    #[test]
    fn segment_into_array_misses() {
        // No array-index descent: "users.0" hits a non-object and stops.
        assert!(Keypath::new("users.0").extract(&fixture()).is_none());
    }

    #[test]
    fn segment_into_scalar_root_misses() {
        assert!(Keypath::new("anything").extract(&json!("bare string")).is_none());
    }

    #[test]
    fn empty_path_looks_up_empty_key() {
        assert!(Keypath::new("").extract(&fixture()).is_none());
        let odd = json!({"": 7});
        assert_eq!(Keypath::new("").extract(&odd), Some(&json!(7)));
    }
}
