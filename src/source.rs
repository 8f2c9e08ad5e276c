//! Keyed lookup boundary for raw input.

use std::collections::{BTreeMap, HashMap};

use crate::value::{Key, RawValue};

/// A keyed collection raw values can be looked up in.
///
/// This is the seam between whatever holds untrusted input (a decoded form,
/// a JSON object, a parameter map) and the normalizer. Implementations only
/// map a name to the raw value, they never sanitize.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use effective_type::{normalize_from_keyed_source, Options, RawValue, Value};
///
/// let mut form = HashMap::new();
/// form.insert("age".to_string(), RawValue::from("42"));
///
/// assert_eq!(normalize_from_keyed_source("age", &form, Options::new()), Value::Int(42));
/// assert_eq!(normalize_from_keyed_source("name", &form, Options::new()), Value::Null);
/// ```
pub trait ParameterSource {
    /// Returns the raw value stored under `needle`, if any.
    fn lookup(&self, needle: &str) -> Option<&RawValue>;
}

/// A raw collection is itself a source; scalars contain no keys.
impl ParameterSource for RawValue {
    fn lookup(&self, needle: &str) -> Option<&RawValue> {
        self.get(needle)
    }
}

impl ParameterSource for [(Key, RawValue)] {
    fn lookup(&self, needle: &str) -> Option<&RawValue> {
        self.iter()
            .find(|(key, _)| key.matches(needle))
            .map(|(_, value)| value)
    }
}

impl ParameterSource for Vec<(Key, RawValue)> {
    fn lookup(&self, needle: &str) -> Option<&RawValue> {
        self.as_slice().lookup(needle)
    }
}

impl<S: std::hash::BuildHasher> ParameterSource for HashMap<String, RawValue, S> {
    fn lookup(&self, needle: &str) -> Option<&RawValue> {
        self.get(needle)
    }
}

impl ParameterSource for BTreeMap<String, RawValue> {
    fn lookup(&self, needle: &str) -> Option<&RawValue> {
        self.get(needle)
    }
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn lookup(&self, needle: &str) -> Option<&RawValue> {
        (**self).lookup(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_map_is_a_source() {
        let raw = RawValue::map([("value", RawValue::from(1))]);
        assert_eq!(raw.lookup("value"), Some(&RawValue::Int(1)));
        assert_eq!(raw.lookup("missing"), None);
    }

    #[test]
    fn scalar_has_no_keys() {
        assert_eq!(RawValue::from("value").lookup("value"), None);
    }

    #[test]
    fn pair_slices_match_index_keys() {
        let pairs = vec![
            (Key::Index(0), RawValue::from("zero")),
            (Key::from("name"), RawValue::from("alice")),
        ];
        assert_eq!(pairs.lookup("0"), Some(&RawValue::from("zero")));
        assert_eq!(pairs.lookup("name"), Some(&RawValue::from("alice")));
    }

    #[test]
    fn std_maps_are_sources() {
        let mut hash = HashMap::new();
        hash.insert("k".to_string(), RawValue::Bool(true));
        let mut tree = BTreeMap::new();
        tree.insert("k".to_string(), RawValue::Bool(false));

        assert_eq!(hash.lookup("k"), Some(&RawValue::Bool(true)));
        assert_eq!(tree.lookup("k"), Some(&RawValue::Bool(false)));
        assert_eq!((&tree).lookup("other"), None);
    }
}
