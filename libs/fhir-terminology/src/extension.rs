use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// FHIR Extension attached to a primitive element.
///
/// The `value[x]` payload is opaque at this layer: it rides along as raw
/// JSON and is never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,

    #[serde(flatten)]
    pub value: Value,
}

impl Extension {
    pub fn new(url: impl Into<String>, value: Value) -> Self {
        Self {
            url: url.into(),
            value,
        }
    }
}

// JSON numbers cannot be NaN, so `Value` equality is a full equivalence
// relation even though `serde_json` does not derive `Eq` itself.
impl Eq for Extension {}

impl Hash for Extension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
        // Equal `Value`s render to identical canonical text.
        self.value.to_string().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(ext: &Extension) -> u64 {
        let mut hasher = DefaultHasher::new();
        ext.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_extensions_hash_alike() {
        let a = Extension::new("http://example.org/x", json!({ "valueString": "a" }));
        let b = Extension::new("http://example.org/x", json!({ "valueString": "a" }));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn url_distinguishes_extensions() {
        let a = Extension::new("http://example.org/x", json!({ "valueString": "a" }));
        let b = Extension::new("http://example.org/y", json!({ "valueString": "a" }));
        assert_ne!(a, b);
    }

    #[test]
    fn serializes_with_flattened_payload() {
        let ext = Extension::new("http://example.org/x", json!({ "valueInteger": 3 }));
        let encoded = serde_json::to_value(&ext).unwrap();
        assert_eq!(
            encoded,
            json!({ "url": "http://example.org/x", "valueInteger": 3 })
        );
    }
}
