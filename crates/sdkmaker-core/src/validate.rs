use serde_json::Value;

use crate::error::SdkError;

/// Keys at least one of which a Swagger/OpenAPI document must carry.
const VERSION_MARKERS: [&str; 4] = ["swagger", "openapi", "info", "paths"];

/// Shallow structural predicate: does this look like an API description?
/// Deliberately no property-level checking; malformed nested schemas are
/// left for the emitters to degrade into `any`-typed output.
pub fn is_api_document(doc: &Value) -> bool {
    match doc.as_object() {
        Some(map) => VERSION_MARKERS.iter().any(|key| map.contains_key(*key)),
        None => false,
    }
}

/// Fail with a validation error when the document is not plausibly an API
/// description.
pub fn ensure_api_document(doc: &Value) -> Result<(), SdkError> {
    if is_api_document(doc) {
        Ok(())
    } else {
        Err(SdkError::validation(
            "ensure_api_document",
            "invalid Swagger/OpenAPI document structure",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_any_version_marker() {
        assert!(is_api_document(&json!({ "openapi": "3.0.0" })));
        assert!(is_api_document(&json!({ "swagger": "2.0" })));
        assert!(is_api_document(&json!({ "paths": {} })));
        assert!(is_api_document(&json!({ "info": { "title": "T" } })));
    }

    #[test]
    fn rejects_unrelated_documents() {
        assert!(!is_api_document(&json!({ "name": "package", "version": "1.0.0" })));
        assert!(!is_api_document(&json!([1, 2, 3])));
        assert!(ensure_api_document(&json!({})).is_err());
    }
}
