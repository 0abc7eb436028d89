use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::SdkError;

/// Group name for operations that declare no tags.
pub const DEFAULT_CONTROLLER: &str = "DefaultController";

/// Operation identifiers containing this substring mark synthetic/internal
/// entries that must never reach the generated SDK.
const INTERNAL_MARKER: &str = "Controller_";

/// A declared operation parameter with its schema's primitive type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

/// One retained HTTP method+path entry. Instances exist only for entries
/// that passed the identifier filter.
#[derive(Debug, Clone)]
pub struct Operation {
    /// Lowercase HTTP method as it appears in the document.
    pub method: String,
    pub path: String,
    pub operation_id: String,
    pub summary: Option<String>,
    pub parameters: Vec<Parameter>,
    /// Raw request body fragment, resolved on demand by the type resolver.
    pub request_body: Option<Value>,
    /// Raw responses fragment, resolved on demand by the type resolver.
    pub responses: Option<Value>,
}

/// The organized model handed to every emitter. Immutable once produced.
#[derive(Debug, Clone)]
pub struct SdkModel {
    /// Controller name → operations, both in document encounter order.
    pub controllers: IndexMap<String, Vec<Operation>>,
    /// The document's components object, `{}` when absent.
    pub components: Value,
    pub base_url: String,
    /// API title with whitespace removed, used as an identifier.
    pub name: String,
    pub description: String,
    pub version: String,
}

/// Walk the document's operation map and group operations into controllers.
/// Encounter order is preserved everywhere so two runs over byte-identical
/// input produce byte-identical artifacts.
pub fn organize(doc: &Value) -> Result<SdkModel, SdkError> {
    let Some(paths) = doc.get("paths").and_then(Value::as_object) else {
        return Err(SdkError::validation(
            "organize",
            "invalid Swagger document: missing paths",
        ));
    };

    let mut controllers: IndexMap<String, Vec<Operation>> = IndexMap::new();

    for (path, path_item) in paths {
        let Some(entries) = path_item.as_object() else {
            continue;
        };
        for (method, entry) in entries {
            let Some(operation_id) = entry.get("operationId").and_then(Value::as_str) else {
                continue;
            };
            if operation_id.contains(INTERNAL_MARKER) {
                log::debug!("skipping internal operation {operation_id}");
                continue;
            }

            let controller = controller_name(entry);
            controllers
                .entry(controller.to_string())
                .or_default()
                .push(build_operation(method, path, operation_id, entry));
        }
    }

    let info = doc.get("info");

    Ok(SdkModel {
        controllers,
        components: doc
            .get("components")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())),
        base_url: doc
            .get("servers")
            .and_then(Value::as_array)
            .and_then(|servers| servers.first())
            .and_then(|server| server.get("url"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        name: info
            .and_then(|i| i.get("title"))
            .and_then(Value::as_str)
            .map(|title| title.split_whitespace().collect())
            .unwrap_or_default(),
        description: info_str(info, "description"),
        version: info_str(info, "version"),
    })
}

fn info_str(info: Option<&Value>, key: &str) -> String {
    info.and_then(|i| i.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// First declared tag, or the default sentinel when none exist.
fn controller_name(entry: &Value) -> &str {
    entry
        .get("tags")
        .and_then(Value::as_array)
        .and_then(|tags| tags.first())
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_CONTROLLER)
}

fn build_operation(method: &str, path: &str, operation_id: &str, entry: &Value) -> Operation {
    let parameters = entry
        .get("parameters")
        .and_then(Value::as_array)
        .map(|params| {
            params
                .iter()
                .map(|param| Parameter {
                    name: param
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    ty: param
                        .get("schema")
                        .and_then(|schema| schema.get("type"))
                        .and_then(Value::as_str)
                        .unwrap_or("any")
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    Operation {
        method: method.to_string(),
        path: path.to_string(),
        operation_id: operation_id.to_string(),
        summary: entry
            .get("summary")
            .and_then(Value::as_str)
            .map(str::to_string),
        parameters,
        request_body: entry.get("requestBody").cloned(),
        responses: entry.get("responses").cloned(),
    }
}
