use minijinja::{Environment, context};
use sdkmaker_core::SdkError;
use sdkmaker_core::resolve::{enum_name, is_required, property_type};
use serde_json::Value;

use crate::type_mapper::model_type;

/// Emit `models.ts`: enum type aliases first (they may be referenced by the
/// interfaces), then one interface per named schema.
pub fn emit_models(components: &Value) -> Result<String, SdkError> {
    let Some(schemas) = components.get("schemas").and_then(Value::as_object) else {
        return Err(SdkError::validation(
            "emit_models",
            "invalid components object: missing schemas",
        ));
    };

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("models.ts.j2", include_str!("../../templates/models.ts.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("models.ts.j2").unwrap();

    let mut enums = Vec::new();
    let mut models = Vec::new();

    for (schema_name, schema) in schemas {
        let properties = schema
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        for (property, prop_schema) in &properties {
            if let Some(values) = prop_schema.get("enum").and_then(Value::as_array) {
                enums.push(context! {
                    name => enum_name(schema_name, property),
                    values => enum_union(values),
                });
            }
        }

        let lines: Vec<String> = properties
            .keys()
            .map(|property| {
                let marker = if is_required(schema, property) { "" } else { "?" };
                let ty = model_type(&property_type(schema, schema_name, property));
                format!("{property}{marker}: {ty};")
            })
            .collect();

        models.push(context! {
            name => schema_name.clone(),
            properties => lines,
        });
    }

    Ok(tmpl
        .render(context! { enums => enums, models => models })
        .expect("render should succeed"))
}

/// `'admin' | 'user'` — literal values quoted as in the document.
fn enum_union(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| match value {
            Value::String(s) => format!("'{s}'"),
            other => format!("'{other}'"),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
