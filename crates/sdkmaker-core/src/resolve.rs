use serde_json::Value;

/// A resolved target-language type expression. Rendering to concrete
/// TypeScript text is the emitters' concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Open/untyped fallback when no type information is resolvable.
    Any,
    /// A declared primitive type, verbatim from the schema.
    Primitive(String),
    /// A derived enum type name.
    Enum(String),
    /// A named reference to another schema.
    Model(String),
    /// An array of the inner expression.
    Array(Box<TypeExpr>),
    /// A generic string-keyed record, for inline object responses.
    Record,
}

/// Derive the enum type name for a schema property. Strips the first
/// occurrence each of "Dto", "Create", and "Get" from the schema name;
/// differently-named schemas that collide after stripping silently share
/// one name (known ambiguity).
pub fn enum_name(schema_name: &str, property: &str) -> String {
    let stripped = schema_name
        .replacen("Dto", "", 1)
        .replacen("Create", "", 1)
        .replacen("Get", "", 1);
    format!("{stripped}{}Enum", capitalize(property))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Resolve a schema property to a type expression: enum name, array of
/// items (reference or primitive), declared primitive, or `Any`.
pub fn property_type(schema: &Value, schema_name: &str, property: &str) -> TypeExpr {
    let Some(prop) = schema.get("properties").and_then(|p| p.get(property)) else {
        return TypeExpr::Any;
    };

    if prop.get("enum").is_some_and(Value::is_array) {
        return TypeExpr::Enum(enum_name(schema_name, property));
    }

    if prop.get("type").and_then(Value::as_str) == Some("array") {
        let items = prop.get("items");
        if let Some(reference) = items.and_then(|i| i.get("$ref")).and_then(Value::as_str) {
            return TypeExpr::Array(Box::new(TypeExpr::Model(ref_name(reference))));
        }
        if let Some(item_type) = items.and_then(|i| i.get("type")).and_then(Value::as_str) {
            return TypeExpr::Array(Box::new(TypeExpr::Primitive(item_type.to_string())));
        }
        return TypeExpr::Array(Box::new(TypeExpr::Any));
    }

    match prop.get("type").and_then(Value::as_str) {
        Some(ty) => TypeExpr::Primitive(ty.to_string()),
        None => TypeExpr::Any,
    }
}

/// Resolve a request body's JSON-media schema to a named model, or `Any`
/// when no JSON schema or no named reference is present.
pub fn request_body_type(request_body: Option<&Value>) -> TypeExpr {
    let reference = request_body
        .and_then(|body| body.get("content"))
        .and_then(|content| content.get("application/json"))
        .and_then(|media| media.get("schema"))
        .and_then(|schema| schema.get("$ref"))
        .and_then(Value::as_str);

    match reference {
        Some(r) => TypeExpr::Model(ref_name(r)),
        None => TypeExpr::Any,
    }
}

/// Resolve the `default` response entry only; explicit per-status-code
/// entries are ignored, so a success schema under `200` resolves to `Any`.
/// Downstream artifacts depend on exactly this policy.
pub fn response_type(responses: Option<&Value>) -> TypeExpr {
    let Some(schema) = responses
        .and_then(|r| r.get("default"))
        .and_then(|d| d.get("content"))
        .and_then(|content| content.get("application/json"))
        .and_then(|media| media.get("schema"))
    else {
        return TypeExpr::Any;
    };

    if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
        return TypeExpr::Model(ref_name(reference));
    }

    match schema.get("type").and_then(Value::as_str) {
        Some("array") => {
            let reference = schema
                .get("items")
                .and_then(|items| items.get("$ref"))
                .and_then(Value::as_str);
            match reference {
                Some(r) => TypeExpr::Array(Box::new(TypeExpr::Model(ref_name(r)))),
                None => TypeExpr::Array(Box::new(TypeExpr::Any)),
            }
        }
        Some("object") => TypeExpr::Record,
        _ => TypeExpr::Any,
    }
}

/// True iff the property appears in the schema's `required` list. An absent
/// list means every property is optional.
pub fn is_required(schema: &Value, property: &str) -> bool {
    schema
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|required| required.iter().any(|name| name == property))
}

/// Last segment of a `#/components/schemas/Name` reference.
fn ref_name(reference: &str) -> String {
    reference
        .rsplit('/')
        .next()
        .unwrap_or(reference)
        .to_string()
}
