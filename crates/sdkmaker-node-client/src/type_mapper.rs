use sdkmaker_core::resolve::TypeExpr;

/// Render a type expression for `models.ts`, where schema references are in
/// scope unqualified and arrays use the generic `Array<T>` form.
pub fn model_type(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Any => "any".to_string(),
        TypeExpr::Primitive(ty) => ty.clone(),
        TypeExpr::Enum(name) => name.clone(),
        TypeExpr::Model(name) => name.clone(),
        TypeExpr::Array(inner) => format!("Array<{}>", model_type(inner)),
        TypeExpr::Record => "Record<string, any>".to_string(),
    }
}

/// Render a type expression for the call-wrapper and factory files, where
/// schema references go through the `models` namespace and arrays use the
/// `T[]` form.
pub fn api_type(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Any => "any".to_string(),
        TypeExpr::Primitive(ty) => ty.clone(),
        TypeExpr::Enum(name) => format!("models.{name}"),
        TypeExpr::Model(name) => format!("models.{name}"),
        TypeExpr::Array(inner) => format!("{}[]", api_type(inner)),
        TypeExpr::Record => "Record<string, any>".to_string(),
    }
}
