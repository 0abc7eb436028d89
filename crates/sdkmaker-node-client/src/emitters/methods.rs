use minijinja::{Environment, context};
use sdkmaker_core::Operation;
use sdkmaker_core::resolve::{request_body_type, response_type};

use crate::type_mapper::api_type;

/// The pieces of one operation every artifact needs: signature, argument
/// list, JSDoc lines, URL template, and resolved types. Built once and
/// shared by the call-wrapper, factory, and README emitters so the three
/// artifacts can never disagree.
#[derive(Debug, Clone)]
pub struct MethodView {
    pub name: String,
    /// `userId: number, data: models.CreateSessionDto`
    pub signature: String,
    /// `userId, data`
    pub args: String,
    pub doc_lines: Vec<String>,
    /// Path with `{param}` rewritten to a template-literal `${param}`.
    pub url: String,
    pub http_method: String,
    pub has_body: bool,
    pub return_type: String,
    pub summary: Option<String>,
}

impl MethodView {
    pub fn from_operation(op: &Operation) -> MethodView {
        let mut parts: Vec<(String, String)> = op
            .parameters
            .iter()
            .map(|param| (param.name.clone(), param.ty.clone()))
            .collect();

        if op.request_body.is_some() {
            let body_type = api_type(&request_body_type(op.request_body.as_ref()));
            parts.push(("data".to_string(), body_type));
        }

        let signature = parts
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ");
        let args = parts
            .iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>()
            .join(", ");

        let mut doc_lines = Vec::new();
        if let Some(summary) = &op.summary {
            doc_lines.push(summary.clone());
        }
        for (name, ty) in &parts {
            doc_lines.push(format!("@param {{{ty}}} {name}"));
        }

        MethodView {
            name: op.operation_id.clone(),
            signature,
            args,
            doc_lines,
            url: op.path.replace('{', "${"),
            http_method: op.method.to_uppercase(),
            has_body: op.request_body.is_some(),
            return_type: api_type(&response_type(op.responses.as_ref())),
            summary: op.summary.clone(),
        }
    }

    fn to_ctx(&self) -> minijinja::Value {
        context! {
            name => self.name.clone(),
            signature => self.signature.clone(),
            doc_lines => self.doc_lines.clone(),
            url => self.url.clone(),
            http_method => self.http_method.clone(),
            has_body => self.has_body,
            return_type => self.return_type.clone(),
        }
    }
}

/// Emit one call-wrapper file: imports plus one async function per
/// operation, each performing exactly one HTTP call.
pub fn emit_controller(operations: &[Operation]) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "controller.ts.j2",
        include_str!("../../templates/controller.ts.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("controller.ts.j2").unwrap();

    let methods: Vec<minijinja::Value> = operations
        .iter()
        .map(|op| MethodView::from_operation(op).to_ctx())
        .collect();

    tmpl.render(context! { methods => methods })
        .expect("render should succeed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get_users() -> Operation {
        Operation {
            method: "get".to_string(),
            path: "/users".to_string(),
            operation_id: "getUsers".to_string(),
            summary: Some("List all users".to_string()),
            parameters: vec![],
            request_body: None,
            responses: Some(json!({
                "default": { "content": { "application/json": { "schema": {
                    "$ref": "#/components/schemas/User"
                } } } }
            })),
        }
    }

    #[test]
    fn zero_parameter_wrapper() {
        let content = emit_controller(&[get_users()]);
        assert!(content.contains("import { currentInstance } from './axiosClient';"));
        assert!(content.contains("import * as models from './models';"));
        assert!(
            content.contains("export async function getUsers(): Promise<models.User> {"),
            "unexpected output:\n{content}"
        );
        assert!(content.contains("url: `/users`"));
        assert!(content.contains("method: 'GET',"));
        assert!(!content.contains("data,"));
    }

    #[test]
    fn path_parameters_become_template_literals() {
        let op = Operation {
            method: "delete".to_string(),
            path: "/users/{userId}".to_string(),
            operation_id: "deleteUser".to_string(),
            summary: None,
            parameters: vec![sdkmaker_core::Parameter {
                name: "userId".to_string(),
                ty: "number".to_string(),
            }],
            request_body: None,
            responses: None,
        };
        let content = emit_controller(&[op]);
        assert!(content.contains("export async function deleteUser(userId: number): Promise<any> {"));
        assert!(content.contains("url: `/users/${userId}`"));
        assert!(content.contains("method: 'DELETE',"));
    }

    #[test]
    fn request_body_adds_the_data_parameter_and_payload() {
        let op = Operation {
            method: "post".to_string(),
            path: "/users".to_string(),
            operation_id: "createUser".to_string(),
            summary: Some("Create a user".to_string()),
            parameters: vec![],
            request_body: Some(json!({
                "content": { "application/json": { "schema": {
                    "$ref": "#/components/schemas/CreateUserDto"
                } } }
            })),
            responses: None,
        };
        let content = emit_controller(&[op]);
        assert!(content.contains(
            "export async function createUser(data: models.CreateUserDto): Promise<any> {"
        ));
        assert!(content.contains("data,"));
        assert!(content.contains(" * @param {models.CreateUserDto} data"));
    }
}
