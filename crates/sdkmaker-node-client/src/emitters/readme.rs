use minijinja::{Environment, context};
use sdkmaker_core::{SdkError, SdkModel};

use super::methods::MethodView;

/// Emit `README.md`: fixed boilerplate sections plus one example invocation
/// per operation. Fails fast when the API name or package name is missing —
/// prose full of empty identifiers is worse than no README.
pub fn emit_readme(model: &SdkModel, package_name: &str) -> Result<String, SdkError> {
    if model.name.is_empty() {
        return Err(SdkError::validation(
            "emit_readme",
            "name must be a non-empty string",
        ));
    }
    if package_name.is_empty() {
        return Err(SdkError::validation(
            "emit_readme",
            "package name must be a non-empty string",
        ));
    }

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("README.md.j2", include_str!("../../templates/README.md.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("README.md.j2").unwrap();

    let methods: Vec<minijinja::Value> = model
        .controllers
        .values()
        .flatten()
        .map(|op| {
            let view = MethodView::from_operation(op);
            context! {
                name => view.name,
                args => view.args,
                summary => view.summary.unwrap_or_else(|| "No description provided".to_string()),
            }
        })
        .collect();

    Ok(tmpl
        .render(context! {
            name => model.name.clone(),
            client_var => model.name.to_lowercase(),
            package_name => package_name,
            description => model.description.clone(),
            methods => methods,
        })
        .expect("render should succeed"))
}
