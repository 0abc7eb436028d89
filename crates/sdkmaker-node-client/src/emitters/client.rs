use minijinja::{Environment, context};
use sdkmaker_core::SdkModel;

use super::methods::MethodView;

/// Emit `axiosClient.ts` — the HTTP client context module. The context
/// object is owned by each `createClient()` call and installed before every
/// delegated request, so multiple generated clients can coexist in one
/// process without clobbering each other's configuration.
pub fn emit_http_client() -> String {
    include_str!("../../templates/axiosClient.ts").to_string()
}

/// Emit `createClient.ts` — the factory that configures credentials and a
/// base URL, then exposes one wrapped method per operation. Wrapped methods
/// never throw; failures become `{ data: null, error, isBusy: false }`.
pub fn emit_create_client(model: &SdkModel) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "createClient.ts.j2",
        include_str!("../../templates/createClient.ts.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("createClient.ts.j2").unwrap();

    let methods: Vec<minijinja::Value> = model
        .controllers
        .values()
        .flatten()
        .map(|op| {
            let view = MethodView::from_operation(op);
            context! {
                name => view.name,
                signature => view.signature,
                args => view.args,
                return_type => view.return_type,
            }
        })
        .collect();

    tmpl.render(context! {
        name => model.name.clone(),
        base_url => model.base_url.clone(),
        methods => methods,
    })
    .expect("render should succeed")
}
