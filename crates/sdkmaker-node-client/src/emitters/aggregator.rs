use indexmap::IndexMap;
use sdkmaker_core::Operation;

/// Emit `API.ts`, re-exporting every non-empty controller behind a single
/// default export. Groups with zero retained operations are silently
/// omitted; no controllers at all yields empty content.
pub fn emit_aggregator(controllers: &IndexMap<String, Vec<Operation>>) -> String {
    let active: Vec<&str> = controllers
        .iter()
        .filter(|(_, operations)| !operations.is_empty())
        .map(|(name, _)| name.as_str())
        .collect();

    if active.is_empty() {
        return String::new();
    }

    let imports = active
        .iter()
        .map(|name| format!("import * as {name} from './{name}';"))
        .collect::<Vec<_>>()
        .join("\n");

    let spreads = active
        .iter()
        .map(|name| format!("  ...{name}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{imports}\n\nexport default {{\n{spreads}\n}};\n")
}
