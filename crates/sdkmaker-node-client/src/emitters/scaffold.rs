use serde_json::json;

/// Emit `package.json` for the generated SDK. Key order is fixed so
/// regeneration never reorders the manifest.
pub fn emit_package_json(package_name: &str, version: &str, description: &str) -> String {
    let manifest = json!({
        "name": package_name,
        "version": if version.is_empty() { "0.1.0" } else { version },
        "description": description,
        "main": "dist/index.js",
        "types": "dist/index.d.ts",
        "files": ["dist"],
        "scripts": {
            "build": "tsc",
            "format": "prettier --write .",
            "prepublishOnly": "npm run build"
        },
        "license": "ISC",
        "devDependencies": {
            "prettier": "^3.3.3",
            "typescript": "^5.5.4"
        },
        "dependencies": {
            "axios": "^1.7.3"
        }
    });

    let mut content = serde_json::to_string_pretty(&manifest).expect("manifest should serialize");
    content.push('\n');
    content
}

/// Emit the fixed `tsconfig.json` build configuration.
pub fn emit_tsconfig() -> String {
    include_str!("../../templates/tsconfig.json").to_string()
}

/// Emit the `src/index.ts` barrel module.
pub fn emit_index() -> String {
    "export * from './models';\nexport * from './createClient';\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_json_carries_name_version_description() {
        let content = emit_package_json("user-service-sdk", "1.4.2", "Manage users.");
        let manifest: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(manifest["name"], "user-service-sdk");
        assert_eq!(manifest["version"], "1.4.2");
        assert_eq!(manifest["description"], "Manage users.");
        assert_eq!(manifest["dependencies"]["axios"], "^1.7.3");
        assert_eq!(manifest["scripts"]["build"], "tsc");
    }

    #[test]
    fn missing_spec_version_gets_a_default() {
        let content = emit_package_json("sdk", "", "");
        let manifest: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(manifest["version"], "0.1.0");
    }

    #[test]
    fn barrel_re_exports_models_and_factory() {
        let content = emit_index();
        assert!(content.contains("export * from './models';"));
        assert!(content.contains("export * from './createClient';"));
    }

    #[test]
    fn tsconfig_targets_commonjs_dist() {
        let content = emit_tsconfig();
        let config: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(config["compilerOptions"]["outDir"], "./dist");
        assert_eq!(config["compilerOptions"]["strict"], true);
    }
}
