use std::path::Path;
use std::process::Command;

/// Run `npm install` followed by `npm run build` in the output directory.
/// Returns false on any failure; already-written files are left in place.
pub fn build_sdk(dir: &Path) -> bool {
    eprintln!("Running npm install...");
    if !run_npm(dir, &["install"]) {
        return false;
    }
    eprintln!("Running npm run build...");
    run_npm(dir, &["run", "build"])
}

fn run_npm(dir: &Path, args: &[&str]) -> bool {
    match Command::new("npm").args(args).current_dir(dir).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            eprintln!("  npm {} exited with {status}", args.join(" "));
            false
        }
        Err(err) => {
            eprintln!(
                "  npm not found ({err}) — run `npm install && npm run build` in {} to build",
                dir.display()
            );
            false
        }
    }
}
