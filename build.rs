use std::process::Command;

/// Run `git rev-parse <args> HEAD`, or "unknown" outside a checkout.
fn rev_parse(args: &[&str]) -> String {
    Command::new("git")
        .arg("rev-parse")
        .args(args)
        .arg("HEAD")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // short hash for the CLI version and the wasm debug report
    println!("cargo:rustc-env=GIT_HASH={}", rev_parse(&["--short"]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
