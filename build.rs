use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let profile = env::var("PROFILE").unwrap();

    let full_version = if profile == "debug" {
        match get_git_hash() {
            Some(hash) => format!("{}-dev+{}", version, hash),
            None => version,
        }
    } else {
        version
    };

    println!("cargo:rustc-env=DIARLIES_AGENT_VERSION={}", full_version);

    // Agent definitions are embedded with include_str!
    println!("cargo:rerun-if-changed=agents/");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

fn get_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}
