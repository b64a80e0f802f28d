use std::fs;
use std::path::Path;

fn main() {
    // Capture Git values during compilation (not at runtime)
    let git_hash = git_output(&["rev-parse", "--short", "HEAD"]);
    let git_date = git_output(&["log", "-1", "--format=%ci"]);

    println!("cargo:rustc-env=GIT_HASH={}", git_hash);
    println!("cargo:rustc-env=GIT_DATE={}", git_date);

    watch_git_head();
}

/// Run git with the given arguments, falling back to "unknown" outside a checkout.
fn git_output(args: &[&str]) -> String {
    std::process::Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Rerun when HEAD moves or the checked-out branch gets a new commit.
///
/// Only existing files are watched; outside a checkout the script reruns
/// on changes to itself alone.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=build.rs");

    let head = Path::new(".git/HEAD");
    if !head.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.git/HEAD");

    let branch_ref = fs::read_to_string(head)
        .ok()
        .and_then(|content| content.trim().strip_prefix("ref: ").map(str::to_string));
    if let Some(branch_ref) = branch_ref {
        let ref_path = Path::new(".git").join(&branch_ref);
        if ref_path.exists() {
            println!("cargo:rerun-if-changed={}", ref_path.display());
        } else if Path::new(".git/packed-refs").exists() {
            println!("cargo:rerun-if-changed=.git/packed-refs");
        }
    }
}
