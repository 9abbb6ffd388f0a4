use std::path::PathBuf;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn main() {
    let version = git(&["describe", "--always", "--dirty"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=CHITRALEKHAN_GIT_HASH={version}");

    // Rebuild when HEAD moves; outside a checkout only build.rs itself matters.
    match git(&["rev-parse", "--git-dir"]) {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            for name in ["HEAD", "index", "packed-refs"] {
                let path = dir.join(name);
                if path.exists() {
                    println!("cargo:rerun-if-changed={}", path.display());
                }
            }
        }
        None => println!("cargo:rerun-if-changed=build.rs"),
    }
}
