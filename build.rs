use std::process::Command;

/// Short commit of the checkout, if there is one.
fn git_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}

fn main() {
    for path in [".git/HEAD", ".git/refs"] {
        println!("cargo:rerun-if-changed={path}");
    }
    for var in ["VITRINA_API_BASE_URL", "VITRINA_REQUEST_TIMEOUT_MS"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let sha = git_sha().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=VITRINA_WEB_GIT_SHA={sha}");
}
