fn main() {
    // 1. If MDVIEW_BUILD_VERSION is already set (e.g., by a packager), use it as-is
    println!("cargo:rerun-if-env-changed=MDVIEW_BUILD_VERSION");
    if let Ok(v) = std::env::var("MDVIEW_BUILD_VERSION") {
        if !v.is_empty() {
            println!("cargo:rustc-env=MDVIEW_BUILD_VERSION={v}");
            return;
        }
    }

    // 2. Try git describe
    if let Ok(output) = std::process::Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
    {
        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            // Strip 'v' prefix (e.g., "v0.1.0" -> "0.1.0")
            let version = version.strip_prefix('v').unwrap_or(&version);
            if !version.is_empty() {
                println!("cargo:rustc-env=MDVIEW_BUILD_VERSION={version}");
                println!("cargo:rerun-if-changed=.git/HEAD");
                println!("cargo:rerun-if-changed=.git/refs/tags");
                return;
            }
        }
    }

    // 3. Fallback to Cargo.toml version
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    println!("cargo:rustc-env=MDVIEW_BUILD_VERSION={version}");
}
