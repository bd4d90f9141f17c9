// File: crates/chart-render-skia/build.rs
// Summary: Link Windows system libraries needed by Skia/ICU when targeting Windows.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // cfg!(target_os) here would describe the build host, not the target.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
