use chrono::Datelike;

fn main() {
    // The footer renders this on both server and client, so it must not come from a runtime clock
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
