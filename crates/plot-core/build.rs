// File: crates/plot-core/build.rs
// Summary: Links the extra Windows system library that Skia's font/ICU code expects.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends live here.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
