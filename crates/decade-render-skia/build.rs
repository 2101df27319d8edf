// File: crates/decade-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's font/ICU code needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ...
        println!("cargo:rustc-link-lib=advapi32");
    }
}
