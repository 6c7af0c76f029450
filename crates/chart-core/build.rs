// File: crates/chart-core/build.rs
// Summary: Links Windows system libraries required by the Skia raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
