//! Fetch a prebuilt pdfium into `vendor/pdfium` so the viewer can bind it at
//! runtime. Failure only warns: the viewer then falls back to a system pdfium.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PDFIUM_VERSION: &str = "chromium/7543";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap_or_default();
    let Some((platform, arch, lib_name)) = platform_for(&target) else {
        println!("cargo:warning=No prebuilt pdfium for target {}", target);
        return;
    };

    let Some(pdfium_dir) = vendor_dir() else {
        println!("cargo:warning=Could not locate workspace root for vendor/pdfium");
        return;
    };
    let lib_path = pdfium_dir.join("lib").join(lib_name);
    println!("cargo:rerun-if-changed={}", lib_path.display());

    if lib_path.exists() {
        return;
    }

    if let Err(e) = install(platform, arch, &pdfium_dir, &lib_path) {
        println!(
            "cargo:warning=Skipping pdfium download ({}); the viewer will look for a system pdfium",
            e
        );
    }
}

fn platform_for(target: &str) -> Option<(&'static str, &'static str, &'static str)> {
    let arch = if target.contains("aarch64") {
        "arm64"
    } else if target.contains("i686") {
        "x86"
    } else {
        "x64"
    };

    if target.contains("apple") {
        Some(("mac", arch, "libpdfium.dylib"))
    } else if target.contains("linux") {
        Some(("linux", arch, "libpdfium.so"))
    } else if target.contains("windows") {
        Some(("win", arch, "pdfium.dll"))
    } else {
        None
    }
}

fn vendor_dir() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").ok()?);
    let workspace_root = manifest_dir.parent()?.parent()?;
    Some(workspace_root.join("vendor").join("pdfium"))
}

fn install(platform: &str, arch: &str, pdfium_dir: &Path, lib_path: &Path) -> Result<(), String> {
    let url = format!(
        "https://github.com/bblanchon/pdfium-binaries/releases/download/{}/pdfium-{}-{}.tgz",
        PDFIUM_VERSION, platform, arch
    );
    println!("cargo:warning=Downloading PDFium from {}", url);

    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(120))
        .build();
    let response = agent
        .get(&url)
        .call()
        .map_err(|e| format!("download failed: {}", e))?;

    fs::create_dir_all(pdfium_dir).map_err(|e| e.to_string())?;
    let tar = flate2::read::GzDecoder::new(response.into_reader());
    tar::Archive::new(tar)
        .unpack(pdfium_dir)
        .map_err(|e| format!("extract failed: {}", e))?;

    if !lib_path.exists() {
        return Err(format!("{} missing after extraction", lib_path.display()));
    }

    fix_library_install_name(lib_path, platform);
    println!("cargo:warning=PDFium installed to {}", pdfium_dir.display());
    Ok(())
}

fn fix_library_install_name(lib_path: &Path, platform: &str) {
    if platform != "mac" {
        return;
    }

    // On macOS, fix the install name to use @rpath
    let output = std::process::Command::new("install_name_tool")
        .arg("-id")
        .arg("@rpath/libpdfium.dylib")
        .arg(lib_path)
        .output();

    if let Ok(result) = output {
        if !result.status.success() {
            println!(
                "cargo:warning=Failed to fix install name: {}",
                String::from_utf8_lossy(&result.stderr)
            );
        }
    }
}
