// boot/build.rs
use std::path::PathBuf;

fn main() {
    let target = std::env::var("TARGET").unwrap_or_default();

    // Boot arguments are baked into the image; see boot_lib::config.
    println!("cargo:rerun-if-env-changed=BOOT_ARGS");
    if let Ok(args) = std::env::var("BOOT_ARGS") {
        println!("cargo:rustc-env=BOOT_ARGS={}", args);
    }

    // Only use linker script for riscv target (the boot image), not for host tests
    if target.contains("riscv") {
        // Rebuild if the script changes
        println!("cargo:rerun-if-changed=memory.ld");

        // Absolute path to memory.ld (robust across cargo working dirs)
        let script = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap()).join("memory.ld");

        // Inject the linker arg for THIS crate's binary
        println!("cargo:rustc-link-arg-bins=-T{}", script.display());
        println!("cargo:rustc-link-arg-bins=-Map=boot.map");
    }
}
