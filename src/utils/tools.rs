use log::info;

/// Versions des crates cœur, injectées par `build.rs` (absentes si
/// `cargo metadata` n'a pas pu tourner).
pub fn core_dependency_versions() -> [(&'static str, &'static str); 4] {
    [
        ("GLFW", option_env!("DEP_VERSION_GLFW").unwrap_or("Unknown")),
        ("GL", option_env!("DEP_VERSION_GL").unwrap_or("Unknown")),
        ("GLAM", option_env!("DEP_VERSION_GLAM").unwrap_or("Unknown")),
        ("RAND", option_env!("DEP_VERSION_RAND").unwrap_or("Unknown")),
    ]
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    for (name, version) in core_dependency_versions() {
        info!("  {:<4} version: {}", name, version);
    }
}
