// build.rs
use cargo_metadata::MetadataCommand;
use std::collections::HashSet;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Récupère la metadata du projet
    let metadata = match MetadataCommand::new().exec() {
        Ok(metadata) => metadata,
        Err(err) => {
            println!("cargo:warning=⚪ cargo metadata indisponible ({err}), versions inconnues");
            return;
        }
    };

    // Ensemble des crates qui nous intéressent
    let tracked = HashSet::from(["glfw", "gl", "glam", "rand"]);

    for package in &metadata.packages {
        if tracked.contains(package.name.as_str()) {
            println!(
                "cargo:rustc-env=DEP_VERSION_{}={}",
                package.name.to_uppercase(),
                package.version
            );
        }
    }
}
