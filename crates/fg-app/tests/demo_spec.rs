//! Smoke test against the demo spec shipped with the repository.

use std::path::PathBuf;

use fg_app::build_application;

#[test]
fn demo_spec_compiles_and_sets_up() {
    let mut spec_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    spec_path.pop(); // go to crates
    spec_path.pop(); // go to repo root
    spec_path.push("demos");
    spec_path.push("cylinder.yaml");

    if !spec_path.exists() {
        eprintln!("Skipping test: demo spec not found at {:?}", spec_path);
        return;
    }

    let spec = fg_project::load_yaml(&spec_path).expect("Failed to load demo spec");

    let root = std::env::temp_dir().join(format!("fg_demo_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&root);

    let app = build_application(&spec, &root).expect("Compile should succeed");
    app.setup().expect("Setup should succeed");

    assert!(root.join("system/controlDict").is_file());
    assert!(root.join("system/fvSchemes").is_file());
    assert!(root.join("system/fvSolution").is_file());
    assert!(root.join("0/p").is_file());
    assert!(root.join("0/U").is_file());

    app.case().remove().unwrap();
}
