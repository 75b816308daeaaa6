use fg_case::{Case, CaseError};

fn fresh_case(tag: &str) -> Case {
    let root = std::env::temp_dir().join(format!("fg_case_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    Case::new(root)
}

#[test]
fn init_creates_layout_once() {
    let case = fresh_case("init");
    case.init().unwrap();

    assert!(case.zero_dir().is_dir());
    assert!(case.constant_dir().is_dir());
    assert!(case.system_dir().is_dir());

    // constant/ and system/ tolerate re-creation; the time-zero directory
    // strictly rejects it.
    let err = case.init().unwrap_err();
    assert!(matches!(err, CaseError::AlreadyInitialized { .. }));

    case.remove().unwrap();
}

#[test]
fn ensure_layout_is_idempotent() {
    let case = fresh_case("ensure");
    case.ensure_layout().unwrap();
    case.ensure_layout().unwrap();
    assert!(case.tri_surface_dir().is_dir());
    case.remove().unwrap();
}

#[test]
fn remove_tolerates_absent_tree() {
    let case = fresh_case("remove");
    case.remove().unwrap();
    case.remove().unwrap();
}

#[test]
fn import_surface_copies_into_tri_surface() {
    let case = fresh_case("surface");
    case.init().unwrap();

    let stl = std::env::temp_dir().join(format!("fg_case_surface_{}.stl", std::process::id()));
    std::fs::write(&stl, "solid demo\nendsolid demo\n").unwrap();

    let dest = case.import_surface(&stl).unwrap();
    assert!(dest.is_file());
    assert_eq!(dest.parent().unwrap(), case.tri_surface_dir());

    std::fs::remove_file(stl).unwrap();
    case.remove().unwrap();
}

#[test]
fn import_surface_rejects_missing_file() {
    let case = fresh_case("surface_missing");
    case.init().unwrap();

    let err = case
        .import_surface(std::path::Path::new("/nonexistent/input.stl"))
        .unwrap_err();
    assert!(matches!(err, CaseError::SurfaceNotFound { .. }));

    case.remove().unwrap();
}
