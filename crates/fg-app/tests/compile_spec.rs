//! Compile a declarative case spec into a ready application.

use fg_app::{AppError, build_application};
use fg_project::schema::CaseSpec;

fn spec_yaml() -> &'static str {
    r#"
version: 1
name: cylinder
solver:
  type: IcoFoam
  nu: 1.0e-6
control:
  end_time: 2.0
  delta_t: 0.05
mesh:
  type: SnappyHex
  surface: ./cylinder.stl
  location_in_mesh: [39, 0, 5.5]
  block:
    x_range: [-10, 40]
    y_range: [-10, 10]
    z_range: [5, 6]
    cells: [250, 100, 1]
  boundaries:
    - { name: top, type: empty }
    - { name: bottom, type: empty }
    - { name: north, type: wall }
    - { name: south, type: wall }
    - { name: east, type: patch }
    - { name: west, type: patch }
    - { name: cyl, type: wall }
fields:
  - name: p
    internal: 0
    conditions:
      - { boundary: top, type: empty }
      - { boundary: bottom, type: empty }
      - { boundary: north, type: zeroGradient }
      - { boundary: south, type: zeroGradient }
      - { boundary: east, type: fixedValue, value: uniform 0 }
      - { boundary: west, type: zeroGradient }
      - { boundary: cylinder_cyl, type: zeroGradient }
  - name: U
    internal: [0, 0, 0]
    conditions:
      - { boundary: top, type: empty }
      - { boundary: bottom, type: empty }
      - { boundary: north, type: noSlip }
      - { boundary: south, type: noSlip }
      - { boundary: east, type: zeroGradient }
      - { boundary: west, type: fixedValue, value: uniform (1 0 0) }
      - { boundary: cylinder_cyl, type: noSlip }
gravity: [0, -9.81, 0]
"#
}

fn fresh_root(tag: &str) -> std::path::PathBuf {
    let root = std::env::temp_dir().join(format!("fg_compile_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    root
}

#[test]
fn compiled_application_sets_up_a_complete_case() {
    let spec: CaseSpec = serde_yaml::from_str(spec_yaml()).unwrap();
    let root = fresh_root("setup");

    let app = build_application(&spec, &root).unwrap();
    assert_eq!(app.application(), "icoFoam");
    app.setup().unwrap();

    let control = std::fs::read_to_string(root.join("system/controlDict")).unwrap();
    assert!(control.contains("endTime\t2;\n"));
    assert!(control.contains("deltaT\t0.05;\n"));

    let transport = std::fs::read_to_string(root.join("constant/transportProperties")).unwrap();
    assert!(transport.contains("nu\t0.000001;\n"));

    let gravity = std::fs::read_to_string(root.join("constant/g")).unwrap();
    assert!(gravity.contains("g\t(0 -9.81 0);\n"));

    let velocity = std::fs::read_to_string(root.join("0/U")).unwrap();
    assert!(velocity.contains("west{type fixedValue;value uniform (1 0 0);}"));
    assert!(velocity.contains("cylinder_cyl{type noSlip;}"));

    app.case().remove().unwrap();
}

#[test]
fn compile_rejects_mismatched_internal_value() {
    let mut spec: CaseSpec = serde_yaml::from_str(spec_yaml()).unwrap();
    // Velocity is a vector field; a scalar internal value is a spec error.
    spec.fields[1].internal = fg_project::schema::InternalValueDef::Scalar(1.0);

    let err = build_application(&spec, &fresh_root("mismatch")).unwrap_err();
    assert!(matches!(err, AppError::InvalidInternal { .. }));
}

#[test]
fn compile_rejects_invalid_spec() {
    let mut spec: CaseSpec = serde_yaml::from_str(spec_yaml()).unwrap();
    let fg_project::schema::MeshDef::SnappyHex { ref mut boundaries, .. } = spec.mesh;
    boundaries.retain(|b| b.name != "south");

    let err = build_application(&spec, &fresh_root("invalid")).unwrap_err();
    assert!(matches!(err, AppError::Spec(_)));
}
