use fg_case::Case;
use fg_mesh::{BlockMesh, CANONICAL_FACES, MeshError};

fn demo_block() -> BlockMesh {
    BlockMesh {
        scale: 1.0,
        x_range: (-10.0, 40.0),
        y_range: (-10.0, 10.0),
        z_range: (5.0, 6.0),
        x_cells: 250,
        y_cells: 100,
        z_cells: 1,
    }
}

fn all_faces() -> Vec<(String, String)> {
    CANONICAL_FACES
        .iter()
        .map(|face| (face.to_string(), "wall".to_string()))
        .collect()
}

fn fresh_case(tag: &str) -> Case {
    let root = std::env::temp_dir().join(format!("fg_block_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    let case = Case::new(root);
    case.init().unwrap();
    case
}

#[test]
fn corner_vertices_follow_axis_ranges() {
    let vertices = demo_block().vertices();
    assert_eq!(vertices.len(), 8);
    assert_eq!(vertices[0], [-10.0, -10.0, 5.0]);
    assert_eq!(vertices[6], [40.0, 10.0, 6.0]);
}

#[test]
fn dict_contains_eight_vertices_and_one_block() {
    let case = fresh_case("write");
    demo_block().write(&case, &all_faces()).unwrap();

    let content = std::fs::read_to_string(case.root().join("system/blockMeshDict")).unwrap();
    assert!(content.contains("object blockMeshDict;"));
    assert!(content.contains("scale\t1;\n"));
    assert!(content.contains(
        "vertices ( (-10 -10 5) (40 -10 5) (40 10 5) (-10 10 5) (-10 -10 6) (40 -10 6) (40 10 6) (-10 10 6) );\n"
    ));
    assert!(content.contains("blocks ( hex (0 1 2 3 4 5 6 7) (250 100 1) simpleGrading (1 1 1) );\n"));
    assert!(content.contains("edges ( );\n"));
    assert!(content.contains("mergePatchPairs ( );\n"));
    assert!(content.contains("top{type\twall;faces ( (4 5 6 7) );}\n"));
    assert!(content.contains("bottom{type\twall;faces ( (0 3 2 1) );}\n"));

    case.remove().unwrap();
}

#[test]
fn missing_canonical_face_is_rejected() {
    let case = fresh_case("missing_face");

    let mut faces = all_faces();
    faces.retain(|(name, _)| name != "west");
    let err = demo_block().write(&case, &faces).unwrap_err();
    assert!(matches!(err, MeshError::MissingFace { face: "west" }));
    assert!(!case.root().join("system/blockMeshDict").exists());

    case.remove().unwrap();
}

#[test]
fn unknown_face_is_rejected() {
    let case = fresh_case("unknown_face");

    let mut faces = all_faces();
    faces.push(("lid".to_string(), "wall".to_string()));
    let err = demo_block().write(&case, &faces).unwrap_err();
    assert!(matches!(err, MeshError::UnknownFace { .. }));
    assert!(!case.root().join("system/blockMeshDict").exists());

    case.remove().unwrap();
}
