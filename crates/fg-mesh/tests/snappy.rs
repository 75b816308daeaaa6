use fg_case::Case;
use fg_mesh::{BlockMesh, MeshError, Mesher, SnappyHexMesh};

fn demo_boundaries() -> Vec<(String, String)> {
    [
        ("top", "empty"),
        ("bottom", "empty"),
        ("north", "wall"),
        ("south", "wall"),
        ("east", "patch"),
        ("west", "patch"),
        ("cyl", "wall"),
    ]
    .iter()
    .map(|(n, t)| (n.to_string(), t.to_string()))
    .collect()
}

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

fn fresh_case(tag: &str) -> (Case, std::path::PathBuf) {
    let root = std::env::temp_dir().join(format!("fg_snappy_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    let case = Case::new(root);
    case.init().unwrap();

    let stl = std::env::temp_dir().join(format!("fg_snappy_{}_{}.stl", tag, std::process::id()));
    std::fs::write(&stl, "solid cyl\nendsolid cyl\n").unwrap();
    (case, stl)
}

#[test]
fn boundary_names_synthesize_surface_regions() {
    let mesher = SnappyHexMesh::new(
        demo_boundaries(),
        "./cylinder.stl",
        [39.0, 0.0, 5.5],
        demo_block(),
    );
    assert_eq!(
        mesher.boundary_names(),
        vec!["top", "bottom", "north", "south", "east", "west", "cylinder_cyl"]
    );
}

#[test]
fn write_emits_all_three_control_files() {
    let (case, stl) = fresh_case("write");
    let mesher = SnappyHexMesh::new(demo_boundaries(), &stl, [39.0, 0.0, 5.5], demo_block());

    mesher.write(&case).unwrap();

    assert!(case.root().join("system/blockMeshDict").is_file());
    assert!(case.root().join("system/meshQualityDict").is_file());
    assert!(case.root().join("system/snappyHexMeshDict").is_file());
    assert!(case.tri_surface_dir().join(stl.file_name().unwrap()).is_file());

    let snappy = std::fs::read_to_string(case.root().join("system/snappyHexMeshDict")).unwrap();
    assert!(snappy.contains("castellatedMesh\ttrue;\n"));
    assert!(snappy.contains("snap\ttrue;\n"));
    assert!(snappy.contains("addLayers\tfalse;\n"));
    assert!(snappy.contains("type triSurfaceMesh;"));
    assert!(snappy.contains("locationInMesh (39 0 5.5);"));
    assert!(snappy.contains("cyl{level (0 0);patchInfo{type wall;}}"));
    assert!(snappy.contains("#include \"meshQualityDict\"\n"));
    assert!(snappy.contains("mergeTolerance\t1e-6;\n"));

    let quality = std::fs::read_to_string(case.root().join("system/meshQualityDict")).unwrap();
    assert!(quality.contains("#includeEtc \"caseDicts/meshQualityDict\"\n"));
    assert!(quality.contains("minFaceWeight\t0.02;\n"));
    // This dictionary declares no location entry.
    assert!(!quality.contains("location"));

    // write() is repeatable.
    mesher.write(&case).unwrap();

    std::fs::remove_file(stl).unwrap();
    case.remove().unwrap();
}

#[test]
fn clean_reports_unsupported() {
    let (case, stl) = fresh_case("clean");
    let mesher = SnappyHexMesh::new(demo_boundaries(), &stl, [39.0, 0.0, 5.5], demo_block());

    let err = mesher.clean(&case).unwrap_err();
    assert!(matches!(err, MeshError::Unsupported { what: "clean" }));

    std::fs::remove_file(stl).unwrap();
    case.remove().unwrap();
}
