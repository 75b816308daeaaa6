use fg_case::{
    BoundaryCondition, Case, CaseError, ControlDict, Dimensions, StopAt, write_gravity,
    write_newtonian, write_scalar_field, write_system_dict, write_vector_field,
};
use fg_dict::{FoamDict, FoamValue};

fn fresh_case(tag: &str) -> Case {
    let root = std::env::temp_dir().join(format!("fg_writers_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    let case = Case::new(root);
    case.init().unwrap();
    case
}

fn read(case: &Case, relative: &str) -> String {
    std::fs::read_to_string(case.root().join(relative)).unwrap()
}

#[test]
fn control_dict_requires_end_time() {
    let case = fresh_case("control_missing_end");

    let mut control = ControlDict::transient("icoFoam");
    control.stop_at = StopAt::EndTime;
    control.end_time = None;

    let err = control.write(&case).unwrap_err();
    assert!(matches!(err, CaseError::MissingParameter { .. }));
    // The writer fails before producing a file.
    assert!(!case.root().join("system/controlDict").exists());

    case.remove().unwrap();
}

#[test]
fn control_dict_writes_single_end_time_entry() {
    let case = fresh_case("control_end");

    let mut control = ControlDict::transient("icoFoam");
    control.end_time = Some(2.5);
    control.write(&case).unwrap();

    let content = read(&case, "system/controlDict");
    assert!(content.starts_with("FoamFile{version 2.0;format ascii;class dictionary;"));
    assert_eq!(content.matches("endTime\t2.5;\n").count(), 1);
    assert!(content.contains("application\ticoFoam;\n"));
    // startFrom latestTime omits the startTime entry.
    assert!(!content.contains("startTime"));
    assert!(content.contains("runTimeModifiable\ttrue;\n"));

    case.remove().unwrap();
}

#[test]
fn steady_control_dict_writes_start_time() {
    let case = fresh_case("control_steady");

    ControlDict::steady("simpleFoam").write(&case).unwrap();

    let content = read(&case, "system/controlDict");
    assert!(content.contains("startFrom\tstartTime;\n"));
    assert!(content.contains("startTime\t0;\n"));
    assert!(content.contains("endTime\t1000;\n"));
    assert!(content.contains("purgeWrite\t1;\n"));

    case.remove().unwrap();
}

#[test]
fn system_dict_writes_blocks_in_order() {
    let case = fresh_case("system_dict");

    let mut schemes = FoamDict::new();
    schemes.set("ddtSchemes", FoamDict::from([("default", "Euler")]));
    schemes.set("gradSchemes", FoamDict::from([("default", "Gauss linear")]));
    write_system_dict(&case, "fvSchemes", &schemes).unwrap();

    let content = read(&case, "system/fvSchemes");
    let ddt = content.find("ddtSchemes{default Euler;}").unwrap();
    let grad = content.find("gradSchemes{default Gauss linear;}").unwrap();
    assert!(ddt < grad);
    assert!(content.contains("object fvSchemes;"));

    case.remove().unwrap();
}

#[test]
fn system_dict_scalar_entries_use_tabs() {
    let case = fresh_case("system_scalar");

    let mut dict = FoamDict::new();
    dict.set("mergeTolerance", FoamValue::Str("1e-6".to_string()));
    write_system_dict(&case, "customDict", &dict).unwrap();

    assert!(read(&case, "system/customDict").contains("mergeTolerance\t1e-6;\n"));

    case.remove().unwrap();
}

#[test]
fn transport_properties_declare_newtonian_model() {
    let case = fresh_case("transport");

    write_newtonian(&case, 1.5e-5).unwrap();

    let content = read(&case, "constant/transportProperties");
    assert!(content.contains("transportModel\tNewtonian;\n"));
    assert!(content.contains("nu\t0.000015;\n"));
    assert!(content.contains("location constant;"));

    case.remove().unwrap();
}

#[test]
fn gravity_renders_vector_tuple() {
    let case = fresh_case("gravity");

    write_gravity(&case, [0.0, -9.81, 0.0]).unwrap();

    let content = read(&case, "constant/g");
    assert!(content.contains("dimensions\t[0 1 -2 0 0 0 0];\n"));
    assert!(content.contains("g\t(0 -9.81 0);\n"));

    case.remove().unwrap();
}

#[test]
fn field_files_render_boundary_blocks_in_order() {
    let case = fresh_case("fields");

    let boundaries = vec![
        ("west".to_string(), BoundaryCondition::with_value("fixedValue", "uniform (1 0 0)")),
        ("east".to_string(), BoundaryCondition::new("zeroGradient")),
    ];
    write_vector_field(&case, "U", Dimensions::VELOCITY, [0.0, 0.0, 0.0], &boundaries).unwrap();
    write_scalar_field(
        &case,
        "p",
        Dimensions::KINEMATIC_PRESSURE,
        0.0,
        &[("west".to_string(), BoundaryCondition::new("zeroGradient"))],
    )
    .unwrap();

    let velocity = read(&case, "0/U");
    assert!(velocity.starts_with("FoamFile{version 2.0;format ascii;class volVectorField;object U;}\n"));
    assert!(velocity.contains("dimensions\t[0 1 -1 0 0 0 0];\n"));
    assert!(velocity.contains("internalField\tuniform (0 0 0);\n"));
    let west = velocity.find("west{type fixedValue;value uniform (1 0 0);}").unwrap();
    let east = velocity.find("east{type zeroGradient;}").unwrap();
    assert!(west < east);

    let pressure = read(&case, "0/p");
    assert!(pressure.contains("class volScalarField;"));
    assert!(pressure.contains("internalField\tuniform 0;\n"));

    case.remove().unwrap();
}
