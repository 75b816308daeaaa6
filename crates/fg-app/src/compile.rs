//! Build a ready [`Application`] from a validated case spec.

use std::path::Path;

use fg_case::BoundaryCondition;
use fg_mesh::{BlockMesh, SnappyHexMesh};
use fg_project::schema::{CaseSpec, InternalValueDef, MeshDef, SolverDef};
use fg_project::validate_spec;

use crate::application::Application;
use crate::error::{AppError, AppResult};
use crate::ico_foam::IcoFoam;
use crate::simple_foam::SimpleFoam;
use crate::solver::Solver;

pub fn build_application(spec: &CaseSpec, case_dir: &Path) -> AppResult<Application> {
    validate_spec(spec)?;

    let solver = build_solver(spec)?;
    let mesher = build_mesher(&spec.mesh);
    let mut app = Application::new(case_dir, solver, Box::new(mesher));

    if let Some(end) = spec.control.end_time {
        app.control.end_time = Some(end);
    }
    if let Some(dt) = spec.control.delta_t {
        app.control.delta_t = dt;
    }
    if let Some(interval) = spec.control.write_interval {
        app.control.write_interval = interval;
    }
    if let Some(purge) = spec.control.purge_write {
        app.control.purge_write = purge;
    }

    app.set_gravity(spec.gravity);

    for field in &spec.fields {
        for condition in &field.conditions {
            let bc = match &condition.value {
                Some(value) => BoundaryCondition::with_value(&condition.kind, value.as_str()),
                None => BoundaryCondition::new(&condition.kind),
            };
            app.set_boundary(&field.name, &condition.boundary, bc)?;
        }
    }

    Ok(app)
}

fn build_solver(spec: &CaseSpec) -> AppResult<Box<dyn Solver>> {
    match spec.solver {
        SolverDef::IcoFoam { nu } => Ok(Box::new(IcoFoam {
            nu,
            p_init: scalar_init(spec, "p")?,
            u_init: vector_init(spec, "U")?,
        })),
        SolverDef::SimpleFoam { nu } => Ok(Box::new(SimpleFoam {
            nu,
            p_init: scalar_init(spec, "p")?,
            u_init: vector_init(spec, "U")?,
        })),
    }
}

fn build_mesher(mesh: &MeshDef) -> SnappyHexMesh {
    let MeshDef::SnappyHex {
        surface,
        location_in_mesh,
        block,
        boundaries,
    } = mesh;
    let boundary_types = boundaries
        .iter()
        .map(|b| (b.name.clone(), b.kind.clone()))
        .collect();
    SnappyHexMesh::new(
        boundary_types,
        surface.clone(),
        *location_in_mesh,
        BlockMesh {
            scale: block.scale,
            x_range: (block.x_range[0], block.x_range[1]),
            y_range: (block.y_range[0], block.y_range[1]),
            z_range: (block.z_range[0], block.z_range[1]),
            x_cells: block.cells[0],
            y_cells: block.cells[1],
            z_cells: block.cells[2],
        },
    )
}

fn scalar_init(spec: &CaseSpec, name: &str) -> AppResult<f64> {
    match spec.fields.iter().find(|f| f.name == name).map(|f| &f.internal) {
        Some(InternalValueDef::Scalar(value)) => Ok(*value),
        Some(InternalValueDef::Vector(_)) => Err(AppError::InvalidInternal {
            field: name.to_string(),
            reason: "expected a scalar internal value".to_string(),
        }),
        None => Ok(0.0),
    }
}

fn vector_init(spec: &CaseSpec, name: &str) -> AppResult<[f64; 3]> {
    match spec.fields.iter().find(|f| f.name == name).map(|f| &f.internal) {
        Some(InternalValueDef::Vector(value)) => Ok(*value),
        Some(InternalValueDef::Scalar(_)) => Err(AppError::InvalidInternal {
            field: name.to_string(),
            reason: "expected a vector internal value".to_string(),
        }),
        None => Ok([0.0, 0.0, 0.0]),
    }
}
