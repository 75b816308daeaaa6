//! Application orchestration: directories, configuration files, external runs.

use std::path::PathBuf;

use fg_case::{
    BoundaryCondition, Case, ControlDict, run_case_tool, write_gravity, write_system_dict,
};
use fg_dict::FoamDict;
use fg_mesh::Mesher;

use crate::error::{AppError, AppResult};
use crate::solver::{FieldSpec, Solver};

#[derive(Debug, Clone, PartialEq)]
enum BcEntry {
    Unset,
    Set(BoundaryCondition),
}

/// Explicit boundary-condition state keyed by (field, boundary), seeded
/// `Unset` for every declared boundary of every declared field. Setting an
/// undeclared pair fails.
#[derive(Debug, Clone)]
pub struct BoundaryTable {
    // Field-major; boundary order follows the mesher's declared order.
    entries: Vec<(String, String, BcEntry)>,
}

impl BoundaryTable {
    fn seed(fields: &[FieldSpec], boundaries: &[String]) -> Self {
        let mut entries = Vec::with_capacity(fields.len() * boundaries.len());
        for field in fields {
            for boundary in boundaries {
                entries.push((field.name.to_string(), boundary.clone(), BcEntry::Unset));
            }
        }
        Self { entries }
    }

    fn set(
        &mut self,
        field: &str,
        boundary: &str,
        bc: BoundaryCondition,
    ) -> AppResult<()> {
        if !self.entries.iter().any(|(f, _, _)| f == field) {
            return Err(AppError::UnknownField {
                field: field.to_string(),
            });
        }
        let slot = self
            .entries
            .iter_mut()
            .find(|(f, b, _)| f == field && b == boundary)
            .ok_or_else(|| AppError::UnknownBoundary {
                field: field.to_string(),
                boundary: boundary.to_string(),
            })?;
        slot.2 = BcEntry::Set(bc);
        Ok(())
    }

    fn resolved(&self) -> AppResult<ResolvedBoundaries> {
        let mut per_field: Vec<(String, Vec<(String, BoundaryCondition)>)> = Vec::new();
        for (field, boundary, entry) in &self.entries {
            let bc = match entry {
                BcEntry::Set(bc) => bc.clone(),
                BcEntry::Unset => {
                    return Err(AppError::UnsetBoundary {
                        field: field.clone(),
                        boundary: boundary.clone(),
                    });
                }
            };
            match per_field.iter_mut().find(|(name, _)| name == field) {
                Some((_, list)) => list.push((boundary.clone(), bc)),
                None => per_field.push((field.clone(), vec![(boundary.clone(), bc)])),
            }
        }
        Ok(ResolvedBoundaries { per_field })
    }
}

/// Per-field boundary tables with every entry resolved.
#[derive(Debug, Clone)]
pub struct ResolvedBoundaries {
    per_field: Vec<(String, Vec<(String, BoundaryCondition)>)>,
}

impl ResolvedBoundaries {
    pub fn field(&self, name: &str) -> AppResult<&[(String, BoundaryCondition)]> {
        self.per_field
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, list)| list.as_slice())
            .ok_or_else(|| AppError::UnknownField {
                field: name.to_string(),
            })
    }
}

/// A solver application bound to one case location and one mesher.
pub struct Application {
    case: Case,
    solver: Box<dyn Solver>,
    mesher: Box<dyn Mesher>,
    pub control: ControlDict,
    pub schemes: FoamDict,
    pub solution: FoamDict,
    gravity: Option<[f64; 3]>,
    boundaries: BoundaryTable,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("case", &self.case)
            .field("solver", &self.solver.application())
            .field("mesher", &self.mesher.boundary_names())
            .field("control", &self.control)
            .field("schemes", &self.schemes)
            .field("solution", &self.solution)
            .field("gravity", &self.gravity)
            .field("boundaries", &self.boundaries)
            .finish()
    }
}

impl Application {
    pub fn new(
        case_dir: impl Into<PathBuf>,
        solver: Box<dyn Solver>,
        mesher: Box<dyn Mesher>,
    ) -> Self {
        let control = solver.default_control();
        let schemes = solver.default_schemes();
        let solution = solver.default_solution();
        let boundaries = BoundaryTable::seed(&solver.fields(), &mesher.boundary_names());
        Self {
            case: Case::new(case_dir),
            solver,
            mesher,
            control,
            schemes,
            solution,
            gravity: None,
            boundaries,
        }
    }

    pub fn case(&self) -> &Case {
        &self.case
    }

    pub fn application(&self) -> &str {
        self.solver.application()
    }

    pub fn boundary_names(&self) -> Vec<String> {
        self.mesher.boundary_names()
    }

    pub fn set_gravity(&mut self, gravity: Option<[f64; 3]>) {
        self.gravity = gravity;
    }

    /// Set one (field, boundary) condition. Mutating one pair never affects
    /// others; undeclared names are rejected.
    pub fn set_boundary(
        &mut self,
        field: &str,
        boundary: &str,
        bc: BoundaryCondition,
    ) -> AppResult<()> {
        self.boundaries.set(field, boundary, bc)
    }

    /// Create the case directories and write every configuration file, in a
    /// fixed order. Fails outright when the time-zero directory pre-exists;
    /// there is no rollback on a later failure.
    pub fn setup(&self) -> AppResult<()> {
        tracing::info!(
            case = %self.case.root().display(),
            application = self.solver.application(),
            "setting up case"
        );
        self.case.init()?;
        write_system_dict(&self.case, "fvSchemes", &self.schemes)?;
        write_system_dict(&self.case, "fvSolution", &self.solution)?;
        self.control.write(&self.case)?;
        self.solver.write_transport(&self.case)?;
        if let Some(g) = self.gravity {
            write_gravity(&self.case, g)?;
        }
        let resolved = self.boundaries.resolved()?;
        self.solver.write_fields(&self.case, &resolved)?;
        Ok(())
    }

    /// Delegate mesh generation entirely to the held mesher.
    pub fn create_mesh(&self, verbose: bool) -> AppResult<()> {
        self.mesher.generate(&self.case, verbose)?;
        Ok(())
    }

    /// Invoke the external solver against the case, blocking until it
    /// exits. Console output is streamed only when `show_log` is set.
    pub fn run(&self, show_log: bool) -> AppResult<()> {
        tracing::info!(
            case = %self.case.root().display(),
            application = self.solver.application(),
            "running solver"
        );
        run_case_tool(self.solver.application(), &[], &self.case, show_log)?;
        Ok(())
    }
}
