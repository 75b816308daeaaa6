//! Steady incompressible solver (`simpleFoam`).

use fg_case::{Case, ControlDict, Dimensions, write_newtonian, write_scalar_field, write_vector_field};
use fg_dict::FoamDict;

use crate::application::ResolvedBoundaries;
use crate::error::AppResult;
use crate::solver::{FieldKind, FieldSpec, Solver};

/// Steady-state incompressible SIMPLE solver. Same field set as the
/// transient variant; differs in control defaults, schemes, and tolerances.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleFoam {
    /// Kinematic viscosity, m²/s.
    pub nu: f64,
    pub p_init: f64,
    pub u_init: [f64; 3],
}

impl SimpleFoam {
    pub fn new(nu: f64) -> Self {
        Self { nu, ..Self::default() }
    }
}

impl Default for SimpleFoam {
    fn default() -> Self {
        Self {
            nu: 1.5e-5,
            p_init: 0.0,
            u_init: [0.0, 0.0, 0.0],
        }
    }
}

impl Solver for SimpleFoam {
    fn application(&self) -> &str {
        "simpleFoam"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec {
                name: "p",
                kind: FieldKind::Scalar,
                dimensions: Dimensions::KINEMATIC_PRESSURE,
            },
            FieldSpec {
                name: "U",
                kind: FieldKind::Vector,
                dimensions: Dimensions::VELOCITY,
            },
        ]
    }

    fn default_control(&self) -> ControlDict {
        ControlDict::steady("simpleFoam")
    }

    fn default_schemes(&self) -> FoamDict {
        let mut schemes = FoamDict::new();
        schemes.set("ddtSchemes", FoamDict::from([("default", "steadyState")]));
        schemes.set("gradSchemes", FoamDict::from([("default", "Gauss linear")]));
        schemes.set(
            "divSchemes",
            FoamDict::from([("default", "none"), ("div(phi,U)", "bounded Gauss upwind")]),
        );
        schemes.set(
            "laplacianSchemes",
            FoamDict::from([("default", "Gauss linear corrected")]),
        );
        schemes.set(
            "interpolationSchemes",
            FoamDict::from([("default", "linear")]),
        );
        schemes.set("snGradSchemes", FoamDict::from([("default", "corrected")]));
        schemes
    }

    fn default_solution(&self) -> FoamDict {
        let mut p = FoamDict::new();
        p.set("solver", "GAMG");
        p.set("smoother", "GaussSeidel");
        p.set("tolerance", 1e-6);
        p.set("relTol", 0.1);

        let mut u = FoamDict::new();
        u.set("solver", "smoothSolver");
        u.set("smoother", "symGaussSeidel");
        u.set("tolerance", 1e-5);
        u.set("relTol", 0.1);

        let mut solvers = FoamDict::new();
        solvers.set("p", p);
        solvers.set("U", u);

        let mut simple = FoamDict::new();
        simple.set("nNonOrthogonalCorrectors", 2);

        let mut relaxation = FoamDict::new();
        relaxation.set("p", 0.3);
        relaxation.set("U", 0.7);

        let mut solution = FoamDict::new();
        solution.set("solvers", solvers);
        solution.set("SIMPLE", simple);
        solution.set("relaxationFactors", relaxation);
        solution
    }

    fn write_transport(&self, case: &Case) -> AppResult<()> {
        write_newtonian(case, self.nu)?;
        Ok(())
    }

    fn write_fields(&self, case: &Case, boundaries: &ResolvedBoundaries) -> AppResult<()> {
        write_scalar_field(
            case,
            "p",
            Dimensions::KINEMATIC_PRESSURE,
            self.p_init,
            boundaries.field("p")?,
        )?;
        write_vector_field(
            case,
            "U",
            Dimensions::VELOCITY,
            self.u_init,
            boundaries.field("U")?,
        )?;
        Ok(())
    }
}
