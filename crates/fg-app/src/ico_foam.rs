//! Transient incompressible solver (`icoFoam`).

use fg_case::{Case, ControlDict, Dimensions, write_newtonian, write_scalar_field, write_vector_field};
use fg_dict::FoamDict;

use crate::application::ResolvedBoundaries;
use crate::error::AppResult;
use crate::solver::{FieldKind, FieldSpec, Solver};

/// Laminar incompressible PISO solver. Owns the kinematic pressure `p` and
/// velocity `U` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct IcoFoam {
    /// Kinematic viscosity, m²/s.
    pub nu: f64,
    pub p_init: f64,
    pub u_init: [f64; 3],
}

impl IcoFoam {
    pub fn new(nu: f64) -> Self {
        Self { nu, ..Self::default() }
    }
}

impl Default for IcoFoam {
    fn default() -> Self {
        Self {
            nu: 1.5e-5,
            p_init: 0.0,
            u_init: [0.0, 0.0, 0.0],
        }
    }
}

impl Solver for IcoFoam {
    fn application(&self) -> &str {
        "icoFoam"
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
        ControlDict::transient("icoFoam")
    }

    fn default_schemes(&self) -> FoamDict {
        let mut schemes = FoamDict::new();
        schemes.set("ddtSchemes", FoamDict::from([("default", "Euler")]));
        schemes.set("gradSchemes", FoamDict::from([("default", "Gauss linear")]));
        schemes.set(
            "divSchemes",
            FoamDict::from([("default", "none"), ("div(phi,U)", "Gauss limitedLinearV 1")]),
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
        p.set("solver", "PCG");
        p.set("preconditioner", "DIC");
        p.set("tolerance", 1e-6);
        p.set("relTol", 0.05);

        let mut p_final = FoamDict::new();
        p_final.set("$p", "");
        p_final.set("relTol", 0.0);

        let mut u = FoamDict::new();
        u.set("solver", "smoothSolver");
        u.set("smoother", "symGaussSeidel");
        u.set("tolerance", 1e-5);
        u.set("relTol", 0.0);

        let mut solvers = FoamDict::new();
        solvers.set("p", p);
        solvers.set("pFinal", p_final);
        solvers.set("U", u);

        let mut piso = FoamDict::new();
        piso.set("nCorrectors", 2);
        piso.set("nNonOrthogonalCorrectors", 2);

        let mut solution = FoamDict::new();
        solution.set("solvers", solvers);
        solution.set("PISO", piso);
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
