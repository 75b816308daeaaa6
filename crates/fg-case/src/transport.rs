//! Transport-property writer (`constant/transportProperties`).

use fg_dict::{FoamHeader, write_entry};

use crate::case::Case;
use crate::error::CaseResult;

/// Newtonian transport model with kinematic viscosity `nu` in m²/s.
pub fn write_newtonian(case: &Case, nu: f64) -> CaseResult<()> {
    let mut body = String::new();
    write_entry(&mut body, "transportModel", "Newtonian");
    write_entry(&mut body, "nu", nu);
    case.write_dict(
        "constant/transportProperties",
        &FoamHeader::dictionary("constant", "transportProperties"),
        &body,
    )
}
