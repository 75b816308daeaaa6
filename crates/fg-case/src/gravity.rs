//! Gravity writer (`constant/g`).

use fg_dict::{FoamHeader, render_tuple, write_entry};

use crate::case::Case;
use crate::error::CaseResult;
use crate::fields::Dimensions;

/// Write the gravitational acceleration vector in m/s².
pub fn write_gravity(case: &Case, g: [f64; 3]) -> CaseResult<()> {
    let mut body = String::new();
    write_entry(&mut body, "dimensions", Dimensions::ACCELERATION);
    write_entry(&mut body, "g", render_tuple(&g));
    case.write_dict(
        "constant/g",
        &FoamHeader::dictionary("constant", "g"),
        &body,
    )
}
