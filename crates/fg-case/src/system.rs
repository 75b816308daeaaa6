//! Generic writer for system dictionaries.
//!
//! Numerical-scheme (`fvSchemes`) and solver-tolerance (`fvSolution`) files
//! share the same shape: a header followed by one block per top-level entry,
//! in insertion order.

use fg_dict::{FoamDict, FoamHeader, FoamValue, write_block, write_entry};

use crate::case::Case;
use crate::error::CaseResult;

pub fn write_system_dict(case: &Case, object: &str, dict: &FoamDict) -> CaseResult<()> {
    let mut body = String::new();
    for (key, value) in dict.iter() {
        match value {
            FoamValue::Dict(sub) => write_block(&mut body, key, sub),
            scalar => write_entry(&mut body, key, scalar),
        }
    }
    case.write_dict(
        format!("system/{object}"),
        &FoamHeader::dictionary("system", object),
        &body,
    )
}
