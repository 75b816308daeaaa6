//! Blocking invocation of the external toolchain.

use std::process::{Command, Stdio};

use crate::case::Case;
use crate::error::{CaseError, CaseResult};

/// Run `program -case <case-root> [extra args]` and wait for it to exit.
///
/// Standard output is suppressed unless `verbose` is set. There is no
/// timeout or retry; a hung tool hangs the caller. A non-zero exit status
/// surfaces as [`CaseError::ToolFailed`].
pub fn run_case_tool(
    program: &str,
    extra_args: &[&str],
    case: &Case,
    verbose: bool,
) -> CaseResult<()> {
    tracing::debug!(program, case = %case.root().display(), "invoking external tool");

    let mut command = Command::new(program);
    command.arg("-case").arg(case.root());
    command.args(extra_args);
    if !verbose {
        command.stdout(Stdio::null());
    }

    let status = command.status()?;
    if !status.success() {
        return Err(CaseError::ToolFailed {
            program: program.to_string(),
            status,
        });
    }
    Ok(())
}
