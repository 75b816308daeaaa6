//! Run-control dictionary writer (`system/controlDict`).

use fg_dict::{FoamHeader, write_entry};

use crate::case::Case;
use crate::error::{CaseError, CaseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartFrom {
    StartTime,
    LatestTime,
    FirstTime,
}

impl StartFrom {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartFrom::StartTime => "startTime",
            StartFrom::LatestTime => "latestTime",
            StartFrom::FirstTime => "firstTime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopAt {
    EndTime,
    NextWrite,
    WriteNow,
    NoWriteNow,
}

impl StopAt {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopAt::EndTime => "endTime",
            StopAt::NextWrite => "nextWrite",
            StopAt::WriteNow => "writeNow",
            StopAt::NoWriteNow => "noWriteNow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteControl {
    TimeStep,
    RunTime,
}

impl WriteControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteControl::TimeStep => "timeStep",
            WriteControl::RunTime => "runTime",
        }
    }
}

/// Run-control settings.
///
/// Preset constructors carry the per-mode default tables; callers override
/// individual fields rather than replacing whole tables. `start_time` is
/// required when starting from a fixed start time, `end_time` when stopping
/// at a fixed end time; both are checked before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlDict {
    pub application: String,
    pub start_from: StartFrom,
    pub start_time: Option<f64>,
    pub stop_at: StopAt,
    pub end_time: Option<f64>,
    pub delta_t: f64,
    pub write_control: WriteControl,
    pub write_interval: f64,
    pub purge_write: u32,
    pub write_precision: u32,
    pub time_precision: u32,
    pub run_time_modifiable: bool,
}

impl ControlDict {
    /// Defaults for a steady solver run.
    pub fn steady(application: &str) -> Self {
        Self {
            application: application.to_string(),
            start_from: StartFrom::StartTime,
            start_time: Some(0.0),
            stop_at: StopAt::EndTime,
            end_time: Some(1000.0),
            delta_t: 1.0,
            write_control: WriteControl::TimeStep,
            write_interval: 1.0,
            purge_write: 1,
            write_precision: 6,
            time_precision: 6,
            run_time_modifiable: true,
        }
    }

    /// Defaults for a transient solver run.
    pub fn transient(application: &str) -> Self {
        Self {
            application: application.to_string(),
            start_from: StartFrom::LatestTime,
            start_time: Some(0.0),
            stop_at: StopAt::EndTime,
            end_time: Some(1.0),
            delta_t: 0.01,
            write_control: WriteControl::TimeStep,
            write_interval: 1.0,
            purge_write: 0,
            write_precision: 6,
            time_precision: 6,
            run_time_modifiable: true,
        }
    }

    pub fn write(&self, case: &Case) -> CaseResult<()> {
        let mut body = String::new();
        write_entry(&mut body, "application", &self.application);
        write_entry(&mut body, "startFrom", self.start_from.as_str());
        if self.start_from == StartFrom::StartTime {
            let start = self.start_time.ok_or(CaseError::MissingParameter {
                what: "startTime (startFrom is startTime)",
            })?;
            write_entry(&mut body, "startTime", start);
        }
        write_entry(&mut body, "stopAt", self.stop_at.as_str());
        if self.stop_at == StopAt::EndTime {
            let end = self.end_time.ok_or(CaseError::MissingParameter {
                what: "endTime (stopAt is endTime)",
            })?;
            write_entry(&mut body, "endTime", end);
        }
        write_entry(&mut body, "deltaT", self.delta_t);
        write_entry(&mut body, "writeControl", self.write_control.as_str());
        write_entry(&mut body, "writeInterval", self.write_interval);
        write_entry(&mut body, "purgeWrite", self.purge_write);
        write_entry(&mut body, "writeFormat", "ascii");
        write_entry(&mut body, "writePrecision", self.write_precision);
        write_entry(&mut body, "writeCompression", "off");
        write_entry(&mut body, "timeFormat", "general");
        write_entry(&mut body, "timePrecision", self.time_precision);
        write_entry(
            &mut body,
            "runTimeModifiable",
            if self.run_time_modifiable { "true" } else { "false" },
        );

        case.write_dict(
            "system/controlDict",
            &FoamHeader::dictionary("system", "controlDict"),
            &body,
        )
    }
}
