//! Periodic sample scheduling
//!
//! The data-recording subsystem decides *when* to sample through this
//! scheduler; what gets sampled (column management, grabber registration)
//! lives with the recorder itself. The scheduler consumes time values only
//! through comparison, addition, and the sentinel accessors: the
//! `max_val` sentinel marks "never trigger again".
//!
//! # Example
//!
//! ```rust
//! use grid_simulator_core_rs::{CoreTime, SampleScheduler};
//!
//! let mut sched = SampleScheduler::new(CoreTime::zero(), CoreTime::new(0.25));
//!
//! // The solver asks before every accepted step
//! assert!(sched.ready(CoreTime::zero()));
//! sched.trigger(CoreTime::zero());
//!
//! assert!(!sched.ready(CoreTime::new(0.1)));
//! assert!(sched.ready(CoreTime::new(0.25)));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::CoreTime;

/// Errors from string-keyed scheduler configuration
#[derive(Debug, Error, PartialEq)]
pub enum SchedulerError {
    #[error("unknown scheduler parameter: {0}")]
    UnknownParameter(String),

    #[error("sample period must be positive, got {value}")]
    InvalidPeriod { value: f64 },
}

/// Decides when a periodic recorder samples next
///
/// Tracks a trigger time that advances by whole periods as the simulation
/// passes it. Once the trigger time passes the configured stop time it is
/// parked at the `max_val` sentinel and the scheduler never fires again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleScheduler {
    /// Effective sampling period (possibly snapped to a resolution)
    time_period: CoreTime,
    /// Period as requested, before any resolution snapping
    req_period: CoreTime,
    /// Earliest time the scheduler may fire
    start_time: CoreTime,
    /// Past this time the scheduler disarms
    stop_time: CoreTime,
    /// Next time a sample is due
    trigger_time: CoreTime,
    /// Time of the most recent trigger
    last_trigger_time: CoreTime,
}

impl SampleScheduler {
    /// Create a scheduler first due at `time0`, firing every `period`
    ///
    /// # Panics
    /// Panics if `period` is not positive (a non-positive period would make
    /// the catch-up loop diverge).
    pub fn new(time0: CoreTime, period: CoreTime) -> Self {
        assert!(period > CoreTime::zero(), "sample period must be positive");
        Self {
            time_period: period,
            req_period: period,
            start_time: CoreTime::min_val(),
            stop_time: CoreTime::max_val(),
            trigger_time: time0,
            last_trigger_time: CoreTime::min_val(),
        }
    }

    /// Has enough time elapsed to sample again?
    pub fn ready(&self, time: CoreTime) -> bool {
        time >= self.trigger_time
    }

    /// Whether the scheduler can still fire
    ///
    /// False once the trigger time has been parked at the `max_val`
    /// sentinel.
    pub fn is_armed(&self) -> bool {
        self.trigger_time < CoreTime::max_val()
    }

    /// Record a sample at `time` and advance the trigger time
    ///
    /// The trigger time advances by whole periods until it passes `time`;
    /// after five catch-up steps it resnaps to `time + period` instead of
    /// continuing to walk. A trigger time beyond the stop time is parked at
    /// the `max_val` sentinel.
    pub fn trigger(&mut self, time: CoreTime) {
        self.last_trigger_time = time;
        let mut cnt = 0;
        while time >= self.trigger_time {
            self.trigger_time += self.time_period;
            cnt += 1;
            if cnt > 5 {
                self.trigger_time = time + self.time_period;
            }
        }
        if self.trigger_time > self.stop_time {
            self.trigger_time = CoreTime::max_val();
        }
    }

    /// Drag a stale trigger time forward, never backward
    pub fn advance_to(&mut self, time: CoreTime) {
        if time > self.trigger_time {
            self.trigger_time = time;
        }
    }

    /// String-keyed configuration in the recorder's parameter idiom
    ///
    /// Recognized keys: `period`, `frequency` (reciprocal of period),
    /// `triggertime`/`trigger`/`time`, `starttime`/`start` (re-arms the
    /// trigger at the start time), `stoptime`/`stop`, and
    /// `period_resolution` (snaps the requested period to a whole number
    /// of resolution steps; non-positive resolutions are ignored).
    pub fn set(&mut self, param: &str, value: f64) -> Result<(), SchedulerError> {
        match param {
            "period" => {
                if value <= 0.0 {
                    return Err(SchedulerError::InvalidPeriod { value });
                }
                self.req_period = CoreTime::new(value);
                self.time_period = self.req_period;
            }
            "frequency" => {
                if value <= 0.0 {
                    return Err(SchedulerError::InvalidPeriod { value });
                }
                self.req_period = CoreTime::new(1.0 / value);
                self.time_period = self.req_period;
            }
            "triggertime" | "trigger" | "time" => {
                self.trigger_time = CoreTime::new(value);
            }
            "starttime" | "start" => {
                self.start_time = CoreTime::new(value);
                self.trigger_time = self.start_time;
            }
            "stoptime" | "stop" => {
                self.stop_time = CoreTime::new(value);
            }
            "period_resolution" => {
                if value > 0.0 {
                    let per = (self.req_period.to_f64() / value).round() as i64;
                    self.time_period = if per == 0 {
                        CoreTime::new(value)
                    } else {
                        CoreTime::new(value * per as f64)
                    };
                }
            }
            other => return Err(SchedulerError::UnknownParameter(other.to_string())),
        }
        Ok(())
    }

    /// Effective sampling period
    pub fn period(&self) -> CoreTime {
        self.time_period
    }

    /// Period as requested, before resolution snapping
    pub fn requested_period(&self) -> CoreTime {
        self.req_period
    }

    /// Next time a sample is due
    pub fn next_trigger_time(&self) -> CoreTime {
        self.trigger_time
    }

    /// Time of the most recent trigger
    pub fn last_trigger_time(&self) -> CoreTime {
        self.last_trigger_time
    }

    pub fn start_time(&self) -> CoreTime {
        self.start_time
    }

    pub fn stop_time(&self) -> CoreTime {
        self.stop_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "sample period must be positive")]
    fn zero_period_panics() {
        SampleScheduler::new(CoreTime::zero(), CoreTime::zero());
    }
}
