//! Grid Simulator Core - Rust Engine
//!
//! Numeric foundations for a power-grid dynamic-simulation kernel: the
//! generic simulation-time representation shared by the solver, the event
//! scheduler, and the data-recording subsystem, plus the sparse Jacobian
//! entry accumulator the solver assembles into.
//!
//! # Architecture
//!
//! - **time**: interchangeable time encodings (binary fixed-point, decimal
//!   fixed-point, floating passthrough) behind one generic value type
//! - **matrix**: polymorphic sparse (row, col, value) accumulation for
//!   Jacobian assembly
//! - **measurement**: periodic sample scheduling for the data recorder
//!
//! # Critical Invariants
//!
//! 1. Time identity and ordering are defined on the raw encoded value
//! 2. Time arithmetic is asymmetric by design: `time * scalar` is a time,
//!    `scalar * time` and `time / time` are plain numbers
//! 3. Out-of-range time encodes saturate to sentinels; nothing here
//!    returns an error or panics in the numeric paths

// Module declarations
pub mod matrix;
pub mod measurement;
pub mod time;

// Re-exports for convenience
pub use matrix::{MatrixData, MatrixElement, TripletMatrix};
pub use measurement::{SampleScheduler, SchedulerError};
pub use time::{
    BinaryEncoding, CoreTime, DecimalEncoding, DoubleEncoding, SimTime, TimeEncoding, TimeUnit,
};
