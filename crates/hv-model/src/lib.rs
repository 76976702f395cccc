//! hv-model: steady-state solver for a vehicle A/C compressor coupled to an
//! IC engine.
//!
//! The solver is a pure pipeline over a validated input record:
//! cabin load -> compressor capacity & derating -> condenser feedback
//! correction -> operating point -> idle-speed-control intervention.
//!
//! Every step is a total function of its arguments; there is no shared
//! mutable state and no I/O, so a computation can run from any thread
//! without coordination.

pub mod capacity;
pub mod compressor;
pub mod condenser;
pub mod constants;
pub mod error;
pub mod inputs;
pub mod isc;
pub mod load;
pub mod metrics;
pub mod solver;

// Re-exports for public API
pub use capacity::{Capacity, compressor_capacity};
pub use compressor::{OperatingPoint, operating_point};
pub use condenser::{CondenserState, condensing_state};
pub use error::{ModelError, ModelResult};
pub use inputs::{CompressorTech, SimInputs};
pub use isc::{IdleStatus, Intervention, IscAction, classify_idle, intervene};
pub use load::{CabinLoad, cabin_load, humidity_factor, solar_factor};
pub use metrics::SystemMetrics;
pub use solver::{SOLVER_VERSION, compute_system_state};
