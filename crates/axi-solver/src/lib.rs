//! axi-solver: MacCormack marching solver for steady supersonic
//! axisymmetric flow in parabolized (single-pass) form.
//!
//! The flow between a body surface and a prescribed conical shock is
//! marched along the axis: a self-similar conical solution is iterated at
//! a fixed nose station until it settles, then the field is stepped
//! downstream to the end of the body. Each iteration runs one explicit
//! predictor-corrector sweep across the radial grid.

pub mod config;
pub mod error;
pub mod grid;
pub mod march;
pub mod primitives;
pub mod snapshot;
pub mod station;

mod sweep;
mod window;

pub use config::SolverConfig;
pub use error::{SolverError, SolverResult};
pub use grid::FlowGrid;
pub use march::{PnsSolver, RunOutcome, RunReport};
pub use primitives::{BranchSelector, Primitives};
pub use snapshot::{Snapshot, SnapshotTag, StationRecord};
pub use station::StationFrame;
