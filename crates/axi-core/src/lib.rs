//! axi-core: shared foundation for the axipns solver.
//!
//! Contains:
//! - freestream (reference nondimensional state + gas constants)
//! - numeric (tolerances + float helpers)
//! - units (uom types + constructors for the geometry boundary)
//! - error (shared error types)

pub mod error;
pub mod freestream;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use freestream::{FreeStream, GAMMA};
pub use numeric::*;
pub use units::*;
