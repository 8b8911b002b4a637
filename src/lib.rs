//! Double pendulum - planar two-link pendulum simulation
//!
//! Numerical integration of the chaotic double pendulum, producing a
//! time-sampled trajectory of angles, bob positions, and energies for
//! analysis or plotting.
//!
//! # Architecture
//!
//! The crate is split along the stages of a run:
//! - [`PendulumParams`]: validated masses, rod lengths, release angles
//! - [`dynamics`]: the equations of motion, bob positions, energies
//! - [`IntegrationState`]: per-run state advanced by velocity-Verlet
//! - [`Trajectory`]: exact-capacity sample buffer with matrix export
//! - [`DoublePendulum`]: the driver tying configuration, integration, and
//!   recording together
//!
//! # Example
//!
//! ```rust
//! use double_pendulum::{DoublePendulum, PendulumParams};
//!
//! // Release from 10 degrees on the upper rod, lower rod hanging
//! let params = PendulumParams::new(1.0, 1.0, 1.0, 1.0, 10.0, 0.0)?;
//! let mut pendulum = DoublePendulum::new(params);
//!
//! // 1000 steps of 0.1 ms, one sample every 100 steps
//! pendulum.simulate(1000, 1e-4, 100)?;
//!
//! for row in pendulum.trajectory() {
//!     println!("t={:.4} theta1={:+.5} E={:.6}", row.time, row.theta1, row.total_energy());
//! }
//! # Ok::<(), double_pendulum::PendulumError>(())
//! ```

pub mod constants;
pub mod dynamics;
pub mod error;
pub mod integrator;
pub mod params;
pub mod simulation;
pub mod trajectory;

pub use error::PendulumError;
pub use integrator::IntegrationState;
pub use params::PendulumParams;
pub use simulation::DoublePendulum;
pub use trajectory::{SampleRow, Trajectory};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::dynamics::{acceleration, bob_positions, energies};
    pub use crate::error::PendulumError;
    pub use crate::integrator::IntegrationState;
    pub use crate::params::PendulumParams;
    pub use crate::simulation::DoublePendulum;
    pub use crate::trajectory::{SampleRow, Trajectory};
}
