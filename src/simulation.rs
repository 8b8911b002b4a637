//! Simulation driver: owns the parameters and the recorded trajectory

use nalgebra::DMatrix;

use crate::error::PendulumError;
use crate::integrator::IntegrationState;
use crate::params::PendulumParams;
use crate::trajectory::Trajectory;

/// Double pendulum simulator
///
/// Owns a [`PendulumParams`] and the trajectory of the most recent
/// completed run. Each run starts from the configured release angles at
/// rest, integrates for a fixed number of steps, and records samples at a
/// fixed stride. Runs are synchronous; independent instances are fully
/// independent.
///
/// # Example
///
/// ```
/// use double_pendulum::{DoublePendulum, PendulumParams};
///
/// let params = PendulumParams::new(1.0, 1.0, 1.0, 1.0, 10.0, 0.0)?;
/// let mut pendulum = DoublePendulum::new(params);
/// pendulum.simulate(1000, 1e-4, 100)?;
///
/// assert_eq!(pendulum.trajectory().len(), 11);
/// let data = pendulum.data();
/// assert_eq!(data.nrows(), 11);
/// assert_eq!(data.ncols(), 9);
/// # Ok::<(), double_pendulum::PendulumError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DoublePendulum {
    params: PendulumParams,
    trajectory: Trajectory,
}

impl DoublePendulum {
    /// Create a simulator with the given parameters and no recorded data
    pub fn new(params: PendulumParams) -> Self {
        Self {
            params,
            trajectory: Trajectory::new(),
        }
    }

    /// Current parameters
    pub fn params(&self) -> &PendulumParams {
        &self.params
    }

    /// Set both masses in kg, leaving any recorded trajectory untouched
    pub fn set_masses(&mut self, m1: f64, m2: f64) -> Result<(), PendulumError> {
        self.params.set_masses(m1, m2)
    }

    /// Set both rod lengths in m, leaving any recorded trajectory untouched
    pub fn set_lengths(&mut self, l1: f64, l2: f64) -> Result<(), PendulumError> {
        self.params.set_lengths(l1, l2)
    }

    /// Set both release angles in degrees, effective from the next run
    pub fn set_angles(&mut self, theta1_deg: f64, theta2_deg: f64) {
        self.params.set_angles(theta1_deg, theta2_deg);
    }

    /// Run the simulation for `n_steps` steps of `dt` seconds, recording
    /// every `record_every`-th step
    ///
    /// Records the state at every step index divisible by `record_every`
    /// (including the initial state at time zero) and always records the
    /// final state at `n_steps * dt`, so the trajectory holds
    /// `n_steps / record_every + 1` rows, plus one more when `n_steps` is
    /// not a multiple of `record_every`. Recorded times are strictly
    /// increasing; `n_steps = 0` produces the single initial sample.
    ///
    /// The run request is validated before anything else happens: on error
    /// the trajectory of the previous run is left untouched. Typical values
    /// are [`DEFAULT_TIMESTEP`](crate::constants::DEFAULT_TIMESTEP) and
    /// [`DEFAULT_RECORD_EVERY`](crate::constants::DEFAULT_RECORD_EVERY).
    ///
    /// # Arguments
    ///
    /// - `n_steps`: number of integration steps
    /// - `dt`: timestep in seconds, positive and finite
    /// - `record_every`: recording stride in steps, at least 1
    pub fn simulate(
        &mut self,
        n_steps: usize,
        dt: f64,
        record_every: usize,
    ) -> Result<(), PendulumError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(PendulumError::InvalidTimestep { dt });
        }
        if record_every == 0 {
            return Err(PendulumError::InvalidRecordInterval);
        }

        let mut state = IntegrationState::from_params(&self.params, dt);
        let mut trajectory = Trajectory::for_run(n_steps, record_every);

        for i in 0..n_steps {
            // Time from the step index, not accumulation, so recorded
            // timestamps carry no rounding drift
            state.time = i as f64 * dt;
            if i % record_every == 0 {
                trajectory.record(&state, &self.params);
            }
            state.step(&self.params);
        }

        state.time = n_steps as f64 * dt;
        trajectory.record(&state, &self.params);

        self.trajectory = trajectory;
        Ok(())
    }

    /// Trajectory of the most recent completed run, empty before the first
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Recorded data as a dense `rows x 9` matrix in time order
    ///
    /// Columns: `time, x1, y1, theta1, x2, y2, theta2, kinetic, potential`.
    pub fn data(&self) -> DMatrix<f64> {
        self.trajectory.to_matrix()
    }
}
