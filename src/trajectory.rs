//! Recorded trajectory: time-ordered samples of one simulation run

use nalgebra::DMatrix;

use crate::dynamics::{bob_positions, energies};
use crate::integrator::IntegrationState;
use crate::params::PendulumParams;

/// One recorded sample of the pendulum state
///
/// Angles are in radians, positions in m, energies in J. The column order
/// of [`to_array`](Self::to_array) and of the matrix export is
/// `time, x1, y1, theta1, x2, y2, theta2, kinetic, potential`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    /// Simulated time in s
    pub time: f64,
    /// x position of the upper bob
    pub x1: f64,
    /// y position of the upper bob
    pub y1: f64,
    /// Angle of the upper rod in rad
    pub theta1: f64,
    /// x position of the lower bob
    pub x2: f64,
    /// y position of the lower bob
    pub y2: f64,
    /// Angle of the lower rod in rad
    pub theta2: f64,
    /// Kinetic energy in J
    pub kinetic: f64,
    /// Potential energy in J
    pub potential: f64,
}

impl SampleRow {
    /// Number of recorded quantities per sample
    pub const COLUMNS: usize = 9;

    /// Sample the current integration state, computing positions and
    /// energies from the angles and velocities
    pub fn from_state(state: &IntegrationState, params: &PendulumParams) -> Self {
        let (p1, p2) = bob_positions(state.theta1, state.theta2, params);
        let (kinetic, potential) = energies(state.theta1, state.theta2, state.v1, state.v2, params);
        Self {
            time: state.time,
            x1: p1.x,
            y1: p1.y,
            theta1: state.theta1,
            x2: p2.x,
            y2: p2.y,
            theta2: state.theta2,
            kinetic,
            potential,
        }
    }

    /// All quantities in column order
    pub fn to_array(&self) -> [f64; Self::COLUMNS] {
        [
            self.time,
            self.x1,
            self.y1,
            self.theta1,
            self.x2,
            self.y2,
            self.theta2,
            self.kinetic,
            self.potential,
        ]
    }

    /// Total mechanical energy in J
    pub fn total_energy(&self) -> f64 {
        self.kinetic + self.potential
    }
}

/// Number of rows a run with the given step count and recording interval
/// produces: one per loop index divisible by `record_every`, plus the
/// unconditional final sample
fn sample_count(n_steps: usize, record_every: usize) -> usize {
    let mut count = n_steps / record_every + 1;
    if n_steps % record_every != 0 {
        count += 1;
    }
    count
}

/// Time-ordered samples of one simulation run
///
/// Allocated once per run to the exact number of rows the run will produce
/// and filled front to back, so recording never reallocates. Replaced
/// wholesale by each completed run. Read access by index, iteration, or the
/// dense matrix export.
///
/// # Example
///
/// ```
/// use double_pendulum::DoublePendulum;
///
/// let mut pendulum = DoublePendulum::default();
/// pendulum.simulate(1000, 1e-3, 100).unwrap();
///
/// let trajectory = pendulum.trajectory();
/// assert_eq!(trajectory.len(), 11);
/// for row in trajectory {
///     println!("t={:.3} E={:.6}", row.time, row.total_energy());
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    rows: Vec<SampleRow>,
    capacity: usize,
}

impl Trajectory {
    /// Create an empty trajectory
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a trajectory for a run of `n_steps` steps recording every
    /// `record_every` steps
    pub(crate) fn for_run(n_steps: usize, record_every: usize) -> Self {
        let capacity = sample_count(n_steps, record_every);
        Self {
            rows: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Sample the integration state into the next row
    pub(crate) fn record(&mut self, state: &IntegrationState, params: &PendulumParams) {
        debug_assert!(self.rows.len() < self.capacity, "Trajectory is full");
        self.rows.push(SampleRow::from_state(state, params));
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows this trajectory was allocated for
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if every allocated row has been recorded
    pub fn is_full(&self) -> bool {
        self.rows.len() == self.capacity
    }

    /// Get a sample by index
    pub fn get(&self, index: usize) -> Option<&SampleRow> {
        self.rows.get(index)
    }

    /// Earliest recorded sample
    pub fn first(&self) -> Option<&SampleRow> {
        self.rows.first()
    }

    /// Most recent recorded sample
    pub fn last(&self) -> Option<&SampleRow> {
        self.rows.last()
    }

    /// Iterate over samples in time order
    pub fn iter(&self) -> std::slice::Iter<'_, SampleRow> {
        self.rows.iter()
    }

    /// Export as a dense `len() x 9` matrix, rows in time order, columns in
    /// the [`SampleRow`] column order
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_iterator(
            self.rows.len(),
            SampleRow::COLUMNS,
            self.rows.iter().flat_map(|row| row.to_array()),
        )
    }
}

impl std::ops::Index<usize> for Trajectory {
    type Output = SampleRow;

    fn index(&self, index: usize) -> &SampleRow {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a SampleRow;
    type IntoIter = std::slice::Iter<'a, SampleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
