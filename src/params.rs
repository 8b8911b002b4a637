//! Pendulum parameter store: masses, rod lengths, initial angles

use crate::constants::{
    DEFAULT_ANGLE_1, DEFAULT_ANGLE_2, DEFAULT_LENGTH_1, DEFAULT_LENGTH_2, DEFAULT_MASS_1,
    DEFAULT_MASS_2,
};
use crate::error::PendulumError;

/// Physical parameters of a double pendulum
///
/// Masses and lengths are strictly positive and finite; a constructed
/// instance always holds a legal configuration. Angles are accepted in
/// degrees and stored in radians.
///
/// # Example
///
/// ```
/// use double_pendulum::PendulumParams;
///
/// let mut params = PendulumParams::default();
/// params.set_masses(2.0, 0.5).unwrap();
/// params.set_angles(90.0, 0.0);
/// assert_eq!(params.m1(), 2.0);
/// assert!((params.theta1() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumParams {
    m1: f64,
    m2: f64,
    l1: f64,
    l2: f64,
    theta1: f64,
    theta2: f64,
}

fn check_positive(name: &'static str, value: f64) -> Result<(), PendulumError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PendulumError::InvalidParameter { name, value })
    }
}

impl PendulumParams {
    /// Create a parameter set with angles given in degrees
    pub fn new(
        m1: f64,
        m2: f64,
        l1: f64,
        l2: f64,
        theta1_deg: f64,
        theta2_deg: f64,
    ) -> Result<Self, PendulumError> {
        check_positive("m1", m1)?;
        check_positive("m2", m2)?;
        check_positive("l1", l1)?;
        check_positive("l2", l2)?;
        Ok(Self {
            m1,
            m2,
            l1,
            l2,
            theta1: theta1_deg.to_radians(),
            theta2: theta2_deg.to_radians(),
        })
    }

    /// Mass of the upper bob in kg
    pub fn m1(&self) -> f64 {
        self.m1
    }

    /// Mass of the lower bob in kg
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Length of the upper rod in m
    pub fn l1(&self) -> f64 {
        self.l1
    }

    /// Length of the lower rod in m
    pub fn l2(&self) -> f64 {
        self.l2
    }

    /// Initial angle of the upper rod in radians
    pub fn theta1(&self) -> f64 {
        self.theta1
    }

    /// Initial angle of the lower rod in radians
    pub fn theta2(&self) -> f64 {
        self.theta2
    }

    /// Initial angle of the upper rod in degrees
    pub fn theta1_deg(&self) -> f64 {
        self.theta1.to_degrees()
    }

    /// Initial angle of the lower rod in degrees
    pub fn theta2_deg(&self) -> f64 {
        self.theta2.to_degrees()
    }

    /// Set both masses in kg
    ///
    /// Rejects non-positive or non-finite values without modifying anything.
    pub fn set_masses(&mut self, m1: f64, m2: f64) -> Result<(), PendulumError> {
        check_positive("m1", m1)?;
        check_positive("m2", m2)?;
        self.m1 = m1;
        self.m2 = m2;
        Ok(())
    }

    /// Set both rod lengths in m
    ///
    /// Rejects non-positive or non-finite values without modifying anything.
    pub fn set_lengths(&mut self, l1: f64, l2: f64) -> Result<(), PendulumError> {
        check_positive("l1", l1)?;
        check_positive("l2", l2)?;
        self.l1 = l1;
        self.l2 = l2;
        Ok(())
    }

    /// Set both initial angles in degrees
    ///
    /// Angles of any magnitude are accepted; they are converted to radians
    /// for internal use.
    pub fn set_angles(&mut self, theta1_deg: f64, theta2_deg: f64) {
        self.theta1 = theta1_deg.to_radians();
        self.theta2 = theta2_deg.to_radians();
    }
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            m1: DEFAULT_MASS_1,
            m2: DEFAULT_MASS_2,
            l1: DEFAULT_LENGTH_1,
            l2: DEFAULT_LENGTH_2,
            theta1: DEFAULT_ANGLE_1.to_radians(),
            theta2: DEFAULT_ANGLE_2.to_radians(),
        }
    }
}
