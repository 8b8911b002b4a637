//! Physical constants and simulation defaults

/// Gravitational acceleration in m/s^2
pub const GRAVITY: f64 = 9.81;

/// Default integration timestep in seconds
pub const DEFAULT_TIMESTEP: f64 = 0.001;

/// Default number of integration steps between recorded samples
pub const DEFAULT_RECORD_EVERY: usize = 100;

/// Default mass of the upper bob in kg
pub const DEFAULT_MASS_1: f64 = 1.0;

/// Default mass of the lower bob in kg
pub const DEFAULT_MASS_2: f64 = 1.0;

/// Default length of the upper rod in m
pub const DEFAULT_LENGTH_1: f64 = 1.0;

/// Default length of the lower rod in m
pub const DEFAULT_LENGTH_2: f64 = 1.0;

/// Default initial angle of the upper rod in degrees
pub const DEFAULT_ANGLE_1: f64 = 0.6;

/// Default initial angle of the lower rod in degrees
pub const DEFAULT_ANGLE_2: f64 = 0.25;
