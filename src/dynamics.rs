//! Double pendulum dynamics: angular accelerations, bob positions, energies

use nalgebra::Point2;

use crate::constants::GRAVITY;
use crate::params::PendulumParams;

/// Angular accelerations `(a1, a2)` of both rods
///
/// Lagrangian equations of motion of the planar double pendulum, solved for
/// the angular accelerations. With `d = theta1 - theta2`:
///
/// ```text
/// a1 = (-m2*l1*v1^2*sin(d)*cos(d) + m2*g*sin(theta2)*cos(d)
///       - m2*l2*v2^2*sin(d) - (m1+m2)*g*sin(theta1))
///      / (l1*(m1+m2) - m2*l1*cos(d)^2)
///
/// a2 = (m1+m2) * (l1*v1^2*sin(d) + m2*l2*v2^2*sin(d)*cos(d)/(m1+m2)
///                 + g*sin(theta1)*cos(d) - g*sin(theta2))
///      / (l2*(m1 + m2*sin(d)^2))
/// ```
///
/// # Note
/// Both accelerations depend on the angular velocities, not only the
/// angles. A plain position-Verlet update is therefore not applicable; the
/// stepping scheme in [`IntegrationState::step`](crate::IntegrationState::step)
/// re-evaluates this function mid-step with half-updated velocities.
///
/// # References
/// - Landau, L. D., & Lifshitz, E. M. (1976). "Mechanics". Course of
///   Theoretical Physics Vol. 1, Butterworth-Heinemann, 3rd Edition, §5.
/// - Neumann, E. (2004). "Double Pendulum". myPhysicsLab,
///   <https://www.myphysicslab.com/pendulum/double-pendulum-en.html>.
pub fn acceleration(
    theta1: f64,
    theta2: f64,
    v1: f64,
    v2: f64,
    params: &PendulumParams,
) -> (f64, f64) {
    let (m1, m2) = (params.m1(), params.m2());
    let (l1, l2) = (params.l1(), params.l2());
    let g = GRAVITY;

    let d = theta1 - theta2;
    let (sin_d, cos_d) = d.sin_cos();

    let a1 = (-m2 * l1 * v1 * v1 * sin_d * cos_d + m2 * g * theta2.sin() * cos_d
        - m2 * l2 * v2 * v2 * sin_d
        - (m1 + m2) * g * theta1.sin())
        / (l1 * (m1 + m2) - m2 * l1 * cos_d * cos_d);

    let a2 = (m1 + m2)
        * (l1 * v1 * v1 * sin_d + m2 * l2 * v2 * v2 * sin_d * cos_d / (m1 + m2)
            + g * theta1.sin() * cos_d
            - g * theta2.sin())
        / (l2 * (m1 + m2 * sin_d * sin_d));

    (a1, a2)
}

/// Cartesian positions `(p1, p2)` of both bobs
///
/// The pivot sits at the origin with y pointing up:
///
/// ```text
/// p1 = (l1*sin(theta1), -l1*cos(theta1))
/// p2 = p1 + (l2*sin(theta2), -l2*cos(theta2))
/// ```
pub fn bob_positions(theta1: f64, theta2: f64, params: &PendulumParams) -> (Point2<f64>, Point2<f64>) {
    let (l1, l2) = (params.l1(), params.l2());
    let p1 = Point2::new(l1 * theta1.sin(), -l1 * theta1.cos());
    let p2 = Point2::new(p1.x + l2 * theta2.sin(), p1.y - l2 * theta2.cos());
    (p1, p2)
}

/// Kinetic and potential energy `(kinetic, potential)` of the system
///
/// Potential energy is measured from the configuration with both rods
/// hanging straight down, so a pendulum at rest in that configuration has
/// zero total energy.
///
/// ```text
/// T = 0.5*m1*l1^2*v1^2
///   + 0.5*m2*(l1^2*v1^2 + l2^2*v2^2) + m2*l1*l2*v1*v2*cos(theta1-theta2)
/// V = m1*g*l1*(1-cos(theta1))
///   + m2*g*(l1*(1-cos(theta1)) + l2*(1-cos(theta2)))
/// ```
pub fn energies(theta1: f64, theta2: f64, v1: f64, v2: f64, params: &PendulumParams) -> (f64, f64) {
    let (m1, m2) = (params.m1(), params.m2());
    let (l1, l2) = (params.l1(), params.l2());
    let g = GRAVITY;

    let kinetic = 0.5 * m1 * l1 * l1 * v1 * v1
        + 0.5 * m2 * (l1 * l1 * v1 * v1 + l2 * l2 * v2 * v2)
        + m2 * l1 * l2 * v1 * v2 * (theta1 - theta2).cos();

    let potential =
        m1 * g * l1 * (1.0 - theta1.cos()) + m2 * g * (l1 * (1.0 - theta1.cos()) + l2 * (1.0 - theta2.cos()));

    (kinetic, potential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_acceleration_zero_at_rest_equilibrium() {
        let params = PendulumParams::default();
        let (a1, a2) = acceleration(0.0, 0.0, 0.0, 0.0, &params);
        assert_eq!(a1, 0.0);
        assert_eq!(a2, 0.0);
    }

    #[test]
    fn test_acceleration_simple_pendulum_limit() {
        // With a vanishing lower mass the upper rod decouples:
        // a1 -> -(g/l1)*sin(theta1)
        let params = PendulumParams::new(1.0, 1e-9, 1.0, 1.0, 0.0, 0.0).unwrap();
        let theta1: f64 = 0.3;
        let (a1, _) = acceleration(theta1, 0.0, 0.0, 0.0, &params);
        assert_relative_eq!(a1, -GRAVITY * theta1.sin(), epsilon = 1e-6);
    }

    #[test]
    fn test_acceleration_aligned_release() {
        // Rods released parallel: d = 0, so the gravity terms in a2 cancel
        // and only the upper rod accelerates, back toward hanging
        let params = PendulumParams::default();
        let (a1, a2) = acceleration(0.1, 0.1, 0.0, 0.0, &params);
        assert!(a1 < 0.0);
        assert_eq!(a2, 0.0);
    }

    #[test]
    fn test_acceleration_restores_displaced_lower_rod() {
        // Upper rod hanging, lower rod displaced: the lower rod swings
        // back toward equilibrium and drags the upper rod after it
        let params = PendulumParams::default();
        let (a1, a2) = acceleration(0.0, 0.1, 0.0, 0.0, &params);
        assert!(a2 < 0.0);
        assert!(a1 > 0.0);
    }

    #[test]
    fn test_bob_positions_hanging() {
        let params = PendulumParams::default();
        let (p1, p2) = bob_positions(0.0, 0.0, &params);
        assert_relative_eq!(p1.x, 0.0);
        assert_relative_eq!(p1.y, -1.0);
        assert_relative_eq!(p2.x, 0.0);
        assert_relative_eq!(p2.y, -2.0);
    }

    #[test]
    fn test_bob_positions_horizontal() {
        let params = PendulumParams::new(1.0, 1.0, 2.0, 0.5, 0.0, 0.0).unwrap();
        let half_pi = std::f64::consts::FRAC_PI_2;
        let (p1, p2) = bob_positions(half_pi, half_pi, &params);
        assert_relative_eq!(p1.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p1.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p2.x, 2.5, epsilon = 1e-12);
        assert_relative_eq!(p2.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_energies_zero_at_rest_equilibrium() {
        let params = PendulumParams::default();
        let (kinetic, potential) = energies(0.0, 0.0, 0.0, 0.0, &params);
        assert_eq!(kinetic, 0.0);
        assert_eq!(potential, 0.0);
    }

    #[test]
    fn test_potential_energy_horizontal() {
        // Both rods horizontal: V = m1*g*l1 + m2*g*(l1+l2)
        let params = PendulumParams::default();
        let half_pi = std::f64::consts::FRAC_PI_2;
        let (_, potential) = energies(half_pi, half_pi, 0.0, 0.0, &params);
        assert_relative_eq!(potential, 3.0 * GRAVITY, epsilon = 1e-12);
    }

    #[test]
    fn test_kinetic_energy_coupling_term() {
        // Aligned rods swinging together move the lower bob at l1*v + l2*v,
        // so T = 0.5*m1*(l1*v)^2 + 0.5*m2*(l1*v + l2*v)^2
        let params = PendulumParams::default();
        let v = 0.7;
        let (kinetic, _) = energies(0.2, 0.2, v, v, &params);
        let expected = 0.5 * v * v + 0.5 * (2.0 * v) * (2.0 * v);
        assert_relative_eq!(kinetic, expected, epsilon = 1e-12);
    }
}
