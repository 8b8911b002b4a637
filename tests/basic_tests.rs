//! Basic integration tests for the double pendulum public API

use approx::assert_relative_eq;
use double_pendulum::constants::{DEFAULT_RECORD_EVERY, DEFAULT_TIMESTEP};
use double_pendulum::{DoublePendulum, PendulumError, PendulumParams, SampleRow};

#[test]
fn test_default_configuration() {
    let pendulum = DoublePendulum::default();
    let params = pendulum.params();

    assert_eq!(params.m1(), 1.0);
    assert_eq!(params.m2(), 1.0);
    assert_eq!(params.l1(), 1.0);
    assert_eq!(params.l2(), 1.0);
    assert_relative_eq!(params.theta1_deg(), 0.6, epsilon = 1e-12);
    assert_relative_eq!(params.theta2_deg(), 0.25, epsilon = 1e-12);
    assert!(pendulum.trajectory().is_empty());
}

#[test]
fn test_setters_take_effect_on_next_run() {
    let mut pendulum = DoublePendulum::default();
    pendulum.simulate(0, DEFAULT_TIMESTEP, DEFAULT_RECORD_EVERY).unwrap();
    let theta_before = pendulum.trajectory().first().unwrap().theta1;

    pendulum.set_masses(2.0, 0.5).unwrap();
    pendulum.set_lengths(1.5, 0.75).unwrap();
    pendulum.set_angles(45.0, -45.0);

    assert_eq!(pendulum.params().m1(), 2.0);
    assert_eq!(pendulum.params().m2(), 0.5);
    assert_eq!(pendulum.params().l1(), 1.5);
    assert_eq!(pendulum.params().l2(), 0.75);

    pendulum.simulate(0, DEFAULT_TIMESTEP, DEFAULT_RECORD_EVERY).unwrap();
    let row = pendulum.trajectory().first().unwrap();
    assert_ne!(row.theta1, theta_before);
    assert_relative_eq!(row.theta1, 45f64.to_radians(), epsilon = 1e-12);
    assert_relative_eq!(row.theta2, (-45f64).to_radians(), epsilon = 1e-12);
}

#[test]
fn test_invalid_configuration_rejected() {
    assert!(matches!(
        PendulumParams::new(-1.0, 1.0, 1.0, 1.0, 0.0, 0.0),
        Err(PendulumError::InvalidParameter { name: "m1", .. })
    ));

    let mut pendulum = DoublePendulum::default();
    assert!(pendulum.set_masses(0.0, 1.0).is_err());
    assert!(pendulum.set_lengths(1.0, f64::NAN).is_err());
    // Rejected setters leave the stored values alone
    assert_eq!(pendulum.params().m1(), 1.0);
    assert_eq!(pendulum.params().l2(), 1.0);
}

#[test]
fn test_invalid_run_request_rejected() {
    let mut pendulum = DoublePendulum::default();
    pendulum.simulate(100, 1e-3, 10).unwrap();
    let rows_before = pendulum.trajectory().len();

    assert!(matches!(
        pendulum.simulate(100, 0.0, 10),
        Err(PendulumError::InvalidTimestep { .. })
    ));
    assert!(matches!(
        pendulum.simulate(100, 1e-3, 0),
        Err(PendulumError::InvalidRecordInterval)
    ));
    assert_eq!(pendulum.trajectory().len(), rows_before);
}

#[test]
fn test_row_counts() {
    let mut pendulum = DoublePendulum::default();
    let cases = [
        (1000, 100, 11),
        (1000, 300, 5),
        (100, 100, 2),
        (99, 100, 2),
        (101, 100, 3),
        (5, 10, 2),
        (1, 1, 2),
        (0, 100, 1),
    ];
    for (n_steps, record_every, expected_rows) in cases {
        pendulum.simulate(n_steps, 1e-3, record_every).unwrap();
        assert_eq!(
            pendulum.trajectory().len(),
            expected_rows,
            "n_steps={} record_every={}",
            n_steps,
            record_every
        );
    }
}

#[test]
fn test_data_matrix_shape_and_columns() {
    let mut pendulum = DoublePendulum::default();
    pendulum.set_angles(10.0, 0.0);
    pendulum.simulate(1000, 1e-4, 100).unwrap();

    let data = pendulum.data();
    assert_eq!(data.nrows(), 11);
    assert_eq!(data.ncols(), SampleRow::COLUMNS);

    // Column 0 is time, columns 3 and 6 are the angles in radians
    assert_eq!(data[(0, 0)], 0.0);
    assert_relative_eq!(data[(10, 0)], 0.1, epsilon = 1e-15);
    assert_relative_eq!(data[(0, 3)], 10f64.to_radians(), epsilon = 1e-12);
    assert_relative_eq!(data[(0, 6)], 0.0);
    // Released from rest: zero kinetic energy in the first row
    assert_eq!(data[(0, 7)], 0.0);
    assert!(data[(0, 8)] > 0.0);
}

#[test]
fn test_data_matches_trajectory_rows() {
    let mut pendulum = DoublePendulum::default();
    pendulum.simulate(500, 1e-3, 50).unwrap();

    let data = pendulum.data();
    let trajectory = pendulum.trajectory();
    assert_eq!(data.nrows(), trajectory.len());

    for (i, row) in trajectory.iter().enumerate() {
        let array = row.to_array();
        for (j, &value) in array.iter().enumerate() {
            assert_eq!(data[(i, j)], value, "row {} column {}", i, j);
        }
    }
}

#[test]
fn test_trajectory_indexing_and_iteration() {
    let mut pendulum = DoublePendulum::default();
    pendulum.simulate(300, 1e-3, 100).unwrap();

    let trajectory = pendulum.trajectory();
    assert_eq!(trajectory.len(), 4);
    assert_eq!(trajectory[0].time, trajectory.first().unwrap().time);
    assert_eq!(trajectory[3].time, trajectory.last().unwrap().time);

    let collected: Vec<&SampleRow> = trajectory.into_iter().collect();
    assert_eq!(collected.len(), 4);
    assert_eq!(collected[2].time, trajectory[2].time);
}

#[test]
fn test_identical_runs_are_identical() {
    let params = PendulumParams::new(1.2, 0.8, 1.1, 0.9, 35.0, -20.0).unwrap();
    let mut a = DoublePendulum::new(params.clone());
    let mut b = DoublePendulum::new(params);

    a.simulate(5000, 1e-3, 100).unwrap();
    b.simulate(5000, 1e-3, 100).unwrap();

    assert_eq!(a.trajectory(), b.trajectory());
}

#[test]
fn test_rerun_replaces_previous_data() {
    let mut pendulum = DoublePendulum::default();
    pendulum.simulate(1000, 1e-3, 100).unwrap();
    assert_eq!(pendulum.data().nrows(), 11);

    pendulum.simulate(100, 1e-3, 100).unwrap();
    assert_eq!(pendulum.data().nrows(), 2);
}
