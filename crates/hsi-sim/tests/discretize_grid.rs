use hsi_core::errors::HsiError;
use hsi_sim::discretize;

#[test]
fn leading_sample_is_pinned_to_the_initial_fraction() {
    let times = vec![0.0, 0.3, f64::INFINITY, f64::INFINITY];
    let series = discretize(&times, 5, 0.1, 4, 0.25).unwrap();
    assert_eq!(series.samples()[0], 0.25);
    assert_eq!(series.len(), 6);
}

#[test]
fn series_is_non_decreasing() {
    let times = vec![0.0, 0.41, 0.07, 2.3, f64::INFINITY, 1.11, 0.9, 0.02];
    let series = discretize(&times, 40, 0.1, 8, 0.25).unwrap();
    for window in series.samples().windows(2) {
        assert!(window[0] <= window[1]);
    }
}

#[test]
fn samples_count_strictly_earlier_infections() {
    let times = vec![0.0, 0.05, 0.15, f64::INFINITY];
    let series = discretize(&times, 2, 0.1, 4, 0.25).unwrap();
    assert_eq!(series.samples(), &[0.25, 0.5, 0.75]);
}

#[test]
fn grid_point_hits_are_right_continuous() {
    // An infection at exactly t_i is not yet visible in sample i.
    let times = vec![0.1];
    let series = discretize(&times, 2, 0.1, 1, 0.0).unwrap();
    assert_eq!(series.samples(), &[0.0, 0.0, 1.0]);
}

#[test]
fn final_sample_matches_the_census_at_the_horizon() {
    let times = vec![0.0, 0.2, 0.7, 3.9, f64::INFINITY];
    let series = discretize(&times, 10, 0.4, 5, 0.2).unwrap();
    let horizon = 10.0 * 0.4;
    let expected = times
        .iter()
        .filter(|time| **time < horizon)
        .count() as f64
        / 5.0;
    assert_eq!(series.last(), Some(expected));
}

#[test]
fn population_mismatch_is_rejected() {
    let err = discretize(&[0.0, 1.0], 4, 0.1, 3, 0.0).unwrap_err();
    match err {
        HsiError::Config(info) => assert_eq!(info.code, "population-mismatch"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_positive_step_size_is_rejected() {
    let err = discretize(&[0.0], 4, 0.0, 1, 0.0).unwrap_err();
    match err {
        HsiError::Config(info) => assert_eq!(info.code, "step-size-range"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_population_is_rejected() {
    let err = discretize(&[], 4, 0.1, 0, 0.0).unwrap_err();
    match err {
        HsiError::Config(info) => assert_eq!(info.code, "empty-population"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn points_iterate_over_the_grid() {
    let series = discretize(&[0.05, f64::INFINITY], 2, 0.5, 2, 0.5).unwrap();
    let points: Vec<(f64, f64)> = series.points().collect();
    assert_eq!(points, vec![(0.0, 0.5), (0.5, 0.5), (1.0, 0.5)]);
}
