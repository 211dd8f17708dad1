use super::fuel::{FuelError, drain_tanks, fuel_usage};
use super::warp_computer::{WarpError, warp_displacement};
use crate::flight_control::common::{geo::METERS_PER_NM, vec3d::Vec3D};
use crate::info;
use itertools::Itertools;
use rand::{Rng, rng};

const EPS: f64 = 1e-6;

fn rand_tanks(n: usize) -> Vec<f64> {
    let mut rng = rng();
    (0..n).map(|_| rng.random_range(0.0..2000.0)).collect()
}

fn assert_tanks(tanks: &[f64], expected: &[f64]) {
    for (tank, exp) in tanks.iter().zip_eq(expected.iter()) {
        assert!((tank - exp).abs() < EPS, "{tanks:?} vs {expected:?}");
    }
}

#[test]
fn test_drain_three_tanks_center_first() {
    let mut tanks = vec![100.0, 100.0, 100.0];
    let burnt = drain_tanks(&mut tanks, 50.0).unwrap();
    assert!((burnt - 50.0).abs() < EPS);
    assert_tanks(&tanks, &[100.0, 50.0, 100.0]);
}

#[test]
fn test_drain_pair_evens_out() {
    let mut tanks = vec![50.0, 50.0];
    let burnt = drain_tanks(&mut tanks, 80.0).unwrap();
    assert!((burnt - 80.0).abs() < EPS);
    assert_tanks(&tanks, &[10.0, 10.0]);
}

#[test]
fn test_drain_center_overflow_spills_into_pair() {
    let mut tanks = vec![10.0, 5.0, 10.0];
    drain_tanks(&mut tanks, 9.0).unwrap();
    assert_tanks(&tanks, &[8.0, 0.0, 8.0]);
}

#[test]
fn test_drain_left_excess_pays_alone() {
    let mut tanks = vec![50.0, 10.0];
    drain_tanks(&mut tanks, 20.0).unwrap();
    assert_tanks(&tanks, &[30.0, 10.0]);
}

#[test]
fn test_drain_right_excess_pays_alone() {
    let mut tanks = vec![10.0, 50.0];
    drain_tanks(&mut tanks, 20.0).unwrap();
    assert_tanks(&tanks, &[10.0, 30.0]);
}

#[test]
fn test_drain_steps_outward_over_empty_pairs() {
    let mut tanks = vec![30.0, 1.0, 1.0, 30.0];
    drain_tanks(&mut tanks, 10.0).unwrap();
    assert_tanks(&tanks, &[26.0, 0.0, 0.0, 26.0]);
}

#[test]
fn test_drain_insufficient_leaves_tanks_untouched() {
    let mut tanks = vec![10.0, 10.0];
    let before = tanks.clone();
    let res = drain_tanks(&mut tanks, 30.0);
    assert_eq!(res, Err(FuelError::Insufficient));
    assert_tanks(&tanks, &before);
}

#[test]
fn test_drain_conserves_fuel() {
    info!("Running randomized fuel conservation test");
    let mut rng = rng();
    for _ in 0..200 {
        let n = rng.random_range(1..=7);
        let mut tanks = rand_tanks(n);
        let total: f64 = tanks.iter().sum();
        let usage = rng.random_range(0.0..=total);
        let burnt = drain_tanks(&mut tanks, usage).unwrap();
        let left: f64 = tanks.iter().sum();
        assert!((burnt - usage).abs() < EPS);
        assert!((total - left - usage).abs() < 1e-3, "lost fuel: {total} -> {left} for {usage}");
        assert!(tanks.iter().all(|t| *t >= -EPS), "negative tank: {tanks:?}");
    }
}

#[test]
fn test_fuel_usage_estimate() {
    // 100 nm at 100 m/s with 1 kg/s total flow burns one kg per second
    let usage = fuel_usage(100.0, 100.0, 1.0).unwrap();
    assert!((usage - 1852.0).abs() < EPS);
}

#[test]
fn test_fuel_usage_standstill() {
    assert!(fuel_usage(50.0, 0.0, 1.0).is_none());
    assert!(fuel_usage(50.0, -3.0, 1.0).is_none());
}

#[test]
fn test_displacement_capped_by_max() {
    let delta = Vec3D::new(120.0 * METERS_PER_NM, 0.0, 0.0);
    let disp = warp_displacement(delta, 10.0, 100.0).unwrap();
    assert!((disp.distance_nm() - 120.0).abs() < EPS);
    assert!((disp.traveled_nm() - 100.0).abs() < EPS);
    assert!((disp.factor() - 100.0 / 120.0).abs() < EPS);
    assert!((disp.vector().x() - 100.0 * METERS_PER_NM).abs() < 1e-3);
}

#[test]
fn test_displacement_stops_at_standoff() {
    let delta = Vec3D::new(0.0, 0.0, -40.0 * METERS_PER_NM);
    let disp = warp_displacement(delta, 10.0, 100.0).unwrap();
    assert!((disp.traveled_nm() - 30.0).abs() < EPS);
    // leftover distance equals the standoff
    let remaining = (delta.abs() - disp.vector().abs()) / METERS_PER_NM;
    assert!((remaining - 10.0).abs() < EPS);
}

#[test]
fn test_displacement_bounds_randomized() {
    let mut rng = rng();
    for _ in 0..200 {
        let delta = Vec3D::new(
            rng.random_range(-300_000.0..300_000.0),
            rng.random_range(-3_000.0..3_000.0),
            rng.random_range(-300_000.0..300_000.0),
        );
        if delta.abs() == 0.0 {
            continue;
        }
        let standoff = f64::from(rng.random_range(1u32..30));
        let max = f64::from(rng.random_range(10u32..200));
        let disp = warp_displacement(delta, standoff, max).unwrap();
        assert!(disp.traveled_nm() <= max + EPS);
        assert!(disp.traveled_nm() <= disp.distance_nm() - standoff + EPS);
    }
}

#[test]
fn test_displacement_zero_distance() {
    let res = warp_displacement(Vec3D::zero(), 10.0, 100.0);
    assert_eq!(res, Err(WarpError::AlreadyAtDestination));
}

#[test]
fn test_displacement_backs_off_to_standoff_ring() {
    // destination closer than the standoff: the jump goes backward
    let delta = Vec3D::new(5.0 * METERS_PER_NM, 0.0, 0.0);
    let disp = warp_displacement(delta, 10.0, 100.0).unwrap();
    assert!(disp.traveled_nm() < 0.0);
    let end = Vec3D::<f64>::zero() + disp.vector();
    let dist_after = end.to(&delta).abs() / METERS_PER_NM;
    assert!((dist_after - 10.0).abs() < EPS);
}
