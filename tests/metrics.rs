use fittrack_rs::error::ComputeError;
use fittrack_rs::workout::{RaceWalking, Running, Swimming, Workout};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn running_reference_reading() {
    let running = Running::from_values(&[15000.0, 1.0, 75.0]).expect("running record");

    assert!(close(running.distance_km(), 9.75));
    assert!(close(running.mean_speed_kmh().expect("speed"), 9.75));
    // (18 * 9.75 - 20) * 75 / 1000 * 1 * 60
    assert!(close(running.calories_burned().expect("calories"), 699.75));
}

#[test]
fn race_walking_reference_reading() {
    let walking = RaceWalking::from_values(&[9000.0, 1.0, 75.0, 180.0]).expect("walking record");

    assert!(close(walking.distance_km(), 5.85));
    assert!(close(walking.mean_speed_kmh().expect("speed"), 5.85));
    // 5.85^2 / 180 truncates to 0, leaving only the weight term: 0.035 * 75 * 60
    assert!(close(walking.calories_burned().expect("calories"), 157.5));
}

#[test]
fn race_walking_truncates_speed_by_height_term() {
    // 58.5^2 / 180 = 19.0125, truncated to 19 before scaling
    let walking = RaceWalking::from_values(&[90000.0, 1.0, 75.0, 180.0]).expect("walking record");

    let expected = (0.035 * 75.0 + 19.0 * 0.029 * 75.0) * 60.0;
    assert!(close(walking.calories_burned().expect("calories"), expected));
    assert!(close(walking.calories_burned().expect("calories"), 2637.0));
}

#[test]
fn swimming_reference_reading() {
    let swimming =
        Swimming::from_values(&[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming record");

    assert!(close(swimming.distance_km(), 1.0));
    assert!(close(swimming.mean_speed_kmh().expect("speed"), 1.0));
    assert!(close(swimming.calories_burned().expect("calories"), 336.0));
}

#[test]
fn swimming_distance_ignores_stroke_count() {
    let no_strokes = Swimming::from_values(&[0.0, 1.0, 80.0, 25.0, 40.0]).expect("record");
    assert!(close(no_strokes.distance_km(), 1.0));
}

#[test]
fn step_distance_is_monotone_in_action() {
    let mut previous = -1.0;
    for action in [0.0, 1.0, 500.0, 9000.0, 15000.0, 100000.0] {
        let running = Running::from_values(&[action, 1.0, 75.0]).expect("record");
        let distance = running.distance_km();
        assert!(distance > previous);
        previous = distance;
    }
}

#[test]
fn zero_duration_is_a_defined_error() {
    let running = Running::from_values(&[15000.0, 0.0, 75.0]).expect("record");

    assert!(matches!(
        running.mean_speed_kmh(),
        Err(ComputeError::ZeroDuration)
    ));
    assert!(running.summary().is_err());
}

#[test]
fn zero_height_is_a_defined_error() {
    let walking = RaceWalking::from_values(&[9000.0, 1.0, 75.0, 0.0]).expect("record");

    assert!(matches!(
        walking.calories_burned(),
        Err(ComputeError::ZeroHeight)
    ));
    // Distance and speed do not involve height and stay computable.
    assert!(close(walking.distance_km(), 5.85));
    assert!(walking.mean_speed_kmh().is_ok());
}

#[test]
fn summary_is_idempotent() {
    let swimming =
        Swimming::from_values(&[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming record");

    let first = swimming.summary().expect("first summary");
    let second = swimming.summary().expect("second summary");
    assert_eq!(first, second);
}
