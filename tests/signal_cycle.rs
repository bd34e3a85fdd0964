use intersection_sim::{
    config::SignalConfig,
    simulation::{SignalController, SignalPhase, LIT_INTENSITY},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test the documented cadence: 5 one-second ticks of green, 2 of yellow, 5 of red
#[test]
fn test_default_cycle_with_one_second_ticks() {
    let mut signal = SignalController::new(SignalConfig::default());
    assert_eq!(signal.phase(), SignalPhase::Green);

    for tick in 1..=4 {
        signal.update(1000.0);
        assert_eq!(signal.phase(), SignalPhase::Green, "still green after {} ticks", tick);
    }
    signal.update(1000.0);
    assert_eq!(signal.phase(), SignalPhase::Yellow, "yellow after 5 ticks");

    signal.update(1000.0);
    assert_eq!(signal.phase(), SignalPhase::Yellow);
    signal.update(1000.0);
    assert_eq!(signal.phase(), SignalPhase::Red, "red after 2 more ticks");
    assert!(signal.is_red());

    for _ in 0..4 {
        signal.update(1000.0);
        assert_eq!(signal.phase(), SignalPhase::Red);
    }
    signal.update(1000.0);
    assert_eq!(signal.phase(), SignalPhase::Green, "green again after 5 more ticks");
}

/// Test that arbitrary tick sequences never skip or reorder phases
#[test]
fn test_phases_follow_fixed_cycle_for_random_deltas() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut signal = SignalController::new(SignalConfig::default());
    let mut previous = signal.phase();
    let mut transitions = 0;

    for _ in 0..20_000 {
        let dt = rng.gen_range(-50.0..9000.0);
        signal.update(dt);
        let current = signal.phase();
        if current != previous {
            assert_eq!(current, previous.next(), "phase jumped from {} to {}", previous, current);
            transitions += 1;
        }
        previous = current;
    }

    assert!(transitions > 100, "expected many transitions, got {}", transitions);
}

/// Test that zero, negative and NaN deltas leave the controller untouched
#[test]
fn test_non_positive_delta_is_no_op() {
    let mut signal = SignalController::new(SignalConfig::default());
    signal.update(1500.0);

    for dt in [0.0, -1.0, -100_000.0, f32::NAN] {
        signal.update(dt);
        assert_eq!(signal.phase(), SignalPhase::Green);
        assert_eq!(signal.elapsed_ms(), 1500.0, "delta {} changed the timer", dt);
    }
}

/// Test that a single huge delta only moves one phase and drops the excess
#[test]
fn test_large_delta_makes_single_transition() {
    let mut signal = SignalController::new(SignalConfig::default());
    signal.update(60_000.0);
    assert_eq!(signal.phase(), SignalPhase::Yellow);
    assert_eq!(signal.elapsed_ms(), 0.0);
    assert_eq!(signal.remaining_ms(), 2000.0);
}

#[test]
fn test_custom_durations_are_honoured() {
    let mut signal = SignalController::new(SignalConfig {
        green_ms: 100.0,
        yellow_ms: 50.0,
        red_ms: 200.0,
    });

    let mut ticks_in = Vec::new();
    let mut current = signal.phase();
    let mut count = 0;
    while ticks_in.len() < 3 {
        signal.update(10.0);
        count += 1;
        if signal.phase() != current {
            ticks_in.push((current, count));
            current = signal.phase();
            count = 0;
        }
    }

    assert_eq!(
        ticks_in,
        vec![(SignalPhase::Green, 10), (SignalPhase::Yellow, 5), (SignalPhase::Red, 20)]
    );
}

#[test]
fn test_lamp_cue_lights_only_active_phase() {
    let mut signal = SignalController::new(SignalConfig::default());

    for expected in [SignalPhase::Green, SignalPhase::Yellow, SignalPhase::Red] {
        assert_eq!(signal.phase(), expected);
        let lamps = signal.lamps();
        let lit: Vec<_> = lamps.iter().filter(|lamp| lamp.emissive).collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].phase, expected);
        assert_eq!(lit[0].intensity, LIT_INTENSITY);
        assert!(lamps.iter().filter(|lamp| !lamp.emissive).all(|lamp| lamp.intensity == 0.0));

        signal.update(signal.duration_of(expected));
    }
}

#[test]
fn test_reset_returns_to_green() {
    let mut signal = SignalController::new(SignalConfig::default());
    signal.update(5000.0);
    signal.update(2000.0);
    signal.update(1234.0);
    assert!(signal.is_red());

    signal.reset();
    assert_eq!(signal.phase(), SignalPhase::Green);
    assert_eq!(signal.elapsed_ms(), 0.0);
}
