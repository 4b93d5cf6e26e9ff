// Host-side tests for signal spawning, travel and pulses.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trigslink_globe::core::sphere::generate;
use trigslink_globe::core::{
    decay_pulses, Globe, GlobeConfig, NeighborGraph, SignalSystem, Viewport,
};

fn quiet_config() -> GlobeConfig {
    GlobeConfig {
        spawn_probability: 0.0,
        seed: Some(7),
        ..GlobeConfig::default()
    }
}

#[test]
fn signal_arrives_after_twenty_frames_and_pulses_its_end() {
    let mut globe = Globe::new(quiet_config(), Viewport::new(1280.0, 800.0)).unwrap();
    let end = *globe
        .cloud()
        .graph()
        .neighbors(3)
        .first()
        .expect("point 3 should have neighbors");
    globe.signals_mut().launch(3, end);

    for frame in 1..20 {
        let stats = globe.advance();
        assert_eq!(stats.arrived, 0, "arrived early at frame {frame}");
        assert_eq!(globe.signals().len(), 1);
        assert_eq!(globe.pulses()[end], 0.0);
    }
    let stats = globe.advance();
    assert_eq!(stats.arrived, 1);
    assert!(globe.signals().is_empty());
    assert_eq!(globe.pulses()[end], 1.0);
    let others = globe
        .pulses()
        .iter()
        .enumerate()
        .filter(|&(i, &p)| i != end && p != 0.0)
        .count();
    assert_eq!(others, 0);
}

#[test]
fn progress_strictly_increases_until_removal() {
    let mut signals = SignalSystem::new(10, 0.3, 0.0);
    let mut pulses = vec![0.0; 4];
    signals.launch(0, 2);
    let mut last = 0.0;
    let mut frames = 0;
    while !signals.is_empty() {
        let arrived = signals.advance(&mut pulses);
        frames += 1;
        if let Some(s) = signals.iter().next() {
            assert_eq!(arrived, 0);
            assert!(s.progress > last);
            assert!(s.progress < 1.0);
            last = s.progress;
        } else {
            assert_eq!(arrived, 1);
        }
    }
    assert_eq!(frames, 4);
    assert_eq!(pulses, vec![0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn arrival_pulses_exactly_once() {
    let mut signals = SignalSystem::new(10, 0.5, 0.0);
    let mut pulses = vec![0.0; 3];
    signals.launch(0, 1);
    signals.launch(2, 1);
    assert_eq!(signals.advance(&mut pulses), 0);
    assert_eq!(signals.advance(&mut pulses), 2);
    assert_eq!(pulses[1], 1.0);
    pulses[1] = 0.25;
    assert_eq!(signals.advance(&mut pulses), 0);
    assert_eq!(pulses[1], 0.25);
}

#[test]
fn arrival_at_unknown_point_is_harmless() {
    let mut signals = SignalSystem::new(1, 1.0, 0.0);
    let mut pulses = vec![0.0; 2];
    signals.launch(0, 9);
    assert_eq!(signals.advance(&mut pulses), 1);
    assert_eq!(pulses, vec![0.0, 0.0]);
}

#[test]
fn spawned_signals_follow_graph_edges() {
    let points = generate(200, 320.0).unwrap();
    let graph = NeighborGraph::build(&points, 95.0, 5);
    let mut signals = SignalSystem::new(1000, 0.05, 1.0);
    let mut rng = StdRng::seed_from_u64(3);
    let mut spawned = 0;
    for _ in 0..500 {
        if let Some(s) = signals.spawn(&mut rng, &graph) {
            spawned += 1;
            assert_eq!(s.progress, 0.0);
            assert!(graph.neighbors(s.start).contains(&s.end));
        }
    }
    assert!(spawned > 0);
    assert_eq!(spawned, signals.len());
}

#[test]
fn spawning_respects_the_cap() {
    let points = generate(200, 320.0).unwrap();
    let graph = NeighborGraph::build(&points, 95.0, 5);
    let mut signals = SignalSystem::new(3, 0.001, 1.0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        signals.spawn(&mut rng, &graph);
        assert!(signals.len() <= 3);
    }
    assert_eq!(signals.len(), 3);
}

#[test]
fn zero_probability_never_spawns() {
    let points = generate(200, 320.0).unwrap();
    let graph = NeighborGraph::build(&points, 95.0, 5);
    let mut signals = SignalSystem::new(60, 0.05, 0.0);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        assert!(signals.spawn(&mut rng, &graph).is_none());
    }
}

#[test]
fn isolated_points_never_spawn() {
    let points = vec![Vec3::ZERO, Vec3::new(500.0, 0.0, 0.0)];
    let graph = NeighborGraph::build(&points, 95.0, 5);
    let mut signals = SignalSystem::new(60, 0.05, 1.0);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        assert!(signals.spawn(&mut rng, &graph).is_none());
    }
    let empty = NeighborGraph::build(&[], 95.0, 5);
    assert!(signals.spawn(&mut rng, &empty).is_none());
}

#[test]
fn pulse_decay_is_monotonic_and_floored() {
    let mut pulses = vec![1.0, 0.02, 0.0, 0.5];
    decay_pulses(&mut pulses, 0.04);
    assert!((pulses[0] - 0.96).abs() < 1e-6);
    assert_eq!(pulses[1], 0.0);
    assert_eq!(pulses[2], 0.0);
    for _ in 0..50 {
        let before = pulses.clone();
        decay_pulses(&mut pulses, 0.04);
        for (b, a) in before.iter().zip(&pulses) {
            assert!(a <= b);
            assert!(*a >= 0.0);
        }
    }
    assert!(pulses.iter().all(|&p| p == 0.0));
}

#[test]
fn globe_pulses_fade_after_arrival() {
    let mut globe = Globe::new(quiet_config(), Viewport::new(1280.0, 800.0)).unwrap();
    globe.signals_mut().launch(10, 11);
    for _ in 0..20 {
        globe.advance();
    }
    assert_eq!(globe.pulses()[11], 1.0);
    let mut last = 1.0;
    for _ in 0..30 {
        globe.advance();
        let p = globe.pulses()[11];
        assert!(p <= last && p >= 0.0);
        last = p;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn random_spawns_stay_under_the_cap_in_a_running_globe() {
    let config = GlobeConfig {
        spawn_probability: 1.0,
        max_signals: 12,
        seed: Some(21),
        ..GlobeConfig::default()
    };
    let mut globe = Globe::new(config, Viewport::new(1280.0, 800.0)).unwrap();
    let mut arrivals = 0;
    for _ in 0..300 {
        arrivals += globe.advance().arrived;
        assert!(globe.signals().len() <= 12);
        for s in globe.signals().iter() {
            assert!(s.progress > 0.0 && s.progress < 1.0);
        }
    }
    assert!(arrivals > 0);
}

#[test]
fn clearing_signals_on_teardown() {
    let mut globe = Globe::new(quiet_config(), Viewport::new(1280.0, 800.0)).unwrap();
    globe.signals_mut().launch(0, 1);
    globe.signals_mut().launch(2, 3);
    globe.clear_signals();
    assert!(globe.signals().is_empty());
}

#[test]
fn empty_globe_advances_without_work() {
    let config = GlobeConfig {
        dot_count: 0,
        spawn_probability: 1.0,
        ..quiet_config()
    };
    let mut globe = Globe::new(config, Viewport::new(1280.0, 800.0)).unwrap();
    for _ in 0..10 {
        let stats = globe.advance();
        assert!(!stats.spawned);
        assert_eq!(stats.arrived, 0);
    }
    assert!(globe.projected().is_empty());
}
