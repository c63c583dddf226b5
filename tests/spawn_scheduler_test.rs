use canvas_fireworks::physic_engine::{RngSource, SpawnScheduler};
mod helpers;
use helpers::{MidpointRandom, ScriptedRandom};

#[test]
fn test_fixed_threshold_spawns_once_then_resets() {
    let mut rng = ScriptedRandom::constant(50.0);
    let mut scheduler = SpawnScheduler::new(30.0, 80.0, &mut rng);
    assert_eq!(scheduler.tick_counter, 0);
    assert_eq!(scheduler.interval_target, 50);

    // le compteur passe de 0 à 50 sans lancement
    for tick in 0..50 {
        assert!(!scheduler.tick(&mut rng), "unexpected launch at tick {tick}");
        assert_eq!(scheduler.tick_counter, tick + 1);
    }

    // tick 50 : compteur == seuil => lancement et remise à zéro
    assert!(scheduler.tick(&mut rng));
    assert_eq!(scheduler.tick_counter, 0);

    assert!(!scheduler.tick(&mut rng));
    assert_eq!(scheduler.tick_counter, 1);
}

#[test]
fn test_threshold_is_redrawn_every_frame() {
    let mut rng = ScriptedRandom::new(vec![40.0, 41.2, 79.6, 30.4]);
    let mut scheduler = SpawnScheduler::new(30.0, 80.0, &mut rng);
    assert_eq!(scheduler.interval_target, 40);

    scheduler.tick(&mut rng);
    assert_eq!(scheduler.interval_target, 41);
    scheduler.tick(&mut rng);
    assert_eq!(scheduler.interval_target, 80);
    scheduler.tick(&mut rng);
    assert_eq!(scheduler.interval_target, 30);

    // un tirage par frame, plus le tirage initial
    assert_eq!(rng.calls.len(), 4);
    assert!(rng.calls.iter().all(|call| *call == (30.0, 80.0)));
}

#[test]
fn test_midpoint_threshold() {
    let scheduler = SpawnScheduler::new(30.0, 80.0, &mut MidpointRandom);
    assert_eq!(scheduler.interval_target, 55);
}

#[test]
fn test_random_thresholds_stay_in_range() {
    let mut rng = RngSource::seeded(8);
    let mut scheduler = SpawnScheduler::new(30.0, 80.0, &mut rng);
    let mut launches = 0;
    for _ in 0..10_000 {
        if scheduler.tick(&mut rng) {
            launches += 1;
        }
        assert!((30..=80).contains(&scheduler.interval_target));
    }
    // un lancement toutes les 31 à 81 frames
    assert!((10_000 / 81..=10_000 / 31).contains(&launches));
}

#[test]
fn test_force_next_triggers_launch() {
    let mut rng = ScriptedRandom::constant(50.0);
    let mut scheduler = SpawnScheduler::new(30.0, 80.0, &mut rng);
    scheduler.force_next();
    assert!(scheduler.tick(&mut rng));
    assert_eq!(scheduler.tick_counter, 0);
}

#[test]
fn test_interval_range_can_change() {
    let mut rng = MidpointRandom;
    let mut scheduler = SpawnScheduler::new(30.0, 80.0, &mut rng);
    scheduler.set_interval_range(2.0, 4.0);
    scheduler.tick(&mut rng);
    assert_eq!(scheduler.interval_target, 3);
}
