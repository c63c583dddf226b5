use canvas_fireworks::physic_engine::{
    Color, FireworksConfig, Point, RngSource, Rocket, RocketOutcome,
};
use std::f32::consts::FRAC_PI_2;
mod helpers;
use helpers::{steps_to_completion, MidpointRandom};

// ==================================
// 1. Trajectoire verticale de référence
// ==================================

fn vertical_rocket() -> Rocket {
    Rocket::new(
        Point::new(500.0, 800.0),
        Point::new(500.0, 0.0),
        Color::WHITE,
        &FireworksConfig::default(),
    )
}

#[test]
fn test_vertical_rocket_geometry() {
    let rocket = vertical_rocket();
    assert_eq!(rocket.total_distance, 800.0);
    assert!((rocket.angle + FRAC_PI_2).abs() < 1e-6);
    assert_eq!(rocket.velocity, 1.2);
    assert_eq!(rocket.distance_traveled, 0.0);
}

#[test]
fn test_vertical_rocket_completes_at_closed_form_step() {
    // min n : 1.2 * sum(1.05^k, k=1..n) >= 800  <=>  25.2 * (1.05^n - 1) >= 800
    let mut rocket = vertical_rocket();
    assert_eq!(steps_to_completion(&mut rocket, 500), Some(72));
}

#[test]
fn test_completion_reports_target_and_color() {
    let mut rocket = Rocket::new(
        Point::new(10.0, 100.0),
        Point::new(40.0, 60.0),
        Color::new(12.0, 200.0, 99.0),
        &FireworksConfig::default(),
    );
    let outcome = loop {
        match rocket.advance() {
            RocketOutcome::Continuing => continue,
            done => break done,
        }
    };
    assert_eq!(
        outcome,
        RocketOutcome::Completed {
            position: Point::new(40.0, 60.0),
            color: Color::new(12.0, 200.0, 99.0),
        }
    );
}

// ==================================
// 2. Monotonie
// ==================================

#[test]
fn test_distance_traveled_is_monotonic_until_completion() {
    let mut rocket = vertical_rocket();
    let mut previous_distance = rocket.distance_traveled;
    let mut previous_y = rocket.current_position.y;

    while rocket.advance() == RocketOutcome::Continuing {
        assert!(rocket.distance_traveled > previous_distance);
        assert!(rocket.current_position.y < previous_y, "rocket must climb");
        assert!(rocket.distance_traveled < rocket.total_distance);
        previous_distance = rocket.distance_traveled;
        previous_y = rocket.current_position.y;
    }
    assert!(rocket.distance_traveled >= rocket.total_distance);
}

#[test]
fn test_position_is_not_moved_on_completion() {
    let mut rocket = vertical_rocket();
    let mut last_position = rocket.current_position;
    while rocket.advance() == RocketOutcome::Continuing {
        last_position = rocket.current_position;
    }
    assert_eq!(rocket.current_position, last_position);
}

#[test]
fn test_zero_distance_rocket_completes_on_first_step() {
    let origin = Point::new(300.0, 300.0);
    let mut rocket = Rocket::new(origin, origin, Color::WHITE, &FireworksConfig::default());
    assert_eq!(rocket.total_distance, 0.0);
    assert_eq!(
        rocket.advance(),
        RocketOutcome::Completed {
            position: origin,
            color: Color::WHITE
        }
    );
}

// ==================================
// 3. Traînée et rayon cosmétique
// ==================================

#[test]
fn test_trail_is_bounded_and_starts_at_origin() {
    let mut rocket = vertical_rocket();
    assert_eq!(rocket.trail.len(), 3);
    assert!(rocket.trail.iter().all(|p| *p == Point::new(500.0, 800.0)));

    for _ in 0..20 {
        let before = rocket.current_position;
        rocket.advance();
        assert_eq!(rocket.trail.len(), 3);
        assert_eq!(rocket.trail.newest(), before);
    }
}

#[test]
fn test_segment_goes_from_oldest_trail_point_to_current_position() {
    let mut rocket = vertical_rocket();
    let mut history = vec![rocket.current_position];
    for _ in 0..5 {
        rocket.advance();
        history.push(rocket.current_position);
    }
    // traînée = [p4, p3, p2] ; segment = p2 -> p5
    let (from, to) = rocket.segment();
    assert_eq!(from, history[2]);
    assert_eq!(to, history[5]);
}

#[test]
fn test_target_radius_cycles_within_bounds() {
    let mut rocket = vertical_rocket();
    let mut resets = 0;
    for _ in 0..200 {
        let before = rocket.target_radius;
        rocket.advance();
        assert!(rocket.target_radius >= 1.0 && rocket.target_radius < 8.3);
        if rocket.target_radius < before {
            assert_eq!(rocket.target_radius, 1.0);
            resets += 1;
        }
    }
    assert!(resets > 0);
}

// ==================================
// 4. Lancement
// ==================================

#[test]
fn test_launch_respects_surface_ranges() {
    let config = FireworksConfig::default();
    let mut rng = RngSource::seeded(1234);
    for _ in 0..500 {
        let rocket = Rocket::launch(&mut rng, 1024.0, 800.0, &config);
        assert_eq!(rocket.start_position, Point::new(512.0, 800.0));
        assert!((0.0..1024.0).contains(&rocket.target_position.x));
        assert!((0.0..400.0).contains(&rocket.target_position.y));
        for channel in [rocket.color.r, rocket.color.g, rocket.color.b] {
            assert!((0.0..255.0).contains(&channel));
        }
    }
}

#[test]
fn test_launch_with_midpoint_random() {
    let rocket = Rocket::launch(
        &mut MidpointRandom,
        1000.0,
        800.0,
        &FireworksConfig::default(),
    );
    assert_eq!(rocket.target_position, Point::new(500.0, 200.0));
    assert_eq!(rocket.color, Color::new(127.5, 127.5, 127.5));
}

#[test]
fn test_launch_on_zero_size_surface() {
    let mut rng = RngSource::seeded(5);
    let mut rocket = Rocket::launch(&mut rng, 0.0, 0.0, &FireworksConfig::default());
    assert_eq!(rocket.start_position, Point::ZERO);
    assert_eq!(rocket.target_position, Point::ZERO);
    assert!(matches!(rocket.advance(), RocketOutcome::Completed { .. }));
}
