use canvas_fireworks::physic_engine::{FireworksConfig, ParticleOverflow};
use std::io::Write;

#[test]
fn test_default_config_is_valid() {
    let config = FireworksConfig::default();
    config.validate().unwrap();
    assert_eq!(config.particles_per_burst, 50);
    assert_eq!(config.rocket_trail_length, 3);
    assert_eq!(config.particle_trail_length, 5);
    assert_eq!(config.particle_overflow, ParticleOverflow::DropOldest);
    assert!(!config.modulate_particle_alpha);
    assert!(config.seed.is_none());
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fireworks.toml");
    let path = path.to_str().unwrap();

    let config = FireworksConfig {
        particles_per_burst: 80,
        fade_alpha: 0.2,
        particle_overflow: ParticleOverflow::SkipBurst,
        seed: Some(7),
        ..FireworksConfig::default()
    };
    config.save_to_file(path).unwrap();

    let loaded = FireworksConfig::from_file(path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_keys_take_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "particles_per_burst = 12").unwrap();
    writeln!(file, "particle_overflow = \"skip_burst\"").unwrap();

    let loaded = FireworksConfig::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(loaded.particles_per_burst, 12);
    assert_eq!(loaded.particle_overflow, ParticleOverflow::SkipBurst);
    assert_eq!(loaded.rocket_acceleration, 1.05);
    assert_eq!(loaded.max_particles, 20_000);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "particles_per_burst = \"many\"").unwrap();

    let err = FireworksConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid TOML"));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let config = FireworksConfig::from_file("does/not/exist.toml").unwrap_or_default();
    assert_eq!(config, FireworksConfig::default());
}

#[test]
fn test_rejects_configs_breaking_lifecycle() {
    let cases = [
        FireworksConfig {
            rocket_acceleration: 0.99,
            ..FireworksConfig::default()
        },
        FireworksConfig {
            rocket_initial_velocity: 0.0,
            ..FireworksConfig::default()
        },
        FireworksConfig {
            particle_friction: 1.5,
            ..FireworksConfig::default()
        },
        FireworksConfig {
            particle_decay_min: 0.0,
            ..FireworksConfig::default()
        },
        FireworksConfig {
            spawn_interval_min: 90.0,
            ..FireworksConfig::default()
        },
        FireworksConfig {
            particle_trail_length: 0,
            ..FireworksConfig::default()
        },
        FireworksConfig {
            fade_alpha: 1.5,
            ..FireworksConfig::default()
        },
    ];
    for config in cases {
        assert!(config.validate().is_err(), "accepted {config:?}");
    }
}

#[test]
fn test_invalid_values_in_file_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rocket_acceleration = 0.5").unwrap();
    assert!(FireworksConfig::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/fireworks.toml");
    let loaded = FireworksConfig::from_file(path).unwrap();
    assert_eq!(loaded, FireworksConfig::default());
}
