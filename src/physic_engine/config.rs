use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

/// Politique appliquée quand une explosion dépasserait `max_particles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParticleOverflow {
    /// Retire les étincelles les plus anciennes pour faire de la place.
    #[default]
    DropOldest,
    /// Ignore entièrement la nouvelle gerbe.
    SkipBurst,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FireworksConfig {
    // Fusées
    pub rocket_initial_velocity: f32,
    pub rocket_acceleration: f32,
    pub rocket_trail_length: usize,

    // Étincelles
    pub particles_per_burst: usize,
    pub particle_trail_length: usize,
    pub particle_velocity_min: f32,
    pub particle_velocity_max: f32,
    pub particle_friction: f32,
    pub particle_gravity: f32,
    pub particle_decay_min: f32,
    pub particle_decay_max: f32,

    // Planification des lancements (en frames)
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,

    // Rendu
    pub fade_alpha: f32,
    pub modulate_particle_alpha: bool,

    // Plafonds des pools
    pub max_rockets: usize,
    pub max_particles: usize,
    pub particle_overflow: ParticleOverflow,

    /// Graine optionnelle pour rejouer une séquence à l'identique.
    pub seed: Option<u64>,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            rocket_initial_velocity: 1.2,
            rocket_acceleration: 1.05,
            rocket_trail_length: 3,
            particles_per_burst: 50,
            particle_trail_length: 5,
            particle_velocity_min: 1.0,
            particle_velocity_max: 10.0,
            particle_friction: 0.98,
            particle_gravity: 1.0,
            particle_decay_min: 0.015,
            particle_decay_max: 0.06,
            spawn_interval_min: 30.0,
            spawn_interval_max: 80.0,
            fade_alpha: 0.5,
            modulate_particle_alpha: false,
            max_rockets: 256,
            max_particles: 20_000,
            particle_overflow: ParticleOverflow::DropOldest,
            seed: None,
        }
    }
}

impl FireworksConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fireworks config '{path}'"))?;
        let config: Self =
            toml::from_str(&text).with_context(|| format!("Invalid TOML in '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Vérifie que la configuration préserve les garanties de cycle de vie :
    /// toute fusée finit par exploser, toute étincelle finit par s'éteindre.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.rocket_initial_velocity > 0.0,
            "rocket_initial_velocity must be > 0 (got {})",
            self.rocket_initial_velocity
        );
        ensure!(
            self.rocket_acceleration >= 1.0,
            "rocket_acceleration must be >= 1 (got {})",
            self.rocket_acceleration
        );
        ensure!(
            self.particle_friction > 0.0 && self.particle_friction <= 1.0,
            "particle_friction must be in (0, 1] (got {})",
            self.particle_friction
        );
        ensure!(
            self.particle_decay_min > 0.0 && self.particle_decay_min <= self.particle_decay_max,
            "particle decay range [{}, {}) is invalid",
            self.particle_decay_min,
            self.particle_decay_max
        );
        ensure!(
            self.particle_velocity_min <= self.particle_velocity_max,
            "particle velocity range [{}, {}) is inverted",
            self.particle_velocity_min,
            self.particle_velocity_max
        );
        ensure!(
            self.spawn_interval_min >= 0.0 && self.spawn_interval_min <= self.spawn_interval_max,
            "spawn interval range [{}, {}] is invalid",
            self.spawn_interval_min,
            self.spawn_interval_max
        );
        ensure!(
            self.rocket_trail_length >= 1 && self.particle_trail_length >= 1,
            "trail lengths must be >= 1"
        );
        ensure!(
            (0.0..=1.0).contains(&self.fade_alpha),
            "fade_alpha must be in [0, 1] (got {})",
            self.fade_alpha
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FireworksConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: FireworksConfig = toml::from_str(
            r#"
            particles_per_burst = 80
            particle_overflow = "skip_burst"
            "#,
        )
        .unwrap();
        assert_eq!(config.particles_per_burst, 80);
        assert_eq!(config.particle_overflow, ParticleOverflow::SkipBurst);
        assert_eq!(config.rocket_acceleration, 1.05);
        assert_eq!(config.rocket_trail_length, 3);
    }

    #[test]
    fn test_validate_rejects_decelerating_rockets() {
        let config = FireworksConfig {
            rocket_acceleration: 0.9,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rocket_acceleration"));
    }

    #[test]
    fn test_validate_rejects_zero_decay() {
        let config = FireworksConfig {
            particle_decay_min: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
