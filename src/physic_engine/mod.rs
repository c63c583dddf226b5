pub mod r#trait;
pub use r#trait::{EntityVisitor, PhysicEngine};

pub mod types;
pub use self::types::{Color, ParticleOutcome, Point, RocketOutcome, UpdateResult, Vec2};

pub mod trail;
pub use self::trail::Trail;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod particle;
pub use self::particle::Particle;

pub mod config;
pub use self::config::{FireworksConfig, ParticleOverflow};

pub mod random;
pub use self::random::{RandomSource, RngSource};

pub mod pools;
pub use self::pools::EntityPool;

pub mod spawn_scheduler;
pub use self::spawn_scheduler::SpawnScheduler;

pub mod physic_engine_fireworks;
pub use self::physic_engine_fireworks::PhysicEngineFireworks;
#[cfg(any(test, feature = "test_helpers"))]
pub use self::physic_engine_fireworks::PhysicEngineTestHelpers;
