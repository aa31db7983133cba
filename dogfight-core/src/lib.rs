pub mod dogfight;
pub mod engagement;
pub mod gunnery;
pub mod jet;

pub use dogfight::{
    DogfightConfig, DogfightEnding, DogfightError, DogfightReport, run_dogfight,
};
pub use engagement::{EngagementError, EngagementOutcome, FighterOutcome, resolve_engagement};
pub use gunnery::{hit_probabilities, hit_probability, spread_area};
pub use jet::{FULL_HEALTH, JetFighter, JetModel, ShotBurst};
