pub mod tracker;

pub use tracker::{EpisodeRecord, TrainingHistory};
