//! Club (tenant) entity.

pub mod model;

pub use model::{Club, ClubSummary, UpdateClub};
