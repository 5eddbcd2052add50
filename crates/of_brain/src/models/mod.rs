//! Match-state inputs and controller outputs shared across the crate.

pub mod action;
pub mod context;
pub mod player;
pub mod types;

pub use action::Action;
pub use context::TeamContext;
pub use player::{Player, Role, Team};
pub use types::{BallState, Position};
