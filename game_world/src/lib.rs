//! # Game World
//!
//! The host-side object graph read by the context tokens: players, locations,
//! their key/value stores, and the save data that exists while a game is still
//! loading. This crate holds no token or caching logic.

pub mod entities;
pub mod host;
pub mod world_state;

pub use entities::*;
pub use host::*;
pub use world_state::*;
