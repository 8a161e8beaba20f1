//! # Context Tokens
//!
//! Data tokens that expose live host state (mod data, player stats, predicate
//! results) to a text-templating system through a narrow, string-based
//! protocol. Each token validates its input once, caches results per local
//! screen, and recomputes them only when the host signals a context change.
//!
//! ## Core Components
//!
//! - **token**: the generic token, its per-screen caches, and the refresh pass
//! - **kinds**: the four token variants (`ModData`, `ModDataKeys`, `PlayerStat`, `GameStateQuery`)
//! - **target**: resolves `farm`/`player` to a mod data store, even mid-load
//! - **predicate**: the seam to the game state query language
//! - **registry**: named registration and dispatch of host signals
//!
//! ## Design Philosophy
//!
//! - **Validated once**: bad input is rejected at validation and never reaches a refresh
//! - **Screen-isolated**: every screen has its own caches; nothing leaks between them
//! - **Degrade, don't fail**: missing data renders as an empty or default value

pub mod config;
pub mod error;
pub mod kinds;
pub mod predicate;
pub mod registry;
pub mod target;
pub mod token;

pub use config::*;
pub use error::*;
pub use kinds::*;
pub use predicate::*;
pub use registry::*;
pub use target::*;
pub use token::*;
