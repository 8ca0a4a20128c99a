//! Mode-driven visual state engine shared by the web and native front-ends.
//!
//! Nothing in this crate touches a platform API; front-ends feed it input
//! events and timestamps and read back [`SessionSnapshot`]s.

pub mod behavior;
pub mod clock;
pub mod color;
pub mod constants;
pub mod easing;
pub mod engine;
pub mod error;
pub mod history;
pub mod metrics;
pub mod modes;
pub mod scheduler;
pub mod session;
pub mod state;

pub use behavior::*;
pub use clock::SessionClock;
pub use color::ResolvedPalette;
pub use easing::Easing;
pub use engine::*;
pub use error::{EngineError, EngineResult};
pub use history::BoundedHistory;
pub use metrics::*;
pub use modes::*;
pub use scheduler::{Scheduler, TimerId};
pub use session::*;
pub use state::*;
