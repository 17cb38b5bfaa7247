//! User API Common Types
//!
//! Shared types used by the backend and by anything that talks to it.

pub mod error;
pub mod stats;
pub mod user;

pub use error::{ErrorResponse, FieldErrors};
pub use stats::UserStats;
pub use user::{User, UserDraft, UserId, UserRequest};
