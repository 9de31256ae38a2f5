//! Domain model for user identities.

mod error;
mod ids;
mod role;
mod user;

pub use error::ParseRoleError;
pub use ids::UserId;
pub use role::Role;
pub use user::{User, create_user};
