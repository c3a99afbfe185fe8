pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use guard::{AccessPolicy, GuardDecision};
pub use session::{Session, SessionStore};
