//! Member registry library.
//!
//! A member service that depends on an injected `MemberRepository`,
//! with an in-memory repository and an interactive shell on top.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::{Args, RegistryConfig, StoreKind};
pub use usecase::MemberService;
