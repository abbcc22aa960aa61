//! Composition root.
//!
//! The only place that picks a concrete `MemberRepository`. Services receive
//! the repository through their constructors.

use std::{fmt, str::FromStr, sync::Arc};

use clap::Parser;

use crate::{
    domain::MemberRepository, infrastructure::repository::InMemoryMemberRepository,
    usecase::MemberService,
};

/// Default log level for the binary's own crate
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Backing store for members
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreKind {
    /// Process-local HashMap; contents are lost on exit
    #[default]
    Memory,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => f.write_str("memory"),
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "member-registry", version, about = "Interactive member registry shell")]
pub struct Args {
    /// Backing store for members
    #[arg(long, value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, value_parser = parse_log_level)]
    pub log_level: String,
}

fn parse_log_level(s: &str) -> Result<String, String> {
    tracing::Level::from_str(s)
        .map(|level| level.to_string().to_lowercase())
        .map_err(|_| format!("invalid log level '{s}' (expected trace, debug, info, warn or error)"))
}

/// Runtime configuration for the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub store: StoreKind,
    pub log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl From<Args> for RegistryConfig {
    fn from(args: Args) -> Self {
        Self {
            store: args.store,
            log_level: args.log_level,
        }
    }
}

impl RegistryConfig {
    /// Build the repository selected by `store`
    pub fn member_repository(&self) -> Arc<dyn MemberRepository> {
        match self.store {
            StoreKind::Memory => Arc::new(InMemoryMemberRepository::new()),
        }
    }

    /// Build a `MemberService` wired to the configured repository
    pub fn member_service(&self) -> MemberService {
        MemberService::new(self.member_repository())
    }
}
