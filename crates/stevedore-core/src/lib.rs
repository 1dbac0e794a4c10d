//! Core types for stevedore.
//!
//! This crate defines the validated release request ([`ReleaseRequest`]),
//! version derivations ([`ReleaseVersion`]), the `stevedore.toml` and
//! per-environment configuration ([`ProjectConfig`], [`EnvironmentConfig`]),
//! and the deploy-file staging guard ([`StagedDeployFiles`]).

pub mod config;
pub mod error;
pub mod request;
pub mod stage;
pub mod version;

pub use config::{EnvironmentConfig, ProjectConfig, StevedoreConfig};
pub use error::{Error, Result};
pub use request::{ReleaseCommand, ReleaseRequest};
pub use stage::{StageError, StagedDeployFiles};
pub use version::ReleaseVersion;
