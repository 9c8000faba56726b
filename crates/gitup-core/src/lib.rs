//! Core module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

pub mod errors;
mod registry;
mod repository;
pub mod update;

pub use errors::{DomainError, Result};
pub use registry::RepositoryRegistry;
pub use repository::Repository;
#[cfg(any(test, feature = "testkit"))]
pub use update::MockUpdateService;
pub use update::{GitUpdateService, UpdateError, UpdateService};
