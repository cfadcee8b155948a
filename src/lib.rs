pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::LocalStorage;

pub use crate::core::etl::{EtlEngine, RunSummary};
pub use crate::core::pipeline::YearFilterPipeline;
pub use crate::core::predicate::{YearPredicate, YearValue};
pub use crate::utils::error::{EtlError, Result};
