pub mod etl;
pub mod pipeline;
pub mod predicate;

pub use crate::domain::model::{FilterResult, IndexColumn, Row, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
