use crate::domain::model::{FilterResult, Table};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Replaces `path` with `data`, or leaves it untouched on error.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &Path;
    fn destination_path(&self) -> &Path;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Table>;
    fn transform(&self, table: Table) -> Result<FilterResult>;
    fn load(&self, result: FilterResult) -> Result<String>;
}
