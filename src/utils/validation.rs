use crate::utils::error::{EtlError, Result};
use std::io;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.into_owned(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 目的地是目錄時無法寫入，提早以輸出錯誤回報
pub fn validate_not_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(EtlError::OutputUnwritable {
            path: path.to_path_buf(),
            source: io::Error::other("destination is a directory"),
        });
    }
    Ok(())
}
