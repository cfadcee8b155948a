use crate::core::predicate::{YearPredicate, YearValue};
use crate::core::{ConfigProvider, FilterResult, IndexColumn, Pipeline, Row, Storage, Table};
use crate::utils::error::{EtlError, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::iter;
use std::path::Path;

pub struct YearFilterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    predicate: YearPredicate,
}

impl<S: Storage, C: ConfigProvider> YearFilterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_predicate(storage, config, YearPredicate::default())
    }

    pub fn with_predicate(storage: S, config: C, predicate: YearPredicate) -> Self {
        Self {
            storage,
            config,
            predicate,
        }
    }
}

/// Parses CSV bytes into a [`Table`], lifting out a leading unlabelled index column.
pub fn parse_table(path: &Path, data: &[u8]) -> Result<Table> {
    let malformed = |source: csv::Error| EtlError::MalformedInput {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(data);
    let raw_headers = reader.headers().map_err(malformed)?.clone();
    if raw_headers.is_empty() {
        return Err(EtlError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    // 第一欄標頭空白代表先前輸出的索引欄
    let index = if raw_headers.get(0) == Some("") {
        IndexColumn::Carried
    } else {
        IndexColumn::Positional
    };

    let headers: StringRecord = match index {
        IndexColumn::Carried => raw_headers.iter().skip(1).collect(),
        IndexColumn::Positional => raw_headers,
    };

    let mut rows = Vec::new();
    for (position, record) in reader.records().enumerate() {
        let record = record.map_err(malformed)?;
        let row = match index {
            IndexColumn::Carried => Row {
                index: record.get(0).unwrap_or_default().to_string(),
                fields: record.iter().skip(1).collect(),
            },
            IndexColumn::Positional => Row {
                index: position.to_string(),
                fields: record,
            },
        };
        rows.push(row);
    }

    tracing::debug!(
        "Parsed {} rows with {} columns from {} ({:?} index)",
        rows.len(),
        headers.len(),
        path.display(),
        index
    );

    Ok(Table {
        headers,
        index,
        rows,
    })
}

/// Serializes retained rows with the index label as an unlabelled first column.
pub fn render_csv(headers: &StringRecord, rows: &[Row]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(iter::once("").chain(headers.iter()))?;
    for row in rows {
        writer.write_record(iter::once(row.index.as_str()).chain(row.fields.iter()))?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

impl<S: Storage, C: ConfigProvider> Pipeline for YearFilterPipeline<S, C> {
    fn extract(&self) -> Result<Table> {
        let source = self.config.source_path();
        tracing::debug!("Reading {}", source.display());

        let data = self.storage.read_file(source)?;
        tracing::debug!("Read {} bytes", data.len());

        parse_table(source, &data)
    }

    fn transform(&self, table: Table) -> Result<FilterResult> {
        let column = table
            .column_position(&self.predicate.column)
            .ok_or_else(|| EtlError::MissingColumn {
                path: self.config.source_path().to_path_buf(),
                column: self.predicate.column.clone(),
            })?;

        let total_rows = table.len();
        let mut retained = Vec::new();
        let mut missing_years = 0;

        for row in table.rows {
            let cell = row.fields.get(column).unwrap_or_default();
            let value = YearValue::parse(cell).ok_or_else(|| EtlError::YearNotComparable {
                row: row.index.clone(),
                column: self.predicate.column.clone(),
                value: cell.to_string(),
            })?;

            if value == YearValue::Missing {
                missing_years += 1;
            }
            if self.predicate.retains(value) {
                retained.push(row);
            }
        }

        if missing_years > 0 {
            tracing::warn!(
                "⚠️ Dropped {} rows with a missing {} value",
                missing_years,
                self.predicate.column
            );
        }

        Ok(FilterResult {
            headers: table.headers,
            retained,
            total_rows,
            missing_years,
        })
    }

    fn load(&self, result: FilterResult) -> Result<String> {
        let destination = self.config.destination_path();
        let data = render_csv(&result.headers, &result.retained)?;

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.retained.len(),
            data.len(),
            destination.display()
        );
        self.storage.write_file(destination, &data)?;

        Ok(destination.display().to_string())
    }
}
