use std::collections::HashMap;
use std::path::Path;

use crate::error::{parse_artifact, ScoringError};
use crate::fields::{NUMERIC_COLUMN_NAMES, NUMERIC_FIELD_COUNT};
use crate::scaler::NumericScaler;

/// Training-time column layout plus the fitted numeric scaler.
///
/// The column list is the only authority on which features exist and in
/// which order; nothing about a request can add or move a column. Built once
/// at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct EncodingSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    numeric_positions: [usize; NUMERIC_FIELD_COUNT],
    scaler: NumericScaler,
}

impl EncodingSchema {
    /// Build from an already label-free column list.
    pub fn new(columns: Vec<String>, scaler: NumericScaler) -> Result<Self, ScoringError> {
        if columns.is_empty() {
            return Err(ScoringError::SchemaMismatch(
                "expected column list is empty".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            if let Some(previous) = index.insert(name.clone(), position) {
                return Err(ScoringError::SchemaMismatch(format!(
                    "column `{name}` appears at positions {previous} and {position}"
                )));
            }
        }

        let mut numeric_positions = [0usize; NUMERIC_FIELD_COUNT];
        for (slot, name) in numeric_positions.iter_mut().zip(NUMERIC_COLUMN_NAMES) {
            *slot = *index.get(name).ok_or_else(|| {
                ScoringError::SchemaMismatch(format!(
                    "numeric column `{name}` missing from expected columns"
                ))
            })?;
        }

        check_scaler(&scaler)?;

        Ok(Self {
            columns,
            index,
            numeric_positions,
            scaler,
        })
    }

    /// Build from the column list persisted by training, which still carries
    /// the target column. An empty `label_column` disables the filter.
    pub fn from_trained_columns(
        columns: Vec<String>,
        label_column: &str,
        scaler: NumericScaler,
    ) -> Result<Self, ScoringError> {
        let columns = columns
            .into_iter()
            .filter(|c| label_column.is_empty() || c != label_column)
            .collect();
        Self::new(columns, scaler)
    }

    pub fn load(
        columns_path: &Path,
        scaler_path: &Path,
        label_column: &str,
    ) -> Result<Self, ScoringError> {
        let columns: Vec<String> = parse_artifact(columns_path)?;
        let scaler = NumericScaler::from_file(scaler_path)?;
        Self::from_trained_columns(columns, label_column, scaler)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    /// Positions of the numeric columns, in scaler order.
    pub fn numeric_positions(&self) -> &[usize; NUMERIC_FIELD_COUNT] {
        &self.numeric_positions
    }

    pub fn scaler(&self) -> &NumericScaler {
        &self.scaler
    }
}

fn check_scaler(scaler: &NumericScaler) -> Result<(), ScoringError> {
    if scaler.len() != NUMERIC_FIELD_COUNT {
        return Err(ScoringError::SchemaMismatch(format!(
            "scaler fitted on {} columns, expected {} numeric columns",
            scaler.len(),
            NUMERIC_FIELD_COUNT
        )));
    }
    let names = scaler.feature_names();
    if !names.is_empty() && names.iter().map(String::as_str).ne(NUMERIC_COLUMN_NAMES) {
        return Err(ScoringError::SchemaMismatch(format!(
            "scaler fitted on {names:?}, expected {NUMERIC_COLUMN_NAMES:?}"
        )));
    }
    Ok(())
}
