//! Record → model row projection.
//!
//! ```text
//! CustomerRecord ─┬─ numeric fields ──────────────→ raw values at numeric positions
//!                 └─ categorical (F, V) ─→ "F_V" ─→ 1.0 if "F_V" ∈ schema, else absorbed
//!                                                   ↓
//!                              scaler applied in place to numeric positions
//! ```
//!
//! Every position starts at 0.0, so schema columns the record never produced
//! stay zero and the row always has exactly `schema.len()` entries in schema
//! order.

use tracing::debug;

use crate::error::ScoringError;
use crate::fields::{CategoricalField, CATEGORICAL_FIELDS, NUMERIC_FIELDS};
use crate::record::CustomerRecord;
use crate::schema::EncodingSchema;

/// A categorical value for which the trained schema has no indicator column.
/// Encoded exactly as if the field had been left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsorbedValue {
    pub field: CategoricalField,
    pub value: String,
}

/// Model-ready row; `values()[i]` belongs to `schema.columns()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedVector {
    values: Vec<f64>,
    absorbed: Vec<AbsorbedValue>,
}

impl EncodedVector {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Categorical values dropped during column reconciliation.
    pub fn absorbed(&self) -> &[AbsorbedValue] {
        &self.absorbed
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Encode `record` against `schema`.
///
/// Pure: the same record and schema always give the same row. Fails only
/// with [`ScoringError::InvalidInput`] for a missing or invalid numeric
/// field, including one whose scaled value overflows; unseen categorical
/// values are absorbed, never rejected.
pub fn encode(
    record: &CustomerRecord,
    schema: &EncodingSchema,
) -> Result<EncodedVector, ScoringError> {
    let raw = record.numeric_values()?;

    let mut values = vec![0.0f64; schema.len()];
    let positions = schema.numeric_positions();
    for (&position, value) in positions.iter().zip(raw) {
        values[position] = value;
    }

    let mut absorbed = Vec::new();
    for field in CATEGORICAL_FIELDS {
        let Some(value) = record.categorical(field) else {
            continue;
        };
        match schema.position(&field.column_name(value)) {
            Some(position) => values[position] = 1.0,
            None => {
                debug!(
                    field = field.as_str(),
                    value,
                    documented = field.is_known_value(value),
                    "categorical value has no trained column; encoded as absent"
                );
                absorbed.push(AbsorbedValue {
                    field,
                    value: value.to_string(),
                });
            }
        }
    }

    let scaler = schema.scaler();
    for (column, &position) in positions.iter().enumerate() {
        let scaled = scaler.transform_value(column, values[position]);
        if !scaled.is_finite() {
            return Err(ScoringError::invalid_input(
                NUMERIC_FIELDS[column].as_str(),
                format!("value {} is out of range for the fitted scaler", values[position]),
            ));
        }
        values[position] = scaled;
    }

    Ok(EncodedVector { values, absorbed })
}
