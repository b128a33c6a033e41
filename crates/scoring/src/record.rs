use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::fields::{CategoricalField, NumericField, NUMERIC_FIELDS, NUMERIC_FIELD_COUNT};

/// One customer as submitted by a front-end, before any encoding.
///
/// Numeric fields are `Option` on the wire so that a missing value surfaces
/// as [`ScoringError::InvalidInput`] from the encoder instead of a silent
/// zero. Unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub seniorcitizen: Option<f64>,
    pub tenure: Option<f64>,
    pub monthlycharges: Option<f64>,
    pub totalcharges: Option<f64>,

    pub gender: Option<String>,
    pub partner: Option<String>,
    pub dependents: Option<String>,
    pub phoneservice: Option<String>,
    pub multiplelines: Option<String>,
    pub internetservice: Option<String>,
    pub onlinesecurity: Option<String>,
    pub onlinebackup: Option<String>,
    pub deviceprotection: Option<String>,
    pub techsupport: Option<String>,
    pub streamingtv: Option<String>,
    pub streamingmovies: Option<String>,
    pub contract: Option<String>,
    pub paperlessbilling: Option<String>,
    pub paymentmethod: Option<String>,
}

impl CustomerRecord {
    pub fn numeric(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::SeniorCitizen => self.seniorcitizen,
            NumericField::Tenure => self.tenure,
            NumericField::MonthlyCharges => self.monthlycharges,
            NumericField::TotalCharges => self.totalcharges,
        }
    }

    pub fn categorical(&self, field: CategoricalField) -> Option<&str> {
        self.categorical_slot(field).as_deref()
    }

    pub fn set_numeric(&mut self, field: NumericField, value: Option<f64>) {
        let slot = match field {
            NumericField::SeniorCitizen => &mut self.seniorcitizen,
            NumericField::Tenure => &mut self.tenure,
            NumericField::MonthlyCharges => &mut self.monthlycharges,
            NumericField::TotalCharges => &mut self.totalcharges,
        };
        *slot = value;
    }

    pub fn set_categorical(&mut self, field: CategoricalField, value: Option<String>) {
        *self.categorical_slot_mut(field) = value;
    }

    /// Builder form of [`set_categorical`](Self::set_categorical).
    pub fn with_categorical(mut self, field: CategoricalField, value: &str) -> Self {
        self.set_categorical(field, Some(value.to_string()));
        self
    }

    /// Validated raw numeric values in scaler order.
    ///
    /// Every numeric field is mandatory, finite and non-negative;
    /// `seniorcitizen` is additionally restricted to the flag values 0 and 1.
    pub fn numeric_values(&self) -> Result<[f64; NUMERIC_FIELD_COUNT], ScoringError> {
        let mut values = [0.0f64; NUMERIC_FIELD_COUNT];
        for field in NUMERIC_FIELDS {
            values[field.index()] = validate_numeric(field, self.numeric(field))?;
        }
        Ok(values)
    }

    fn categorical_slot(&self, field: CategoricalField) -> &Option<String> {
        match field {
            CategoricalField::Gender => &self.gender,
            CategoricalField::Partner => &self.partner,
            CategoricalField::Dependents => &self.dependents,
            CategoricalField::PhoneService => &self.phoneservice,
            CategoricalField::MultipleLines => &self.multiplelines,
            CategoricalField::InternetService => &self.internetservice,
            CategoricalField::OnlineSecurity => &self.onlinesecurity,
            CategoricalField::OnlineBackup => &self.onlinebackup,
            CategoricalField::DeviceProtection => &self.deviceprotection,
            CategoricalField::TechSupport => &self.techsupport,
            CategoricalField::StreamingTv => &self.streamingtv,
            CategoricalField::StreamingMovies => &self.streamingmovies,
            CategoricalField::Contract => &self.contract,
            CategoricalField::PaperlessBilling => &self.paperlessbilling,
            CategoricalField::PaymentMethod => &self.paymentmethod,
        }
    }

    fn categorical_slot_mut(&mut self, field: CategoricalField) -> &mut Option<String> {
        match field {
            CategoricalField::Gender => &mut self.gender,
            CategoricalField::Partner => &mut self.partner,
            CategoricalField::Dependents => &mut self.dependents,
            CategoricalField::PhoneService => &mut self.phoneservice,
            CategoricalField::MultipleLines => &mut self.multiplelines,
            CategoricalField::InternetService => &mut self.internetservice,
            CategoricalField::OnlineSecurity => &mut self.onlinesecurity,
            CategoricalField::OnlineBackup => &mut self.onlinebackup,
            CategoricalField::DeviceProtection => &mut self.deviceprotection,
            CategoricalField::TechSupport => &mut self.techsupport,
            CategoricalField::StreamingTv => &mut self.streamingtv,
            CategoricalField::StreamingMovies => &mut self.streamingmovies,
            CategoricalField::Contract => &mut self.contract,
            CategoricalField::PaperlessBilling => &mut self.paperlessbilling,
            CategoricalField::PaymentMethod => &mut self.paymentmethod,
        }
    }
}

fn validate_numeric(field: NumericField, value: Option<f64>) -> Result<f64, ScoringError> {
    let name = field.as_str();
    let Some(value) = value else {
        return Err(ScoringError::invalid_input(name, "required numeric field is missing"));
    };
    if !value.is_finite() {
        return Err(ScoringError::invalid_input(
            name,
            format!("must be finite, got {value}"),
        ));
    }
    if value < 0.0 {
        return Err(ScoringError::invalid_input(
            name,
            format!("must be non-negative, got {value}"),
        ));
    }
    if field == NumericField::SeniorCitizen && value != 0.0 && value != 1.0 {
        return Err(ScoringError::invalid_input(
            name,
            format!("must be 0 or 1, got {value}"),
        ));
    }
    Ok(value)
}
