use crate::error::ScoringError;
use crate::fields::{CategoricalField, CATEGORICAL_FIELDS, NUMERIC_COLUMN_NAMES};
use crate::model::ProbabilityModel;
use crate::record::CustomerRecord;
use crate::scaler::NumericScaler;
use crate::schema::EncodingSchema;

/// Indicator values per field in the order the training job emitted them
/// (alphabetical within each field).
fn trained_values(field: CategoricalField) -> &'static [&'static str] {
    match field {
        CategoricalField::Gender => &["Female", "Male"],
        CategoricalField::Partner
        | CategoricalField::Dependents
        | CategoricalField::PhoneService
        | CategoricalField::PaperlessBilling => &["No", "Yes"],
        CategoricalField::MultipleLines => &["No", "No phone service", "Yes"],
        CategoricalField::InternetService => &["DSL", "Fiber optic", "No"],
        CategoricalField::OnlineSecurity
        | CategoricalField::OnlineBackup
        | CategoricalField::DeviceProtection
        | CategoricalField::TechSupport
        | CategoricalField::StreamingTv
        | CategoricalField::StreamingMovies => &["No", "No internet service", "Yes"],
        CategoricalField::Contract => &["Month-to-month", "One year", "Two year"],
        CategoricalField::PaymentMethod => &[
            "Bank transfer (automatic)",
            "Credit card (automatic)",
            "Electronic check",
            "Mailed check",
        ],
    }
}

/// Label-free telco column list: 4 numeric columns then 41 indicators.
pub(crate) fn telco_columns() -> Vec<String> {
    let mut columns: Vec<String> = NUMERIC_COLUMN_NAMES.iter().map(|s| s.to_string()).collect();
    for field in CATEGORICAL_FIELDS {
        for value in trained_values(field) {
            columns.push(field.column_name(value));
        }
    }
    columns
}

pub(crate) fn telco_scaler() -> NumericScaler {
    NumericScaler::standard(vec![0.16, 32.0, 65.0, 2280.0], vec![0.37, 24.5, 30.0, 2265.0])
        .expect("valid scaler")
        .with_feature_names(NUMERIC_COLUMN_NAMES.iter().map(|s| s.to_string()).collect())
        .expect("four names")
}

pub(crate) fn telco_schema() -> EncodingSchema {
    EncodingSchema::new(telco_columns(), telco_scaler()).expect("valid schema")
}

pub(crate) fn baseline_record() -> CustomerRecord {
    CustomerRecord {
        seniorcitizen: Some(0.0),
        tenure: Some(12.0),
        monthlycharges: Some(70.5),
        totalcharges: Some(800.0),
        ..CustomerRecord::default()
    }
    .with_categorical(CategoricalField::Gender, "Female")
    .with_categorical(CategoricalField::Partner, "No")
    .with_categorical(CategoricalField::Dependents, "No")
    .with_categorical(CategoricalField::PhoneService, "Yes")
    .with_categorical(CategoricalField::MultipleLines, "No")
    .with_categorical(CategoricalField::InternetService, "DSL")
    .with_categorical(CategoricalField::OnlineSecurity, "No")
    .with_categorical(CategoricalField::OnlineBackup, "No")
    .with_categorical(CategoricalField::DeviceProtection, "No")
    .with_categorical(CategoricalField::TechSupport, "No")
    .with_categorical(CategoricalField::StreamingTv, "No")
    .with_categorical(CategoricalField::StreamingMovies, "No")
    .with_categorical(CategoricalField::Contract, "Month-to-month")
    .with_categorical(CategoricalField::PaperlessBilling, "Yes")
    .with_categorical(CategoricalField::PaymentMethod, "Electronic check")
}

/// Model stub returning a canned class-probability batch.
pub(crate) struct FixedModel {
    width: usize,
    output: Option<Vec<[f64; 2]>>,
}

impl FixedModel {
    pub(crate) fn new(width: usize, output: Vec<[f64; 2]>) -> Self {
        Self {
            width,
            output: Some(output),
        }
    }

    /// Stub whose scoring call always fails.
    pub(crate) fn failing(width: usize) -> Self {
        Self {
            width,
            output: None,
        }
    }
}

impl ProbabilityModel for FixedModel {
    fn model_id(&self) -> &str {
        "fixed"
    }

    fn model_version(&self) -> &str {
        "0"
    }

    fn n_features(&self) -> usize {
        self.width
    }

    fn predict_proba(&self, _rows: &[&[f64]]) -> Result<Vec<[f64; 2]>, ScoringError> {
        self.output
            .clone()
            .ok_or_else(|| ScoringError::ModelInvocation("stub model failure".to_string()))
    }
}
