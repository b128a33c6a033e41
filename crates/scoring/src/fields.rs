/// Name of the training target as it appears in the persisted column list.
pub const LABEL_COLUMN: &str = "churn";

pub const NUMERIC_FIELDS: [NumericField; 4] = [
    NumericField::SeniorCitizen,
    NumericField::Tenure,
    NumericField::MonthlyCharges,
    NumericField::TotalCharges,
];
pub const NUMERIC_FIELD_COUNT: usize = NUMERIC_FIELDS.len();

/// Column names of the scaled numeric features, in scaler order.
pub const NUMERIC_COLUMN_NAMES: [&str; NUMERIC_FIELD_COUNT] = [
    NumericField::SeniorCitizen.as_str(),
    NumericField::Tenure.as_str(),
    NumericField::MonthlyCharges.as_str(),
    NumericField::TotalCharges.as_str(),
];

pub const CATEGORICAL_FIELDS: [CategoricalField; 15] = [
    CategoricalField::Gender,
    CategoricalField::Partner,
    CategoricalField::Dependents,
    CategoricalField::PhoneService,
    CategoricalField::MultipleLines,
    CategoricalField::InternetService,
    CategoricalField::OnlineSecurity,
    CategoricalField::OnlineBackup,
    CategoricalField::DeviceProtection,
    CategoricalField::TechSupport,
    CategoricalField::StreamingTv,
    CategoricalField::StreamingMovies,
    CategoricalField::Contract,
    CategoricalField::PaperlessBilling,
    CategoricalField::PaymentMethod,
];

const YES_NO: &[&str] = &["Yes", "No"];
const INTERNET_ADDON: &[&str] = &["Yes", "No", "No internet service"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    SeniorCitizen,
    Tenure,
    MonthlyCharges,
    TotalCharges,
}

impl NumericField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeniorCitizen => "seniorcitizen",
            Self::Tenure => "tenure",
            Self::MonthlyCharges => "monthlycharges",
            Self::TotalCharges => "totalcharges",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::SeniorCitizen => 0,
            Self::Tenure => 1,
            Self::MonthlyCharges => 2,
            Self::TotalCharges => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Gender,
    Partner,
    Dependents,
    PhoneService,
    MultipleLines,
    InternetService,
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
    Contract,
    PaperlessBilling,
    PaymentMethod,
}

impl CategoricalField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Partner => "partner",
            Self::Dependents => "dependents",
            Self::PhoneService => "phoneservice",
            Self::MultipleLines => "multiplelines",
            Self::InternetService => "internetservice",
            Self::OnlineSecurity => "onlinesecurity",
            Self::OnlineBackup => "onlinebackup",
            Self::DeviceProtection => "deviceprotection",
            Self::TechSupport => "techsupport",
            Self::StreamingTv => "streamingtv",
            Self::StreamingMovies => "streamingmovies",
            Self::Contract => "contract",
            Self::PaperlessBilling => "paperlessbilling",
            Self::PaymentMethod => "paymentmethod",
        }
    }

    /// Values the customer-facing forms offer for this field.
    ///
    /// Informational only: the trained column list decides which values
    /// produce an indicator.
    pub const fn known_values(self) -> &'static [&'static str] {
        match self {
            Self::Gender => &["Male", "Female"],
            Self::Partner | Self::Dependents | Self::PhoneService | Self::PaperlessBilling => {
                YES_NO
            }
            Self::MultipleLines => &["Yes", "No", "No phone service"],
            Self::InternetService => &["DSL", "Fiber optic", "No"],
            Self::OnlineSecurity
            | Self::OnlineBackup
            | Self::DeviceProtection
            | Self::TechSupport
            | Self::StreamingTv
            | Self::StreamingMovies => INTERNET_ADDON,
            Self::Contract => &["Month-to-month", "One year", "Two year"],
            Self::PaymentMethod => &[
                "Electronic check",
                "Mailed check",
                "Bank transfer (automatic)",
                "Credit card (automatic)",
            ],
        }
    }

    pub fn is_known_value(self, value: &str) -> bool {
        self.known_values().contains(&value)
    }

    /// Indicator column for `value`: `<field>_<value>`, value kept verbatim.
    pub fn column_name(self, value: &str) -> String {
        format!("{}_{}", self.as_str(), value)
    }
}
