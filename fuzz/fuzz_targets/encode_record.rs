#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use scoring::{
    ArtifactPaths, CategoricalField, ChurnPredictor, CustomerRecord, NumericField,
    CATEGORICAL_FIELDS, LABEL_COLUMN, NUMERIC_FIELDS,
};

static PREDICTOR: Lazy<ChurnPredictor> = Lazy::new(|| {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../models");
    let paths = ArtifactPaths {
        columns: dir.join("columns.json"),
        scaler: dir.join("scaler.json"),
        model: dir.join("model.json"),
    };
    ChurnPredictor::from_artifacts(&paths, LABEL_COLUMN).expect("bundled artifacts")
});

fn bounded_text(data: &[u8], offset: usize, len: usize) -> String {
    let start = offset.min(data.len());
    let end = (start + len).min(data.len());
    String::from_utf8_lossy(&data[start..end]).to_string()
}

fn numeric_value(tag: u8) -> Option<f64> {
    match tag % 6 {
        0 => None,
        1 => Some(f64::NAN),
        2 => Some(-f64::from(tag)),
        3 => Some(f64::INFINITY),
        _ => Some(f64::from(tag)),
    }
}

fn categorical_value(field: CategoricalField, tag: u8, data: &[u8], offset: usize) -> Option<String> {
    let known = field.known_values();
    match tag % 4 {
        0 => None,
        1 => Some(bounded_text(data, offset, 24)),
        _ => known.get(usize::from(tag) % known.len()).map(|v| v.to_string()),
    }
}

fn check(record: &CustomerRecord) {
    let predictor = &*PREDICTOR;
    match predictor.encode(record) {
        Ok(vector) => {
            assert_eq!(vector.len(), predictor.schema().len());
            let p = predictor
                .predict_encoded(&vector)
                .expect("encoded rows always score")
                .value();
            assert!((0.0..=1.0).contains(&p));
        }
        Err(err) => assert!(err.is_client_error(), "unexpected error: {err}"),
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(record) = serde_json::from_slice::<CustomerRecord>(data) {
        check(&record);
    }

    let mut record = CustomerRecord::default();
    for (i, field) in NUMERIC_FIELDS.into_iter().enumerate() {
        let tag = data.get(i).copied().unwrap_or_default();
        record.set_numeric(field, numeric_value(tag));
    }
    for (i, field) in CATEGORICAL_FIELDS.into_iter().enumerate() {
        let tag = data.get(NUMERIC_FIELDS.len() + i).copied().unwrap_or_default();
        record.set_categorical(field, categorical_value(field, tag, data, i * 3));
    }
    if record.numeric(NumericField::SeniorCitizen).is_some() {
        record.set_numeric(NumericField::SeniorCitizen, Some(f64::from(data.len() as u8 % 2)));
    }
    check(&record);
});
