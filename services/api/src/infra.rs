use essay_rubric::config::InputLimits;
use essay_rubric::error::InputError;
use essay_rubric::AcademicEvaluationEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: AcademicEvaluationEngine,
    pub(crate) limits: InputLimits,
}

pub(crate) fn read_text(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn read_json(path: &Path) -> Result<Value, InputError> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).map_err(|source| InputError::MalformedJson {
        origin: path.display().to_string(),
        source,
    })
}

/// Reads an optional JSON document, treating a missing flag as JSON `null`.
pub(crate) fn read_optional_json(path: Option<&Path>) -> Result<Value, InputError> {
    path.map(read_json).transpose().map(Option::unwrap_or_default)
}

pub(crate) fn enforce_text_limit(text: &str, limits: &InputLimits) -> Result<(), InputError> {
    if text.len() > limits.max_text_bytes {
        return Err(InputError::TextTooLarge {
            actual: text.len(),
            limit: limits.max_text_bytes,
        });
    }
    Ok(())
}
