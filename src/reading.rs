use serde::Deserialize;
use serde_json::Value;

/// One day of the weekly CO2 series, in ppm.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalPoint {
    pub day: String,
    pub value: f64,
}

/// Most recent sensor sample. `timestamp` is kept as the backend sent it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestReading {
    pub co2_level: f64,
    pub air_quality: String,
    pub location: String,
    pub timestamp: String,
}

/// Every successful response wraps its payload in `dados`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub dados: T,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorBody {
    /// The backend's message as display text. Missing, null, empty, zero and
    /// `false` count as no message.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            value @ (Value::Array(_) | Value::Object(_)) => Some(value.to_string()),
            _ => None,
        }
    }
}
