#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirQuality {
    Good,
    Moderate,
    Poor,
    Unknown,
}

impl AirQuality {
    /// Badge colour as a hex RGB string.
    pub fn color(self) -> &'static str {
        match self {
            AirQuality::Good => "#22c55e",
            AirQuality::Moderate => "#eab308",
            AirQuality::Poor => "#ef4444",
            AirQuality::Unknown => "#6b7280",
        }
    }
}

/// Maps the backend's Portuguese label onto a category, ignoring case.
pub fn classify(quality: &str) -> AirQuality {
    match quality.to_lowercase().as_str() {
        "boa" => AirQuality::Good,
        "moderada" => AirQuality::Moderate,
        "ruim" => AirQuality::Poor,
        _ => AirQuality::Unknown,
    }
}
