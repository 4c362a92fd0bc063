use std::fmt;

use crate::air_quality::{self, AirQuality};
use crate::config::{
    FALLBACK_AIR_QUALITY, FALLBACK_CO2_LEVEL, FALLBACK_LAST_UPDATE, FALLBACK_LOCATION,
    HISTORY_AXIS_TICKS, HISTORY_TITLE, HISTORY_WINDOW_LABEL, REFRESH_NOTE,
};
use crate::loader::ViewState;
use crate::reading::HistoricalPoint;
use crate::timestamp;

/// Display-ready text for the sensor screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub co2_level: String,
    pub air_quality: String,
    pub air_quality_category: AirQuality,
    pub location: String,
    pub last_update: String,
    pub history: Vec<HistoricalPoint>,
}

impl Panel {
    /// Without a latest reading every field falls back to the demo values.
    pub fn from_view(view: &ViewState) -> Self {
        let history = view.history.clone();

        match &view.latest {
            Some(reading) => Self {
                co2_level: format!("{} PPM", reading.co2_level),
                air_quality: reading.air_quality.clone(),
                air_quality_category: air_quality::classify(&reading.air_quality),
                location: reading.location.clone(),
                last_update: timestamp::format(&reading.timestamp),
                history,
            },
            None => Self {
                co2_level: FALLBACK_CO2_LEVEL.to_string(),
                air_quality: FALLBACK_AIR_QUALITY.to_string(),
                air_quality_category: air_quality::classify(FALLBACK_AIR_QUALITY),
                location: FALLBACK_LOCATION.to_string(),
                last_update: FALLBACK_LAST_UPDATE.to_string(),
                history,
            },
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nível de CO2: {}", self.co2_level)?;
        writeln!(
            f,
            "Qualidade do Ar: {} ({})",
            self.air_quality,
            self.air_quality_category.color()
        )?;
        writeln!(f, "Localização: {}", self.location)?;
        writeln!(f, "Última Atualização: {}", self.last_update)?;
        writeln!(f, "{REFRESH_NOTE}")?;
        writeln!(f)?;
        writeln!(f, "{HISTORY_TITLE}")?;
        let ticks = HISTORY_AXIS_TICKS.map(|t| t.to_string()).join(" / ");
        writeln!(f, "  escala: {ticks}")?;
        for point in &self.history {
            writeln!(f, "  {}: {} PPM", point.day, point.value)?;
        }
        write!(f, "{HISTORY_WINDOW_LABEL}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadState;
    use crate::reading::LatestReading;

    fn ready_view() -> ViewState {
        ViewState {
            load_state: LoadState::Ready,
            history: vec![HistoricalPoint {
                day: "Seg".into(),
                value: 412.5,
            }],
            latest: Some(LatestReading {
                co2_level: 2150.0,
                air_quality: "RUIM".into(),
                location: "Sala 12".into(),
                timestamp: "2025-04-02T08:00:00Z".into(),
            }),
        }
    }

    #[test]
    fn test_loading_view_uses_fallbacks() {
        let panel = Panel::from_view(&ViewState::default());
        assert_eq!(panel.co2_level, "2000 PPM");
        assert_eq!(panel.air_quality, "Moderada");
        assert_eq!(panel.air_quality_category, AirQuality::Moderate);
        assert_eq!(panel.location, "IFMA-Campus Timon");
        assert_eq!(panel.last_update, "31/03/2025, 22:37:42");
        assert!(panel.history.is_empty());
    }

    #[test]
    fn test_failed_view_uses_fallbacks() {
        let view = ViewState {
            load_state: LoadState::Failed("db unreachable".into()),
            ..ViewState::default()
        };
        assert_eq!(
            Panel::from_view(&view),
            Panel::from_view(&ViewState::default())
        );
    }

    #[test]
    fn test_ready_view_uses_reading() {
        let panel = Panel::from_view(&ready_view());
        assert_eq!(panel.co2_level, "2150 PPM");
        assert_eq!(panel.air_quality, "RUIM");
        assert_eq!(panel.air_quality_category, AirQuality::Poor);
        assert_eq!(panel.location, "Sala 12");
        assert_eq!(panel.last_update, timestamp::format("2025-04-02T08:00:00Z"));
        assert_eq!(panel.history.len(), 1);
    }

    #[test]
    fn test_fractional_co2_level_is_kept() {
        let mut view = ready_view();
        if let Some(reading) = view.latest.as_mut() {
            reading.co2_level = 412.5;
        }
        assert_eq!(Panel::from_view(&view).co2_level, "412.5 PPM");
    }

    #[test]
    fn test_render_lists_history_points() {
        let rendered = Panel::from_view(&ready_view()).to_string();
        assert!(rendered.contains("Nível de CO2: 2150 PPM"));
        assert!(rendered.contains("Localização: Sala 12"));
        assert!(rendered.contains("  Seg: 412.5 PPM"));
        assert!(rendered.contains("2500 / 2000 / 1500 / 1000 / 500 / 0"));
        assert!(rendered.ends_with(HISTORY_WINDOW_LABEL));
    }
}
