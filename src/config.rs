pub const BASE_URL: &str = "http://localhost:3001";

// Both requests hit the same path. The latest reading most likely belongs on
// its own endpoint; keep them identical until the backend contract says otherwise.
pub const HISTORY_PATH: &str = "/sensor/media-semana";
pub const LATEST_READING_PATH: &str = "/sensor/media-semana";

pub const HISTORY_ERROR_MESSAGE: &str = "Erro ao buscar dados";
pub const LATEST_READING_ERROR_MESSAGE: &str = "Erro ao buscar última leitura";

/// Shown in place of live data while loading or after a failed load.
pub const FALLBACK_CO2_LEVEL: &str = "2000 PPM";
pub const FALLBACK_AIR_QUALITY: &str = "Moderada";
pub const FALLBACK_LOCATION: &str = "IFMA-Campus Timon";
pub const FALLBACK_LAST_UPDATE: &str = "31/03/2025, 22:37:42";

pub const REFRESH_NOTE: &str = "As informações serão atualizadas a cada 10 minutos";
pub const HISTORY_TITLE: &str = "Histórico de CO2 - Semanal";
pub const HISTORY_WINDOW_LABEL: &str = "Últimos 7 dias";
pub const HISTORY_AXIS_TICKS: [u32; 6] = [2500, 2000, 1500, 1000, 500, 0];
