//! Game tuning and user-visible labels.
//!
//! Every field has a default so a host can pass a partial JSON object (or none
//! at all) to `start_game_with_config`. Defaults are four weeks, a 30 second
//! countdown ticking once per second and a 500 ms shake.

#[cfg(feature = "serde")]
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of week buttons shown on the selection screen.
    pub weeks: u8,
    /// Countdown start value for every level.
    pub level_seconds: u32,
    /// Interval between countdown ticks.
    pub tick_ms: u32,
    /// Duration of the transient shake effect.
    pub shake_ms: u32,
    /// Max level for the console subscriber ("trace" .. "error").
    pub log_level: String,
    pub labels: Labels,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            weeks: 4,
            level_seconds: 30,
            tick_ms: 1000,
            shake_ms: 500,
            log_level: "info".into(),
            labels: Labels::default(),
        }
    }
}

/// Strings rendered by the controller. `{n}`, `{m}` and `{s}` are substituted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Labels {
    pub week_button: String,
    pub current_week: String,
    pub final_status: String,
    pub training_status: String,
    pub preview_title: String,
    pub elapsed: String,
    pub data_not_found: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            week_button: "Week {n}".into(),
            current_week: "Week {n}".into(),
            final_status: "🔥 완성 문장 도전!".into(),
            training_status: "🧱 덩어리 훈련 중...".into(),
            preview_title: "완성문장 {n}".into(),
            elapsed: "⏱️ 이번 주차 완료 시간: {m}분 {s}초".into(),
            data_not_found: "해당 주차의 데이터가 없습니다.".into(),
        }
    }
}

impl Labels {
    pub fn week_button(&self, week: u8) -> String {
        self.week_button.replace("{n}", &week.to_string())
    }

    pub fn current_week(&self, week: u8) -> String {
        self.current_week.replace("{n}", &week.to_string())
    }

    pub fn preview_title(&self, group_number: usize) -> String {
        self.preview_title.replace("{n}", &group_number.to_string())
    }

    pub fn elapsed(&self, minutes: u64, seconds: u64) -> String {
        self.elapsed
            .replace("{m}", &minutes.to_string())
            .replace("{s}", &seconds.to_string())
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config object.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> crate::error::GameResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::error::GameError::Parse(format!("game config: {e}")))
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
