//! Error type shared by the dataset loader, the controller and the browser glue.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The selected week has no entry in the dataset.
    #[error("no sentence data for week {week}")]
    DataNotFound { week: u8 },

    #[error("invalid sentence data in week{week} (id {id}): {reason}")]
    InvalidDataset { week: u8, id: String, reason: String },

    #[error("required page element {0} is missing")]
    MissingElement(String),

    #[error("failed to parse {0}")]
    Parse(String),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type GameResult<T> = Result<T, GameError>;
