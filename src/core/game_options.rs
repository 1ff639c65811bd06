use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
#[readonly::make]
pub struct GameOptions {
    pub is_log_enabled: bool,
    pub track_annotations: bool,
}

impl GameOptions {
    pub fn new(is_log_enabled: bool, track_annotations: bool) -> Self {
        Self {
            is_log_enabled,
            track_annotations,
        }
    }

    pub fn with_log(is_log_enabled: bool) -> Self {
        Self {
            is_log_enabled,
            ..Self::default()
        }
    }

    /// Blank input means defaults.
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        let trimmed = json.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_str(trimmed)?)
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new(false, true)
    }
}

#[derive(Debug)]
pub enum OptionsError {
    Json(serde_json::Error),
}

impl From<serde_json::Error> for OptionsError {
    fn from(err: serde_json::Error) -> Self {
        OptionsError::Json(err)
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Json(err) => write!(f, "Invalid game options JSON: {err}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Json(err) => Some(err),
        }
    }
}
