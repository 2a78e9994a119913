//! REST payload records for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Every endpoint decodes into an explicit record here. Presentation-only
//! fields default when missing so sparse payloads still render, while
//! identity fields (`id`, `name`, `title`) stay required and a payload
//! missing them fails to decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/api/auth/me` and the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier. Numeric ids are accepted and kept as strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Whether the account has a premium subscription.
    #[serde(default)]
    pub is_premium: bool,
}

impl User {
    /// First word of the display name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// Response body of `POST /api/auth/login` and `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Request body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A guided yoga, meditation, or sleep session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaSession {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub trainer_id: String,
    #[serde(default)]
    pub trainer_name: String,
    #[serde(default)]
    pub trainer_image: String,
    /// Category label (e.g. `"Yoga"`, `"Meditation"`, `"Sleep"`).
    #[serde(default)]
    pub category: String,
    /// Length in minutes.
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub duration: u32,
    #[serde(default)]
    pub description: String,
    /// Hero image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// A multi-day program bundling several sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub duration_days: u32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub sessions_count: u32,
}

impl Program {
    /// `"start - end"` when both dates are known.
    pub fn date_range(&self) -> Option<String> {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => Some(format!("{start} - {end}")),
            (Some(start), None) => Some(start.clone()),
            _ => None,
        }
    }
}

/// Request body for `POST /api/progress`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    pub session_id: String,
    pub completed: bool,
    pub progress_percentage: u8,
}

impl ProgressUpdate {
    /// Progress row recorded when the user presses "Start Session".
    pub fn started(session_id: impl Into<String>) -> Self {
        Self { session_id: session_id.into(), completed: false, progress_percentage: 0 }
    }
}

/// A stored progress row as returned by the progress endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub progress_percentage: u32,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
