//! Backend record DTOs and auth payloads.
//!
//! DESIGN
//! ======
//! These types mirror the backend tables field-for-field. Nullable columns
//! stay `Option` so "absent" and "zero" remain distinct through serde, and
//! `MealType` is a closed enum so unknown meal slots fail at decode time
//! instead of reaching a view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Per-user body metrics and goals. Mirrors the `user_metadata` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Owning user; also the primary key.
    pub id: Uuid,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub target_weight_kg: Option<f64>,
    /// Daily calorie target. Integral floats (`2000.0`) are accepted.
    #[serde(default, deserialize_with = "deserialize_opt_i32_from_number")]
    pub daily_calorie_goal: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

/// A food with per-serving nutrition facts. Mirrors the `food_items` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    /// Owning user, or `None` for shared catalog items.
    pub user_id: Option<Uuid>,
    pub is_verified: bool,
    pub created_at: String,
}

impl FoodItem {
    /// Whether this item belongs to the shared catalog rather than one user.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.user_id.is_none()
    }
}

/// Meal slot a food log entry is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All slots in diary display order.
    pub const ALL: [MealType; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire value, as stored in the `meal_type` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Human-readable heading for diary sections.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snacks",
        }
    }
}

/// One diary entry: a quantity of a food eaten in a meal slot on a date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_item_id: Uuid,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub meal_type: MealType,
    /// Serving multiplier applied to the food item's nutrition facts.
    pub quantity: f64,
    pub created_at: String,
    /// Denormalized food item, present when the query embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_item: Option<FoodItem>,
}

/// A dated body-weight measurement. Mirrors the `weight_logs` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weight_kg: f64,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub created_at: String,
}

/// The identity behind an active session, as returned by `/auth/v1/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Access token and identity issued by a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionGrant {
    pub access_token: String,
    pub user: SessionUser,
}

/// Backend coordinates served by the host at `/api/config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    /// Public API key sent as the `apikey` header.
    pub anon_key: String,
    /// Upper bound for a single session check, in milliseconds.
    pub session_timeout_ms: u32,
}

fn deserialize_opt_i32_from_number<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    let Some(number) = value else {
        return Ok(None);
    };
    if let Some(int) = number.as_i64() {
        return i32::try_from(int)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("value {int} out of range for i32")));
    }
    #[allow(clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= f64::from(i32::MIN)
        && float <= f64::from(i32::MAX)
    {
        return Ok(Some(float as i32));
    }
    Err(D::Error::custom("expected integer-compatible number"))
}
