use super::*;

// =============================================================
// Helpers
// =============================================================

const USER: &str = "9b2f7c1e-3d4a-4b8e-9f10-2a3b4c5d6e7f";
const FOOD: &str = "0c1d2e3f-4a5b-4c6d-8e7f-8091a2b3c4d5";
const LOG: &str = "5e6f7a8b-9c0d-4e1f-a2b3-c4d5e6f7a8b9";

fn food_item_json() -> serde_json::Value {
    serde_json::json!({
        "id": FOOD,
        "name": "Oatmeal",
        "calories": 150,
        "protein_g": 5.0,
        "carbs_g": 27.0,
        "fat_g": 2.5,
        "user_id": null,
        "is_verified": true,
        "created_at": "2024-01-01T00:00:00Z"
    })
}

fn food_log_json(meal_type: &str) -> serde_json::Value {
    serde_json::json!({
        "id": LOG,
        "user_id": USER,
        "food_item_id": FOOD,
        "date": "2024-03-15",
        "meal_type": meal_type,
        "quantity": 1.5,
        "created_at": "2024-03-15T08:00:00Z",
        "food_item": food_item_json()
    })
}

// =============================================================
// MealType
// =============================================================

#[test]
fn meal_type_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&MealType::Breakfast).unwrap(), "\"breakfast\"");
    assert_eq!(serde_json::to_string(&MealType::Lunch).unwrap(), "\"lunch\"");
    assert_eq!(serde_json::to_string(&MealType::Dinner).unwrap(), "\"dinner\"");
    assert_eq!(serde_json::to_string(&MealType::Snack).unwrap(), "\"snack\"");
}

#[test]
fn meal_type_as_str_matches_wire_value() {
    for meal in MealType::ALL {
        assert_eq!(serde_json::to_string(&meal).unwrap(), format!("\"{}\"", meal.as_str()));
    }
}

#[test]
fn meal_type_rejects_unknown_and_mis_cased_values() {
    assert!(serde_json::from_str::<MealType>("\"brunch\"").is_err());
    assert!(serde_json::from_str::<MealType>("\"Breakfast\"").is_err());
    assert!(serde_json::from_str::<MealType>("\"\"").is_err());
}

#[test]
fn meal_type_all_is_in_diary_order() {
    assert_eq!(
        MealType::ALL,
        [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack]
    );
}

// =============================================================
// FoodLog
// =============================================================

#[test]
fn food_log_with_embedded_item_preserves_meal_type() {
    for meal in MealType::ALL {
        let log: FoodLog = serde_json::from_value(food_log_json(meal.as_str())).unwrap();
        assert_eq!(log.meal_type, meal);
        let back: FoodLog = serde_json::from_str(&serde_json::to_string(&log).unwrap()).unwrap();
        assert_eq!(back, log);
        assert_eq!(back.food_item.as_ref().map(|f| f.name.as_str()), Some("Oatmeal"));
    }
}

#[test]
fn food_log_rejects_unknown_meal_type() {
    let err = serde_json::from_value::<FoodLog>(food_log_json("second-breakfast"));
    assert!(err.is_err());
}

#[test]
fn food_log_without_embedded_item_omits_field() {
    let mut value = food_log_json("lunch");
    value.as_object_mut().unwrap().remove("food_item");
    let log: FoodLog = serde_json::from_value(value).unwrap();
    assert!(log.food_item.is_none());
    let json = serde_json::to_value(&log).unwrap();
    assert!(json.get("food_item").is_none());
}

// =============================================================
// FoodItem
// =============================================================

#[test]
fn food_item_null_owner_is_shared() {
    let item: FoodItem = serde_json::from_value(food_item_json()).unwrap();
    assert!(item.is_shared());
    assert!(item.is_verified);
    assert!((item.calories - 150.0).abs() < f64::EPSILON);
}

#[test]
fn food_item_with_owner_is_not_shared() {
    let mut value = food_item_json();
    value["user_id"] = serde_json::json!(USER);
    let item: FoodItem = serde_json::from_value(value).unwrap();
    assert!(!item.is_shared());
    assert_eq!(item.user_id, Some(Uuid::parse_str(USER).unwrap()));
}

// =============================================================
// UserMetadata
// =============================================================

#[test]
fn user_metadata_distinguishes_null_from_zero() {
    let value = serde_json::json!({
        "id": USER,
        "height_cm": null,
        "weight_kg": 0.0,
        "target_weight_kg": null,
        "daily_calorie_goal": 0,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    });
    let meta: UserMetadata = serde_json::from_value(value).unwrap();
    assert_eq!(meta.height_cm, None);
    assert_eq!(meta.weight_kg, Some(0.0));
    assert_eq!(meta.daily_calorie_goal, Some(0));

    let json = serde_json::to_value(&meta).unwrap();
    assert!(json["height_cm"].is_null());
    assert_eq!(json["daily_calorie_goal"], 0);
}

#[test]
fn user_metadata_accepts_integral_float_goal() {
    let value = serde_json::json!({
        "id": USER,
        "height_cm": 180.5,
        "weight_kg": 82.0,
        "target_weight_kg": 78.0,
        "daily_calorie_goal": 2200.0,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    });
    let meta: UserMetadata = serde_json::from_value(value).unwrap();
    assert_eq!(meta.daily_calorie_goal, Some(2200));
}

#[test]
fn user_metadata_rejects_fractional_goal() {
    let value = serde_json::json!({
        "id": USER,
        "height_cm": null,
        "weight_kg": null,
        "target_weight_kg": null,
        "daily_calorie_goal": 1999.5,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    });
    assert!(serde_json::from_value::<UserMetadata>(value).is_err());
}

#[test]
fn user_metadata_missing_goal_is_none() {
    let value = serde_json::json!({
        "id": USER,
        "height_cm": null,
        "weight_kg": null,
        "target_weight_kg": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    });
    let meta: UserMetadata = serde_json::from_value(value).unwrap();
    assert_eq!(meta.daily_calorie_goal, None);
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn session_user_ignores_extra_backend_fields() {
    let value = serde_json::json!({
        "id": USER,
        "aud": "authenticated",
        "role": "authenticated",
        "email": "ada@example.com"
    });
    let user: SessionUser = serde_json::from_value(value).unwrap();
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[test]
fn session_grant_decodes_token_response() {
    let value = serde_json::json!({
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "r-1",
        "user": { "id": USER }
    });
    let grant: SessionGrant = serde_json::from_value(value).unwrap();
    assert_eq!(grant.access_token, "jwt-abc");
    assert_eq!(grant.user.email, None);
}

#[test]
fn weight_log_decodes() {
    let value = serde_json::json!({
        "id": LOG,
        "user_id": USER,
        "weight_kg": 81.3,
        "date": "2024-03-10",
        "created_at": "2024-03-10T07:00:00Z"
    });
    let log: WeightLog = serde_json::from_value(value).unwrap();
    assert_eq!(log.date, "2024-03-10");
}
