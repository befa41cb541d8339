use super::*;
use crate::net::types::FoodItem;
use uuid::Uuid;

fn log(meal_type: MealType, quantity: f64, name: Option<&str>) -> FoodLog {
    FoodLog {
        id: Uuid::nil(),
        user_id: Uuid::nil(),
        food_item_id: Uuid::nil(),
        date: "2024-03-15".to_owned(),
        meal_type,
        quantity,
        created_at: "2024-03-15T08:00:00Z".to_owned(),
        food_item: name.map(|name| FoodItem {
            id: Uuid::nil(),
            name: name.to_owned(),
            calories: 100.0,
            protein_g: 1.0,
            carbs_g: 2.0,
            fat_g: 3.0,
            user_id: None,
            is_verified: true,
            created_at: "2024-01-01T00:00:00Z".to_owned(),
        }),
    }
}

#[test]
fn entries_for_slot_keeps_only_that_slot_in_order() {
    let logs = vec![
        log(MealType::Breakfast, 1.0, Some("Oats")),
        log(MealType::Dinner, 1.0, Some("Pasta")),
        log(MealType::Breakfast, 2.0, Some("Eggs")),
    ];
    let breakfast: Vec<String> = entries_for_slot(&logs, MealType::Breakfast)
        .iter()
        .map(entry_label)
        .collect();
    assert_eq!(breakfast, ["Oats \u{b7} 1 serving", "Eggs \u{b7} 2 servings"]);
    assert!(entries_for_slot(&logs, MealType::Snack).is_empty());
}

#[test]
fn every_entry_lands_in_exactly_one_slot() {
    let logs = vec![
        log(MealType::Breakfast, 1.0, None),
        log(MealType::Lunch, 1.0, None),
        log(MealType::Dinner, 1.0, None),
        log(MealType::Snack, 1.0, None),
    ];
    let total: usize = MealType::ALL
        .into_iter()
        .map(|meal| entries_for_slot(&logs, meal).len())
        .sum();
    assert_eq!(total, logs.len());
}

#[test]
fn entry_label_without_embedded_item() {
    assert_eq!(
        entry_label(&log(MealType::Lunch, 0.5, None)),
        "Unknown food \u{b7} 0.5 servings"
    );
}
