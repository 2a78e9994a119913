use super::*;

fn session(category: &str) -> YogaSession {
    serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "title": "Morning Flow",
        "trainer_name": "Lisa Mary",
        "category": category,
        "duration": 45
    }))
    .unwrap()
}

#[test]
fn session_meta_includes_category() {
    assert_eq!(session_meta(&session("Yoga")), "45 min • Yoga");
}

#[test]
fn session_meta_without_category_shows_duration_only() {
    assert_eq!(session_meta(&session("")), "45 min");
}
