use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_full_backend_payload() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "5b1c",
        "email": "amy@example.com",
        "name": "Amy Lee",
        "profile_image": "https://example.com/amy.svg",
        "is_premium": true,
        "created_at": "2026-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.id, "5b1c");
    assert_eq!(user.email, "amy@example.com");
    assert_eq!(user.profile_image.as_deref(), Some("https://example.com/amy.svg"));
    assert!(user.is_premium);
}

#[test]
fn user_accepts_numeric_id_and_sparse_fields() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": 1, "name": "Amy" })).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Amy");
    assert_eq!(user.email, "");
    assert_eq!(user.profile_image, None);
    assert!(!user.is_premium);
}

#[test]
fn user_without_name_is_rejected() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "id": "u1" }));
    assert!(result.is_err());
}

#[test]
fn user_with_object_id_is_rejected() {
    let result = serde_json::from_value::<User>(serde_json::json!({ "id": {"oid": 1}, "name": "Amy" }));
    assert!(result.is_err());
}

#[test]
fn first_name_takes_leading_word() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "name": "  Lisa Mary " })).unwrap();
    assert_eq!(user.first_name(), "Lisa");
}

#[test]
fn first_name_of_blank_name_is_empty() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "name": "" })).unwrap();
    assert_eq!(user.first_name(), "");
}

// =============================================================
// Sessions and programs
// =============================================================

#[test]
fn session_decodes_backend_record() {
    let session: YogaSession = serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "title": "Morning Flow",
        "trainer_id": "t-1",
        "trainer_name": "Lisa Mary",
        "trainer_image": "https://example.com/lisa.jpg",
        "category": "Yoga",
        "duration": 45,
        "description": "Wake up gently.",
        "image": "https://example.com/flow.jpg",
        "video_url": null
    }))
    .unwrap();
    assert_eq!(session.duration, 45);
    assert_eq!(session.category, "Yoga");
    assert_eq!(session.video_url, None);
}

#[test]
fn session_duration_accepts_integral_float() {
    let session: YogaSession =
        serde_json::from_value(serde_json::json!({ "id": 42, "title": "Breath", "duration": 20.0 })).unwrap();
    assert_eq!(session.id, "42");
    assert_eq!(session.duration, 20);
}

#[test]
fn session_duration_rejects_negative_value() {
    let result = serde_json::from_value::<YogaSession>(serde_json::json!({ "id": "s", "title": "t", "duration": -5 }));
    assert!(result.is_err());
}

#[test]
fn session_duration_rejects_fractional_value() {
    let result = serde_json::from_value::<YogaSession>(serde_json::json!({ "id": "s", "title": "t", "duration": 2.5 }));
    assert!(result.is_err());
}

#[test]
fn program_date_range_formats_both_dates() {
    let program: Program = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "title": "21 Days of Calm",
        "duration_days": 21,
        "start_date": "Jan 1",
        "end_date": "Jan 21",
        "sessions_count": 21
    }))
    .unwrap();
    assert_eq!(program.date_range().as_deref(), Some("Jan 1 - Jan 21"));
}

#[test]
fn program_date_range_absent_without_start() {
    let program: Program = serde_json::from_value(serde_json::json!({ "id": "p-2", "title": "Sleep Better" })).unwrap();
    assert_eq!(program.date_range(), None);
    assert_eq!(program.duration_days, 0);
}

// =============================================================
// Progress
// =============================================================

#[test]
fn started_progress_serializes_expected_body() {
    let body = serde_json::to_value(ProgressUpdate::started("s-9")).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "session_id": "s-9", "completed": false, "progress_percentage": 0 })
    );
}

#[test]
fn progress_record_decodes_with_optional_fields_missing() {
    let record: ProgressRecord = serde_json::from_value(serde_json::json!({
        "id": "pr-1",
        "user_id": "u-1",
        "session_id": "s-1",
        "completed": true,
        "progress_percentage": 100
    }))
    .unwrap();
    assert!(record.completed);
    assert_eq!(record.program_id, None);
    assert_eq!(record.progress_percentage, 100);
}
