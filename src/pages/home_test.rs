use super::*;

fn session(id: &str) -> YogaSession {
    YogaSession {
        id: id.to_owned(),
        title: format!("Session {id}"),
        trainer_id: String::new(),
        trainer_name: String::new(),
        trainer_image: String::new(),
        category: "Yoga".to_owned(),
        duration: 30,
        description: String::new(),
        image: String::new(),
        video_url: None,
    }
}

fn user(name: &str) -> User {
    User {
        id: "1".to_owned(),
        name: name.to_owned(),
        email: "amy@example.com".to_owned(),
        profile_image: None,
        is_premium: false,
    }
}

#[test]
fn today_sessions_takes_first_two() {
    let all = vec![session("a"), session("b"), session("c")];
    let picked: Vec<&str> = today_sessions(&all).iter().map(|s| s.id.as_str()).collect();
    assert_eq!(picked, vec!["a", "b"]);
}

#[test]
fn today_sessions_handles_short_lists() {
    assert!(today_sessions(&[]).is_empty());
    assert_eq!(today_sessions(&[session("a")]).len(), 1);
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(Some(&user("Amy Lee"))), "Hi, Amy");
}

#[test]
fn greeting_without_name_is_generic() {
    assert_eq!(greeting(None), "Hi there");
    assert_eq!(greeting(Some(&user(""))), "Hi there");
}

#[test]
fn explore_link_encodes_category() {
    assert_eq!(explore_link("Yoga"), "/explore?category=Yoga");
    assert_eq!(explore_link("Deep Sleep"), "/explore?category=Deep+Sleep");
}
