mod support;

use studio_console::model::user::AuthUser;
use studio_console::session::{SessionContext, SessionError, SessionStore};

use support::temp_session_config;

fn user() -> AuthUser {
    AuthUser {
        userId: 7,
        username: "priya".to_string(),
        displayName: Some("Priya Raman".to_string()),
        role: Some("employee".to_string()),
    }
}

#[test]
fn login_persists_and_a_new_context_restores_it() {
    let config = temp_session_config("restore");
    let store = SessionStore::new(&config);

    let context = SessionContext::init(store.clone()).unwrap();
    assert!(!context.is_logged_in());
    context.login(user()).unwrap();
    assert_eq!(context.employee_id(), Some(7));

    // A fresh context over the same store sees the same identity, the way a
    // restarted app does.
    let restored = SessionContext::init(store).unwrap();
    let current = restored.current().expect("identity restored from disk");
    assert_eq!(current.userId, 7);
    assert_eq!(current.username, "priya");
}

#[test]
fn logout_clears_both_memory_and_disk() {
    let config = temp_session_config("logout");
    let store = SessionStore::new(&config);

    let context = SessionContext::init(store.clone()).unwrap();
    context.login(user()).unwrap();
    context.logout().unwrap();

    assert!(!context.is_logged_in());
    assert!(!config.store_path.exists());

    let restored = SessionContext::init(store).unwrap();
    assert!(restored.current().is_none());
}

#[test]
fn require_user_gates_protected_operations() {
    let config = temp_session_config("require");
    let context = SessionContext::init(SessionStore::new(&config)).unwrap();

    match context.require_user() {
        Err(SessionError::NotLoggedIn) => {}
        other => panic!("expected not-logged-in, got {other:?}"),
    }

    context.login(user()).unwrap();
    assert_eq!(context.require_user().unwrap().userId, 7);
}

#[test]
fn corrupt_store_is_treated_as_no_session() {
    let config = temp_session_config("corrupt");
    std::fs::write(&config.store_path, "{ not json").unwrap();

    let context = SessionContext::init(SessionStore::new(&config)).unwrap();
    assert!(context.current().is_none());
}
