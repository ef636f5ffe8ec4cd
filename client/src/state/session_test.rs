use super::*;

#[test]
fn default_session_is_unloaded_and_unauthenticated() {
    let session = SessionState::default();
    assert!(!session.loaded);
    assert!(!session.authenticated);
    assert_eq!(session.token, None);
}

#[test]
fn from_storage_values_restores_authenticated_session() {
    let session =
        SessionState::from_storage_values(Some("tok".to_owned()), Some("true".to_owned()), None);
    assert!(session.loaded);
    assert!(session.authenticated);
    assert_eq!(session.token.as_deref(), Some("tok"));
}

#[test]
fn authenticated_flag_without_token_does_not_count() {
    let session = SessionState::from_storage_values(None, Some("true".to_owned()), None);
    assert!(session.loaded);
    assert!(!session.authenticated);
}

#[test]
fn token_without_flag_does_not_count() {
    let session = SessionState::from_storage_values(Some("tok".to_owned()), None, None);
    assert!(!session.authenticated);
}

#[test]
fn from_storage_values_restores_pending_phone() {
    let session = SessionState::from_storage_values(None, None, Some("9876543210".to_owned()));
    assert_eq!(session.pending_phone.as_deref(), Some("9876543210"));
}

#[test]
fn begin_login_records_pending_phone() {
    let mut session = SessionState::default();
    session.begin_login("9876543210".to_owned());
    assert_eq!(session.pending_phone.as_deref(), Some("9876543210"));
    assert!(!session.authenticated);
}

#[test]
fn complete_login_sets_credentials_and_clears_pending_phone() {
    let mut session = SessionState::default();
    session.begin_login("9876543210".to_owned());
    session.complete_login("tok".to_owned());
    assert!(session.authenticated);
    assert_eq!(session.token.as_deref(), Some("tok"));
    assert_eq!(session.pending_phone, None);
}

#[test]
fn clear_credentials_keeps_pending_phone() {
    let mut session = SessionState::default();
    session.begin_login("9876543210".to_owned());
    session.complete_login("tok".to_owned());
    session.begin_login("9876543210".to_owned());
    session.clear_credentials();
    assert!(!session.authenticated);
    assert_eq!(session.token, None);
    assert_eq!(session.pending_phone.as_deref(), Some("9876543210"));
}
