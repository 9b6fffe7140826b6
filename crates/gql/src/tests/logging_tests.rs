use crate::logging::resolve_log_level;
use tracing::Level;

#[test]
fn verbose_flag_wins_over_env() {
    assert_eq!(resolve_log_level(true, Some("error")), Ok(Level::DEBUG));
    assert_eq!(resolve_log_level(true, Some("bogus")), Ok(Level::DEBUG));
}

#[test]
fn env_names_match_case_insensitively() {
    assert_eq!(resolve_log_level(false, Some("WARN")), Ok(Level::WARN));
    assert_eq!(resolve_log_level(false, Some(" Trace ")), Ok(Level::TRACE));
    assert_eq!(resolve_log_level(false, Some("verbose")), Ok(Level::DEBUG));
    assert_eq!(resolve_log_level(false, Some("error")), Ok(Level::ERROR));
}

#[test]
fn missing_env_uses_info_and_unknown_names_are_returned() {
    assert_eq!(resolve_log_level(false, None), Ok(Level::INFO));
    assert_eq!(resolve_log_level(false, Some("loud")), Err("loud".to_string()));
}
