use super::*;

// --- site_dir ---

#[test]
fn site_dir_prefers_the_env_override() {
    let dir = site_dir(Some("/srv/perfect-circle".to_owned()));
    assert_eq!(dir, PathBuf::from("/srv/perfect-circle"));
}

#[test]
fn site_dir_defaults_next_to_the_manifest() {
    let dir = site_dir(None);
    assert!(dir.ends_with("site"));
    assert!(dir.is_absolute());
}

// --- port ---

#[test]
fn port_defaults_to_3000() {
    assert_eq!(port(None), Some(3000));
}

#[test]
fn port_parses_an_explicit_value() {
    assert_eq!(port(Some("8080".to_owned())), Some(8080));
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(port(Some("not-a-port".to_owned())), None);
    assert_eq!(port(Some("99999".to_owned())), None);
    assert_eq!(port(Some("".to_owned())), None);
}

// --- router ---

#[test]
fn app_builds_with_any_site_root() {
    // The directory doesn't need to exist until a request comes in.
    let _router = app(Path::new("/nonexistent/site"));
}
