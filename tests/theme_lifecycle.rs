//! End-to-end theme lifecycle against a preference file on disk.

use std::fs;

use folio::{
    AdaptiveTheme, Document, FileStore, ManualSystemTheme, OutputMode, Portfolio,
    PreferenceSource, PreferenceStore, Renderer, ThemeResolver, DARK_MODE_KEY,
};
use tempfile::TempDir;

#[test]
fn test_toggle_survives_reload_and_beats_system() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    let os = ManualSystemTheme::new(true);

    // First load: empty store, system is dark.
    let resolver = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(resolver.is_dark());
    let mut page = Document::mount(resolver, &os);

    // User switches to light; the file now records it.
    assert!(!page.toggle());
    assert_eq!(
        FileStore::new(&path).get(DARK_MODE_KEY).unwrap().as_deref(),
        Some("false")
    );

    // The system flips back and forth; the user choice holds.
    os.set_dark(false);
    os.set_dark(true);
    assert!(!page.is_dark());
    drop(page);
    assert_eq!(os.listener_count(), 0);

    // Reload.
    let reloaded = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(!reloaded.is_dark());
    assert_eq!(reloaded.preference().source, PreferenceSource::UserSet);
}

#[test]
fn test_deleting_the_file_resumes_system_tracking() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    let os = ManualSystemTheme::new(false);

    let resolver = ThemeResolver::initialize(FileStore::new(&path), &os);
    let page = Document::mount(resolver, &os);
    page.resolver().toggle_user();
    assert!(page.is_dark());

    fs::remove_file(&path).unwrap();
    os.set_dark(true);
    os.set_dark(false);
    assert!(!page.is_dark());
    assert_eq!(page.resolver().preference().source, PreferenceSource::SystemDefault);
}

#[test]
fn test_corrupt_file_falls_back_to_system() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").unwrap();
    let os = ManualSystemTheme::new(true);

    let resolver = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(resolver.is_dark());
    assert_eq!(resolver.preference().source, PreferenceSource::SystemDefault);
}

#[test]
fn test_toggle_over_corrupt_file_is_saved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").unwrap();
    let os = ManualSystemTheme::new(true);

    let resolver = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(!resolver.toggle_user());
    drop(resolver);

    let reloaded = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(!reloaded.is_dark());
    assert_eq!(reloaded.preference().source, PreferenceSource::UserSet);
    assert_eq!(
        FileStore::new(&path).get(DARK_MODE_KEY).unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn test_hand_written_bool_is_honored_and_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"darkMode": true}"#).unwrap();
    let os = ManualSystemTheme::new(false);

    let resolver = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(resolver.is_dark());
    assert_eq!(resolver.preference().source, PreferenceSource::UserSet);
    assert!(!resolver.toggle_user());
    drop(resolver);

    let reloaded = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(!reloaded.is_dark());
    assert_eq!(reloaded.preference().source, PreferenceSource::UserSet);
}

#[test]
fn test_toggle_replaces_malformed_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"darkMode": 1}"#).unwrap();
    let os = ManualSystemTheme::new(true);

    let resolver = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert_eq!(resolver.preference().source, PreferenceSource::SystemDefault);
    assert!(!resolver.toggle_user());
    drop(resolver);

    let reloaded = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(!reloaded.is_dark());
    assert_eq!(reloaded.preference().source, PreferenceSource::UserSet);
}

#[test]
fn test_malformed_value_in_file_falls_back_to_system() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"darkMode":"maybe"}"#).unwrap();
    let os = ManualSystemTheme::new(false);

    let resolver = ThemeResolver::initialize(FileStore::new(&path), &os);
    assert!(!resolver.is_dark());
    assert!(resolver.on_system_theme_change(true));
    assert!(resolver.is_dark());
}

#[test]
fn test_rendered_page_follows_reloaded_choice() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    FileStore::new(&path).set(DARK_MODE_KEY, "true").unwrap();
    let os = ManualSystemTheme::new(false);

    let mut page = Document::mount(ThemeResolver::initialize(FileStore::new(&path), &os), &os);
    let renderer = Renderer::new(AdaptiveTheme::portfolio(), OutputMode::TermDebug).unwrap();
    let output = page.render(&renderer, &Portfolio::builtin().unwrap()).unwrap();
    assert!(output.contains("[toggle]☀ light[/toggle]"));
}
