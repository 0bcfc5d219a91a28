//! Tests for config files and label translation.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use navmenu::i18n::{default_messages, i18n_key};
use navmenu::{
    LabelSource, MenuConfig, MenuError, MenuMode, MenuTheme, MenuTree, MessageStore, NavMenu,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const JSON_CONFIG: &str = r#"{
    "options": [
        { "name": "Dashboard", "path": "dashboard", "meta": { "icon": "dashboard" } },
        { "name": "System", "path": "system", "meta": { "icon": "setting" }, "children": [
            { "name": "Users", "path": "users" }
        ] }
    ],
    "theme": "light",
    "mode": "vertical",
    "i18n": {
        "messages": {
            "CN": { "dashboard": { "name": "监控中心" } },
            "US": { "dashboard": { "name": "Dashboard" } }
        }
    }
}"#;

const TOML_CONFIG: &str = r#"
collapsed = true
openKeys = ["/system"]

[[options]]
name = "System"
path = "system"

[[options.children]]
name = "Users"
path = "users"

[i18n.messages.US.system]
name = "System"
users = { name = "Users" }
"#;

#[test]
fn test_load_json_file() {
    init_tracing();
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(JSON_CONFIG.as_bytes()).unwrap();

    let config = MenuConfig::from_file(file.path()).unwrap();

    assert_eq!(config.options.len(), 2);
    assert_eq!(config.menu_theme(), MenuTheme::Light);
    assert_eq!(config.menu_mode(), MenuMode::Vertical);
}

#[test]
fn test_load_toml_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.toml");
    std::fs::write(&path, TOML_CONFIG).unwrap();

    let config = MenuConfig::from_file(&path).unwrap();
    let menu = NavMenu::new(config, Arc::new(MessageStore::new("US"))).unwrap();

    assert!(menu.is_collapsed());
    assert_eq!(menu.theme(), MenuTheme::Dark);
    let view = menu.render();
    assert_eq!(view.open_keys, vec!["/system".to_string()]);
    assert_eq!(view.find("/system/users").unwrap().label().text, "Users");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match MenuConfig::from_file(&path) {
        Err(MenuError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_json_round_trip_through_file() {
    let config = MenuConfig::from_json_str(JSON_CONFIG).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.json");
    std::fs::write(&path, config.to_json_string().unwrap()).unwrap();

    assert_eq!(MenuConfig::from_file(&path).unwrap(), config);
}

#[test]
fn test_live_locale_switch_relabels_menu() {
    init_tracing();
    let store = Arc::new(MessageStore::new("CN"));
    let config = MenuConfig::from_json_str(JSON_CONFIG).unwrap();
    let menu = NavMenu::new(config, store.clone()).unwrap();

    let switches = Arc::new(AtomicUsize::new(0));
    let switches_clone = switches.clone();
    store.locale_changed.connect(move |_| {
        switches_clone.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(menu.render().items[0].label().text, "监控中心");
    store.set_locale("US");
    assert_eq!(menu.render().items[0].label().text, "Dashboard");
    store.set_locale("US");
    assert_eq!(switches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_default_messages_fill_gaps() {
    let config = MenuConfig::from_json_str(JSON_CONFIG).unwrap();
    let tree = MenuTree::from_options(&config.options);
    let store = Arc::new(MessageStore::new("US").with_fallback("default"));
    store.merge_locale_messages("default", default_messages(&tree, LabelSource::Name));

    let menu = NavMenu::new(config, store).unwrap();
    let view = menu.render();

    assert_eq!(view.find("/dashboard").unwrap().label().text, "Dashboard");
    assert_eq!(view.find("/system").unwrap().label().text, "System");
    assert_eq!(view.find("/system/users").unwrap().label().text, "Users");
}

#[test]
fn test_path_label_source() {
    let tree = MenuTree::from_options(&MenuConfig::from_json_str(JSON_CONFIG).unwrap().options);
    let bundle = default_messages(&tree, LabelSource::Path);

    assert_eq!(
        bundle,
        json!({
            "dashboard": { "name": "dashboard" },
            "system": { "name": "system", "users": { "name": "users" } }
        })
    );
    assert_eq!(i18n_key("/system/users"), "system.users.name");
}
