//! End-to-end tests for menu construction, route sync and rendering.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;

use navmenu::i18n::MessageStore;
use navmenu::{
    Icon, MenuConfig, MenuElement, MenuNode, MenuTree, NavMenu, RouteMeta, RouteTable,
    SelectEvent,
};

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn store() -> Arc<MessageStore> {
    Arc::new(MessageStore::new("US"))
}

fn admin_options() -> Vec<MenuNode> {
    vec![
        MenuNode::new("dashboard", "dashboard").with_icon("dashboard"),
        MenuNode::new("system", "system")
            .with_icon("setting")
            .with_children(vec![
                MenuNode::new("users", "users"),
                MenuNode::new("user-detail", "users/:id").invisible(),
                MenuNode::new("audit", "/audit").with_icon("none"),
            ]),
        MenuNode::new("profile", "profile")
            .with_children(vec![MenuNode::new("edit", "edit").invisible()]),
    ]
}

#[test]
fn test_full_path_resolution_is_idempotent() {
    let first = MenuTree::from_options(&admin_options());
    let exported = first.to_options();
    let second = MenuTree::from_options(&exported);

    assert_eq!(second.to_options(), exported);
    let paths: Vec<&str> = second.iter().map(|(_, e)| e.full_path()).collect();
    assert_eq!(
        paths,
        vec![
            "/dashboard",
            "/system",
            "/system/users",
            "/system/users/:id",
            "/audit",
            "/profile",
            "/profile/edit",
        ]
    );
}

#[test]
fn test_relative_and_absolute_paths() {
    let tree = MenuTree::from_options(&admin_options());

    let users = tree.find_by_path("/system/users").unwrap();
    assert_eq!(tree.entry(users).path(), "users");

    // An absolute child leaves its parent's namespace.
    let audit = tree.find_by_path("/audit").unwrap();
    let parent = tree.entry(audit).parent().unwrap();
    assert_eq!(tree.entry(parent).full_path(), "/system");
}

#[test]
fn test_caller_options_are_not_mutated() {
    let options = admin_options();
    let config = MenuConfig::new(options.clone());
    let menu = NavMenu::new(config, store()).unwrap();

    assert!(options.iter().all(|node| node.full_path.is_none()));
    assert_eq!(menu.tree().len(), 7);
}

#[test]
fn test_invisible_nodes_are_not_rendered() {
    let menu = NavMenu::new(MenuConfig::new(admin_options()), store()).unwrap();
    let view = menu.render();

    assert_eq!(
        view.keys(),
        vec!["/dashboard", "/system", "/system/users", "/audit", "/profile"]
    );
    assert!(view.find("/system/users/:id").is_none());
    assert!(view.find("/profile/edit").is_none());
}

#[test]
fn test_all_invisible_children_fall_back_to_item() {
    let menu = NavMenu::new(MenuConfig::new(admin_options()), store()).unwrap();
    let view = menu.render();

    match view.find("/profile").unwrap() {
        MenuElement::Item { key, link, .. } => {
            assert_eq!(key, "/profile");
            assert_eq!(link, "/profile");
        }
        other => panic!("expected an item, got {other:?}"),
    }
    assert!(view.find("/system").unwrap().is_submenu());
}

#[test]
fn test_icon_sentinel() {
    let menu = NavMenu::new(MenuConfig::new(admin_options()), store()).unwrap();
    let view = menu.render();

    assert_eq!(view.find("/audit").unwrap().label().icon, None);
    assert_eq!(
        view.find("/system").unwrap().label().icon,
        Some(Icon { kind: "setting".into() })
    );
    assert_eq!(view.find("/system/users").unwrap().label().icon, None);
}

#[test]
fn test_dashboard_scenario() {
    let config = MenuConfig::new(vec![
        MenuNode::new("dashboard", "dashboard").with_icon("dashboard"),
    ])
    .with_messages("US", json!({ "dashboard": { "name": "Dashboard" } }));
    let menu = NavMenu::new(config, store()).unwrap();

    let root = menu.tree().roots()[0];
    assert_eq!(menu.tree().entry(root).full_path(), "/dashboard");

    let view = menu.render();
    assert_eq!(view.items.len(), 1);
    match &view.items[0] {
        MenuElement::Item { key, link, label } => {
            assert_eq!(key, "/dashboard");
            assert_eq!(link, "/dashboard");
            assert_eq!(label.icon, Some(Icon { kind: "dashboard".into() }));
            assert_eq!(label.text, "Dashboard");
        }
        other => panic!("expected an item, got {other:?}"),
    }
}

#[test]
fn test_invisible_active_route_selects_visible_parent() {
    // root "/" > a > b (invisible)
    let mut routes = RouteTable::new();
    let root = routes.add_route(None, "/", RouteMeta::default());
    let a = routes.add_route(Some(root), "a", RouteMeta::default());
    let b = routes.add_route(Some(a), "b", RouteMeta::invisible());

    let config = MenuConfig::new(vec![
        MenuNode::new("a", "a").with_children(vec![MenuNode::new("b", "b").invisible()]),
    ]);
    let menu = NavMenu::new(config, store()).unwrap();
    menu.sync_route(&routes.matched(b));

    assert_eq!(menu.selected_keys(), keys(&["/a"]));
    assert_eq!(menu.open_keys(), keys(&["/a"]));
}

#[test]
fn test_route_sync_through_menu_routes() {
    let menu = NavMenu::new(MenuConfig::new(admin_options()), store()).unwrap();
    let (routes, _) = RouteTable::from_menu(menu.tree());

    // The hidden detail page sits beside "users", so it selects "/system".
    let detail = routes.find_by_path("/system/users/:id").unwrap();
    menu.sync_route(&routes.matched(detail));

    assert_eq!(menu.selected_keys(), keys(&["/system"]));
    assert_eq!(menu.open_keys(), keys(&["/system"]));
}

#[test]
fn test_collapse_round_trip_restores_open_keys() {
    let menu = NavMenu::new(MenuConfig::new(admin_options()), store()).unwrap();
    let (routes, _) = RouteTable::from_menu(menu.tree());
    let users = routes.find_by_path("/system/users").unwrap();
    menu.sync_route(&routes.matched(users));
    assert_eq!(menu.open_keys(), keys(&["/system"]));

    menu.set_collapsed(true);
    assert!(menu.open_keys().is_empty());
    assert!(menu.render().open_keys.is_empty());

    menu.set_collapsed(false);
    assert_eq!(menu.open_keys(), keys(&["/system"]));
}

#[test]
fn test_route_change_while_collapsed_is_applied_on_expand() {
    let config = MenuConfig::new(admin_options()).with_collapsed(true);
    let menu = NavMenu::new(config, store()).unwrap();
    let (routes, _) = RouteTable::from_menu(menu.tree());
    let users = routes.find_by_path("/system/users").unwrap();

    menu.sync_route(&routes.matched(users));
    assert!(menu.open_keys().is_empty());
    assert_eq!(menu.cached_open_keys(), keys(&["/system"]));

    menu.set_collapsed(false);
    assert_eq!(menu.open_keys(), keys(&["/system"]));
}

#[test]
fn test_signals_and_override() {
    let menu = NavMenu::new(MenuConfig::new(admin_options()), store()).unwrap();
    let opened = Arc::new(Mutex::new(Vec::new()));
    let selected = Arc::new(Mutex::new(Vec::new()));
    {
        let opened = opened.clone();
        menu.update_open_keys.connect(move |keys| opened.lock().push(keys.clone()));
        let selected = selected.clone();
        menu.select.connect(move |event| selected.lock().push(event.key.clone()));
    }

    menu.set_open_keys_from_widget(keys(&["/system"]));
    menu.handle_select(SelectEvent::new("/system/users", keys(&["/system/users", "/system"])));
    menu.set_open_keys_override(Some(keys(&["/profile"])));

    assert_eq!(*opened.lock(), vec![keys(&["/system"])]);
    assert_eq!(*selected.lock(), keys(&["/system/users"]));

    let view = menu.render();
    assert_eq!(view.open_keys, keys(&["/profile"]));
    assert_eq!(view.selected_keys, keys(&["/system/users"]));
    assert_eq!(menu.open_keys(), keys(&["/system"]));
}

#[test]
fn test_view_serializes_for_toolkits() {
    let config = MenuConfig::new(vec![MenuNode::new("dashboard", "dashboard")]).with_theme("light");
    let menu = NavMenu::new(config, store()).unwrap();

    let value = serde_json::to_value(menu.render()).unwrap();
    assert_eq!(value["theme"], "light");
    assert_eq!(value["items"][0]["type"], "item");
    assert_eq!(value["items"][0]["link"], "/dashboard");
    assert_eq!(value["items"][0]["label"]["text"], "dashboard.name");
}
