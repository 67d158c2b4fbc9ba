//! The WindowManager owns window records, the focus queue, and the
//! visible-window cap.

mod operations;
mod policy;
mod types;
mod views;

pub use types::WindowManager;
pub use views::DesktopView;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use deskdash_common::types::{WindowAction, WindowId, WindowSource};
    use deskdash_config::schema::{default_catalog, default_menu, InitialWindowConfig, WindowsConfig};

    use super::*;
    use crate::catalog::WindowCatalog;
    use crate::commands::WindowCommand;

    fn catalog() -> Arc<WindowCatalog> {
        Arc::new(WindowCatalog::from_config(&default_catalog(), &default_menu()))
    }

    /// Manager seeded with the given ids, all visible, in list order.
    fn seeded(cap: u32, ids: &[&str]) -> WindowManager {
        let config = WindowsConfig {
            max_visible: cap,
            initial: ids
                .iter()
                .enumerate()
                .map(|(i, id)| InitialWindowConfig::new(*id, i as u32, false))
                .collect(),
            ..WindowsConfig::default()
        };
        WindowManager::from_config(&config, catalog())
    }

    fn ids(records: &[crate::record::WindowRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn assert_cap(mgr: &WindowManager) {
        assert!(
            mgr.visible_count() <= mgr.max_visible(),
            "visible {} exceeds cap {}",
            mgr.visible_count(),
            mgr.max_visible()
        );
    }

    #[test]
    fn default_config_start_state() {
        let mgr = WindowManager::from_config(&WindowsConfig::default(), catalog());
        assert_eq!(mgr.window_count(), 3);
        assert_eq!(mgr.active_menu_item(), "dashboard");
        assert_eq!(ids(&mgr.visible_windows()), vec!["code-preview"]);
        assert_eq!(
            ids(&mgr.minimized_windows()),
            vec!["recent-activity", "quick-actions"]
        );
        assert_eq!(mgr.visible_windows()[0].title, "Mac-Style Code Preview");
    }

    #[test]
    fn seeding_demotes_overflow_beyond_cap() {
        let mgr = seeded(2, &["a", "b", "c"]);
        assert_eq!(ids(&mgr.visible_windows()), vec!["a", "b"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["c"]);
    }

    #[test]
    fn equal_initial_order_keeps_list_order() {
        let config = WindowsConfig {
            max_visible: 3,
            initial: vec![
                InitialWindowConfig::new("late", 5, false),
                InitialWindowConfig::new("x", 1, false),
                InitialWindowConfig::new("y", 1, false),
            ],
            ..WindowsConfig::default()
        };
        let mgr = WindowManager::from_config(&config, catalog());
        assert_eq!(ids(&mgr.visible_windows()), vec!["x", "y", "late"]);
        let orders: Vec<usize> = mgr.visible_windows().iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_initial_ids_are_ignored() {
        let mgr = seeded(3, &["a", "a", "b"]);
        assert_eq!(mgr.window_count(), 2);
    }

    #[test]
    fn menu_click_new_window_at_cap_three() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        mgr.handle_menu_click("d");

        assert_eq!(ids(&mgr.visible_windows()), vec!["d", "a", "b"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["c"]);
        assert_eq!(mgr.active_menu_item(), "d");

        let d = mgr.record("d").unwrap();
        assert_eq!(d.source, WindowSource::Menu);
        assert_eq!(d.order, 0);
        assert_eq!(d.title, "D");
    }

    #[test]
    fn single_window_mode_scenario() {
        let mut mgr = seeded(1, &["a"]);
        mgr.handle_menu_click("b");
        assert_eq!(ids(&mgr.visible_windows()), vec!["b"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["a"]);

        assert!(mgr.restore_window("a"));
        assert_eq!(ids(&mgr.visible_windows()), vec!["a"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["b"]);
    }

    #[test]
    fn menu_title_uses_menu_label_without_catalog_entry() {
        let mut mgr = seeded(3, &[]);
        mgr.handle_menu_click("dashboard");
        assert_eq!(mgr.record("dashboard").unwrap().title, "Dashboard");
        mgr.handle_menu_click("users");
        assert_eq!(mgr.record("users").unwrap().title, "Users Management");
    }

    #[test]
    fn click_on_minimized_window_brings_it_front() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        mgr.handle_window_action("c", WindowAction::Minimize);
        mgr.handle_menu_click("c");
        assert_eq!(ids(&mgr.visible_windows()), vec!["c", "a", "b"]);
        assert!(mgr.minimized_windows().is_empty());
    }

    #[test]
    fn click_reopens_closed_window_reusing_record() {
        let mut mgr = seeded(3, &["a", "b"]);
        mgr.handle_window_action("a", WindowAction::Maximize);
        mgr.handle_window_action("a", WindowAction::Close);
        assert_eq!(ids(&mgr.visible_windows()), vec!["b"]);

        mgr.handle_menu_click("a");
        assert_eq!(mgr.window_count(), 2);
        let a = mgr.record("a").unwrap();
        assert!(a.is_open && !a.is_minimized && !a.is_maximized);
        assert_eq!(a.order, 0);
        assert_eq!(a.source, WindowSource::Main);
    }

    #[test]
    fn repeated_click_is_idempotent() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        mgr.handle_menu_click("b");
        let once = mgr.view();
        mgr.handle_menu_click("b");
        assert_eq!(mgr.view(), once);
    }

    #[test]
    fn promoted_window_is_always_first() {
        let mut mgr = seeded(2, &["a", "b", "c", "d"]);
        for id in ["c", "x", "a", "d", "x", "b"] {
            mgr.handle_menu_click(id);
            assert_eq!(mgr.visible_windows()[0].id.as_str(), id);
        }
    }

    #[test]
    fn close_removes_from_both_views() {
        let mut mgr = seeded(1, &["a", "b"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["b"]);

        assert!(mgr.handle_window_action("b", WindowAction::Close));
        assert!(mgr.handle_window_action("a", WindowAction::Close));
        assert!(mgr.visible_windows().is_empty());
        assert!(mgr.minimized_windows().is_empty());
        assert_eq!(mgr.all_windows().len(), 2);
    }

    #[test]
    fn minimize_then_restore_returns_to_front() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        mgr.handle_window_action("b", WindowAction::Minimize);
        mgr.handle_menu_click("x");
        mgr.handle_window_action("a", WindowAction::Close);
        mgr.handle_menu_click("y");

        assert!(mgr.restore_window("b"));
        let b = mgr.record("b").unwrap();
        assert_eq!(b.order, 0);
        assert!(!b.is_minimized);
        assert_eq!(mgr.visible_windows()[0].id.as_str(), "b");
        assert_cap(&mgr);
    }

    #[test]
    fn restore_swaps_out_rightmost_visible() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        mgr.handle_window_action("a", WindowAction::Minimize);
        assert!(mgr.restore_window("a"));
        assert_eq!(ids(&mgr.visible_windows()), vec!["a", "b"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["c"]);
    }

    #[test]
    fn restore_with_nothing_visible() {
        let mut mgr = seeded(2, &["a", "b"]);
        mgr.handle_window_action("a", WindowAction::Minimize);
        mgr.handle_window_action("b", WindowAction::Minimize);
        assert_eq!(mgr.visible_count(), 0);

        assert!(mgr.restore_window("b"));
        assert_eq!(ids(&mgr.visible_windows()), vec!["b"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["a"]);
    }

    #[test]
    fn restore_unknown_or_closed_is_noop() {
        let mut mgr = seeded(3, &["a", "b"]);
        mgr.handle_window_action("b", WindowAction::Close);
        let before = mgr.view();

        assert!(!mgr.restore_window("zzz"));
        assert!(!mgr.restore_window("b"));
        assert_eq!(mgr.view(), before);
    }

    #[test]
    fn minimize_may_leave_nothing_visible() {
        let mut mgr = seeded(3, &["a"]);
        mgr.handle_window_action("a", WindowAction::Maximize);
        assert!(mgr.handle_window_action("a", WindowAction::Minimize));
        assert!(mgr.visible_windows().is_empty());
        let a = mgr.record("a").unwrap();
        assert!(a.is_minimized);
        assert!(!a.is_maximized);
    }

    #[test]
    fn maximize_toggles_and_brings_front() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        mgr.handle_window_action("c", WindowAction::Maximize);
        assert_eq!(ids(&mgr.visible_windows()), vec!["c", "a", "b"]);
        assert!(mgr.record("c").unwrap().is_maximized);

        mgr.handle_window_action("c", WindowAction::Maximize);
        let c = mgr.record("c").unwrap();
        assert!(!c.is_maximized);
        assert_eq!(c.order, 0);
    }

    #[test]
    fn maximize_off_keeps_order() {
        let mut mgr = seeded(3, &["a", "b"]);
        mgr.handle_window_action("b", WindowAction::Maximize);
        mgr.handle_menu_click("a");
        // Promotion of another window already cleared the flag.
        assert!(!mgr.record("b").unwrap().is_maximized);

        mgr.handle_window_action("a", WindowAction::Maximize);
        mgr.handle_window_action("a", WindowAction::Maximize);
        assert_eq!(ids(&mgr.visible_windows()), vec!["a", "b"]);
    }

    #[test]
    fn maximize_minimized_window_restores_it_within_cap() {
        let mut mgr = seeded(1, &["a", "b"]);
        mgr.handle_window_action("b", WindowAction::Maximize);
        assert_eq!(ids(&mgr.visible_windows()), vec!["b"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["a"]);
        assert!(mgr.record("b").unwrap().is_maximized);
    }

    #[test]
    fn maximize_closed_window_is_noop() {
        let mut mgr = seeded(3, &["a", "b"]);
        mgr.handle_window_action("a", WindowAction::Maximize);
        mgr.handle_window_action("b", WindowAction::Close);
        let before = mgr.view();

        assert!(!mgr.handle_window_action("b", WindowAction::Maximize));

        assert_eq!(mgr.view(), before);
        assert!(mgr.record("a").unwrap().is_maximized);
        let b = mgr.record("b").unwrap();
        assert!(!b.is_open && !b.is_maximized);
        assert_eq!(ids(&mgr.visible_windows()), vec!["a"]);
    }

    #[test]
    fn actions_on_unknown_ids_are_noops() {
        let mut mgr = seeded(3, &["a"]);
        let before = mgr.view();
        for action in [WindowAction::Minimize, WindowAction::Maximize, WindowAction::Close] {
            assert!(!mgr.handle_window_action("ghost", action));
        }
        assert_eq!(mgr.view(), before);
        assert_eq!(mgr.window_count(), 1);
    }

    #[test]
    fn cap_holds_across_mixed_sequence() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        let steps: Vec<WindowCommand> = vec![
            WindowCommand::MenuClick("d".into()),
            WindowCommand::Restore("c".into()),
            WindowCommand::MenuClick("e".into()),
            WindowCommand::Action("a".into(), WindowAction::Maximize),
            WindowCommand::Restore("b".into()),
            WindowCommand::Action("d".into(), WindowAction::Close),
            WindowCommand::MenuClick("d".into()),
            WindowCommand::MenuClick("f".into()),
            WindowCommand::Action("f".into(), WindowAction::Minimize),
            WindowCommand::Restore("e".into()),
            WindowCommand::Restore("f".into()),
            WindowCommand::MenuClick("a".into()),
        ];
        for step in steps {
            mgr.execute(step);
            assert_cap(&mgr);
            let visible = mgr.visible_windows();
            let mut orders: Vec<usize> = visible.iter().map(|r| r.order).collect();
            orders.dedup();
            assert_eq!(orders.len(), visible.len());
        }
    }

    #[test]
    fn shrinking_cap_demotes_immediately() {
        let mut mgr = seeded(3, &["a", "b", "c"]);
        mgr.set_max_visible(1);
        assert_eq!(ids(&mgr.visible_windows()), vec!["a"]);
        assert_eq!(ids(&mgr.minimized_windows()), vec!["b", "c"]);
    }

    #[test]
    fn execute_reports_match() {
        let mut mgr = seeded(3, &["a"]);
        assert!(mgr.execute(WindowCommand::MenuClick(WindowId::from("new"))));
        assert!(mgr.execute(WindowCommand::Action("a".into(), WindowAction::Close)));
        assert!(!mgr.execute(WindowCommand::Restore("missing".into())));
    }

    #[test]
    fn view_serializes_for_renderer() {
        let mgr = seeded(3, &["a"]);
        let json = serde_json::to_value(mgr.view()).unwrap();
        assert_eq!(json["visible_windows"][0]["id"], "a");
        assert_eq!(json["active_menu_item"], "dashboard");
    }
}
