//! Plain-text rendering of the desktop, sidebar, content and feed.

use std::fmt::Write;

use deskdash_windows::{Content, DesktopView, WindowCatalog, WindowContent, WindowRecord};

use crate::activity::{ActivityLog, ConnectionStatus};

pub fn render_desktop(view: &DesktopView, catalog: &WindowCatalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Desktop (active menu: {})", view.active_menu_item);

    if view.visible_windows.is_empty() {
        let _ = writeln!(out, "  (no open windows)");
    }
    for (pos, record) in view.visible_windows.iter().enumerate() {
        let content = catalog.content(record.id.as_str());
        let _ = writeln!(out, "  [{}] {}{}", pos + 1, window_label(record), flags(record));
        if !content.tags.is_empty() {
            let _ = writeln!(out, "      {}", content.tags.join(" · "));
        }
    }

    if !view.minimized_windows.is_empty() {
        let names: Vec<String> = view.minimized_windows.iter().map(window_label).collect();
        let _ = writeln!(out, "Taskbar: {}", names.join(" | "));
    }
    out
}

pub fn render_menu(catalog: &WindowCatalog, active: &str) -> String {
    let mut out = String::new();
    for item in catalog.menu_items() {
        let marker = if item.id == active { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {} {} ({})", item.icon, item.label, item.id);
    }
    out
}

pub fn render_content(id: &str, content: &WindowContent, loaded: Option<&Content>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{id}]", content.title);
    let _ = writeln!(out, "{}", content.description);
    if !content.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", content.tags.join(", "));
    }
    let _ = writeln!(out, "---");
    match loaded {
        Some(loaded) => {
            let _ = writeln!(out, "{}", loaded.body);
        }
        None => {
            let _ = writeln!(out, "{}", content.code);
        }
    }
    out
}

pub fn render_activity(log: &ActivityLog, status: ConnectionStatus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Activity ({status}, {} requests)", log.len());
    if log.is_empty() {
        let _ = writeln!(out, "  No requests yet. Send a webhook to your listener URL.");
    }
    for record in log.entries() {
        let _ = writeln!(
            out,
            "  {} {} {} [{}] {}",
            record.timestamp.format("%H:%M:%S"),
            record.method,
            record.url,
            status_label(record),
            compact_body(&record.body),
        );
    }
    out
}

fn window_label(record: &WindowRecord) -> String {
    format!("{} ({})", record.title, record.id)
}

fn flags(record: &WindowRecord) -> &'static str {
    if record.is_maximized {
        " [maximized]"
    } else {
        ""
    }
}

fn status_label(record: &deskdash_common::RequestRecord) -> &'static str {
    match record.status {
        deskdash_common::RequestStatus::Success => "success",
        deskdash_common::RequestStatus::Error => "error",
        deskdash_common::RequestStatus::Warning => "warning",
    }
}

fn compact_body(body: &serde_json::Value) -> String {
    const MAX: usize = 80;
    let text = body.to_string();
    if text.chars().count() <= MAX {
        return text;
    }
    let cut: String = text.chars().take(MAX).collect();
    format!("{cut}…")
}
