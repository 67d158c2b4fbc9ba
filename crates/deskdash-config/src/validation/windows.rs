//! Window manager, menu, and catalog validation.

use std::collections::HashSet;

use crate::schema::DeskdashConfig;

use super::helpers::{validate_range, validate_window_id};

pub(crate) fn validate_windows(errors: &mut Vec<String>, config: &DeskdashConfig) {
    validate_range(errors, "windows.max_visible", config.windows.max_visible, 1, 10);

    let mut seen = HashSet::new();
    for (i, window) in config.windows.initial.iter().enumerate() {
        validate_window_id(errors, &format!("windows.initial[{i}].id"), &window.id);
        if !seen.insert(window.id.as_str()) {
            errors.push(format!("windows.initial: duplicate window id {:?}", window.id));
        }
    }
}

pub(crate) fn validate_menu(errors: &mut Vec<String>, config: &DeskdashConfig) {
    let mut seen = HashSet::new();
    for (i, item) in config.menu.iter().enumerate() {
        validate_window_id(errors, &format!("menu[{i}].id"), &item.id);
        if item.label.trim().is_empty() {
            errors.push(format!("menu[{i}].label must not be empty"));
        }
        if !seen.insert(item.id.as_str()) {
            errors.push(format!("menu: duplicate item id {:?}", item.id));
        }
    }
}

pub(crate) fn validate_catalog(errors: &mut Vec<String>, config: &DeskdashConfig) {
    for (id, entry) in &config.catalog {
        validate_window_id(errors, "catalog key", id);
        if let Some(file) = &entry.content_file {
            if file.is_empty() || file.starts_with('/') || file.split(['/', '\\']).any(|c| c == "..") {
                errors.push(format!(
                    "catalog.{id}.content_file = {file:?} must be a relative path inside windows.content_dir"
                ));
            }
        }
    }
}
