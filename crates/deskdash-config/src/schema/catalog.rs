//! Window catalog entries: static metadata and content per window id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static description of one window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogEntryConfig {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Inline content shown when no `content_file` is configured.
    pub code: String,
    pub icon: String,
    /// Content file, relative to `windows.content_dir`, loaded lazily.
    pub content_file: Option<String>,
}

impl Default for CatalogEntryConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            code: String::new(),
            icon: "📄".into(),
            content_file: None,
        }
    }
}

fn entry(title: &str, description: &str, tags: &[&str], code: &str, icon: &str) -> CatalogEntryConfig {
    CatalogEntryConfig {
        title: title.into(),
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        code: code.into(),
        icon: icon.into(),
        content_file: None,
    }
}

/// The stock dashboard catalog.
pub fn default_catalog() -> BTreeMap<String, CatalogEntryConfig> {
    let mut catalog = BTreeMap::new();
    catalog.insert(
        "code-preview".into(),
        entry(
            "Mac-Style Code Preview",
            "A glimpse of your code in a clean and Mac-like window. Click to explore!",
            &["TAG JS", "TAG JS"],
            "<h1> Hello World </h1>",
            "💻",
        ),
    );
    catalog.insert(
        "recent-activity".into(),
        entry(
            "Recent Activity",
            "Track your latest development activities and project updates.",
            &["ACTIVITY", "UPDATES"],
            "git commit -m \"Update dashboard layout\"",
            "🔄",
        ),
    );
    catalog.insert(
        "quick-actions".into(),
        entry(
            "Quick Actions",
            "Access frequently used tools and shortcuts for faster workflow.",
            &["TOOLS", "SHORTCUTS"],
            "npm start",
            "⚡",
        ),
    );
    catalog.insert(
        "user-http-request-handler".into(),
        entry(
            "User HTTP Request Handler",
            "Handle HTTP requests from users.",
            &["HTTP", "REQUESTS"],
            "npm start",
            "🔄",
        ),
    );
    catalog.insert(
        "users".into(),
        entry(
            "Users Management",
            "Manage user accounts, permissions, and access controls.",
            &["USERS", "ADMIN"],
            "const users = getUsers();\nconsole.log(users);",
            "👥",
        ),
    );
    catalog.insert(
        "analytics".into(),
        entry(
            "Analytics Dashboard",
            "View detailed analytics and performance metrics.",
            &["ANALYTICS", "METRICS"],
            "const metrics = getAnalytics();\nrenderChart(metrics);",
            "📈",
        ),
    );
    catalog.insert(
        "reports".into(),
        entry(
            "Reports Center",
            "Generate and view comprehensive reports.",
            &["REPORTS", "DATA"],
            "const report = generateReport();\nexportToPDF(report);",
            "📑",
        ),
    );
    catalog.insert(
        "settings".into(),
        entry(
            "Settings Panel",
            "Configure application settings and preferences.",
            &["SETTINGS", "CONFIG"],
            "const config = loadConfig();\nupdateSettings(config);",
            "⚙️",
        ),
    );
    catalog.insert(
        "messages".into(),
        entry(
            "Messages Center",
            "View and manage system messages and notifications.",
            &["MESSAGES", "NOTIFICATIONS"],
            "const messages = getMessages();\nmarkAsRead(messages);",
            "✉️",
        ),
    );
    catalog
}
