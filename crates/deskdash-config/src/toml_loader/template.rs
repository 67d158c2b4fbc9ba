//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# deskdash configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# List and table sections ([[menu]], [catalog.*], [[windows.initial]])
# replace the built-in set entirely when present.

[windows]
# max_visible = 3          # 1-10, 1 = single-window mode
# active_menu_item = "dashboard"
# content_dir = "content"

# [[windows.initial]]
# id = "code-preview"
# order = 0
# minimized = false

# [[menu]]
# id = "dashboard"
# label = "Dashboard"
# icon = "📊"

# [catalog.code-preview]
# title = "Mac-Style Code Preview"
# description = "A glimpse of your code in a clean and Mac-like window."
# tags = ["TAG JS"]
# code = "<h1> Hello World </h1>"
# content_file = "code-preview.html"

[relay]
# host = "0.0.0.0"
# port = 0                 # 0 = scan from start_port
# start_port = 3002        # 1024-65535
# scan_limit = 100         # 1-1000
# port_file = ".webhook-port"
# summary_file = "WEBHOOK_PORT.txt"
# dashboard_port = 3001
# heartbeat_secs = 30      # 0 disables
# cors_origin = "*"
# channel_capacity = 256   # 1-65536

[activity]
# relay_host = "localhost"
# max_entries = 500        # 0 = unbounded
# probe_start = 3002
# probe_end = 3010
# probe_interval_secs = 5

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
