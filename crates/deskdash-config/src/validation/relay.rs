//! Relay server and activity feed validation.

use crate::schema::DeskdashConfig;

use super::helpers::validate_range;

pub(crate) fn validate_relay(errors: &mut Vec<String>, config: &DeskdashConfig) {
    let relay = &config.relay;
    validate_range(errors, "relay.start_port", relay.start_port, 1024, u16::MAX);
    validate_range(errors, "relay.scan_limit", relay.scan_limit, 1, 1000);
    validate_range(errors, "relay.channel_capacity", relay.channel_capacity, 1, 65536);

    if relay.port_file.trim().is_empty() {
        errors.push("relay.port_file must not be empty".into());
    }
    if relay.cors_origin.trim().is_empty() {
        errors.push("relay.cors_origin must not be empty (use \"*\" for any)".into());
    }
}

pub(crate) fn validate_activity(errors: &mut Vec<String>, config: &DeskdashConfig) {
    let activity = &config.activity;
    if activity.probe_start > activity.probe_end {
        errors.push(format!(
            "activity.probe_start = {} must not exceed activity.probe_end = {}",
            activity.probe_start, activity.probe_end
        ));
    }
    validate_range(
        errors,
        "activity.probe_interval_secs",
        activity.probe_interval_secs,
        1,
        3600,
    );
}
