pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub const CONFIG_PARSE_ERROR: &str = "Failed to parse YAML";
pub const LOGIN_SUCCESS: &str = "Session restored successfully!";

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn registry_loaded(groups: usize, commands: usize) -> String {
    format!("Command registry ready: {groups} groups, {commands} commands")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const SHUTDOWN: &str = "Shutting down...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn invite_ignored(room_id: &str) -> String {
    format!("Ignoring invite for room {room_id:?}: not allow-listed")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn not_a_command(text: &str) -> String {
    format!("Not a command: {text:?}")
}

pub fn dispatching(group: &str, command: &str, params: &[String], sender: &str) -> String {
    format!("Dispatching group='{group}' cmd='{command}' params={params:?} sender='{sender}'")
}

pub fn backend_failure(command: &str, err: &str) -> String {
    format!("Backend failure while handling {command}: {err}")
}

pub fn send_failed(command: &str, err: &str) -> String {
    format!("Error handling command {command}: {err}")
}
