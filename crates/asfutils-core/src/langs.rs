//! Operator-facing strings.

pub const LINE: &str = "==================================================";

pub const PLUGIN_CONTACT: &str = "ASF Utils - command and farming automation for ASF bots";

pub const PLUGIN_INFO: &str = "Send ASFUTILS (or ASFU) to any bot to print the plugin version";

pub const BRIDGE_REGISTER_SUCCESS: &str = "Registered with the command bridge, dispatch handed over";

pub const BRIDGE_REGISTER_FAILED: &str = "Command bridge not available or registration refused";

pub const STANDALONE_MODE: &str = "Running in standalone mode, commands are handled locally";

pub const UNKNOWN_COMMAND: &str = "Unknown command!";

pub const SESSION_DELETED: &str = "Deleted bot that finished farming with nothing left";

pub fn eula_warning(plugin_name: &str) -> String {
    format!(
        "{} has not been granted EULA consent, set ASFEnhance.EULA to true to accept it",
        plugin_name
    )
}

pub fn bot_not_found(names: &str) -> String {
    format!("Could not find any bot named {}!", names)
}
