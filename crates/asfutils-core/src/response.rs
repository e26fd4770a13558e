//! Reply formatting.

/// Tag used on replies that are not tied to a single bot.
pub const STATIC_PREFIX: &str = "ASFE";

/// Reply not tied to a bot: `<ASFE> message`.
pub fn format_static(message: &str) -> String {
    format!("<{}> {}", STATIC_PREFIX, message)
}

/// Reply on behalf of a bot: `<name> message`.
pub fn format_bot(session: &str, message: &str) -> String {
    format!("<{}> {}", session, message)
}
