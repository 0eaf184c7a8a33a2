use std::env;

use business::domain::shared::value_objects::AdminPolicy;

/// Read the admin gate from the environment
///
/// Environment variables:
/// - ADMINISTRATOR: "false", "0", "no" or "off" close product mutations
///   (default: open)
pub fn admin_policy_from_env() -> AdminPolicy {
    env::var("ADMINISTRATOR")
        .map(|value| AdminPolicy::new(parse_flag(&value)))
        .unwrap_or_default()
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
