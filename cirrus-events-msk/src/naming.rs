//! Logical-id synthesis for generated mapping resources.

/// Logical id of the mapping wiring `function` to `topic` on `cluster`.
///
/// The function name contributes its capitalized form; cluster and topic
/// contribute their ASCII-alphanumeric characters only, case untouched.
/// Distinct inputs that agree on those characters collide.
pub fn cluster_topic_logical_id(function: &str, cluster: &str, topic: &str) -> String {
    format!(
        "{}EventSourceMappingMSK{}{}",
        upper_first(function),
        alphanumeric(cluster),
        alphanumeric(topic)
    )
}

/// Capitalize the first character (e.g., "first" -> "First").
fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Strip everything but ASCII letters and digits.
fn alphanumeric(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}
