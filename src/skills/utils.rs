//! Formatting helpers shared by the built-in skills. Not a skill itself.

/// Render items as a markdown bullet list
pub fn bullet_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Value to show for an optional metadata field
pub fn or_unset(value: Option<&str>) -> &str {
    value.unwrap_or("_not set_")
}
