use uuid::Uuid;

/// Lowercase identifier for a crop or a region, e.g. `wheat` or `punjab`.
pub type Slug = String;

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// True when `value` is a non-empty lowercase slug (`a-z`, `0-9` and `-`).
pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
