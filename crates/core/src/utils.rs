use uuid::Uuid;

/// Random hex id, truncated to `len` characters (at most 32).
pub fn generate_short_id(len: usize) -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(len)
        .collect()
}
