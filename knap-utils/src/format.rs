/// Renders selected ids space separated, without a trailing separator.
pub fn render_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
