/// Placeholder shown while a view is loading.
pub fn loading_spinner(message: Option<&str>) -> String {
    format!("⟳ {}", message.unwrap_or("Loading..."))
}
