/// Join the public base URL and a request path into a canonical link.
///
/// Query strings and fragments are dropped; the root path maps to the bare base.
pub fn canonical_url(base_url: &str, path: &str) -> String {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return base_url.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), trimmed)
}
