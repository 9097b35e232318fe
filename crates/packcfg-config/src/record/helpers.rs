// Helper defaults
pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}
