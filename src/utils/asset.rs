//! Asset URL resolution against the deployment base path.

use crate::config::BASE_PATH;

/// Resolve a content-relative asset reference for the configured base path.
pub fn asset_url(path: &str) -> String {
    resolve_asset(BASE_PATH, path)
}

/// Prefix `path` with `base`, leaving absolute URLs untouched.
///
/// Paths that already carry the base are not prefixed twice.
pub fn resolve_asset(base: &str, path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if base.is_empty() {
        return path;
    }

    let already_prefixed = path
        .strip_prefix(base)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
    if already_prefixed {
        path
    } else {
        format!("{}{}", base, path)
    }
}

fn is_absolute_url(path: &str) -> bool {
    ["http://", "https://", "data:", "blob:"]
        .iter()
        .any(|scheme| path.starts_with(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base() {
        assert_eq!(resolve_asset("", "/resume.pdf"), "/resume.pdf");
        assert_eq!(resolve_asset("", "img/a.png"), "/img/a.png");
    }

    #[test]
    fn test_prefixed_with_base() {
        assert_eq!(
            resolve_asset("/portfolio", "/projects/a.png"),
            "/portfolio/projects/a.png"
        );
        assert_eq!(
            resolve_asset("/portfolio/", "projects/a.png"),
            "/portfolio/projects/a.png"
        );
    }

    #[test]
    fn test_base_not_doubled() {
        assert_eq!(
            resolve_asset("/portfolio", "/portfolio/projects/a.png"),
            "/portfolio/projects/a.png"
        );
    }

    #[test]
    fn test_similar_prefix_is_not_base() {
        assert_eq!(
            resolve_asset("/portfolio", "/portfolios/a.png"),
            "/portfolio/portfolios/a.png"
        );
    }

    #[test]
    fn test_absolute_urls_untouched() {
        assert_eq!(
            resolve_asset("/portfolio", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(resolve_asset("/portfolio", "data:image/png;base64,AA"), "data:image/png;base64,AA");
    }
}
