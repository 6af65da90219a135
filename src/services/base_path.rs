//! Base-path resolution for project-page style hosting.
//!
//! The site may be served from the domain root (`/`) or from a
//! sub-directory (GitHub project pages serve from `/{repo}/`). Every
//! asset and data URL is prefixed with the resolved base path so the
//! same pages work in both layouts.

use url::Url;

/// Resolve the path prefix the site is served under.
///
/// Precedence:
/// 1. An explicit `<base href>` wins. Its path component is used with any
///    trailing slash stripped; a bare-root href contributes nothing.
/// 2. On `github.io` hosts the first segment of the location path is
///    assumed to be the repository name.
/// 3. Otherwise the site is assumed to sit at the domain root.
///
/// Never fails; unparseable hrefs degrade to a raw-string scan.
pub fn resolve_base_path(
    base_href: Option<&str>,
    location_path: &str,
    hostname: &str,
) -> String {
    if let Some(href) = base_href {
        let path = match Url::parse(href) {
            Ok(parsed) => trim_trailing_slash(parsed.path()),
            Err(_) => scan_raw_href(href),
        };
        if !path.is_empty() {
            return path;
        }
    }

    if hostname.contains("github.io") {
        if let Some(segment) = first_segment(location_path) {
            // Both arms agree today; kept split so a rename of the
            // repository only touches the literal below.
            if segment == "desitrails" {
                return "/desitrails".to_string();
            }
            return format!("/{segment}");
        }
    }

    String::new()
}

fn trim_trailing_slash(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    trimmed.to_string()
}

/// Best-effort extraction of the path from an href that `Url::parse`
/// rejected, e.g. a protocol-relative `//host/path/` string.
fn scan_raw_href(href: &str) -> String {
    let Some(host_start) = href.find("//").map(|i| i + 2) else {
        return String::new();
    };
    let rest = &href[host_start..];
    match rest.find('/') {
        Some(path_start) => trim_trailing_slash(&rest[path_start..]),
        None => String::new(),
    }
}

fn first_segment(location_path: &str) -> Option<&str> {
    location_path
        .split('/')
        .find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Base Href Tests
    // ========================================================================

    #[test]
    fn test_base_href_path_is_used() {
        let base = resolve_base_path(
            Some("https://x.github.io/desitrails/"),
            "/",
            "x.github.io",
        );
        assert_eq!(base, "/desitrails");
    }

    #[test]
    fn test_base_href_trailing_slash_is_stripped() {
        let base = resolve_base_path(
            Some("https://example.com/travel/"),
            "/travel/states/index.html",
            "example.com",
        );
        assert_eq!(base, "/travel");
    }

    #[test]
    fn test_bare_root_base_href_contributes_nothing() {
        let base = resolve_base_path(Some("https://example.com/"), "/", "example.com");
        assert_eq!(base, "");
    }

    #[test]
    fn test_protocol_relative_href_falls_back_to_raw_scan() {
        let base = resolve_base_path(Some("//cdn.example.com/site/"), "/", "example.com");
        assert_eq!(base, "/site");
    }

    #[test]
    fn test_unparseable_href_without_host_contributes_nothing() {
        let base = resolve_base_path(Some("not a url"), "/", "example.com");
        assert_eq!(base, "");
    }

    // ========================================================================
    // Hostname Fallback Tests
    // ========================================================================

    #[test]
    fn test_github_io_uses_first_path_segment() {
        let base = resolve_base_path(None, "/desitrails/states/index.html", "x.github.io");
        assert_eq!(base, "/desitrails");
    }

    #[test]
    fn test_github_io_other_repo_name() {
        let base = resolve_base_path(None, "/travel-guides/", "someone.github.io");
        assert_eq!(base, "/travel-guides");
    }

    #[test]
    fn test_github_io_root_path_has_no_segment() {
        let base = resolve_base_path(None, "/", "x.github.io");
        assert_eq!(base, "");
    }

    #[test]
    fn test_plain_host_without_base_resolves_to_empty() {
        let base = resolve_base_path(None, "/states/index.html", "example.com");
        assert_eq!(base, "");
    }

    #[test]
    fn test_base_href_wins_over_hostname_heuristic() {
        let base = resolve_base_path(
            Some("https://x.github.io/other/"),
            "/desitrails/",
            "x.github.io",
        );
        assert_eq!(base, "/other");
    }
}
