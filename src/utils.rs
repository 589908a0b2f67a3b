use regex::Regex;

/// Find the brand's wikidata code in a page URL: the first `/`-separated
/// segment that is a `Q` followed by digits. Segments carrying a query or
/// fragment suffix do not match.
pub fn extract_wikidata(url: &str) -> Option<&str> {
    let q_code = Regex::new(r"^Q\d+$").unwrap();

    url.split('/').find(|part| q_code.is_match(part))
}

/// Path portion of a URL, without query or fragment. Anything without a
/// path comes back as the root.
pub fn url_path(url: &str) -> &str {
    let after_scheme = match url.find("://") {
        Some(i) => &url[i + 3..],
        None => url,
    };

    let path = match after_scheme.find('/') {
        Some(i) => &after_scheme[i..],
        None => return "/",
    };

    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

#[cfg(test)]
mod tests {
    use super::{extract_wikidata, url_path};

    #[test]
    fn test_extract_basic() {
        assert_eq!(
            extract_wikidata("http://127.0.0.1:5000/brands/Q3117384"),
            Some("Q3117384")
        );
        assert_eq!(extract_wikidata("/brands/Q42/details"), Some("Q42"));
    }

    #[test]
    fn test_extract_first_match_wins() {
        assert_eq!(extract_wikidata("/Q1/Q2"), Some("Q1"));
    }

    #[test]
    fn test_extract_requires_exact_segment() {
        assert_eq!(extract_wikidata("/brands/Q42extra"), None);
        assert_eq!(extract_wikidata("/brands/Q42?tab=map"), None);
        assert_eq!(extract_wikidata("/brands/q42"), None);
        assert_eq!(extract_wikidata("/brands/Q"), None);
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extract_wikidata("http://127.0.0.1:5000/"), None);
        assert_eq!(extract_wikidata(""), None);
    }

    #[test]
    fn test_path_of_full_url() {
        assert_eq!(url_path("http://127.0.0.1:5000/brands/Q42"), "/brands/Q42");
        assert_eq!(url_path("https://example.org/"), "/");
        assert_eq!(url_path("https://example.org"), "/");
    }

    #[test]
    fn test_path_strips_query_and_fragment() {
        assert_eq!(url_path("http://example.org/settings?tab=1"), "/settings");
        assert_eq!(url_path("http://example.org/settings#top"), "/settings");
    }

    #[test]
    fn test_path_of_bare_path() {
        assert_eq!(url_path("/settings"), "/settings");
        assert_eq!(url_path(""), "/");
    }
}
