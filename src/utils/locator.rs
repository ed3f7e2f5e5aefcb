//! Share locators: `{base}/view/{id}`

pub const VIEW_SEGMENT: &str = "view";

/// Build the public share URL for a link id.
pub fn share_url(base: &str, id: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        VIEW_SEGMENT,
        urlencoding::encode(id)
    )
}

/// Extract the id from a path ending in `view/<id>`.
///
/// Accepts absolute URLs, origin-relative paths and hash-router fragments
/// (`/#/view/<id>`); query strings and trailing slashes are ignored. The
/// fragment is tried before the path.
pub fn parse_view_path(path: &str) -> Option<String> {
    path.split('#').rev().find_map(view_id_in)
}

fn view_id_in(part: &str) -> Option<String> {
    let part = part.split('?').next()?;
    let mut segments = part.trim_end_matches('/').rsplit('/');
    let id = segments.next()?;
    let view = segments.next()?;

    if view != VIEW_SEGMENT || id.is_empty() {
        return None;
    }

    urlencoding::decode(id).ok().map(|s| s.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url() {
        assert_eq!(
            share_url("http://127.0.0.1:8080/", "lq2x9abc"),
            "http://127.0.0.1:8080/view/lq2x9abc"
        );
        assert_eq!(share_url("", "abc"), "/view/abc");
    }

    #[test]
    fn test_parse_view_path() {
        assert_eq!(parse_view_path("/view/abc").as_deref(), Some("abc"));
        assert_eq!(parse_view_path("/view/abc/").as_deref(), Some("abc"));
        assert_eq!(
            parse_view_path("https://host/app/view/abc?x=1").as_deref(),
            Some("abc")
        );
        assert_eq!(parse_view_path("/index.html#/view/abc").as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_view_path_rejects_other_paths() {
        assert_eq!(parse_view_path("/admin"), None);
        assert_eq!(parse_view_path("/view/"), None);
        assert_eq!(parse_view_path("/views/abc"), None);
        assert_eq!(parse_view_path("/preview/abc"), None);
        assert_eq!(parse_view_path("/view/abc/extra"), None);
    }

    #[test]
    fn test_parse_view_path_ignores_lookalike_segments() {
        assert_eq!(
            parse_view_path("https://h/preview/x#/view/abc").as_deref(),
            Some("abc")
        );
        assert_eq!(
            parse_view_path("https://h/overview/view/abc").as_deref(),
            Some("abc")
        );
        assert_eq!(parse_view_path("https://h/view/abc#top").as_deref(), Some("abc"));
    }

    #[test]
    fn test_round_trip() {
        let url = share_url("https://videos.example.com", "k3j4h5");
        assert_eq!(parse_view_path(&url).as_deref(), Some("k3j4h5"));
    }
}
