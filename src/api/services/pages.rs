//! HTML page rendering
//!
//! Templates are embedded at build time and filled in a single pass: every
//! `%NAME%` token is replaced once, and substituted text is never rescanned,
//! so user-supplied titles cannot inject further placeholders.

use std::borrow::Cow;
use std::time::Duration;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use rust_embed::Embed;
use tracing::error;

use crate::api::constants::{ADMIN_PATH, MSG_LINK_COPIED};
use crate::services::{ManualAction, Navigation, Notification};
use crate::storage::Link;
use crate::utils::html::{escape_html, js_string};

// 使用 RustEmbed 嵌入页面模板
#[derive(Embed)]
#[folder = "templates/"]
struct PageTemplates;

/// Replace `%NAME%` tokens found in `template` with the matching value.
/// Unknown tokens and stray `%` characters are left untouched.
pub fn fill(template: &str, vars: &[(&str, Cow<'_, str>)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let token_len = after
            .find(|c: char| !(c.is_ascii_uppercase() || c == '_'))
            .unwrap_or(after.len());
        let closes = token_len > 0 && after[token_len..].starts_with('%');

        if closes {
            let name = &after[..token_len];
            if let Some((_, value)) = vars.iter().find(|(key, _)| *key == name) {
                out.push_str(value);
                rest = &after[token_len + 1..];
                continue;
            }
        }

        out.push('%');
        rest = after;
    }

    out.push_str(rest);
    out
}

fn template(name: &str) -> Option<String> {
    PageTemplates::get(name).map(|file| String::from_utf8_lossy(&file.data).into_owned())
}

fn render(name: &str, vars: &[(&str, Cow<'_, str>)]) -> String {
    let base_css = template("base.css").unwrap_or_default();

    match template(name) {
        Some(content) => {
            let mut all: Vec<(&str, Cow<'_, str>)> = vec![
                ("BASE_CSS", Cow::Owned(base_css)),
                ("ADMIN_PATH", Cow::Borrowed(ADMIN_PATH)),
            ];
            all.extend(vars.iter().cloned());
            fill(&content, &all)
        }
        None => {
            error!("Missing embedded template: {}", name);
            "Internal Server Error".to_string()
        }
    }
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Content-Type", "text/html; charset=utf-8"))
        .insert_header(("Cache-Control", "no-store"))
        .body(body)
}

pub fn login_page(error: Option<&str>) -> HttpResponse {
    let error_block = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape_html(message)),
        None => String::new(),
    };
    let status = if error.is_some() {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::OK
    };

    html(
        status,
        render("login.html", &[("ERROR_BLOCK", Cow::Owned(error_block))]),
    )
}

/// A dashboard row: the link and its share URL
pub struct LinkRow<'a> {
    pub link: &'a Link,
    pub share_url: String,
}

fn link_row(row: &LinkRow<'_>) -> String {
    format!(
        r#"<div class="card row">
    <div class="meta"><h3>{title}</h3><p class="muted">{url}</p></div>
    <div>
      <button type="button" class="copy" data-share="{share}">Copy</button>
      <form method="post" action="{admin}/links/{id}/delete" style="display:inline">
        <button type="submit" class="delete">Delete</button>
      </form>
    </div>
  </div>"#,
        title = escape_html(&row.link.title),
        url = escape_html(&row.link.url),
        share = escape_html(&row.share_url),
        admin = ADMIN_PATH,
        id = urlencoding::encode(&row.link.id),
    )
}

pub fn dashboard_page(
    rows: &[LinkRow<'_>],
    notification: Option<(Notification, Duration)>,
    notification_ttl: Duration,
) -> HttpResponse {
    let link_rows = if rows.is_empty() {
        r#"<p class="muted" style="text-align:center">No links added yet.</p>"#.to_string()
    } else {
        rows.iter().map(link_row).collect::<Vec<_>>().join("\n  ")
    };

    let (message, remaining, hidden) = match notification {
        Some((n, remaining)) => (escape_html(&n.message), remaining, ""),
        None => (String::new(), Duration::ZERO, "hidden"),
    };

    html(
        StatusCode::OK,
        render(
            "admin.html",
            &[
                ("LINK_ROWS", Cow::Owned(link_rows)),
                ("NOTIFICATION", Cow::Owned(message)),
                ("NOTIFICATION_MS", Cow::Owned(remaining.as_millis().to_string())),
                ("TOAST_HIDDEN", Cow::Borrowed(hidden)),
                (
                    "NOTIFICATION_TTL_MS",
                    Cow::Owned(notification_ttl.as_millis().to_string()),
                ),
                ("COPIED_MESSAGE", Cow::Owned(js_string(MSG_LINK_COPIED))),
            ],
        ),
    )
}

fn action_button(action: &ManualAction) -> String {
    format!(
        r#"<a class="action" href="{href}"><strong>{label}</strong><small>{hint}</small></a>"#,
        href = escape_html(action.navigation.target()),
        label = action.label,
        hint = action.hint,
    )
}

pub fn view_page(link: &Link, actions: &[ManualAction], auto: Option<&Navigation>) -> HttpResponse {
    let buttons = actions
        .iter()
        .map(action_button)
        .collect::<Vec<_>>()
        .join("\n    ");

    let script = match auto {
        Some(navigation) => format!(
            "<script>window.location.href = {};</script>",
            js_string(navigation.target())
        ),
        None => String::new(),
    };

    html(
        StatusCode::OK,
        render(
            "view.html",
            &[
                ("TITLE", Cow::Owned(escape_html(&link.title))),
                ("ACTIONS", Cow::Owned(buttons)),
                ("AUTO_NAV_SCRIPT", Cow::Owned(script)),
            ],
        ),
    )
}

pub fn loading_page() -> HttpResponse {
    html(StatusCode::OK, render("loading.html", &[]))
}

pub fn not_found_page() -> HttpResponse {
    html(StatusCode::NOT_FOUND, render("not_found.html", &[]))
}

pub fn error_page(message: &str) -> HttpResponse {
    html(
        StatusCode::INTERNAL_SERVER_ERROR,
        render("error.html", &[("MESSAGE", Cow::Owned(escape_html(message)))]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_known_tokens_once() {
        let out = fill(
            "<h1>%TITLE%</h1><p>%BODY%</p>",
            &[
                ("TITLE", Cow::Borrowed("%BODY%")),
                ("BODY", Cow::Borrowed("text")),
            ],
        );
        assert_eq!(out, "<h1>%BODY%</h1><p>text</p>");
    }

    #[test]
    fn test_fill_leaves_css_percentages_alone() {
        let out = fill("width:100%;height:50%}", &[("X", Cow::Borrowed("y"))]);
        assert_eq!(out, "width:100%;height:50%}");
    }

    #[test]
    fn test_fill_keeps_unknown_tokens() {
        let out = fill("a %UNKNOWN% b %% c", &[]);
        assert_eq!(out, "a %UNKNOWN% b %% c");
    }

    #[test]
    fn test_templates_are_embedded() {
        for name in [
            "base.css",
            "login.html",
            "admin.html",
            "view.html",
            "loading.html",
            "not_found.html",
            "error.html",
        ] {
            assert!(template(name).is_some(), "missing template {}", name);
        }
    }
}
