//! Minimal page rendering: HTML templates embedded at compile time with
//! `{placeholder}` substitution, plus the flash cookie that carries one
//! transient notification across a redirect.

use axum::http::StatusCode;
use axum::response::Html;
use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Embed a page template from `res/pages/`.
#[macro_export]
macro_rules! include_page {
    ($p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res/pages/", $p))
    };
}

const FLASH_COOKIE: &str = "meetsync_flash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    /// "success" or "error"; doubles as the notification's CSS class.
    pub kind: String,
    pub message: String,
}

/// Fill a template's `{placeholder}` slots. Values are inserted verbatim;
/// anything user-controlled must pass through `escape_html` first.
pub fn page(template: &str, replacements: &[(&str, &str)]) -> Html<String> {
    let mut body = template.to_string();
    for (key, value) in replacements {
        body = body.replace(&format!("{{{}}}", key), value);
    }
    Html(body)
}

pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Queue a notification for the page shown after the next redirect.
pub fn set_flash(jar: CookieJar, kind: &str, message: &str) -> CookieJar {
    let value = format!("{}:{}", kind, urlencoding::encode(message));
    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .build(),
    )
}

/// Take the pending notification, clearing its cookie.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(FLASH_COOKIE).and_then(|cookie| {
        let (kind, encoded) = cookie.value().split_once(':')?;
        let message = urlencoding::decode(encoded).ok()?.into_owned();
        Some(Flash {
            kind: kind.to_string(),
            message,
        })
    });

    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/").build());
    (jar, flash)
}

/// Notification banner fragment, or nothing when no flash is pending.
pub fn flash_html(flash: &Option<Flash>) -> String {
    match flash {
        Some(flash) => format!(
            r#"<p class="notification {}">{}</p>"#,
            escape_html(&flash.kind),
            escape_html(&flash.message)
        ),
        None => String::new(),
    }
}

/// Field-level validation message fragment, or nothing.
pub fn field_error_html(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(r#"<p class="field-error">{}</p>"#, escape_html(message)),
        None => String::new(),
    }
}

/// Standalone error page used by `AppError`'s response conversion.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    page(
        include_page!("error.html"),
        &[
            ("status", status.as_str()),
            ("message", &escape_html(message)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_substituted() {
        let Html(body) = page("<h1>{title}</h1>", &[("title", "MeetSync")]);
        assert_eq!(body, "<h1>MeetSync</h1>");
    }

    #[test]
    fn html_is_escaped() {
        assert_eq!(
            escape_html(r#"<b attr="x">&'"#),
            "&lt;b attr=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn flash_roundtrips_through_the_cookie() {
        let jar = set_flash(CookieJar::new(), "error", "Você já votou nesta sala.");
        let (jar, flash) = take_flash(jar);

        assert_eq!(
            flash,
            Some(Flash {
                kind: "error".to_string(),
                message: "Você já votou nesta sala.".to_string(),
            })
        );
        // Cleared after being taken
        let (_, again) = take_flash(jar);
        assert_eq!(again, None);
    }

    #[test]
    fn no_flash_renders_nothing() {
        assert_eq!(flash_html(&None), "");
    }
}
