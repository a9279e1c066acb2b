//! HTML pages.

use std::fmt::Write;

use axum::http::StatusCode;
use time::format_description::well_known::Rfc3339;

use crate::{
    constants::{version::get_version, STARTUP_TIME},
    picker::DisplayQuote,
};

const STYLE: &str = "body{font-family:Georgia,serif;max-width:40rem;margin:4rem auto;padding:0 1rem;color:#222}\
blockquote{font-size:1.6rem;margin:0}figcaption{margin-top:1rem;color:#666}\
nav{margin-top:3rem;font-size:.9rem}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n\
         <nav><a href=\"/\">another quote</a> · <a href=\"/about\">about</a></nav>\n</body>\n</html>\n",
        title = escape(title),
    )
}

pub fn home_page(quote: &DisplayQuote) -> String {
    let mut body = format!(
        "<figure>\n<blockquote>{}</blockquote>\n",
        escape(&quote.text)
    );

    if let Some(author) = &quote.author {
        let _ = writeln!(body, "<figcaption>{}</figcaption>", escape(author));
    }

    body.push_str("</figure>");

    layout("Random quote", &body)
}

pub fn about_page() -> String {
    let started = STARTUP_TIME
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let body = format!(
        "<h1>About</h1>\n<p>Shows a random quotation from the database on every visit.</p>\n<dl>\n\
         <dt>version</dt><dd>{}</dd>\n<dt>rust</dt><dd>{}</dd>\n<dt>up since</dt><dd>{}</dd>\n</dl>",
        escape(&get_version()),
        rustc_version_runtime::version(),
        started,
    );

    layout("About", &body)
}

pub fn error_page(status: StatusCode) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>Something went wrong on our side. Please try again later.</p>",
        status
    );

    layout("Error", &body)
}

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn home_page_shows_text_and_author() {
        let page = home_page(&DisplayQuote {
            text: "Talk is cheap. Show me the code".into(),
            author: Some("Linus Torvalds".into()),
        });

        assert!(page.contains("<blockquote>Talk is cheap. Show me the code</blockquote>"));
        assert!(page.contains("<figcaption>Linus Torvalds</figcaption>"));
    }

    #[test]
    fn home_page_omits_missing_author() {
        let page = home_page(&DisplayQuote {
            text: "Anonymous wisdom".into(),
            author: None,
        });

        assert!(!page.contains("<figcaption>"));
    }

    #[test]
    fn error_page_does_not_leak_details() {
        let page = error_page(StatusCode::INTERNAL_SERVER_ERROR);

        assert!(page.contains("500 Internal Server Error"));
    }
}
