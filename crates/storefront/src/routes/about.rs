//! About page route handler.
//!
//! Stat values like `50K+` or `99%` are parsed into a numeric animation
//! target plus suffix so the page can emit `data-target`/`data-suffix`
//! attributes for the client-side counter. Values containing a slash
//! (`24/7`) are not animated and render literally.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

/// A stat as displayed on the about page.
#[derive(Clone)]
pub struct StatView {
    /// Literal display value, e.g. `50K+`.
    pub value: String,
    pub label: String,
    /// Counter animation target; `None` renders the value statically.
    pub target: Option<u64>,
    /// Suffix appended to the animated number, e.g. `K+` or `%`.
    pub suffix: String,
}

impl StatView {
    fn new(value: &str, label: &str) -> Self {
        let (target, suffix) = parse_stat(value)
            .map_or((None, String::new()), |(target, suffix)| {
                (Some(target), suffix)
            });
        Self {
            value: value.to_string(),
            label: label.to_string(),
            target,
            suffix,
        }
    }
}

/// Parse a stat value into `(animation target, suffix)`.
///
/// `50K+` -> `(50000, "K+")`, `99%` -> `(99, "%")`, `1000+` ->
/// `(1000, "+")`, `120` -> `(120, "")`. Returns `None` for values that
/// cannot be animated, like `24/7`.
#[must_use]
pub fn parse_stat(value: &str) -> Option<(u64, String)> {
    if value.contains('/') {
        return None;
    }

    if let Some(number) = value.strip_suffix('%') {
        return number.parse().ok().map(|n| (n, "%".to_string()));
    }

    if let Some(rest) = value.strip_suffix('+') {
        if let Some(number) = rest.strip_suffix(['K', 'k']) {
            return number
                .parse::<u64>()
                .ok()
                .map(|n| (n * 1000, "K+".to_string()));
        }
        return rest.parse().ok().map(|n| (n, "+".to_string()));
    }

    value.parse().ok().map(|n| (n, String::new()))
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub stats: Vec<StatView>,
}

/// Display the about page.
#[instrument]
pub async fn show() -> impl IntoResponse {
    AboutTemplate {
        stats: vec![
            StatView::new("50K+", "Happy Customers"),
            StatView::new("1000+", "Products"),
            StatView::new("99%", "Satisfaction Rate"),
            StatView::new("24/7", "Customer Support"),
        ],
    }
}
