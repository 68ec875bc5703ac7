//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// A category card linking into the filtered product listing.
#[derive(Clone)]
pub struct CategoryCard {
    pub slug: String,
    pub title: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryCard>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state
        .catalog()
        .categories()
        .into_iter()
        .map(|slug| CategoryCard {
            title: title_case(&slug),
            slug,
        })
        .collect();

    HomeTemplate { categories }
}

/// Capitalize the first letter of a category slug for display.
fn title_case(slug: &str) -> String {
    let mut chars = slug.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("electronics"), "Electronics");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("h"), "H");
    }
}
