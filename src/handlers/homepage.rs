use axum::{routing::get, Router};

use crate::{views, AppState};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage() -> maud::Markup {
    views::page("Home", homepage_views::landing_page())
}
