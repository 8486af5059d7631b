use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

pub async fn about_handler() -> Html<String> {
    Html(AboutTemplate.render().unwrap())
}
