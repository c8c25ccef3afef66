use actix_web::HttpResponse;
use askama::Template;

/// Renders an askama template into an HTML response; render failures are
/// logged and reported as a bare 500.
pub fn render<T: Template>(template: T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
