use actix_web::web::{self, Data, ServiceConfig};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::controller::dashboard::loader::DashboardLoader;
use crate::view::dashboard::render_dashboard_page;

// Route table shared by the binary and the integration tests.
pub fn service_config(cfg: &mut ServiceConfig) {
    cfg.route("/", web::get().to(dashboard_page))
        .route("/health", web::get().to(HttpResponse::Ok))
        .route("/data/dashboard", web::get().to(dashboard_json))
        .route("/data/clubs", web::get().to(clubs_json))
        .route("/data/player", web::get().to(player_json))
        .route("/data/courses", web::get().to(courses_json));
}

// Serves the attached host page when one was adopted, falling back to the
// built-in template otherwise.
pub async fn dashboard_page(loader: Data<DashboardLoader>) -> impl Responder {
    let loader = loader.get_ref().clone();

    if let Some(patched) = loader.document_html().await {
        return HttpResponse::Ok().content_type("text/html").body(patched);
    }

    let dataset = loader.dataset().await;
    let markup = render_dashboard_page(dataset.as_deref());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn dashboard_json(loader: Data<DashboardLoader>) -> impl Responder {
    match loader.get_ref().dataset().await {
        Some(data) => HttpResponse::Ok().json(&*data),
        None => HttpResponse::Ok().json(json!({})),
    }
}

pub async fn clubs_json(loader: Data<DashboardLoader>) -> impl Responder {
    HttpResponse::Ok().json(loader.get_ref().compat_aliases().await.club_data)
}

pub async fn player_json(loader: Data<DashboardLoader>) -> impl Responder {
    HttpResponse::Ok().json(loader.get_ref().compat_aliases().await.player_stats)
}

pub async fn courses_json(loader: Data<DashboardLoader>) -> impl Responder {
    HttpResponse::Ok().json(loader.get_ref().compat_aliases().await.course_stats)
}
