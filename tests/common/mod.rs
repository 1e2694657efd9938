use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};

use golf_dashboard::{DashboardLoader, LoaderConfig};

pub const FIXTURE_JSON: &str = include_str!("../dashboard_data.json");
pub const EXPORT_PATH: &str = "output/dashboard_data.json";

pub struct TestContext {
    pub loader: DashboardLoader,
    pub base_url: String,
}

/// Stands in for the analytics pipeline: one route serving `body` with
/// `status` from an OS-assigned port, and a fresh loader pointed at it.
pub async fn setup_test_context(
    status: StatusCode,
    body: &str,
) -> Result<TestContext, Box<dyn std::error::Error>> {
    let payload = body.to_string();
    let server = HttpServer::new(move || {
        let payload = payload.clone();
        App::new().route(
            "/output/dashboard_data.json",
            web::get().to(move || {
                let payload = payload.clone();
                async move {
                    HttpResponse::build(status)
                        .content_type("application/json")
                        .body(payload)
                }
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or("fixture server did not bind")?;
    tokio::spawn(server.run());

    let base_url = format!("http://{addr}");
    let loader = DashboardLoader::new(LoaderConfig::new(&base_url, EXPORT_PATH));

    Ok(TestContext { loader, base_url })
}
