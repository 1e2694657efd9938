use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use golf_dashboard::args;
use golf_dashboard::controller::dashboard::http_handlers::service_config;
use golf_dashboard::{DashboardLoader, LoaderConfig};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = args::args_checks();

    let loader = DashboardLoader::new(LoaderConfig::new(&args.data_url, &args.data_path));

    if let Some(path) = &args.document {
        match std::fs::read_to_string(path) {
            Ok(html) => loader.attach_document(html).await,
            Err(e) => warn!(
                document = path.as_str(),
                error = %e,
                "host document unreadable, serving built-in template"
            ),
        }
    }

    if loader.init().await.is_none() {
        warn!("continuing startup without dashboard data");
    }

    let loader_for_web = loader.clone();
    let static_dir = args.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(loader_for_web.clone()))
            .configure(service_config)
            .service(Files::new("/static", static_dir.clone()).show_files_listing())
    })
    .bind(args.bind.as_str())?
    .run()
    .await?;
    Ok(())
}
