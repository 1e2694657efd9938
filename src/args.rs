use clap::Parser;

pub mod validation;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL the dashboard export is served from.
    #[arg(
        long,
        value_name = "DATA_URL",
        default_value = "http://localhost:8000",
        value_parser = crate::args::validation::check_http_url
    )]
    pub data_url: String,

    /// Location of the export below the base URL.
    #[arg(
        long,
        value_name = "DATA_PATH",
        default_value = "output/dashboard_data.json"
    )]
    pub data_path: String,

    /// Host page whose stat elements are patched in place. Without one, the
    /// built-in template is served.
    #[arg(
        long,
        value_name = "DOCUMENT",
        value_parser = crate::args::validation::check_readable_file
    )]
    pub document: Option<String>,

    /// Address the HTTP server binds to.
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,

    /// Directory served under /static.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}
