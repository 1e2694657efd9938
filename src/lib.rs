pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod dashboard;
}
pub mod view {
    pub mod dashboard;
}

// Re-export the pieces tests and the binary reach for most.
pub use controller::dashboard::client::LoaderConfig;
pub use controller::dashboard::loader::DashboardLoader;
pub use error::DashboardError;
