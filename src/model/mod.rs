pub mod dashboard;
pub mod types;
pub mod utils;

pub use dashboard::*;
pub use types::*;
pub use utils::*;
