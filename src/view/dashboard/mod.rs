pub mod clubs;
pub mod courses;
pub mod stats;
pub mod template;
pub mod utils;

pub use clubs::*;
pub use courses::*;
pub use stats::*;
pub use template::*;
pub use utils::*;
