pub mod health;
pub mod rooms;
pub mod start;

pub use health::health_handler;
pub use rooms::move_handler;
pub use start::start_handler;
