pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod source;
pub mod state;
pub mod storage;
pub mod ui;
pub mod window;

pub use app::router;
pub use config::Config;
pub use controller::DateWindowController;
pub use state::AppState;
pub use storage::StepStore;
