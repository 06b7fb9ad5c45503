pub mod app;
pub mod collection;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_collection, resolve_data_dir};
