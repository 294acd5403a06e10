mod handlers;
mod routes;
mod state;

pub use routes::{create_app, create_router};
pub use state::AppState;
