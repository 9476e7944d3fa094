//! HTTP surface: one GET route per template, plus a health check

pub mod handlers;
pub mod router;
pub mod state;

pub use router::{create_router, MASS_SHOOTINGS_PATH, SCHOOL_SHOOTINGS_PATH};
pub use state::AppState;
