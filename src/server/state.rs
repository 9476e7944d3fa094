use std::sync::Arc;

use crate::pipeline::Pipeline;
use crate::templates::Templates;

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(pipeline: Pipeline, templates: Templates) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            templates: Arc::new(templates),
        }
    }
}
