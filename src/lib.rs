//! Wikipedia table scraper served as JSON
//!
//! Fetches Wikipedia list pages and turns their wikitables into clean JSON
//! records:
//! - Frame-driven row and cell extraction with CSS selectors
//! - Citation marker and perpetrator qualifier cleanup
//! - One template per data source, interpreted generically
//! - axum routes serving each template's records

pub mod config;
pub mod error;
pub mod extractors;
pub mod observability;
pub mod pipeline;
pub mod server;
pub mod templates;

pub use error::{ConfigError, FetchError, FrameError, ParseError, PipelineError};
pub use extractors::{interpret, Frame, RawRecord};
pub use pipeline::Pipeline;
pub use templates::{ExtractionTemplate, Templates};
