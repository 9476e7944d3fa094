//! Scrape targets
//!
//! Each template pairs a source page with the [`Frame`] that carves its
//! tables into rows and a typed post-processing step that turns raw rows
//! into clean records. The interpreter and pipeline are generic over
//! [`ExtractionTemplate`], so a new data source only needs a new template.

mod mass_shootings;
mod school_shootings;

pub use mass_shootings::*;
pub use school_shootings::*;

use serde::Serialize;
use url::Url;

use crate::error::FrameError;
use crate::extractors::{Frame, RawRecord};

/// Content container of a Wikipedia article
pub const WIKIPEDIA_ROOT_SELECTOR: &str = "#bodyContent";

/// Body rows of every sortable wikitable on the page
pub const WIKITABLE_ROW_SELECTOR: &str = ".wikitable tbody tr";

/// Declarative description of one scrape target.
///
/// Cloned onto the blocking pool for each extraction, so keep it cheap.
pub trait ExtractionTemplate: Clone + Send + Sync + 'static {
    /// Clean record emitted for each accepted row
    type Record: Serialize + Send + 'static;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    fn source_url(&self) -> &Url;

    fn frame(&self) -> &Frame;

    /// Filter and normalize raw rows. Must not reorder.
    fn post_process(&self, rows: Vec<RawRecord>) -> Vec<Self::Record>;
}

/// The process-wide template set, built once at startup.
#[derive(Debug, Clone)]
pub struct Templates {
    pub school_shootings: SchoolShootings,
    pub mass_shootings_pre_2018: MassShootingsPre2018,
}

impl Templates {
    /// Templates pointing at the live Wikipedia pages.
    pub fn new() -> Result<Self, FrameError> {
        Ok(Self {
            school_shootings: SchoolShootings::new()?,
            mass_shootings_pre_2018: MassShootingsPre2018::new()?,
        })
    }
}

fn parse_source(url: &str) -> Result<Url, FrameError> {
    Url::parse(url).map_err(|source| FrameError::InvalidSourceUrl {
        url: url.to_string(),
        source,
    })
}

fn wikitable_frame(fields: &[(&'static str, &str)]) -> Result<Frame, FrameError> {
    Frame::new(WIKIPEDIA_ROOT_SELECTOR, WIKITABLE_ROW_SELECTOR, fields)
}
