//! HTML table extraction
//!
//! A [`Frame`] describes how to carve a page into rows and each row into
//! named cells. The frame interpreter applies it to a document and the text
//! normalizer cleans up what comes out.

mod frame_interpreter;
mod text_normalizer;

pub use frame_interpreter::*;
pub use text_normalizer::*;

use scraper::Selector;

use crate::error::FrameError;

/// Named cell selector, applied relative to a row element
#[derive(Debug, Clone)]
pub struct FieldSelector {
    pub name: &'static str,
    pub selector: Selector,
}

/// Compiled selector set for one table layout
#[derive(Debug, Clone)]
pub struct Frame {
    /// Container the rows are searched within
    pub root: Selector,
    /// Row elements, one record each
    pub rows: Selector,
    /// Cells in output order
    pub fields: Vec<FieldSelector>,
}

impl Frame {
    pub fn new(
        root: &str,
        rows: &str,
        fields: &[(&'static str, &str)],
    ) -> Result<Self, FrameError> {
        let fields = fields
            .iter()
            .map(|&(name, selector)| {
                Ok(FieldSelector {
                    name,
                    selector: compile(selector, name)?,
                })
            })
            .collect::<Result<Vec<_>, FrameError>>()?;

        Ok(Self {
            root: compile(root, "root")?,
            rows: compile(rows, "rows")?,
            fields,
        })
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

fn compile(selector: &str, context: &str) -> Result<Selector, FrameError> {
    Selector::parse(selector).map_err(|e| FrameError::InvalidSelector {
        selector: selector.to_string(),
        context: context.to_string(),
        reason: e.to_string(),
    })
}

/// Cell texts of one row, keyed by field name in frame order.
///
/// `None` means the row had no element matching that field's selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(&'static str, Option<String>)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: Option<String>) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Move a field's text out, leaving it absent.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields
            .iter_mut()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.take())
    }

    /// True when every named field is present.
    pub fn has_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.get(name).is_some())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(&'static str, Option<String>)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (&'static str, Option<String>)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
