//! Frame-driven row extraction
//!
//! Uses the scraper crate to select row elements and carve each into named
//! cells according to a [`Frame`].

use std::collections::HashSet;

use scraper::{ElementRef, Html};

use super::{Frame, RawRecord};
use crate::error::ParseError;
use crate::templates::ExtractionTemplate;

/// Parse `html` and run it through `template`: rows out, post-processed.
pub fn interpret<T: ExtractionTemplate>(
    html: &str,
    template: &T,
) -> Result<Vec<T::Record>, ParseError> {
    let raw = extract_rows(html, template.frame())?;
    Ok(template.post_process(raw))
}

/// Extract one [`RawRecord`] per row element, in document order.
pub fn extract_rows(html: &str, frame: &Frame) -> Result<Vec<RawRecord>, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::debug!(
            errors = document.errors.len(),
            "HTML parsed with recoverable markup errors"
        );
    }

    let mut roots = document.select(&frame.root).peekable();
    if roots.peek().is_none() {
        tracing::warn!("Root container not found; upstream page layout may have changed");
        return Ok(vec![]);
    }

    // Nested roots would otherwise yield their shared rows once per ancestor.
    let mut seen = HashSet::new();
    let records = roots
        .flat_map(|root| root.select(&frame.rows))
        .filter(|row| seen.insert(row.id()))
        .map(|row| extract_row(row, frame))
        .collect();

    Ok(records)
}

fn extract_row(row: ElementRef<'_>, frame: &Frame) -> RawRecord {
    frame
        .fields
        .iter()
        .map(|field| {
            let text = row
                .select(&field.selector)
                .next()
                .map(|cell| cell.text().collect::<String>().trim().to_string());
            (field.name, text)
        })
        .collect()
}
