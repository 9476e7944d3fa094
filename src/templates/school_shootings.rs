//! School shootings in the United States, all years

use serde::Serialize;
use url::Url;

use super::{parse_source, wikitable_frame, ExtractionTemplate};
use crate::error::FrameError;
use crate::extractors::{
    extract_perpetrator_annotation, strip_citation_markers, Frame, RawRecord,
};

pub const SCHOOL_SHOOTINGS_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_school_shootings_in_the_United_States";

const FIELDS: &[(&str, &str)] = &[
    ("date", "td:nth-child(1)"),
    ("location", "td:nth-child(2)"),
    ("deaths", "td:nth-child(3)"),
    ("injuries", "td:nth-child(4)"),
    ("description", "td:nth-child(5)"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolShooting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub deaths: String,
    /// Deaths count included the perpetrator
    pub perpetrator_died: bool,
    pub injuries: String,
    /// Injuries count included the perpetrator
    pub perpetrator_injured: bool,
    pub description: String,
}

impl SchoolShooting {
    /// Build a clean record, or `None` if deaths, injuries or description is absent.
    pub fn from_raw(mut raw: RawRecord) -> Option<Self> {
        if !raw.has_all(&["description", "deaths", "injuries"]) {
            return None;
        }
        let deaths = extract_perpetrator_annotation(&raw.take("deaths")?);
        let injuries = extract_perpetrator_annotation(&raw.take("injuries")?);
        let description = strip_citation_markers(&raw.take("description")?);

        Some(Self {
            date: raw.take("date"),
            location: raw.take("location"),
            deaths: deaths.cleaned,
            perpetrator_died: deaths.found,
            injuries: injuries.cleaned,
            perpetrator_injured: injuries.found,
            description,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SchoolShootings {
    source: Url,
    frame: Frame,
}

impl SchoolShootings {
    pub fn new() -> Result<Self, FrameError> {
        Self::with_source(SCHOOL_SHOOTINGS_URL)
    }

    /// Same layout, fetched from a different address.
    pub fn with_source(url: &str) -> Result<Self, FrameError> {
        Ok(Self {
            source: parse_source(url)?,
            frame: wikitable_frame(FIELDS)?,
        })
    }
}

impl ExtractionTemplate for SchoolShootings {
    type Record = SchoolShooting;

    fn name(&self) -> &'static str {
        "school_shootings"
    }

    fn source_url(&self) -> &Url {
        &self.source
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn post_process(&self, rows: Vec<RawRecord>) -> Vec<SchoolShooting> {
        rows.into_iter().filter_map(SchoolShooting::from_raw).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: [Option<&str>; 5]) -> RawRecord {
        ["date", "location", "deaths", "injuries", "description"]
            .into_iter()
            .zip(fields)
            .map(|(name, value)| (name, value.map(String::from)))
            .collect()
    }

    #[test]
    fn test_missing_required_field_drops_row() {
        let template = SchoolShootings::new().unwrap();
        let rows = vec![
            row([Some("a"), Some("b"), Some("1"), None, Some("desc")]),
            row([Some("a"), Some("b"), None, Some("0"), Some("desc")]),
            row([Some("a"), Some("b"), Some("1"), Some("0"), None]),
            row([None, None, None, None, None]),
        ];
        assert!(template.post_process(rows).is_empty());
    }

    #[test]
    fn test_complete_row_has_both_flags() {
        let template = SchoolShootings::new().unwrap();
        let records = template.post_process(vec![
            row([
                Some("May 1, 2003"),
                Some("Red Lion, Pennsylvania"),
                Some("2 (including perpetrator)"),
                Some("0"),
                Some("Principal shot.[12]"),
            ]),
            row([None, None, Some("0"), Some("1"), Some("")]),
        ]);

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            SchoolShooting {
                date: Some("May 1, 2003".to_string()),
                location: Some("Red Lion, Pennsylvania".to_string()),
                deaths: "2".to_string(),
                perpetrator_died: true,
                injuries: "0".to_string(),
                perpetrator_injured: false,
                description: "Principal shot.".to_string(),
            }
        );
        assert!(!records[1].perpetrator_died);
        assert!(!records[1].perpetrator_injured);

        let json = serde_json::to_value(&records[1]).unwrap();
        assert_eq!(json["perpetrator_died"], false);
        assert_eq!(json["perpetrator_injured"], false);
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_perpetrator_injured() {
        let template = SchoolShootings::new().unwrap();
        let records = template.post_process(vec![row([
            Some("June 3, 2010"),
            Some("Macon, Georgia"),
            Some("1"),
            Some("1 (the perpetrator)"),
            Some("A student shot himself."),
        ])]);
        assert_eq!(records[0].injuries, "1");
        assert!(records[0].perpetrator_injured);
        assert!(!records[0].perpetrator_died);
    }

    #[test]
    fn test_json_field_order() {
        let record = SchoolShooting {
            date: Some("d".to_string()),
            location: Some("l".to_string()),
            deaths: "1".to_string(),
            perpetrator_died: false,
            injuries: "2".to_string(),
            perpetrator_injured: true,
            description: "x".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"date":"d","location":"l","deaths":"1","perpetrator_died":false,"injuries":"2","perpetrator_injured":true,"description":"x"}"#
        );
    }
}
