//! Mass shootings in the United States before 2018
//!
//! Same wikitable layout as the school list, but the description sits in
//! the sixth column and counts carry citation markers instead of
//! perpetrator qualifiers.

use serde::Serialize;
use url::Url;

use super::{parse_source, wikitable_frame, ExtractionTemplate};
use crate::error::FrameError;
use crate::extractors::{strip_citation_markers, Frame, RawRecord};

pub const MASS_SHOOTINGS_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_mass_shootings_in_the_United_States";

const FIELDS: &[(&str, &str)] = &[
    ("date", "td:nth-child(1)"),
    ("location", "td:nth-child(2)"),
    ("deaths", "td:nth-child(3)"),
    ("injuries", "td:nth-child(4)"),
    ("description", "td:nth-child(6)"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MassShooting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub deaths: String,
    pub injuries: String,
    pub description: String,
}

impl MassShooting {
    pub fn from_raw(mut raw: RawRecord) -> Option<Self> {
        if !raw.has_all(&["description", "deaths", "injuries"]) {
            return None;
        }

        Some(Self {
            deaths: strip_citation_markers(&raw.take("deaths")?),
            injuries: strip_citation_markers(&raw.take("injuries")?),
            description: strip_citation_markers(&raw.take("description")?),
            date: raw.take("date"),
            location: raw.take("location"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MassShootingsPre2018 {
    source: Url,
    frame: Frame,
}

impl MassShootingsPre2018 {
    pub fn new() -> Result<Self, FrameError> {
        Self::with_source(MASS_SHOOTINGS_URL)
    }

    pub fn with_source(url: &str) -> Result<Self, FrameError> {
        Ok(Self {
            source: parse_source(url)?,
            frame: wikitable_frame(FIELDS)?,
        })
    }
}

impl ExtractionTemplate for MassShootingsPre2018 {
    type Record = MassShooting;

    fn name(&self) -> &'static str {
        "mass_shootings_pre_2018"
    }

    fn source_url(&self) -> &Url {
        &self.source
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn post_process(&self, rows: Vec<RawRecord>) -> Vec<MassShooting> {
        rows.into_iter().filter_map(MassShooting::from_raw).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::CITATION_RE;

    fn row(deaths: Option<&str>, injuries: Option<&str>, description: Option<&str>) -> RawRecord {
        [
            ("date", Some("October 1, 2017".to_string())),
            ("location", Some("Paradise, Nevada".to_string())),
            ("deaths", deaths.map(String::from)),
            ("injuries", injuries.map(String::from)),
            ("description", description.map(String::from)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_citations_stripped() {
        let template = MassShootingsPre2018::new().unwrap();
        let records = template.post_process(vec![
            row(Some("58[1]"), Some("413[2][3]"), Some("Concert attack.[4] Gunman died.[5]")),
            row(Some("5 [a]"), Some("[6]0"), Some("[7]")),
        ]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].deaths, "58");
        assert_eq!(records[0].injuries, "413");
        assert_eq!(records[0].description, "Concert attack. Gunman died.");
        assert_eq!(records[0].date.as_deref(), Some("October 1, 2017"));

        for record in &records {
            for text in [&record.deaths, &record.injuries, &record.description] {
                assert!(!CITATION_RE.is_match(text), "citation left in {text:?}");
            }
        }
    }

    #[test]
    fn test_perpetrator_qualifier_kept() {
        let template = MassShootingsPre2018::new().unwrap();
        let records = template.post_process(vec![row(
            Some("9 (including perpetrator)"),
            Some("0"),
            Some("x"),
        )]);
        assert_eq!(records[0].deaths, "9 (including perpetrator)");
        let json = serde_json::to_value(&records[0]).unwrap();
        assert!(json.get("perpetrator_died").is_none());
    }

    #[test]
    fn test_missing_required_field_drops_row() {
        let template = MassShootingsPre2018::new().unwrap();
        let records = template.post_process(vec![
            row(Some("1"), Some("2"), None),
            row(Some("3"), Some("4"), Some("kept")),
            row(None, Some("2"), Some("x")),
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "kept");
    }
}
