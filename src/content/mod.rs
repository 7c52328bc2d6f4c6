//! # Site Content
//!
//! Everything the page displays: the roles typed in the hero, ticker labels,
//! statistics, services, case studies, clients and outbound links.
//!
//! The default content ships inside the binary (`content/site.json`); an
//! alternative file with the same shape can be supplied at startup.
//!
//! ## Data Format
//!
//! ```json
//! {
//!   "roles": ["Copywriter.", "Sales Strategist."],
//!   "marquee": ["Email Copy", "Sales Funnels"],
//!   "metrics": [
//!     { "target": 100, "precision": "whole", "suffix": "%", "label": "Client Satisfaction", ... }
//!   ],
//!   "portfolio": [ { "id": "p1", "category": "Email Strategy", ... } ],
//!   ...
//! }
//! ```

use crate::anim::Precision;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUNDLED: &str = include_str!("../../content/site.json");

/// Filter chip that shows every case study.
pub const ALL_FILTER: &str = "All";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
    pub eyebrow: String,
    pub tagline: String,
}

/// Fixed outbound destinations. These are opaque constants, never built from
/// user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    /// Direct-message link used by every "contact" control.
    pub messaging: String,
    /// Long-form work samples document.
    pub document: String,
    /// Presentation deck with design samples.
    pub portfolio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub target: f64,
    #[serde(default)]
    pub precision: Precision,
    pub suffix: String,
    pub label: String,
    pub icon: String,
    pub sub: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub label: String,
    pub heading: String,
    /// `(figure, caption)` pairs shown under the heading.
    pub badges: Vec<(String, String)>,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub num: String,
    pub icon: String,
    pub title: String,
    pub sub: String,
    pub front: String,
    pub back: String,
    pub tag: String,
}

/// A case study with everything the detail overlay shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tags: Vec<String>,
    /// Headline figure shown on the card.
    pub result: String,
    pub icon: String,
    pub link: String,
    pub client_name: String,
    pub client_quote: String,
    pub rating: u8,
    pub challenge: String,
    pub diagnosis: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
    pub solution: String,
    #[serde(default)]
    pub solution_steps: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub role: String,
    pub kind: String,
    pub icon: String,
    pub scope: String,
    pub result: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub heading: String,
    pub body: String,
    pub placeholder: String,
    pub submit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: Owner,
    pub links: Links,
    pub roles: Vec<String>,
    pub marquee: Vec<String>,
    pub slides: Vec<Slide>,
    pub metrics: Vec<Metric>,
    pub about: About,
    pub services: Vec<Service>,
    pub filters: Vec<String>,
    pub portfolio: Vec<CaseStudy>,
    pub clients: Vec<Client>,
    pub contact: Contact,
}

impl SiteContent {
    /// The content compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED).context("Bundled site content is invalid")
    }

    /// Load content from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to load content file: {}", path.display()))
    }

    /// Parse and validate content from a JSON string.
    pub fn parse(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json).context("Failed to parse site content")?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<()> {
        if self.roles.is_empty() {
            bail!("Site content must list at least one role for the hero typewriter");
        }
        if !self.filters.iter().any(|f| f == ALL_FILTER) {
            bail!("Portfolio filters must include \"{}\"", ALL_FILTER);
        }
        for study in &self.portfolio {
            if !self.filters.contains(&study.category) {
                bail!(
                    "Case study \"{}\" uses category \"{}\" which has no filter",
                    study.id,
                    study.category
                );
            }
        }
        Ok(())
    }

    /// Case studies matching a filter chip, in declaration order.
    pub fn filtered_portfolio(&self, filter: &str) -> Vec<&CaseStudy> {
        self.portfolio
            .iter()
            .filter(|study| filter == ALL_FILTER || study.category == filter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_content_loads() {
        let content = SiteContent::bundled().expect("bundled content");
        assert_eq!(content.roles.len(), 4);
        assert_eq!(content.roles[0], "Copywriter.");
        assert_eq!(content.metrics.len(), 4);
        assert_eq!(content.slides.len(), 14);
        assert_eq!(content.services.len(), 4);
        assert!(!content.portfolio.is_empty());
        assert_eq!(content.links.messaging, "https://wa.link/8qk7mn");
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let content = SiteContent::bundled().expect("bundled content");
        assert_eq!(
            content.filtered_portfolio(ALL_FILTER).len(),
            content.portfolio.len()
        );
    }

    #[test]
    fn test_filter_by_category() {
        let content = SiteContent::bundled().expect("bundled content");
        let copy = content.filtered_portfolio("Ecommerce Copy");
        assert_eq!(copy.len(), 1);
        assert_eq!(copy[0].id, "p2");
        assert!(content.filtered_portfolio("Sales Copy").is_empty());
    }

    #[test]
    fn test_empty_roles_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(BUNDLED).expect("bundled json");
        value["roles"] = serde_json::json!([]);
        let err = SiteContent::parse(&value.to_string()).expect_err("should reject");
        assert!(err.to_string().contains("at least one role"));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_str(BUNDLED).expect("bundled json");
        value["portfolio"][0]["category"] = serde_json::json!("Skywriting");
        let err = SiteContent::parse(&value.to_string()).expect_err("should reject");
        assert!(err.to_string().contains("Skywriting"));
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let err = SiteContent::load_from(&temp_dir.path().join("nope.json"))
            .expect_err("missing file");
        assert!(err.to_string().contains("Failed to read content file"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("site.json");
        fs::write(&path, BUNDLED).expect("write");
        let content = SiteContent::load_from(&path).expect("load");
        assert_eq!(content.owner.first_name, "John");
    }
}
