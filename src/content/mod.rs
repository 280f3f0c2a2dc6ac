//! Static content feed for the site sections
//!
//! The content document is a JSON object keyed by section name. Each section
//! is decoded on its own, so a missing or malformed section only blanks that
//! section of the site instead of failing the whole page.

mod sections;

pub use sections::*;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Content document compiled into the binary
const EMBEDDED_DOCUMENT: &str = include_str!("../../assets/data.json");

/// Placeholder shown by views whose section failed to load
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// All site sections; `None` marks a section that is missing or malformed
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub header: Option<HeaderSection>,
    pub about: Option<AboutSection>,
    pub gallery: Option<Vec<GalleryItem>>,
    pub hvac: Option<Vec<GalleryItem>>,
    pub plumber: Option<Vec<GalleryItem>>,
    pub elv: Option<Vec<GalleryItem>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub hire: Option<HireSection>,
    pub contact: Option<ContactSection>,
    pub footer: Option<FooterSection>,
}

impl SiteContent {
    /// Content shipped with the binary
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_DOCUMENT)
    }

    /// Load content from an override file, falling back to the embedded document
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::embedded();
        };

        match fs::read_to_string(path) {
            Ok(raw) => {
                tracing::info!(path = %path.display(), "loading site content");
                Self::parse(&raw)
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "content file unreadable, using embedded content"
                );
                Self::embedded()
            }
        }
    }

    /// Decode a content document section by section
    pub fn parse(raw: &str) -> Self {
        let document = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(document)) => document,
            Ok(_) => {
                tracing::warn!("content document is not a JSON object");
                return Self::default();
            }
            Err(err) => {
                tracing::warn!(error = %err, "content document is not valid JSON");
                return Self::default();
            }
        };

        Self {
            header: section(&document, "Header"),
            about: section(&document, "About"),
            gallery: section(&document, "Gallery"),
            hvac: section(&document, "HVAC"),
            plumber: section(&document, "Plumber"),
            elv: section(&document, "Elv"),
            testimonials: section(&document, "Testimonials"),
            hire: section(&document, "Hire"),
            contact: section(&document, "Contact"),
            footer: section(&document, "Footer"),
        }
    }

    /// Hero slides, empty when the header is unavailable
    pub fn slides(&self) -> &[Slide] {
        self.header
            .as_ref()
            .map(|h| h.slides.as_slice())
            .unwrap_or(&[])
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        self.testimonials.as_deref().unwrap_or(&[])
    }

    pub fn positions(&self) -> &[Position] {
        self.hire
            .as_ref()
            .map(|h| h.positions.as_slice())
            .unwrap_or(&[])
    }

    /// Titles of the roles an applicant may choose from
    pub fn open_positions(&self) -> Vec<String> {
        self.positions().iter().map(|p| p.title.clone()).collect()
    }

    /// Address shown on the contact page, if any
    pub fn contact_email(&self) -> Option<&str> {
        self.contact.as_ref().map(|c| c.email.as_str())
    }

    /// Names of the sections that will render as placeholders
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let presence = [
            ("Header", self.header.is_some()),
            ("About", self.about.is_some()),
            ("Gallery", self.gallery.is_some()),
            ("HVAC", self.hvac.is_some()),
            ("Plumber", self.plumber.is_some()),
            ("Elv", self.elv.is_some()),
            ("Testimonials", self.testimonials.is_some()),
            ("Hire", self.hire.is_some()),
            ("Contact", self.contact.is_some()),
            ("Footer", self.footer.is_some()),
        ];
        presence
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Decode one section, logging and discarding it when it does not fit its type
fn section<T: DeserializeOwned>(document: &Map<String, Value>, key: &'static str) -> Option<T> {
    let Some(value) = document.get(key) else {
        tracing::warn!(section = key, "content section is missing");
        return None;
    };

    match serde_json::from_value(value.clone()) {
        Ok(section) => Some(section),
        Err(err) => {
            tracing::warn!(section = key, error = %err, "content section is malformed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_embedded_document_has_every_section() {
        let content = SiteContent::embedded();
        assert!(content.missing_sections().is_empty());
        assert_eq!(content.slides().len(), 5);
        assert_eq!(
            content.open_positions(),
            vec![
                "Mechanical Draftsmen".to_string(),
                "Electrical Draftsmen".to_string()
            ]
        );
    }

    #[test]
    fn test_malformed_section_degrades_alone() {
        let raw = r#"{
            "About": { "paragraph": 42 },
            "Footer": { "about": "MEP", "links": [], "copyright": "(c)" }
        }"#;
        let content = SiteContent::parse(raw);

        assert!(content.about.is_none());
        assert!(content.footer.is_some());
        assert!(content.missing_sections().contains(&"About"));
        assert!(content.missing_sections().contains(&"Header"));
        assert!(!content.missing_sections().contains(&"Footer"));
    }

    #[test]
    fn test_non_object_document_yields_empty_content() {
        let content = SiteContent::parse("[1, 2, 3]");
        assert_eq!(content.missing_sections().len(), 10);
        assert!(content.slides().is_empty());
    }

    #[test]
    fn test_invalid_json_yields_empty_content() {
        let content = SiteContent::parse("{ not json");
        assert!(content.header.is_none());
        assert!(content.testimonials().is_empty());
    }

    #[test]
    fn test_gallery_category_is_optional() {
        let raw = r#"{ "Gallery": [
            { "title": "A", "largeImage": "a.jpg", "smallImage": "a-s.jpg" },
            { "title": "B", "largeImage": "b.jpg", "smallImage": "b-s.jpg", "category": "HVAC" }
        ] }"#;
        let gallery = SiteContent::parse(raw).gallery.unwrap();
        assert_eq!(gallery[0].category, None);
        assert_eq!(gallery[1].category.as_deref(), Some("HVAC"));
    }

    #[test]
    fn test_load_without_path_uses_embedded() {
        let content = SiteContent::load(None);
        assert!(content.header.is_some());
    }

    #[test]
    fn test_load_unreadable_path_falls_back_to_embedded() {
        let content = SiteContent::load(Some(Path::new("/definitely/not/here/data.json")));
        assert!(content.hire.is_some());
    }

    #[test]
    fn test_load_reads_override_file() {
        let path = std::env::temp_dir().join(format!("mepteq-content-{}.json", uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "Contact": {{ "phone": "+91 1", "email": "hr@example.com" }} }}"#
        )
        .unwrap();

        let content = SiteContent::load(Some(&path));
        fs::remove_file(&path).unwrap();

        assert_eq!(content.contact_email(), Some("hr@example.com"));
        assert!(content.header.is_none());
    }
}
