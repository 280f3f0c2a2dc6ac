//! Section types of the site content document

use serde::{Deserialize, Serialize};

/// One entry of the hero carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
}

/// Landing header with the hero slides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSection {
    pub title: String,
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub paragraph: String,
    #[serde(rename = "Why", default)]
    pub why: Vec<String>,
    #[serde(rename = "Why2", default)]
    pub why2: Vec<String>,
}

/// A project picture, used by the gallery and the service sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    #[serde(rename = "largeImage")]
    pub large_image: String,
    #[serde(rename = "smallImage")]
    pub small_image: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub img: String,
    pub text: String,
    pub name: String,
}

/// An open role on the careers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyStat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireSection {
    pub headline: String,
    #[serde(default)]
    pub intro: String,
    pub positions: Vec<Position>,
    #[serde(default)]
    pub stats: Vec<CompanyStat>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub contact_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    pub title: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    #[serde(default)]
    pub offices: Vec<Office>,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    pub about: String,
    #[serde(default)]
    pub links: Vec<String>,
    pub copyright: String,
}
