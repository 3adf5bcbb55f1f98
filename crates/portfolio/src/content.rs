//! Static page content.
//!
//! Content is parsed once at start-up and then shared immutably; views receive an
//! `Rc<Content>` and never mutate it. Links are opaque strings copied verbatim into
//! the page.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: String,
}

/// Kind of outbound profile link, used to pick its icon and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Linkedin,
    Email,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Github => "GitHub",
            LinkKind::Linkedin => "LinkedIn",
            LinkKind::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub kind: LinkKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    #[serde(default)]
    pub portrait_alt: String,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub experiences: Rc<[Experience]>,
    #[serde(default = "no_projects")]
    pub projects: Rc<[Project]>,
}

fn no_projects() -> Rc<[Project]> {
    Rc::from(Vec::new())
}

impl Content {
    /// Parses a TOML document. The experience list must not be empty, since the
    /// selector starts on the first entry.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let content: Self = toml::from_str(source).map_err(Error::Content)?;
        if content.experiences.is_empty() {
            return Err(Error::NoExperiences);
        }
        tracing::debug!(
            experiences = content.experiences.len(),
            projects = content.projects.len(),
            "loaded portfolio content"
        );
        Ok(content)
    }

    /// The content compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }
}
