//! Read-only portfolio content: biography, projects, certifications, experience,
//! tech stack and outbound links. The data ships inside the binary.

use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

const BUILTIN_CONTENT: &str = include_str!("../../content/portfolio.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub about: About,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub tech_stack: Vec<TechItem>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub photo: Option<String>,
    pub cv: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub demo: Option<String>,
    pub repository: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
    pub image: Option<String>,
    pub logo: Option<String>,
    pub document: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    School,
    Education,
    Achievement,
    Teaching,
    Work,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    pub kind: ExperienceKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

/// In-page navigation target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub anchor: String,
}

impl Portfolio {
    /// Parses the embedded content.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Projects listing `tech`, case-insensitive.
    pub fn projects_using<'a>(&'a self, tech: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects
            .iter()
            .filter(move |p| p.tech.iter().any(|t| t.eq_ignore_ascii_case(tech)))
    }

    pub fn certifications_by_issuer<'a>(
        &'a self,
        issuer: &'a str,
    ) -> impl Iterator<Item = &'a Certification> + 'a {
        self.certifications
            .iter()
            .filter(move |c| c.issuer.eq_ignore_ascii_case(issuer))
    }

    pub fn tech(&self, name: &str) -> Option<&TechItem> {
        self.tech_stack
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn section(&self, anchor: &str) -> Option<&Section> {
        let anchor = anchor.trim_start_matches('#');
        self.sections
            .iter()
            .find(|s| s.anchor.trim_start_matches('#') == anchor)
    }
}

impl Validate for Portfolio {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("about.name", &self.about.name)?;

        for project in &self.projects {
            validate_non_empty_string("projects.title", &project.title)?;
        }
        for cert in &self.certifications {
            validate_non_empty_string("certifications.name", &cert.name)?;
        }
        for item in &self.tech_stack {
            validate_non_empty_string("tech_stack.name", &item.name)?;
            if item.logo.trim().is_empty() {
                return Err(ContactError::Catalog {
                    message: format!("tech stack entry '{}' has no logo", item.name),
                });
            }
        }
        for link in &self.social_links {
            if link.href.trim().is_empty() {
                return Err(ContactError::Catalog {
                    message: format!("social link '{}' has no href", link.label),
                });
            }
        }
        for section in &self.sections {
            if !section.anchor.starts_with('#') {
                return Err(ContactError::Catalog {
                    message: format!("section anchor '{}' must start with '#'", section.anchor),
                });
            }
        }
        Ok(())
    }
}
