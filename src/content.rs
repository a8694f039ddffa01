//! Portfolio content: profile, experience, skills and projects.
//!
//! Content is plain data loaded from YAML. It carries no behavior beyond
//! being rendered as given.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const BUILTIN_PORTFOLIO: &str = include_str!("../content/portfolio.yaml");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid portfolio content: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("portfolio profile has no name")]
    MissingName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub links: Vec<Link>,
    /// Biography paragraphs, in order.
    #[serde(default)]
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Role>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// The content shipped with the crate.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_yaml(BUILTIN_PORTFOLIO)
    }

    pub fn from_yaml(source: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_yaml::from_str(source)?;
        if portfolio.profile.name.trim().is_empty() {
            return Err(ContentError::MissingName);
        }
        Ok(portfolio)
    }

    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_loads() {
        let portfolio = Portfolio::builtin().unwrap();
        assert_eq!(portfolio.profile.name, "Magesh K");
        assert_eq!(portfolio.profile.links.len(), 4);
        assert_eq!(portfolio.profile.bio.len(), 3);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.experience[0].highlights.len(), 8);
        assert_eq!(portfolio.skills[1].name, "Backend & Tools");
        assert_eq!(portfolio.projects.len(), 3);
    }

    #[test]
    fn test_sections_are_optional() {
        let portfolio = Portfolio::from_yaml(
            r#"
profile:
  name: Ada
  title: Engineer
"#,
        )
        .unwrap();
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.profile.links.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Portfolio::from_yaml("profile: { name: ' ', title: x }").unwrap_err();
        assert!(matches!(err, ContentError::MissingName));
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(matches!(
            Portfolio::from_yaml("profile: [").unwrap_err(),
            ContentError::Parse(_)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Portfolio::from_path(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("here.yaml"));
    }
}
