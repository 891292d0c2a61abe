use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Tuning;

const PROFILE_FILE: &str = "profile.json";

static GLOBAL_PROFILE: LazyLock<Result<Profile, ContentError>> =
    LazyLock::new(|| Profile::load(PROFILE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub class: String,
    pub headline: String,
    pub bio: Vec<String>,
    pub avatar: String,
    pub music: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub links: Vec<Link>,
    #[serde(default)]
    pub tuning: Tuning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    /// Proficiency from 0 to 100, drawn as a stat bar.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Profile {
    fn load(file: &str) -> Result<Self, ContentError> {
        let asset = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
        Self::parse(file, &asset.data)
    }

    fn parse(file: &str, data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::ParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn skill_categories(&self) -> Vec<&str> {
        let mut categories = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category.as_str()) {
                categories.push(skill.category.as_str());
            }
        }
        categories
    }
}

/// The embedded profile, decoded once per process.
pub fn profile() -> Result<&'static Profile, ContentError> {
    GLOBAL_PROFILE.as_ref().map_err(Clone::clone)
}
