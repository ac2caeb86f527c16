use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The complete portfolio document served by the backend.
///
/// These are transient view-models received verbatim from the API — the
/// viewer defines no schema of its own and never mutates them. Fields the
/// backend may omit on individual records carry serde defaults; anything
/// else missing surfaces as a decode error at the client boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub links: Vec<Link>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub work_experience: Vec<WorkItem>,
    pub education: Vec<EducationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Flags membership in the derived "top skills" summary list,
    /// independent of the skill's appearance in project tags.
    pub is_top_skill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Display-only skill tags. Empty renders no tags, not an error.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Named external links. Only the "github" key gets special rendering.
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

/// Dates stay opaque strings end to end — the backend serializes them as
/// ISO text and the viewer only ever displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub position: String,
    pub company: String,
    pub start_date: String,
    /// Absent means the position is current; renders as "Present".
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: Option<String>,
}
