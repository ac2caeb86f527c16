//! The page surface — the viewer's stand-in for externally provided DOM
//! mount points. The host page owns the containers; the viewer only ever
//! writes content into them, identified by stable element ids.

use std::collections::BTreeMap;

/// The six containers the host page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    ProfileHeader,
    Links,
    Projects,
    TopSkills,
    WorkExperience,
    Education,
}

impl Section {
    /// Render order for the page-ready trigger. Not semantically
    /// significant, but all six must complete before the page counts as
    /// loaded.
    pub const ALL: [Section; 6] = [
        Section::ProfileHeader,
        Section::Links,
        Section::Projects,
        Section::TopSkills,
        Section::WorkExperience,
        Section::Education,
    ];

    /// The stable element id of the container this section targets.
    pub fn element_id(self) -> &'static str {
        match self {
            Section::ProfileHeader => "profile-header",
            Section::Links => "links-section",
            Section::Projects => "projects-container",
            Section::TopSkills => "top-skills-list",
            Section::WorkExperience => "work-container",
            Section::Education => "education-container",
        }
    }
}

/// Write access to the container contents. The orchestrator renders
/// through this seam so tests can inspect exactly what each container
/// holds.
pub trait PageSurface {
    fn set_content(&mut self, section: Section, html: String);
}

/// In-process page surface: one HTML fragment per container, empty until
/// first written.
#[derive(Debug, Default)]
pub struct MemoryPage {
    containers: BTreeMap<Section, String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of a container; empty string before the first write.
    pub fn content(&self, section: Section) -> &str {
        self.containers.get(&section).map(String::as_str).unwrap_or("")
    }
}

impl PageSurface for MemoryPage {
    fn set_content(&mut self, section: Section, html: String) {
        self.containers.insert(section, html);
    }
}
