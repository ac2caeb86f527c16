//! Orchestrator — wires the two triggers (page-ready, search-input) to the
//! API client and the section renderers.
//!
//! The viewer owns the one piece of state in the whole system: the last
//! full, unfiltered project list. It is overwritten wholesale on every
//! successful profile load and never partially mutated; clearing the
//! search re-renders from it with no network call. Triggers run
//! sequentially on the event loop, so overlapping responses cannot
//! interleave — last-issued wins by construction.

use tracing::{error, info};

use crate::client::ProfileApi;
use crate::models::Project;
use crate::page::{PageSurface, Section};
use crate::render;

/// Written into the projects container when the initial profile load fails.
pub const PROFILE_LOAD_ERROR: &str =
    r#"<p class="error">Could not load profile data. Is the backend server running?</p>"#;

/// Written into the projects container when a filter fetch fails.
pub const FILTER_ERROR: &str = r#"<p class="error">Error filtering projects.</p>"#;

pub struct Viewer<A, P> {
    api: A,
    page: P,
    all_projects: Vec<Project>,
}

impl<A: ProfileApi, P: PageSurface> Viewer<A, P> {
    pub fn new(api: A, page: P) -> Self {
        Self {
            api,
            page,
            all_projects: Vec::new(),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Page-ready trigger: fetch the full profile and render every
    /// section. A failure touches only the projects container; the other
    /// sections keep whatever they held (blank on first load).
    pub async fn load_profile(&mut self) {
        match self.api.fetch_profile().await {
            Ok(profile) => {
                self.all_projects = profile.projects.clone();
                self.page
                    .set_content(Section::ProfileHeader, render::header(&profile));
                self.page
                    .set_content(Section::Links, render::links(&profile.links));
                self.page
                    .set_content(Section::Projects, render::projects(&profile.projects));
                self.page
                    .set_content(Section::TopSkills, render::top_skills(&profile.skills));
                self.page.set_content(
                    Section::WorkExperience,
                    render::work_experience(&profile.work_experience),
                );
                self.page
                    .set_content(Section::Education, render::education(&profile.education));
                info!(
                    "profile loaded: {} projects, {} links",
                    self.all_projects.len(),
                    profile.links.len()
                );
            }
            Err(e) => {
                error!("Failed to fetch profile: {e}");
                self.page
                    .set_content(Section::Projects, PROFILE_LOAD_ERROR.to_string());
            }
        }
    }

    /// Search-input trigger (post-debounce): empty query restores the
    /// cached full list without a network call, anything else asks the
    /// backend. A failure overwrites only the projects container.
    pub async fn apply_filter(&mut self, query: &str) {
        if query.is_empty() {
            self.page
                .set_content(Section::Projects, render::projects(&self.all_projects));
            return;
        }
        match self.api.fetch_filtered_projects(query).await {
            Ok(filtered) => {
                self.page
                    .set_content(Section::Projects, render::projects(&filtered));
            }
            Err(e) => {
                error!("Failed to filter projects: {e}");
                self.page
                    .set_content(Section::Projects, FILTER_ERROR.to_string());
            }
        }
    }
}
