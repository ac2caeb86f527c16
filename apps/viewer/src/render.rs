//! Section renderers — pure functions from view-models to HTML fragments.
//!
//! Each function is deterministic: the same input always produces
//! byte-identical output, and input order is always preserved (no
//! client-side sorting). Escaping is an explicit, named step so it can be
//! tested on its own rather than hiding inside string interpolation.

use crate::models::{EducationItem, Link, Profile, Project, Skill, WorkItem};

/// Literal notice rendered when a project list is empty.
pub const NO_PROJECTS_NOTICE: &str = "<p>No projects found for this skill.</p>";

/// Escapes text for embedding in HTML element content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Name and email, verbatim apart from escaping.
pub fn header(profile: &Profile) -> String {
    format!(
        "<h1>{}</h1><p>{}</p>",
        escape_html(&profile.name),
        escape_html(&profile.email)
    )
}

/// Anchor per link, joined with a literal " | " separator. Every link
/// opens in a new browsing context.
pub fn links(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                escape_html(&link.url),
                escape_html(&link.name)
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// One card per project in input order, or the no-results notice for an
/// empty sequence.
pub fn projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return NO_PROJECTS_NOTICE.to_string();
    }
    projects.iter().map(project_card).collect()
}

fn project_card(project: &Project) -> String {
    let tags: String = project
        .skills
        .iter()
        .map(|skill| format!("<span>{}</span>", escape_html(&skill.name)))
        .collect();
    // GitHub anchor only when the links map carries a "github" entry.
    let github = match project.links.get("github") {
        Some(url) => format!(
            r#"<a href="{}" target="_blank">GitHub</a>"#,
            escape_html(url)
        ),
        None => String::new(),
    };
    format!(
        r#"<div class="project-card"><h3>{}</h3><p>{}</p><div class="project-skills">{}</div><div class="project-links">{}</div></div>"#,
        escape_html(&project.title),
        escape_html(&project.description),
        tags,
        github
    )
}

/// List items for skills flagged `is_top_skill`, original order preserved.
pub fn top_skills(skills: &[Skill]) -> String {
    skills
        .iter()
        .filter(|skill| skill.is_top_skill)
        .map(|skill| format!("<li>{}</li>", escape_html(&skill.name)))
        .collect()
}

pub fn work_experience(items: &[WorkItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="work-item"><h4>{} at {}</h4><p class="dates">{}</p><p>{}</p></div>"#,
                escape_html(&item.position),
                escape_html(&item.company),
                date_range(&item.start_date, item.end_date.as_deref()),
                escape_html(&item.description)
            )
        })
        .collect()
}

pub fn education(items: &[EducationItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="education-item"><h4>{}</h4><p>{}</p><p class="dates">{}</p></div>"#,
                escape_html(&item.degree),
                escape_html(&item.institution),
                date_range(&item.start_date, item.end_date.as_deref())
            )
        })
        .collect()
}

/// A missing end date renders as the literal "Present".
fn date_range(start: &str, end: Option<&str>) -> String {
    format!("{} - {}", escape_html(start), escape_html(end.unwrap_or("Present")))
}
