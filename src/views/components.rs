//! Presentational pieces of the portfolio page. Each component is an askama
//! template rendered independently and stitched together by [`super::page`].

use std::fmt;

use askama::Template;

use crate::models::{FooterLink, Profile, Project};

/// Maximum number of tools shown on an in-process card.
pub const PROCESS_TOOL_LIMIT: usize = 2;

/// Inline glyphs used by the cards. Renders raw markup, so templates emit it with `|safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    OutboundArrow,
    BuildingDot,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icon::OutboundArrow => f.write_str("&#8599;"),
            Icon::BuildingDot => f.write_str(
                r#"<span class="w-1.5 h-1.5 rounded-full bg-amber-400 animate-pulse"></span>"#,
            ),
        }
    }
}

#[derive(Template)]
#[template(path = "components/navbar.html")]
pub struct Navbar<'a> {
    pub contact_email: &'a str,
}

impl<'a> Navbar<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Navbar {
            contact_email: profile.contact_email,
        }
    }
}

#[derive(Template)]
#[template(path = "components/hero.html")]
pub struct Hero<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub tagline: &'a str,
}

impl<'a> Hero<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Hero {
            first_name: profile.first_name,
            last_name: profile.last_name,
            tagline: profile.tagline,
        }
    }
}

/// Card for a completed project: grayscale image, full tool list, outbound link.
#[derive(Template)]
#[template(path = "components/project_card.html")]
pub struct ProjectCard<'a> {
    pub project: &'a Project,
    pub arrow: Icon,
}

impl<'a> ProjectCard<'a> {
    pub fn new(project: &'a Project) -> Self {
        ProjectCard {
            project,
            arrow: Icon::OutboundArrow,
        }
    }
}

/// Card for a project still being built. Only the leading tools are listed.
#[derive(Template)]
#[template(path = "components/process_card.html")]
pub struct ProcessCard<'a> {
    pub project: &'a Project,
    pub tools: &'a [&'static str],
    pub dot: Icon,
    pub arrow: Icon,
}

impl<'a> ProcessCard<'a> {
    pub fn new(project: &'a Project) -> Self {
        ProcessCard {
            project,
            tools: visible_tools(project.tools),
            dot: Icon::BuildingDot,
            arrow: Icon::OutboundArrow,
        }
    }
}

#[derive(Template)]
#[template(path = "components/footer.html")]
pub struct Footer<'a> {
    pub name: String,
    pub links: &'a [FooterLink],
}

impl<'a> Footer<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Footer {
            name: profile.full_name(),
            links: profile.footer_links,
        }
    }
}

/// The first [`PROCESS_TOOL_LIMIT`] tools, or all of them when there are fewer.
pub fn visible_tools<'a>(tools: &'a [&'static str]) -> &'a [&'static str] {
    &tools[..tools.len().min(PROCESS_TOOL_LIMIT)]
}
