use askama::Template;

use crate::error::AppError;
use crate::models::{Profile, Project, ProjectStatus};

use super::components::{Footer, Hero, Navbar, ProcessCard, ProjectCard};

/// Catalog split into its two display sections, each in catalog order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub completed: Vec<&'a Project>,
    pub in_process: Vec<&'a Project>,
}

pub fn partition(projects: &[Project]) -> Partition<'_> {
    let mut sections = Partition::default();
    for project in projects {
        match project.status {
            ProjectStatus::Completed => sections.completed.push(project),
            ProjectStatus::InProcess => sections.in_process.push(project),
        }
    }
    sections
}

/// Every second completed card is pushed down to stagger the two columns.
pub fn is_staggered(index: usize) -> bool {
    index % 2 != 0
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate {
    navbar: String,
    hero: String,
    completed: Vec<CompletedSlot>,
    in_process: Vec<String>,
    footer: String,
}

struct CompletedSlot {
    key: u32,
    staggered: bool,
    card: String,
}

/// Render the whole page body: navbar, hero, both project sections and footer.
pub fn compose(projects: &[Project], profile: &Profile) -> Result<String, AppError> {
    let sections = partition(projects);

    let completed = sections
        .completed
        .iter()
        .enumerate()
        .map(|(idx, project)| -> Result<CompletedSlot, AppError> {
            Ok(CompletedSlot {
                key: project.id,
                staggered: is_staggered(idx),
                card: ProjectCard::new(project).render()?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let in_process = sections
        .in_process
        .iter()
        .map(|project| ProcessCard::new(project).render())
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        completed = completed.len(),
        in_process = in_process.len(),
        "Composing portfolio page"
    );

    let template = PageTemplate {
        navbar: Navbar::new(profile).render()?,
        hero: Hero::new(profile).render()?,
        completed,
        in_process,
        footer: Footer::new(profile).render()?,
    };
    Ok(template.render()?)
}
