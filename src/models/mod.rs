pub mod profile;
pub mod project;

pub use profile::{FooterLink, Profile};
pub use project::{Project, ProjectStatus, UnknownStatus};
