use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProcess,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProcess => "in-process",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown project status '{}', expected 'completed' or 'in-process'",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(ProjectStatus::Completed),
            "in-process" => Ok(ProjectStatus::InProcess),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One showcased work. Records are authored statically in [`crate::catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
    pub status: ProjectStatus,
}
