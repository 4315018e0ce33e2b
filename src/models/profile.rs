use serde::Serialize;

/// Outbound link rendered in the page footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Static identity of the site owner shown in the navbar, hero and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub tagline: &'static str,
    pub contact_email: &'static str,
    pub footer_links: &'static [FooterLink],
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
