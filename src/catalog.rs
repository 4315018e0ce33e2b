use crate::models::{FooterLink, Profile, Project, ProjectStatus};

static PROFILE: Profile = Profile {
    first_name: "Andrew",
    last_name: "Karpensky",
    tagline: "Web developer.",
    contact_email: "bluer.mullion.0h@icloud.com",
    footer_links: &[
        FooterLink {
            label: "GitHub",
            href: "https://github.com/andreacarpini",
        },
        FooterLink {
            label: "Fiverr",
            href: "https://www.fiverr.com/s/Ldb2X80",
        },
    ],
};

static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Stephen Asma",
        description: "A professional portfolio website for Stephen Asma, Professor of Philosophy, \
                      author, and cultural critic. Features an artistic design showcasing \
                      publications, research, and media appearances.",
        tools: &["JavaScript", "HTML5", "CSS3"],
        image: "./images/beetle.jpeg",
        link: "https://stephenasma.com",
        status: ProjectStatus::Completed,
    },
    Project {
        id: 2,
        title: "Linear Archive",
        description: "A documentation and asset management tool for creative studios.",
        tools: &["TypeScript", "Node.js", "PostgreSQL"],
        image: "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85?q=80&w=2000&auto=format&fit=crop",
        link: "https://github.com/andrew-karpensky",
        status: ProjectStatus::Completed,
    },
    Project {
        id: 3,
        title: "Aura Workspace",
        description: "An experimental spatial canvas for organizing thoughts and code snippets.",
        tools: &["React Three Fiber", "WebXR", "Zustand"],
        image: "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=2000&auto=format&fit=crop",
        link: "https://andrew-karpensky.github.io/aura-workspace",
        status: ProjectStatus::InProcess,
    },
    Project {
        id: 4,
        title: "Monolith UI",
        description: "A component library inspired by brutalist architecture and modular design.",
        tools: &["Framer Motion", "React", "Radix UI"],
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2000&auto=format&fit=crop",
        link: "https://andrew-karpensky.github.io/monolith-ui",
        status: ProjectStatus::InProcess,
    },
];

/// The showcased projects, in display order.
pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn profile() -> &'static Profile {
    &PROFILE
}
