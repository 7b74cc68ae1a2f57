//! Build-time content records.
//!
//! Every section of the page renders from the constants in this module.
//! The records are flat and immutable - nothing here is created or
//! destroyed at runtime, and there are no cross-references to enforce.

/// Site owner's display name.
pub const OWNER_NAME: &str = "Rohit R. Sahu";

/// Monogram shown in the logo badge and the loader.
pub const OWNER_INITIALS: &str = "RS";

/// Contact email address.
pub const EMAIL: &str = "rohitrsahu2000@gmail.com";

/// Location line shown in the contact panel and footer.
pub const LOCATION: &str = "Bhubaneswar, Odisha, India";

/// Downloadable resume, bundled next to the binary.
pub const RESUME_PATH: &str = "assets/resume.pdf";

/// Hero illustration used while the dark palette is active.
pub const HERO_IMAGE_DARK: &str = "assets/hero-dark.svg";

/// Hero illustration used while the light palette is active.
pub const HERO_IMAGE_LIGHT: &str = "assets/hero-light.svg";

/// Phrases the hero typewriter cycles through.
pub const TYPING_PHRASES: &[&str] = &[
    "Full-Stack Engineer",
    "DevOps Practitioner",
    "Headless CMS Expert",
    "API Architect",
    "FastAPI Developer",
    "Creative Problem Solver",
];

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// In-page anchor, e.g. `#projects`.
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "#home" },
    NavItem { label: "About", anchor: "#about" },
    NavItem { label: "Skills", anchor: "#skills" },
    NavItem { label: "Projects", anchor: "#projects" },
    NavItem { label: "Contact", anchor: "#contact" },
];

/// External profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com/Rohit-R-Sahu" },
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/in/rohit-roshan-sahu-" },
    SocialLink { label: "Twitter", url: "https://x.com/eyex0_1" },
];

/// Headline figure in the about section's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    /// Icon name, matched by the about section's renderer.
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { icon: "medal", title: "Experience", detail: "3+ Years" },
    Achievement { icon: "calendar", title: "Projects", detail: "20+ Completed" },
    Achievement { icon: "award", title: "Technologies", detail: "15+ Mastered" },
    Achievement { icon: "graduation", title: "Education", detail: "Bio Informatics" },
];

/// Way to reach the owner, shown in the contact panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    /// Icon name, matched by the contact section's renderer.
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    /// Launch target (mailto: or none for plain text).
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "mail",
        label: "Email",
        value: EMAIL,
        href: Some("mailto:rohitrsahu2000@gmail.com"),
    },
    ContactChannel {
        icon: "map-pin",
        label: "Location",
        value: LOCATION,
        href: None,
    },
];

/// A single rated skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100. Drives the bar fill width.
    pub level: u8,
}

/// Skills grouped under a category heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Frontend",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "Next.js", level: 85 },
            Skill { name: "TypeScript", level: 88 },
            Skill { name: "CSS/SCSS", level: 90 },
            Skill { name: "Tailwind", level: 92 },
        ],
    },
    SkillGroup {
        name: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 85 },
            Skill { name: "Express", level: 88 },
            Skill { name: "Java/Spring", level: 80 },
            Skill { name: "Python/FastAPI", level: 78 },
            Skill { name: "GraphQL", level: 75 },
        ],
    },
    SkillGroup {
        name: "Database",
        skills: &[
            Skill { name: "MongoDB", level: 85 },
            Skill { name: "PostgreSQL", level: 82 },
            Skill { name: "MySQL", level: 80 },
            Skill { name: "Redis", level: 75 },
            Skill { name: "Firebase", level: 78 },
        ],
    },
    SkillGroup {
        name: "DevOps",
        skills: &[
            Skill { name: "Docker", level: 82 },
            Skill { name: "Kubernetes", level: 75 },
            Skill { name: "CI/CD", level: 80 },
            Skill { name: "AWS", level: 78 },
            Skill { name: "Azure", level: 72 },
        ],
    },
];

/// Flat chip cloud under the skill bars.
pub const TECHNOLOGIES: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Node.js", "Java", "Spring Boot",
    "Python", "FastAPI", "SQL", "NoSQL", "Docker", "Kubernetes", "Git",
    "AWS", "MongoDB", "PostgreSQL", "Redux", "GraphQL", "Azure", "Next.js",
    "Express", "Tailwind CSS", "Jest", "CI/CD", "REST API",
];

/// One portfolio project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Technology tags, display order preserved.
    pub tech: &'static [&'static str],
    pub demo_url: &'static str,
    pub source_url: &'static str,
    /// Gallery filter label; must be listed in [`CATEGORIES`].
    pub category: &'static str,
}

/// Filter labels offered by the gallery, "All" first.
pub const CATEGORIES: &[&str] = &["All", "Full Stack", "Frontend", "Backend", "CMS", "DevOps"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-featured e-commerce platform with user authentication, product management, cart functionality, and payment processing.",
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tech: &["React", "Node.js", "MongoDB", "Express", "Redux"],
        demo_url: "https://example.com",
        source_url: "https://github.com",
        category: "Full Stack",
    },
    Project {
        id: 2,
        title: "Task Management System",
        description: "A comprehensive project management tool with task tracking, team collaboration, and analytics dashboard.",
        image: "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tech: &["React", "TypeScript", "Firebase", "CSS", "Redux"],
        demo_url: "https://example.com",
        source_url: "https://github.com",
        category: "Frontend",
    },
    Project {
        id: 3,
        title: "Real-time Chat Application",
        description: "A chat platform with real-time messaging, user presence indicators, and file sharing capabilities.",
        image: "https://images.pexels.com/photos/1181467/pexels-photo-1181467.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tech: &["React", "Socket.io", "Node.js", "Express", "MongoDB"],
        demo_url: "https://example.com",
        source_url: "https://github.com",
        category: "Full Stack",
    },
    Project {
        id: 4,
        title: "Content Management System",
        description: "A custom CMS built for content creators with markdown support, media management, and scheduling features.",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tech: &["Next.js", "PostgreSQL", "GraphQL", "Tailwind CSS"],
        demo_url: "https://example.com",
        source_url: "https://github.com",
        category: "CMS",
    },
    Project {
        id: 5,
        title: "Banking API",
        description: "A secure banking API with transaction processing, account management, and authentication features.",
        image: "https://images.pexels.com/photos/2007/design-document-word-text.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tech: &["Java", "Spring Boot", "MySQL", "JUnit", "Docker"],
        demo_url: "https://example.com",
        source_url: "https://github.com",
        category: "Backend",
    },
    Project {
        id: 6,
        title: "DevOps Pipeline",
        description: "A CI/CD pipeline setup for automating testing, building, and deployment of microservices.",
        image: "https://images.pexels.com/photos/577585/pexels-photo-577585.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tech: &["Docker", "Kubernetes", "Jenkins", "AWS", "Terraform"],
        demo_url: "https://example.com",
        source_url: "https://github.com",
        category: "DevOps",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_every_project_category_is_offered() {
        for project in PROJECTS {
            assert!(
                CATEGORIES.contains(&project.category),
                "project '{}' has unlisted category '{}'",
                project.title,
                project.category
            );
        }
    }

    #[test]
    fn test_all_is_the_first_category() {
        assert_eq!(CATEGORIES.first(), Some(&"All"));
    }

    #[test]
    fn test_skill_levels_within_range() {
        for group in SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{} over 100", skill.name);
            }
        }
    }

    #[test]
    fn test_nav_anchors_are_fragments() {
        for item in NAV_ITEMS {
            assert!(item.anchor.starts_with('#'), "{} anchor", item.label);
        }
    }
}
