/// Brand name, rendered with the second half in the accent color.
pub const BRAND: [&str; 2] = ["Neon", "Portfolio"];
pub const CONTACT_EMAIL: &str = "hello@designer.dev";
pub const CONTACT_LOCATION: &str = "Remote / Worldwide";
pub const CONTACT_ACK: &str = "Thanks! Your message has been sent.";

/// Year the site was built, used for the footer copyright.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// Section ids on the page, in render order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "work", "contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Portfolio",
        href: "#work",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const METRICS: [Metric; 3] = [
    Metric {
        icon: "fa-wand-magic-sparkles",
        label: "Projects",
        value: "48+",
    },
    Metric {
        icon: "fa-face-smile",
        label: "Happy Clients",
        value: "30+",
    },
    Metric {
        icon: "fa-clock",
        label: "Years Experience",
        value: "5+",
    },
];

pub const ABOUT_POINTS: [&str; 3] = [
    "Branding, identity systems, and digital ads",
    "UI assets, social media kits, and pitch decks",
    "Motion-ready graphics and export pipelines",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency as a percentage, 0 to 100.
    pub level: u8,
    pub icon: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "Adobe Photoshop",
        level: 90,
        icon: "fa-brands fa-adobe",
    },
    Skill {
        name: "Illustrator",
        level: 85,
        icon: "fa-solid fa-palette",
    },
    Skill {
        name: "Figma",
        level: 80,
        icon: "fa-brands fa-figma",
    },
    Skill {
        name: "After Effects",
        level: 70,
        icon: "fa-solid fa-film",
    },
    Skill {
        name: "Branding",
        level: 88,
        icon: "fa-solid fa-bullseye",
    },
    Skill {
        name: "Social Media Design",
        level: 82,
        icon: "fa-solid fa-hashtag",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub tag: &'static str,
    /// Tailwind gradient stops for the card cover.
    pub cover: &'static str,
    pub icon: &'static str,
}

pub const PORTFOLIO_ITEMS: [PortfolioItem; 4] = [
    PortfolioItem {
        title: "Neon Brand Identity",
        tag: "Branding",
        cover: "from-blue-500/15 to-amber-400/15",
        icon: "fa-bolt",
    },
    PortfolioItem {
        title: "Futuristic UI Kit",
        tag: "UI Design",
        cover: "from-blue-500/15 to-gray-200/40",
        icon: "fa-grid-2",
    },
    PortfolioItem {
        title: "Social Campaign Pack",
        tag: "Social Media",
        cover: "from-amber-400/20 to-blue-500/10",
        icon: "fa-hashtag",
    },
    PortfolioItem {
        title: "Motion Graphics Teaser",
        tag: "Motion",
        cover: "from-blue-500/20 to-indigo-400/10",
        icon: "fa-film",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "Twitter",
        icon: "fa-brands fa-x-twitter",
        href: "#",
    },
    SocialLink {
        label: "Dribbble",
        icon: "fa-brands fa-dribbble",
        href: "#",
    },
    SocialLink {
        label: "Behance",
        icon: "fa-brands fa-behance",
        href: "#",
    },
    SocialLink {
        label: "Instagram",
        icon: "fa-brands fa-instagram",
        href: "#",
    },
];

pub fn copyright_line() -> String {
    format!("© {BUILD_YEAR} {}{}. All rights reserved.", BRAND[0], BRAND[1])
}
