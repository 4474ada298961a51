//! Static profile content shown on the home, about and contact screens.

/// Lines printed by the boot sequence, in order
pub const BOOT_MESSAGES: &[&str] = &[
    "SYSTEM BOOT INITIATED...",
    "[OK] Loading kernel modules",
    "[OK] Mounting filesystems",
    "[OK] Starting network services",
    "[  ] Bypassing security protocols...",
    "[OK] Security bypassed",
    "[OK] Establishing encrypted connection",
    "[OK] Loading user profile: ABDALRAHMAN",
    "[OK] Initializing DedSec protocols",
    ">>> CONNECTION ESTABLISHED <<<",
];

pub const FIRST_NAME: &str = "ABDALRAHMAN";
pub const LAST_NAME: &str = "E'LEIMAT";
pub const ROLE: &str = "Software Engineer | DevOps Engineer";
pub const AFFILIATION: &str = "Co-Founder @ DeepDiveNerds";

pub const BIO: &[&str] = &[
    "Software Engineer based in Jordan with a passion for building elegant solutions to complex problems.",
    "Co-founder of DeepDiveNerds, where we explore the depths of technology and share knowledge with the community.",
    "Currently focused on full-stack development, DevOps, cloud architecture, and system programming.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0..=100
    pub level: u8,
    pub status: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "C/C++", level: 95, status: "LOADED" },
    Skill { name: "Python", level: 80, status: "LOADED" },
    Skill { name: "Java", level: 75, status: "LOADED" },
    Skill { name: "AWS", level: 85, status: "LOADED" },
    Skill { name: "Docker", level: 60, status: "LOADED" },
    Skill { name: "Linux", level: 92, status: "LOADED" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusArea {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        title: "DEVELOPMENT",
        description: "Full-stack development with a focus on clean, maintainable code. Proficient in modern web technologies and system programming.",
    },
    FocusArea {
        title: "INFRASTRUCTURE",
        description: "Experience with cloud platforms (AWS), containerization (Docker), and DevOps practices for scalable deployments.",
    },
    FocusArea {
        title: "SECURITY",
        description: "Understanding of secure coding practices, authentication systems, and vulnerability assessment.",
    },
    FocusArea {
        title: "PERFORMANCE",
        description: "Optimization of algorithms and systems for maximum efficiency. Low-level programming expertise in C/C++.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub event: &'static str,
    pub status: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2024",
        event: "Co-founded DeepDiveNerds",
        status: "ACTIVE",
    },
    TimelineEntry {
        year: "2025",
        event: "Graduated from the Hashemite University with B.S in BIT",
        status: "COMPLETE",
    },
    TimelineEntry {
        year: "2024",
        event: "Core Curriculum Student @42Amman",
        status: "ACTIVE",
    },
    TimelineEntry {
        year: "2022",
        event: "Started full-stack development journey",
        status: "ACTIVE",
    },
];

/// A way to reach out, listed on the contact screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub label: &'static str,
    pub value: &'static str,
    /// Name recorded in the system log when opened
    pub name: &'static str,
    pub url: &'static str,
    /// Key that opens it from the contact page
    pub key: char,
}

pub const CHANNELS: &[Channel] = &[
    Channel {
        label: "EMAIL",
        value: "contact@example.com",
        name: "Email",
        url: "mailto:contact@example.com",
        key: 'e',
    },
    Channel {
        label: "GITHUB",
        value: "github.com/username",
        name: "GitHub",
        url: "https://github.com",
        key: 'g',
    },
    Channel {
        label: "LINKEDIN",
        value: "linkedin.com/in/username",
        name: "LinkedIn",
        url: "https://linkedin.com",
        key: 'i',
    },
];

/// Rows of the contact screen's status panel
pub const STATUS: &[(&str, &str)] = &[
    ("Availability", "ONLINE"),
    ("Response Time", "< 24 hours"),
    ("Open to Work", "YES"),
];

/// Fake diagnostics printed on the 404 screen
pub const NOT_FOUND_DIAGNOSTICS: &[&str] = &[
    "[SYSTEM] Attempting to locate resource...",
    "[FAIL] Resource not found in database",
    "[FAIL] Backup lookup failed",
    "[RECO] Suggested action: Return to home",
];
