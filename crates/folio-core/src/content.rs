//! Static site content: skills, greetings, navigation, timeline, projects.

use crate::physics::CapsuleSpec;

pub const GREETINGS: [&str; 9] = [
    "Watkwanonhwerá:ton",
    "Bienvenue",
    "Welcome",
    "Bienvenidos",
    "欢迎",
    "いらっしゃいませ",
    "مرحباً",
    "Добро пожаловать",
    "Willkommen",
];

pub const SKILLS: [(&str, &str); 16] = [
    ("React", "#61DAFB"),
    ("TypeScript", "#3178C6"),
    ("JavaScript", "#F7DF1E"),
    ("Python", "#3776AB"),
    ("C", "#A8B9CC"),
    ("C++", "#00599C"),
    ("Java", "#ED8B00"),
    ("GSAP", "#88CE02"),
    ("AWS", "#FF9900"),
    ("SEO", "#47A248"),
    ("Tailwind", "#06B6D4"),
    ("Node.js", "#339933"),
    ("Wireshark", "#1679A7"),
    ("Nmap", "#4B275F"),
    ("Burp Suite", "#FF6633"),
    ("Cybersecurity", "#E63946"),
];

pub const GALLERY_IMAGES: [&str; 5] = [
    "/images/1.jpg",
    "/images/3.jpg",
    "/images/4.jpg",
    "/images/5.jpg",
    "/images/8.jpg",
];

pub const CV_PATH: &str = "/cv.pdf";

/// In-page navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    About,
    Journey,
    Projects,
    Skills,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::About,
        Anchor::Journey,
        Anchor::Projects,
        Anchor::Skills,
        Anchor::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::About => "about",
            Anchor::Journey => "journey",
            Anchor::Projects => "projects",
            Anchor::Skills => "skills",
            Anchor::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Anchor::About => "About",
            Anchor::Journey => "My Journey",
            Anchor::Projects => "Projects",
            Anchor::Skills => "Skills",
            Anchor::Contact => "Contact",
        }
    }

    /// Parses `#id` (or a bare id). The footer's legacy `#experience` maps to
    /// the journey section.
    pub fn from_href(href: &str) -> Option<Anchor> {
        let id = href.strip_prefix('#').unwrap_or(href);
        match id {
            "about" => Some(Anchor::About),
            "journey" | "experience" => Some(Anchor::Journey),
            "projects" => Some(Anchor::Projects),
            "skills" => Some(Anchor::Skills),
            "contact" => Some(Anchor::Contact),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
}

pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        year: "2020",
        title: "DEC in Health and Life Sciences, TAV College",
    },
    Milestone {
        year: "2021",
        title: "Data Entry Officer, Biron Groupe Santé",
    },
    Milestone {
        year: "2021",
        title: "BEng in Computer Engineering - Ongoing, Concordia University",
    },
    Milestone {
        year: "2023",
        title: "BSc (Cumulative) in Cybersecurity - Ongoing, Polytechnique Montréal",
    },
    Milestone {
        year: "2025",
        title: "Software Developer & SEO Specialist (Freelance)",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tags: &'static str,
    pub image: &'static str,
    pub color: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "SOC-in-a-Box: Purple Team Lab",
        tags: "Elastic SIEM · Suricata · Zeek · MITRE ATT&CK",
        image: "/images/project1.jpg",
        color: "#BBACAF",
    },
    Project {
        title: "Occupancy Tracking System (FPGA)",
        tags: "VHDL · FPGA · FSM · ModelSim",
        image: "/images/project2.jpg",
        color: "#977F6D",
    },
    Project {
        title: "Personal Portfolio Website",
        tags: "Rust · WebAssembly · Canvas",
        image: "/images/project3.png",
        color: "#C2491D",
    },
    Project {
        title: "House Music & DJ Projects",
        tags: "House · DJ · Music Production · Creative",
        image: "/images/project4.jpg",
        color: "#B62429",
    },
];

/// Everything the page renders from, bundled for the mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub greetings: Vec<&'static str>,
    pub skills: Vec<(&'static str, &'static str)>,
    pub gallery: Vec<&'static str>,
    pub milestones: Vec<Milestone>,
    pub projects: Vec<Project>,
    pub anchors: Vec<Anchor>,
    pub cv_path: &'static str,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            greetings: GREETINGS.to_vec(),
            skills: SKILLS.to_vec(),
            gallery: GALLERY_IMAGES.to_vec(),
            milestones: MILESTONES.to_vec(),
            projects: PROJECTS.to_vec(),
            anchors: Anchor::ALL.to_vec(),
            cv_path: CV_PATH,
        }
    }
}

impl SiteContent {
    pub fn skill_specs(&self) -> Vec<CapsuleSpec> {
        self.skills
            .iter()
            .map(|(label, color)| CapsuleSpec::new(*label, *color))
            .collect()
    }
}
