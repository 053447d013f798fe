#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    CyberSecurity,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::CyberSecurity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::CyberSecurity => "cyber security",
        }
    }
}

/// Selection driving both the filter buttons and the visible skill list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SkillFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl SkillFilter {
    /// Buttons in display order: "all" first, then every category.
    pub fn options() -> impl Iterator<Item = SkillFilter> {
        std::iter::once(SkillFilter::All).chain(SkillCategory::ALL.into_iter().map(SkillFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.label(),
        }
    }

    pub fn admits(self, skill: &Skill) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => skill.category == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u8,
    pub category: SkillCategory,
    pub icon: &'static str,
}

macro_rules! devicon {
    ($name:literal) => {
        concat!(
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/",
            $name,
            "/",
            $name,
            "-original.svg"
        )
    };
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML/CSS", level: 75, category: SkillCategory::Frontend, icon: devicon!("html5") },
    Skill { name: "JavaScript", level: 70, category: SkillCategory::Frontend, icon: devicon!("javascript") },
    Skill { name: "React", level: 70, category: SkillCategory::Frontend, icon: devicon!("react") },
    Skill { name: "Vite", level: 70, category: SkillCategory::Frontend, icon: devicon!("vitejs") },
    Skill { name: "Node.js", level: 80, category: SkillCategory::Backend, icon: devicon!("nodejs") },
    Skill { name: "Express", level: 70, category: SkillCategory::Backend, icon: devicon!("express") },
    Skill { name: "MongoDB", level: 70, category: SkillCategory::Backend, icon: devicon!("mongodb") },
    Skill { name: "PostgreSQL", level: 70, category: SkillCategory::Backend, icon: devicon!("postgresql") },
    Skill { name: "Git/GitHub", level: 85, category: SkillCategory::Tools, icon: devicon!("github") },
    Skill { name: "Docker", level: 70, category: SkillCategory::Tools, icon: devicon!("docker") },
    Skill { name: "VS Code", level: 95, category: SkillCategory::Tools, icon: devicon!("vscode") },
    Skill { name: "NMap", level: 85, category: SkillCategory::CyberSecurity, icon: "/skills/nmap.jpg" },
    Skill { name: "OWASP ZAP", level: 80, category: SkillCategory::CyberSecurity, icon: "/skills/zap.png" },
    Skill { name: "Kali", level: 85, category: SkillCategory::CyberSecurity, icon: "/skills/kali.png" },
    Skill { name: "DirBuster", level: 80, category: SkillCategory::CyberSecurity, icon: "/skills/dirbuster-logo.svg" },
];

/// Skills admitted by `filter`, in catalog order.
pub fn filter_skills(catalog: &[Skill], filter: SkillFilter) -> Vec<Skill> {
    catalog
        .iter()
        .filter(|skill| filter.admits(skill))
        .copied()
        .collect()
}

/// Width of a proficiency bar, clamped to a valid percentage.
pub fn level_width(level: u8) -> String {
    format!("{}%", level.min(100))
}
