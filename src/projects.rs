//! Project catalog and the detail/fullscreen viewer state machine.
//!
//! The viewer is `Closed` or `Detail { project }`; a detail view may
//! additionally hold a fullscreen gallery index. Keeping the index inside
//! `Detail` makes "fullscreen without a project" unrepresentable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tags: &'static [&'static str],
    /// Gallery images; the first one doubles as the card cover.
    pub images: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

impl Project {
    pub fn cover(&self) -> Option<&'static str> {
        self.images.first().copied()
    }

    /// Column count of the detail gallery grid.
    pub fn gallery_columns(&self) -> usize {
        self.images.len().clamp(1, 3)
    }
}

pub const GITHUB_PROFILE: &str = "https://github.com/lowpow12";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Human Resource Information System",
        description: "Functional Human Resource Information System (HRIS) for work.",
        long_description: "A comprehensive HRIS solution that streamlines employee management, payroll processing, and performance tracking. The system includes modules for recruitment, onboarding, time tracking, and benefits administration. Built with a modern tech stack for scalability and performance.",
        tags: &["React", "MongoDB", "TailwindCSS", "Vite"],
        images: &["/projects/project1.png", "/projects/project1-1.png", "/projects/project1-2.png"],
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 2,
        title: "Nurture",
        description: "Mental Health Based Website to encourage mental awareness amongst high students.",
        long_description: "Nurture provides mental health resources specifically designed for high school students. The platform offers self-assessment tools, guided meditation sessions, stress management techniques, and connects students with licensed counselors through secure video sessions. All content is vetted by mental health professionals.",
        tags: &["React", "TailwindCSS", "Vite", "PostgreSQL"],
        images: &["/projects/project2.png", "/projects/project2-1.png", "/projects/project2-2.png"],
        demo_url: "#",
        github_url: "https://github.com/verszz/Nurture",
    },
    Project {
        id: 3,
        title: "Recipe Manager",
        description: "Simple yet minimalistic recipe manager to store your all cooking recipe.",
        long_description: "A clean, intuitive recipe management application that helps home cooks organize their favorite recipes. Features include ingredient scaling, meal planning, grocery list generation, and dietary filtering. The app supports rich text formatting for recipes and includes a built-in timer for cooking steps.",
        tags: &["React", "TailwindCSS", "Vite"],
        images: &["/projects/project3.png", "/projects/project3-1.png", "/projects/project3-2.png"],
        demo_url: "#",
        github_url: "#",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectViewer {
    #[default]
    Closed,
    Detail {
        project: &'static Project,
        fullscreen: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerAction {
    Open(&'static Project),
    Close,
    ShowImage(usize),
    HideImage,
    Next,
    Previous,
    /// Closes the innermost open layer.
    Dismiss,
}

impl ViewerAction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Dismiss),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// `(index + delta) mod count`, wrapping in both directions.
pub fn wrap_index(index: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as isize;
    ((index as isize + delta) % count + count) as usize % count as usize
}

impl ProjectViewer {
    pub fn selected(&self) -> Option<&'static Project> {
        match self {
            Self::Closed => None,
            Self::Detail { project, .. } => Some(*project),
        }
    }

    pub fn fullscreen_index(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Detail { fullscreen, .. } => *fullscreen,
        }
    }

    pub fn fullscreen_image(&self) -> Option<&'static str> {
        let project = self.selected()?;
        project.images.get(self.fullscreen_index()?).copied()
    }

    /// Whether prev/next controls are offered for the open gallery.
    pub fn can_navigate(&self) -> bool {
        self.selected().is_some_and(|project| project.images.len() > 1)
    }

    pub fn apply(self, action: ViewerAction) -> Self {
        match (self, action) {
            (_, ViewerAction::Open(project)) => Self::Detail {
                project,
                fullscreen: None,
            },
            (_, ViewerAction::Close) => Self::Closed,
            (Self::Detail { project, .. }, ViewerAction::ShowImage(index))
                if index < project.images.len() =>
            {
                Self::Detail {
                    project,
                    fullscreen: Some(index),
                }
            }
            (Self::Detail { project, .. }, ViewerAction::HideImage) => Self::Detail {
                project,
                fullscreen: None,
            },
            (
                Self::Detail {
                    project,
                    fullscreen: Some(index),
                },
                ViewerAction::Next | ViewerAction::Previous,
            ) => {
                let delta = if action == ViewerAction::Next { 1 } else { -1 };
                Self::Detail {
                    project,
                    fullscreen: Some(wrap_index(index, delta, project.images.len())),
                }
            }
            (state, ViewerAction::Dismiss) => state.dismiss(),
            (state, _) => state,
        }
    }

    /// Fullscreen closes first, then the modal.
    pub fn dismiss(self) -> Self {
        match self {
            Self::Detail {
                fullscreen: Some(_),
                ..
            } => self.apply(ViewerAction::HideImage),
            _ => self.apply(ViewerAction::Close),
        }
    }
}
