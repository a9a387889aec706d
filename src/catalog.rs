use serde::{Deserialize, Serialize};

/// A single repository record in the dashboard catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryEntry {
    /// Stable unique key across the whole catalog.
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Ordered for display; order carries no other meaning.
    pub tech_stack: Vec<String>,
    /// Open-ended grouping tag (`ros`, `python`, `genesis`, `ci`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub emoji: String,
    /// URL-encoded name of the CI workflow that builds this repository.
    pub workflow_name: String,
    pub is_private: bool,
    pub enabled: bool,
}

/// The dashboard's repository catalog. Built once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryCatalog {
    /// Repositories in the current rotation.
    #[serde(default)]
    pub active: Vec<RepositoryEntry>,
    /// Known repositories that can be promoted into the rotation later.
    /// Their `enabled` flag is ignored by every enabled view.
    #[serde(default)]
    pub additional: Vec<RepositoryEntry>,
    /// The aggregating central-CI record. Always treated as enabled.
    pub central: RepositoryEntry,
}

impl RepositoryCatalog {
    /// Every record: central first, then active, then additional,
    /// each partition in declaration order.
    pub fn all_repositories(&self) -> Vec<&RepositoryEntry> {
        std::iter::once(&self.central)
            .chain(self.active.iter())
            .chain(self.additional.iter())
            .collect()
    }

    /// Central plus the enabled slice of `active`.
    pub fn enabled_repositories(&self) -> Vec<&RepositoryEntry> {
        std::iter::once(&self.central)
            .chain(self.active.iter().filter(|r| r.enabled))
            .collect()
    }

    /// First record whose `name` matches exactly, searching in
    /// `all_repositories` order. A miss is a normal outcome, not an error.
    pub fn repository_by_name(&self, name: &str) -> Option<&RepositoryEntry> {
        self.all_repositories().into_iter().find(|r| r.name == name)
    }

    /// Enabled entries from the active partition only.
    pub fn active_repositories(&self) -> Vec<&RepositoryEntry> {
        self.active.iter().filter(|r| r.enabled).collect()
    }

    /// All records carrying the given `type` tag, matched case-sensitively.
    pub fn repositories_by_type(&self, kind: &str) -> Vec<&RepositoryEntry> {
        self.all_repositories()
            .into_iter()
            .filter(|r| r.kind == kind)
            .collect()
    }
}

/// A static dashboard shortcut link. Unrelated to the query API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    /// Label shown on the dashboard; may embed a display glyph.
    pub title: String,
    pub url: String,
    pub description: String,
}

impl QuickAction {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

fn stack(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// Returns the catalog the dashboard ships with.
pub fn builtin_catalog() -> RepositoryCatalog {
    RepositoryCatalog {
        active: vec![
            RepositoryEntry {
                name: "sit-to-stand-planner".to_string(),
                display_name: "Sit-to-Stand Planner".to_string(),
                description: "Motion planning for sit-to-stand transitions".to_string(),
                tech_stack: stack(&["ROS Humble", "Docker", "Python"]),
                kind: "ros".to_string(),
                emoji: "🚶".to_string(),
                workflow_name: "Self-Hosted%20CI".to_string(),
                is_private: true,
                enabled: true,
            },
            RepositoryEntry {
                name: "ia_robot_sim".to_string(),
                display_name: "IA Robot Sim".to_string(),
                description: "Robot simulation using Genesis".to_string(),
                tech_stack: stack(&["Genesis", "ROS2", "Python"]),
                kind: "genesis".to_string(),
                emoji: "🤖".to_string(),
                workflow_name: "CI".to_string(),
                is_private: true,
                enabled: true,
            },
        ],
        additional: vec![
            RepositoryEntry {
                name: "genesis_ros".to_string(),
                display_name: "Genesis ROS".to_string(),
                description: "ROS2 bridge for the Genesis simulator".to_string(),
                tech_stack: stack(&["ROS2", "Genesis", "C++"]),
                kind: "ros".to_string(),
                emoji: "🌍".to_string(),
                workflow_name: "CI".to_string(),
                is_private: true,
                enabled: false,
            },
            RepositoryEntry {
                name: "ia_robot_urdf".to_string(),
                display_name: "IA Robot URDF".to_string(),
                description: "Robot description files for IA robot".to_string(),
                tech_stack: stack(&["ROS2", "URDF", "YAML"]),
                kind: "ros".to_string(),
                emoji: "🤖".to_string(),
                workflow_name: "CI".to_string(),
                is_private: true,
                enabled: false,
            },
            RepositoryEntry {
                name: "robot_self_filter".to_string(),
                display_name: "Robot Self Filter".to_string(),
                description: "ROS2 version of the robot_self_filter package".to_string(),
                tech_stack: stack(&["ROS2", "C++", "PCL"]),
                kind: "ros".to_string(),
                emoji: "🔧".to_string(),
                workflow_name: "CI".to_string(),
                is_private: true,
                enabled: false,
            },
            RepositoryEntry {
                name: "pose-estimation".to_string(),
                display_name: "Pose Estimation".to_string(),
                description: "3D human pose estimation with monocular RGB camera".to_string(),
                tech_stack: stack(&["Python", "OpenCV", "PyTorch"]),
                kind: "python".to_string(),
                emoji: "👤".to_string(),
                workflow_name: "CI".to_string(),
                is_private: false,
                enabled: false,
            },
        ],
        central: RepositoryEntry {
            name: "team-nightly-tests".to_string(),
            display_name: "Central CI".to_string(),
            description: "Centralized testing for all repositories".to_string(),
            tech_stack: stack(&["GitHub Actions", "Docker", "YAML"]),
            kind: "ci".to_string(),
            emoji: "🎯".to_string(),
            workflow_name: "Central%20CI%20-%20All%20Repositories".to_string(),
            is_private: false,
            enabled: true,
        },
    }
}

/// Returns the dashboard's shortcut links.
pub fn default_quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new(
            "🚀 Run Central CI v2",
            "https://github.com/Intuitive-Autonomy/team-nightly-tests/actions/workflows/central-ci-v2.yml",
            "Run the new scalable CI system",
        ),
        QuickAction::new(
            "🔄 Run Legacy Central CI",
            "https://github.com/Intuitive-Autonomy/team-nightly-tests/actions/workflows/central-ci.yml",
            "Run the original central CI",
        ),
        QuickAction::new(
            "📊 View All Runs",
            "https://github.com/Intuitive-Autonomy/team-nightly-tests/actions",
            "See all workflow executions",
        ),
        QuickAction::new(
            "🚶 Sit-to-Stand Repo",
            "https://github.com/Intuitive-Autonomy/sit-to-stand-planner",
            "Motion planning repository",
        ),
        QuickAction::new(
            "🤖 Robot Sim Repo",
            "https://github.com/Intuitive-Autonomy/ia_robot_sim",
            "Genesis simulation repository",
        ),
        QuickAction::new(
            "📖 Documentation",
            "https://github.com/Intuitive-Autonomy/team-nightly-tests/blob/master/README.md",
            "Central CI documentation",
        ),
        QuickAction::new(
            "⚙️ Configuration",
            "https://github.com/Intuitive-Autonomy/team-nightly-tests/blob/master/repositories.yml",
            "Repository configuration file",
        ),
        QuickAction::new(
            "🏢 Organization",
            "https://github.com/Intuitive-Autonomy",
            "Intuitive Autonomy GitHub org",
        ),
    ]
}
