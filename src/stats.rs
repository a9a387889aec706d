use crate::catalog::RepositoryCatalog;
use serde::{Deserialize, Serialize};

/// Summary counters rendered on the dashboard home view.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Every record, enabled or not.
    pub total_repositories: usize,
    /// Size of the enabled view (central plus enabled active entries).
    pub enabled_repositories: usize,
    pub repository_types: RepositoryTypeCounts,
    pub tech_stacks: TechStackCounts,
}

/// Per-type counts. Only these four types are tracked; records with any
/// other `type` tag are left out of the breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RepositoryTypeCounts {
    pub ros: usize,
    pub python: usize,
    pub genesis: usize,
    pub ci: usize,
}

/// Per-technology counts over the whole catalog. `ros_family` matches any
/// stack tag containing `ROS` (so `ROS Humble` and `ROS2` both count); the
/// other three require the exact tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TechStackCounts {
    #[serde(rename = "ROS/ROS2")]
    pub ros_family: usize,
    #[serde(rename = "Python")]
    pub python: usize,
    #[serde(rename = "Docker")]
    pub docker: usize,
    #[serde(rename = "Genesis")]
    pub genesis: usize,
}

impl DashboardStats {
    /// Roll a catalog up into the home-view counters.
    pub fn for_catalog(catalog: &RepositoryCatalog) -> Self {
        let all = catalog.all_repositories();

        let with_tag = |tag: &str| {
            all.iter()
                .filter(|r| r.tech_stack.iter().any(|t| t == tag))
                .count()
        };

        DashboardStats {
            total_repositories: all.len(),
            enabled_repositories: catalog.enabled_repositories().len(),
            repository_types: RepositoryTypeCounts {
                ros: catalog.repositories_by_type("ros").len(),
                python: catalog.repositories_by_type("python").len(),
                genesis: catalog.repositories_by_type("genesis").len(),
                ci: catalog.repositories_by_type("ci").len(),
            },
            tech_stacks: TechStackCounts {
                ros_family: all
                    .iter()
                    .filter(|r| r.tech_stack.iter().any(|t| t.contains("ROS")))
                    .count(),
                python: with_tag("Python"),
                docker: with_tag("Docker"),
                genesis: with_tag("Genesis"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RepositoryEntry;

    fn entry(name: &str, kind: &str, tags: &[&str], enabled: bool) -> RepositoryEntry {
        RepositoryEntry {
            name: name.to_string(),
            display_name: name.to_string(),
            description: String::new(),
            tech_stack: tags.iter().map(|t| t.to_string()).collect(),
            kind: kind.to_string(),
            emoji: "📦".to_string(),
            workflow_name: "CI".to_string(),
            is_private: false,
            enabled,
        }
    }

    #[test]
    fn test_untracked_type_is_excluded() {
        let catalog = RepositoryCatalog {
            active: vec![entry("web", "frontend", &["TypeScript"], true)],
            additional: vec![],
            central: entry("hub", "ci", &["GitHub Actions"], true),
        };
        let stats = DashboardStats::for_catalog(&catalog);
        assert_eq!(stats.total_repositories, 2);
        // `frontend` is not one of the four tracked types.
        assert_eq!(stats.repository_types.ros, 0);
        assert_eq!(stats.repository_types.python, 0);
        assert_eq!(stats.repository_types.genesis, 0);
        assert_eq!(stats.repository_types.ci, 1);
    }

    #[test]
    fn test_ros_family_is_substring_match() {
        let catalog = RepositoryCatalog {
            active: vec![
                entry("humble", "ros", &["ROS Humble"], true),
                entry("bridge", "ros", &["ROS2", "Python"], true),
            ],
            additional: vec![],
            central: entry("hub", "ci", &["Docker"], true),
        };
        let stats = DashboardStats::for_catalog(&catalog);
        assert_eq!(stats.tech_stacks.ros_family, 2);
        // Exact-tag counts do not fold variants together.
        assert_eq!(stats.tech_stacks.python, 1);
        assert_eq!(stats.tech_stacks.docker, 1);
        assert_eq!(stats.tech_stacks.genesis, 0);
    }

    #[test]
    fn test_enabled_count_tracks_enabled_view() {
        let catalog = RepositoryCatalog {
            active: vec![
                entry("on", "ros", &[], true),
                entry("off", "ros", &[], false),
            ],
            additional: vec![entry("parked", "ros", &[], true)],
            central: entry("hub", "ci", &[], true),
        };
        let stats = DashboardStats::for_catalog(&catalog);
        assert_eq!(stats.enabled_repositories, 2);
        assert_eq!(stats.total_repositories, 4);
    }
}
