use crate::catalog::{builtin_catalog, RepositoryCatalog};
use anyhow::Result;
use std::path::PathBuf;

/// Default catalog file location: `~/.config/cipulse/repositories.toml`.
pub fn default_catalog_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("cipulse")
        .join("repositories.toml")
}

/// Load the catalog, creating a default file on first run if none exists.
///
/// The file uses the same camelCase keys the dashboard's JSON contract uses,
/// so a record can be moved between the file and the frontend unchanged.
pub fn load_catalog(catalog_path: Option<&PathBuf>) -> Result<RepositoryCatalog> {
    let path = catalog_path.cloned().unwrap_or_else(default_catalog_path);

    if !path.exists() {
        // First run: write the built-in catalog with explanatory comments.
        // Ignore errors (e.g. read-only path, permission denied) and fall back to the built-ins.
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_ok() {
                let _ = std::fs::write(&path, default_catalog_toml());
            }
        }
        return Ok(builtin_catalog());
    }

    let contents = std::fs::read_to_string(&path)?;
    let catalog: RepositoryCatalog = toml::from_str(&contents)?;
    Ok(catalog)
}

fn default_catalog_toml() -> &'static str {
    r#"# cipulse repository catalog
# ~/.config/cipulse/repositories.toml
#
# Keys mirror the dashboard contract: displayName, techStack, type,
# workflowName, isPrivate, enabled.

# Repositories in the current rotation.
[[active]]
name = "sit-to-stand-planner"
displayName = "Sit-to-Stand Planner"
description = "Motion planning for sit-to-stand transitions"
techStack = ["ROS Humble", "Docker", "Python"]
type = "ros"
emoji = "🚶"
workflowName = "Self-Hosted%20CI"
isPrivate = true
enabled = true

[[active]]
name = "ia_robot_sim"
displayName = "IA Robot Sim"
description = "Robot simulation using Genesis"
techStack = ["Genesis", "ROS2", "Python"]
type = "genesis"
emoji = "🤖"
workflowName = "CI"
isPrivate = true
enabled = true

# Known repositories that can be promoted into the rotation later.
[[additional]]
name = "genesis_ros"
displayName = "Genesis ROS"
description = "ROS2 bridge for the Genesis simulator"
techStack = ["ROS2", "Genesis", "C++"]
type = "ros"
emoji = "🌍"
workflowName = "CI"
isPrivate = true
enabled = false

[[additional]]
name = "ia_robot_urdf"
displayName = "IA Robot URDF"
description = "Robot description files for IA robot"
techStack = ["ROS2", "URDF", "YAML"]
type = "ros"
emoji = "🤖"
workflowName = "CI"
isPrivate = true
enabled = false

[[additional]]
name = "robot_self_filter"
displayName = "Robot Self Filter"
description = "ROS2 version of the robot_self_filter package"
techStack = ["ROS2", "C++", "PCL"]
type = "ros"
emoji = "🔧"
workflowName = "CI"
isPrivate = true
enabled = false

[[additional]]
name = "pose-estimation"
displayName = "Pose Estimation"
description = "3D human pose estimation with monocular RGB camera"
techStack = ["Python", "OpenCV", "PyTorch"]
type = "python"
emoji = "👤"
workflowName = "CI"
isPrivate = false
enabled = false

# The aggregating central-CI record.
[central]
name = "team-nightly-tests"
displayName = "Central CI"
description = "Centralized testing for all repositories"
techStack = ["GitHub Actions", "Docker", "YAML"]
type = "ci"
emoji = "🎯"
workflowName = "Central%20CI%20-%20All%20Repositories"
isPrivate = false
enabled = true
"#
}
