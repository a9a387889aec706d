pub mod catalog;
pub mod config;
pub mod stats;

pub use catalog::{
    builtin_catalog, default_quick_actions, QuickAction, RepositoryCatalog, RepositoryEntry,
};
pub use config::{default_catalog_path, load_catalog};
pub use stats::{DashboardStats, RepositoryTypeCounts, TechStackCounts};
