pub mod github_service;
pub mod stats_service;
