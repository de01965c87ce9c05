pub mod contribution;
pub mod dashboard;
pub mod event;
pub mod github_user;
pub mod language_share;
pub mod query;
pub mod repository;
pub mod user_stats;
