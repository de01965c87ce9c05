pub mod contribution_mapper;
pub mod dashboard_mapper;
pub mod repository_mapper;
