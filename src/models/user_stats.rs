use serde::Serialize;

use super::contribution::ContributionPoint;
use super::github_user::GithubUser;
use super::language_share::LanguageShare;

/// Everything the dashboard renders for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_info: GithubUser,
    pub total_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub contributions: Vec<ContributionPoint>,
    pub languages: Vec<LanguageShare>,
}
