use crate::errors::ApiError;

use super::user_stats::UserStats;

pub const SUCCESS_NOTICE: &str = "User data fetched successfully!";

/// Dashboard page state: idle, loading, then success or failure.
///
/// `user_data` is replaced wholesale on success and cleared when a new fetch
/// begins, so a failed fetch never shows the previous user's numbers.
///
/// `loading` is only true between `begin` and `finish`. Pages render after
/// `finish`, so the in-flight state is shown by the browser while the form
/// submission is pending.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub loading: bool,
    pub user_data: Option<UserStats>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl Dashboard {
    pub fn begin(&mut self) {
        self.loading = true;
        self.user_data = None;
        self.error = None;
        self.notice = None;
    }

    pub fn finish(&mut self, result: Result<UserStats, ApiError>) {
        self.loading = false;
        match result {
            Ok(stats) => {
                self.user_data = Some(stats);
                self.notice = Some(SUCCESS_NOTICE.to_string());
            }
            Err(err) => {
                self.user_data = None;
                self.error = Some(format!("Error fetching data: {}", err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::errors::GitHubError;
    use crate::models::github_user::GithubUser;

    fn stats() -> UserStats {
        UserStats {
            user_info: GithubUser {
                login: "octocat".into(),
                name: None,
                avatar_url: "https://avatars.githubusercontent.com/u/583231".into(),
                bio: None,
                created_at: Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap(),
                followers: 1,
                following: 2,
                hireable: None,
                location: None,
                blog: None,
                twitter_username: None,
            },
            total_repos: 0,
            total_stars: 0,
            total_forks: 0,
            contributions: vec![],
            languages: vec![],
        }
    }

    #[test]
    fn begin_clears_previous_result() {
        let mut dashboard = Dashboard::default();
        dashboard.finish(Ok(stats()));

        dashboard.begin();

        assert!(dashboard.loading);
        assert!(dashboard.user_data.is_none());
        assert!(dashboard.notice.is_none());
    }

    #[test]
    fn failure_sets_single_error_and_stops_loading() {
        let mut dashboard = Dashboard::default();
        dashboard.begin();
        dashboard.finish(Err(ApiError::from(GitHubError::UnexpectedStatus {
            url: "https://api.github.com/users/ghost".into(),
            status: 404,
            reason: "Not Found".into(),
        })));

        assert!(!dashboard.loading);
        assert!(dashboard.user_data.is_none());
        assert_eq!(
            dashboard.error.as_deref(),
            Some("Error fetching data: GitHub API error: Not Found")
        );
    }

    #[test]
    fn success_sets_notice() {
        let mut dashboard = Dashboard::default();
        dashboard.begin();
        dashboard.finish(Ok(stats()));

        assert!(!dashboard.loading);
        assert_eq!(dashboard.notice.as_deref(), Some(SUCCESS_NOTICE));
        assert_eq!(dashboard.user_data.unwrap().user_info.login, "octocat");
    }
}
