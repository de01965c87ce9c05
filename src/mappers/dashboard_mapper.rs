use serde::Serialize;

use crate::charts::{line_chart, pie_chart};
use crate::models::dashboard::Dashboard;
use crate::models::language_share::LanguageShare;
use crate::models::user_stats::UserStats;
use crate::validators;

const GITHUB_URL: &str = "https://github.com";

/// Everything `index.hbs` reads. Optional fields serialize as `null` so strict mode sees them.
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub username: String,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub user: Option<ProfileCard>,
}

#[derive(Debug, Serialize)]
pub struct ProfileCard {
    pub login: String,
    pub display_name: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub joined: String,
    pub profile_url: String,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub blog_url: Option<String>,
    pub twitter_username: Option<String>,
    pub twitter_url: Option<String>,
    pub hireable: Option<&'static str>,
    pub tiles: Vec<StatTile>,
    pub contributions_svg: String,
    pub languages_svg: String,
    pub languages: Vec<LanguageShare>,
}

#[derive(Debug, Serialize)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub href: String,
}

pub fn to_page(username: &str, dashboard: &Dashboard) -> DashboardPage {
    DashboardPage {
        username: username.to_string(),
        error: dashboard.error.clone(),
        notice: dashboard.notice.clone(),
        user: dashboard.user_data.as_ref().map(to_profile_card),
    }
}

pub fn to_profile_card(stats: &UserStats) -> ProfileCard {
    let user = &stats.user_info;
    let profile_url = format!("{}/{}", GITHUB_URL, user.login);
    let tab = |query: &str| format!("{}?{}", profile_url, query);

    ProfileCard {
        login: user.login.clone(),
        display_name: user.display_name().to_string(),
        avatar_url: user.avatar_url.clone(),
        bio: user.bio.clone(),
        joined: user.created_at.format("%B %-d, %Y").to_string(),
        location: non_blank(&user.location),
        blog: non_blank(&user.blog),
        blog_url: user.blog.as_deref().and_then(validators::to_external_url),
        twitter_url: non_blank(&user.twitter_username).map(|t| format!("https://twitter.com/{}", t)),
        twitter_username: non_blank(&user.twitter_username),
        hireable: user.hireable.map(|h| if h { "Yes" } else { "No" }),
        tiles: vec![
            StatTile {
                label: "Followers",
                value: user.followers.to_string(),
                href: tab("tab=followers"),
            },
            StatTile {
                label: "Following",
                value: user.following.to_string(),
                href: tab("tab=following"),
            },
            StatTile {
                label: "Repositories",
                value: stats.total_repos.to_string(),
                href: tab("tab=repositories"),
            },
            StatTile {
                label: "Stars Received",
                value: stats.total_stars.to_string(),
                href: tab("tab=repositories&sort=stargazers"),
            },
        ],
        contributions_svg: line_chart::render(&stats.contributions),
        languages_svg: pie_chart::render(&stats.languages),
        languages: stats.languages.clone(),
        profile_url,
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
