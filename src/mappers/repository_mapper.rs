use crate::models::language_share::LanguageShare;
use crate::models::repository::Repository;

pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| r.stargazers_count).sum()
}

pub fn total_forks(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| r.forks_count).sum()
}

/// One count per repository with a primary language, in order of first appearance.
pub fn to_language_shares(repos: &[Repository]) -> Vec<LanguageShare> {
    let mut shares: Vec<LanguageShare> = Vec::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        if language.is_empty() {
            continue;
        }
        match shares.iter_mut().find(|s| s.name == language) {
            Some(share) => share.value += 1,
            None => shares.push(LanguageShare {
                name: language.to_string(),
                value: 1,
            }),
        }
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(language: Option<&str>, stars: u64, forks: u64) -> Repository {
        Repository {
            language: language.map(String::from),
            stargazers_count: stars,
            forks_count: forks,
        }
    }

    #[test]
    fn octocat_scenario() {
        let repos = vec![
            repo(Some("Go"), 10, 1),
            repo(Some("Go"), 5, 0),
            repo(Some("Python"), 0, 2),
        ];

        assert_eq!(total_stars(&repos), 15);
        assert_eq!(total_forks(&repos), 3);
        assert_eq!(
            to_language_shares(&repos),
            vec![
                LanguageShare { name: "Go".into(), value: 2 },
                LanguageShare { name: "Python".into(), value: 1 },
            ]
        );
    }

    #[test]
    fn repository_without_language_still_counts_stars() {
        let repos = vec![repo(None, 7, 3), repo(Some(""), 1, 1), repo(Some("Rust"), 2, 0)];

        assert_eq!(total_stars(&repos), 10);
        assert_eq!(total_forks(&repos), 4);
        assert_eq!(
            to_language_shares(&repos),
            vec![LanguageShare { name: "Rust".into(), value: 1 }]
        );
    }

    #[test]
    fn shares_keep_first_seen_order_not_count_order() {
        let repos = vec![
            repo(Some("Shell"), 0, 0),
            repo(Some("Rust"), 0, 0),
            repo(Some("Rust"), 0, 0),
            repo(Some("Rust"), 0, 0),
        ];

        let names: Vec<_> = to_language_shares(&repos).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Shell", "Rust"]);
    }

    #[test]
    fn no_repositories() {
        assert_eq!(total_stars(&[]), 0);
        assert!(to_language_shares(&[]).is_empty());
    }
}
