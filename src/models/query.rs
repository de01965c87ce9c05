use crate::validators;

/// Parameters accepted by the proxy endpoints and the dashboard form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GithubQuery {
    pub username: Option<String>,
    pub token: Option<String>,
}

impl GithubQuery {
    /// Build from raw `key=value` pairs. A parameter given more than once is treated as absent.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        GithubQuery {
            username: single_value(&pairs, "username"),
            token: single_value(&pairs, "token"),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| validators::is_str_present(Some(u)))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| validators::is_str_present(Some(t)))
    }
}

fn single_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);
    match (values.next(), values.next()) {
        (Some(value), None) => Some(value.clone()),
        _ => None,
    }
}
