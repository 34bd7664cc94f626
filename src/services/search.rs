//! Influencer search filters
//!
//! Turns the filters a user picked into query parameters for
//! `/api/influencers/search`. Values are forwarded without range checks;
//! the server decides what an out-of-range or malformed value means.

/// Category sent when the user has not narrowed the search
pub const ALL_CATEGORIES: &str = "All";

/// Age constraint, holding the text the user entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AgeFilter {
    #[default]
    Any,
    Exact(String),
    Range { min: String, max: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfluencerSearch {
    pub query: Option<String>,
    pub category: Option<String>,
    pub age: AgeFilter,
    pub min_followers: Option<String>,
}

impl InfluencerSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = AgeFilter::Exact(age.into());
        self
    }

    pub fn age_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.age = AgeFilter::Range {
            min: min.into(),
            max: max.into(),
        };
        self
    }

    pub fn min_followers(mut self, followers: impl Into<String>) -> Self {
        self.min_followers = Some(followers.into());
        self
    }

    /// Query string pairs in a stable order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(query) = non_empty(self.query.as_deref()) {
            pairs.push(("query", query.to_string()));
        }

        let category = non_empty(self.category.as_deref()).unwrap_or(ALL_CATEGORIES);
        pairs.push(("category", category.to_string()));

        match &self.age {
            AgeFilter::Any => {}
            AgeFilter::Exact(age) => {
                if let Some(value) = numeric_param(age) {
                    pairs.push(("ageRange", value));
                }
            }
            AgeFilter::Range { min, max } => {
                if let Some(value) = numeric_param(min) {
                    pairs.push(("minAge", value));
                }
                if let Some(value) = numeric_param(max) {
                    pairs.push(("maxAge", value));
                }
            }
        }

        if let Some(value) = self.min_followers.as_deref().and_then(numeric_param) {
            pairs.push(("followers", value));
        }

        pairs
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Basic integer parsing for a numeric filter.
///
/// Leading whitespace and a sign are accepted and the longest digit prefix is
/// kept (`"25yo"` -> `"25"`). Text without a digit prefix is forwarded
/// verbatim. Empty input yields no parameter.
pub fn numeric_param(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(parse_leading_integer(raw).unwrap_or_else(|| raw.to_string()))
}

fn parse_leading_integer(raw: &str) -> Option<String> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some("0".to_string());
    }
    Some(format!("{}{}", sign, digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lookup<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_defaults_to_all_categories() {
        let pairs = InfluencerSearch::new().to_query_pairs();
        assert_eq!(pairs, vec![("category", "All".to_string())]);

        let pairs = InfluencerSearch::new().category("  ").to_query_pairs();
        assert_eq!(lookup(&pairs, "category"), Some("All"));
    }

    #[test]
    fn test_full_search() {
        let pairs = InfluencerSearch::new()
            .query("mia")
            .category("Fitness")
            .age("25")
            .min_followers("100000")
            .to_query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("query", "mia".to_string()),
                ("category", "Fitness".to_string()),
                ("ageRange", "25".to_string()),
                ("followers", "100000".to_string()),
            ]
        );
    }

    #[test]
    fn test_age_range_bounds_independent() {
        let pairs = InfluencerSearch::new().age_range("18", "").to_query_pairs();
        assert_eq!(lookup(&pairs, "minAge"), Some("18"));
        assert_eq!(lookup(&pairs, "maxAge"), None);
        assert_eq!(lookup(&pairs, "ageRange"), None);
    }

    #[test]
    fn test_inverted_range_not_corrected() {
        let pairs = InfluencerSearch::new().age_range("40", "20").to_query_pairs();
        assert_eq!(lookup(&pairs, "minAge"), Some("40"));
        assert_eq!(lookup(&pairs, "maxAge"), Some("20"));
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(numeric_param("25"), Some("25".to_string()));
        assert_eq!(numeric_param("  25yo"), Some("25".to_string()));
        assert_eq!(numeric_param("-3"), Some("-3".to_string()));
        assert_eq!(numeric_param("+7"), Some("7".to_string()));
        assert_eq!(numeric_param("007"), Some("7".to_string()));
        assert_eq!(numeric_param("-0"), Some("0".to_string()));
        assert_eq!(numeric_param("lots"), Some("lots".to_string()));
        assert_eq!(numeric_param(""), None);
        assert_eq!(numeric_param("   "), None);
    }

    proptest! {
        #[test]
        fn prop_numeric_filters_not_clamped(age in any::<i64>(), followers in any::<u64>()) {
            let pairs = InfluencerSearch::new()
                .age(age.to_string())
                .min_followers(followers.to_string())
                .to_query_pairs();
            let age_text = age.to_string();
            let followers_text = followers.to_string();
            prop_assert_eq!(lookup(&pairs, "ageRange"), Some(age_text.as_str()));
            prop_assert_eq!(lookup(&pairs, "followers"), Some(followers_text.as_str()));
        }

        #[test]
        fn prop_category_forwarded_verbatim(category in "[A-Za-z][A-Za-z &]{0,20}[A-Za-z]") {
            let pairs = InfluencerSearch::new().category(category.clone()).to_query_pairs();
            prop_assert_eq!(lookup(&pairs, "category"), Some(category.as_str()));
        }
    }
}
