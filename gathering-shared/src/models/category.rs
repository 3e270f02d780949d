/// Event categories
///
/// Every event belongs to exactly one of a fixed set of categories. The wire
/// form is the lowercase name (`"religious"`, `"social"`, `"charity"`) and
/// parsing is exact: `"Social"` or `" social"` are not categories.
///
/// # Example
///
/// ```
/// use gathering_shared::models::category::Category;
///
/// let category: Category = "charity".parse().unwrap();
/// assert_eq!(category, Category::Charity);
/// assert!("Charity".parse::<Category>().is_err());
/// ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category an event is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Services, prayer, worship
    Religious,

    /// Dinners, gatherings, festivals
    Social,

    /// Volunteering and fundraising
    Charity,
}

/// Returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 3] = [Category::Religious, Category::Social, Category::Charity];

    /// Returns the wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Religious => "religious",
            Category::Social => "social",
            Category::Charity => "charity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!("religious".parse::<Category>(), Ok(Category::Religious));
        assert_eq!("social".parse::<Category>(), Ok(Category::Social));
        assert_eq!("charity".parse::<Category>(), Ok(Category::Charity));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Religious".parse::<Category>(),
            Err(UnknownCategory("Religious".to_string()))
        );
        assert!("SOCIAL".parse::<Category>().is_err());
        assert!(" charity".parse::<Category>().is_err());
    }

    #[test]
    fn test_unknown_category() {
        let err = "spiritual".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: spiritual");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Social).unwrap();
        assert_eq!(json, "\"social\"");

        let parsed: Category = serde_json::from_str("\"charity\"").unwrap();
        assert_eq!(parsed, Category::Charity);

        assert!(serde_json::from_str::<Category>("\"Charity\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
    }
}
