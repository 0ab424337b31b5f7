//! Turns raw form input into the values stored for a recipe.

use super::{NewRecipe, TagList};
use crate::error::ValidationError;

/// Placeholder stored for missing prep time or unusable servings.
pub const NOT_AVAILABLE: &str = "N/A";

/// Recipe fields ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecipe {
    pub title: String,
    pub author: String,
    pub description: String,
    pub prep_time: String,
    pub servings: String,
    pub tags: TagList,
}

impl NewRecipe {
    /// Validate required fields and normalize the rest.
    pub fn normalize(&self) -> Result<NormalizedRecipe, ValidationError> {
        let title = required(&self.title, "Title")?;
        let author = required(&self.author, "Author")?;
        let description = required(&self.description, "Description")?;

        Ok(NormalizedRecipe {
            title,
            author,
            description,
            prep_time: normalize_prep_time(self.prep_time.as_deref()),
            servings: normalize_servings(self.servings.as_deref()),
            tags: TagList::from_raw(self.tags_raw.as_deref().unwrap_or("")),
        })
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::MissingField { field })
}

pub fn normalize_prep_time(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Keep servings only when it parses to a finite number greater than zero.
pub fn normalize_servings(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(format_number)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Parse a recipe id from raw input such as a URL segment.
///
/// Accepts integral numbers only (`"5"`, `" 5 "`, `"5.0"`) and rejects
/// anything that is not strictly positive.
pub fn parse_recipe_id(raw: &str) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidId {
        value: raw.to_string(),
    };
    let trimmed = raw.trim();

    let id = match trimmed.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            let n = trimmed.parse::<f64>().map_err(|_| invalid())?;
            if !n.is_finite() || n.fract() != 0.0 || n.abs() >= i64::MAX as f64 {
                return Err(invalid());
            }
            n as i64
        }
    };

    validate_recipe_id(id).map_err(|_| invalid())
}

pub fn validate_recipe_id(id: i64) -> Result<i64, ValidationError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ValidationError::InvalidId {
            value: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, author: &str, description: &str) -> NewRecipe {
        NewRecipe {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            description: Some(description.to_string()),
            ..NewRecipe::default()
        }
    }

    #[test]
    fn test_normalize_trims_and_defaults() {
        let mut recipe = input("  Soup ", " Kim", "Warm soup.  ");
        recipe.prep_time = Some("   ".to_string());
        recipe.servings = Some("-1".to_string());
        recipe.tags_raw = Some("a, b ,,c".to_string());

        let normalized = recipe.normalize().unwrap();
        assert_eq!(normalized.title, "Soup");
        assert_eq!(normalized.author, "Kim");
        assert_eq!(normalized.description, "Warm soup.");
        assert_eq!(normalized.prep_time, "N/A");
        assert_eq!(normalized.servings, "N/A");
        assert_eq!(normalized.tags.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = input("", "Kim", "Soup").normalize().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "Title" });

        let err = input("Soup", "   ", "Soup").normalize().unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "Author" });

        let mut recipe = input("Soup", "Kim", "x");
        recipe.description = None;
        assert_eq!(
            recipe.normalize().unwrap_err(),
            ValidationError::MissingField {
                field: "Description"
            }
        );
    }

    #[test]
    fn test_absent_optional_fields() {
        let normalized = input("Soup", "Kim", "Warm").normalize().unwrap();
        assert_eq!(normalized.prep_time, "N/A");
        assert_eq!(normalized.servings, "N/A");
        assert!(normalized.tags.is_empty());
    }

    #[test]
    fn test_servings() {
        assert_eq!(normalize_servings(Some("4")), "4");
        assert_eq!(normalize_servings(Some(" 4 ")), "4");
        assert_eq!(normalize_servings(Some("2.5")), "2.5");
        assert_eq!(normalize_servings(Some("4.0")), "4");
        assert_eq!(normalize_servings(Some("1e2")), "100");
        assert_eq!(normalize_servings(Some("0")), "N/A");
        assert_eq!(normalize_servings(Some("-3")), "N/A");
        assert_eq!(normalize_servings(Some("abc")), "N/A");
        assert_eq!(normalize_servings(Some("inf")), "N/A");
        assert_eq!(normalize_servings(Some("NaN")), "N/A");
        assert_eq!(normalize_servings(Some("")), "N/A");
        assert_eq!(normalize_servings(None), "N/A");
    }

    #[test]
    fn test_prep_time() {
        assert_eq!(normalize_prep_time(Some(" 15 min ")), "15 min");
        assert_eq!(normalize_prep_time(Some("")), "N/A");
        assert_eq!(normalize_prep_time(None), "N/A");
    }

    #[test]
    fn test_parse_recipe_id() {
        assert_eq!(parse_recipe_id("5"), Ok(5));
        assert_eq!(parse_recipe_id(" 12 "), Ok(12));
        assert_eq!(parse_recipe_id("5.0"), Ok(5));

        for bad in ["0", "-5", "1.5", "abc", "", "   ", "NaN", "inf", "1e30"] {
            assert!(
                matches!(parse_recipe_id(bad), Err(ValidationError::InvalidId { .. })),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_recipe_id() {
        assert_eq!(validate_recipe_id(1), Ok(1));
        assert!(validate_recipe_id(0).is_err());
        assert!(validate_recipe_id(-5).is_err());
    }
}
