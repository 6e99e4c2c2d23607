use derive_more::{AsRef, Display};

use crate::text;

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase words joined by single spaces.
    #[must_use]
    pub fn normalized(&self) -> String {
        text::normalize(&self.0)
    }

    #[must_use]
    pub fn is_same(&self, other: &str) -> bool {
        self.normalized() == text::normalize(other)
    }

    #[must_use]
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.to_lowercase().contains(&fragment.trim().to_lowercase())
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Squat", Ok(Name("Squat".to_string())))]
    #[case("  Lat Pulldown  ", Ok(Name("Lat Pulldown".to_string())))]
    #[case("   ", Err(NameError::Empty))]
    #[case(
        "Incline Dumbbell Bench Press With A Pause At The Bottom Of Every Rep",
        Err(NameError::TooLong(68))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[rstest]
    #[case("Pull-Up", "pull up", true)]
    #[case("Barbell  Row", "barbell row", true)]
    #[case("Barbell Row", "Dumbbell Row", false)]
    fn test_name_is_same(#[case] name: &str, #[case] other: &str, #[case] expected: bool) {
        assert_eq!(Name::new(name).unwrap().is_same(other), expected);
    }

    #[test]
    fn test_name_contains() {
        let name = Name::new("Barbell Bench Press").unwrap();
        assert!(name.contains("bench"));
        assert!(name.contains(" BENCH PRESS "));
        assert!(!name.contains("squat"));
    }
}
