use crate::error::ContractError;

/// Substrings selecting which constants take part in default-value collision checks.
///
/// A constant participates iff its symbolic name contains at least one filter, e.g. `_PORT`
/// selects `DEFAULT_RM_PORT` and `DEFAULT_NM_WEBAPP_PORT`. Insertion order is kept so
/// diagnostics list filters the way they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionFilter {
    filters: Vec<String>,
}

impl CollisionFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a substring. Duplicates are ignored.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidFilter`] for an empty substring, which would select
    /// every constant.
    pub fn add_filter(&mut self, substring: impl Into<String>) -> Result<&mut Self, ContractError> {
        let substring = substring.into();
        if substring.is_empty() {
            return Err(ContractError::InvalidFilter {
                message: "Collision filter cannot be empty".into(),
                context: Some("An empty filter would select every constant".into()),
            });
        }
        if !self.filters.contains(&substring) {
            self.filters.push(substring);
        }
        Ok(self)
    }

    #[must_use]
    pub fn matches(&self, symbol: &str) -> bool {
        self.filters.iter().any(|filter| symbol.contains(filter.as_str()))
    }

    #[must_use]
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_filter_selects_port_constants() {
        let mut filter = CollisionFilter::new();
        filter.add_filter("_PORT").unwrap();

        assert!(filter.matches("DEFAULT_RM_PORT"));
        assert!(filter.matches("SERVICE_FOO_PORT"));
        assert!(!filter.matches("DEFAULT_RM_ADDRESS"));
        assert!(!filter.matches("PORT"));
    }

    #[test]
    fn duplicates_keep_first_position() {
        let mut filter = CollisionFilter::new();
        filter
            .add_filter("_PORT")
            .unwrap()
            .add_filter("_ADDR")
            .unwrap()
            .add_filter("_PORT")
            .unwrap();
        assert_eq!(filter.filters(), ["_PORT", "_ADDR"]);
    }

    #[test]
    fn empty_filter_is_rejected() {
        let mut filter = CollisionFilter::new();
        assert!(matches!(filter.add_filter(""), Err(ContractError::InvalidFilter { .. })));
        assert!(filter.is_empty());
    }
}
