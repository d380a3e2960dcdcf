use crate::{config::AppConfig, utils::AppError};

/// Access and query-string checks applied before evaluation.
#[derive(Debug, Clone)]
pub struct Validator {
    access_token: String,
    max_query_length: usize,
}

impl Validator {
    pub fn new(access_token: impl Into<String>, max_query_length: usize) -> Self {
        Self {
            access_token: access_token.into(),
            max_query_length,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.access_token.clone(), config.max_query_length)
    }

    /// Exact, case-sensitive match against the trusted-caller token.
    pub fn check_access(&self, header: Option<&str>) -> bool {
        header == Some(self.access_token.as_str())
    }

    pub fn check_syntax(&self, query: &str) -> bool {
        query
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '+' || c == '-')
    }

    pub fn check_length(&self, query: &str) -> bool {
        query.chars().count() <= self.max_query_length
    }

    /// Presence, then length, then character set.
    pub fn validate_query<'a>(&self, query: Option<&'a str>) -> Result<&'a str, AppError> {
        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => return Err(AppError::MissingQuery),
        };

        if !self.check_length(query) {
            return Err(AppError::QueryTooLong);
        }

        if !self.check_syntax(query) {
            return Err(AppError::InvalidQuery);
        }

        Ok(query)
    }
}
