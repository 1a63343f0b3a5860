use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Which side of the company's reputation the user wants to hear about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewType {
    #[default]
    Both,
    Good,
    Bad,
}

impl ReviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewType::Both => "both",
            ReviewType::Good => "good",
            ReviewType::Bad => "bad",
        }
    }

    pub fn all() -> [ReviewType; 3] {
        [ReviewType::Both, ReviewType::Good, ReviewType::Bad]
    }
}

impl FromStr for ReviewType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "both" => Ok(ReviewType::Both),
            "good" => Ok(ReviewType::Good),
            "bad" => Ok(ReviewType::Bad),
            other => Err(DomainError::validation(format!(
                "unknown review type '{other}', expected one of: both, good, bad"
            ))),
        }
    }
}

impl std::fmt::Display for ReviewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-text fields exactly as the user typed them into the form.
///
/// Missing fields deserialize to empty values so that they are reported
/// through [`QueryForm::build`] as validation failures rather than as body
/// decoding errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryForm {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub extra_info: Option<String>,
    #[serde(default)]
    pub review_type: Option<String>,
}

impl QueryForm {
    pub fn new(company_name: impl Into<String>, company_address: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            company_address: company_address.into(),
            extra_info: None,
            review_type: None,
        }
    }

    pub fn with_extra_info(mut self, extra_info: impl Into<String>) -> Self {
        self.extra_info = Some(extra_info.into());
        self
    }

    pub fn with_review_type(mut self, review_type: impl Into<String>) -> Self {
        self.review_type = Some(review_type.into());
        self
    }

    /// Validate and normalize the form into an immutable [`Query`].
    pub fn build(self) -> Result<Query, DomainError> {
        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            return Err(DomainError::validation("company name is required"));
        }

        let company_address = self.company_address.trim();
        if company_address.is_empty() {
            return Err(DomainError::validation("company address is required"));
        }

        let extra_info = self
            .extra_info
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let review_type = match self.review_type.as_deref().map(str::trim) {
            None | Some("") => ReviewType::default(),
            Some(raw) => raw.parse()?,
        };

        Ok(Query {
            company_name: company_name.to_string(),
            company_address: company_address.to_string(),
            extra_info,
            review_type,
        })
    }
}

/// A validated request for company reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    company_name: String,
    company_address: String,
    extra_info: Option<String>,
    review_type: ReviewType,
}

impl Query {
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_address(&self) -> &str {
        &self.company_address
    }

    pub fn extra_info(&self) -> Option<&str> {
        self.extra_info.as_deref()
    }

    pub fn review_type(&self) -> ReviewType {
        self.review_type
    }

    pub fn summary(&self) -> String {
        format!(
            "company=\"{}\", address=\"{}\", review_type={}",
            self.company_name, self.company_address, self.review_type
        )
    }
}
