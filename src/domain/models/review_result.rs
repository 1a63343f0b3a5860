use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

use super::PromptMode;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;
/// Overall rating at or above which a company is shown as recommended.
pub const RECOMMENDATION_THRESHOLD: f64 = 3.5;

/// Structured review data in one of the two supported shapes.
///
/// Serialized untagged: each variant goes over the wire as its bare object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewResult {
    Analytical(AnalyticalReview),
    Verbatim(VerbatimReview),
}

impl ReviewResult {
    pub fn mode(&self) -> PromptMode {
        match self {
            ReviewResult::Analytical(_) => PromptMode::Synthesis,
            ReviewResult::Verbatim(_) => PromptMode::Retrieval,
        }
    }

    pub fn as_analytical(&self) -> Option<&AnalyticalReview> {
        match self {
            ReviewResult::Analytical(review) => Some(review),
            ReviewResult::Verbatim(_) => None,
        }
    }

    pub fn as_verbatim(&self) -> Option<&VerbatimReview> {
        match self {
            ReviewResult::Verbatim(review) => Some(review),
            ReviewResult::Analytical(_) => None,
        }
    }

    /// Check the invariants serde typing cannot express.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            ReviewResult::Analytical(review) => review.validate(),
            ReviewResult::Verbatim(_) => Ok(()),
        }
    }
}

/// Synthesized analysis: ratings, themes, assessments and sample quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticalReview {
    pub summary: Summary,
    pub platform_ratings: PlatformRatings,
    pub review_analysis: ReviewAnalysis,
    pub detailed_assessment: DetailedAssessment,
    pub sample_reviews: SampleReviews,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub overall_rating: f64,
    /// A JSON number; models sometimes emit whole counts as `1248.0`.
    pub total_reviews: f64,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRatings {
    pub glassdoor: f64,
    pub indeed: f64,
    pub ambition_box: f64,
    pub google_maps: f64,
}

impl PlatformRatings {
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("Glassdoor", self.glassdoor),
            ("Indeed", self.indeed),
            ("Ambition Box", self.ambition_box),
            ("Google Maps", self.google_maps),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    pub positive_themes: Vec<String>,
    pub negative_themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub rating: f64,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAssessment {
    pub work_life_balance: Assessment,
    pub career_growth: Assessment,
    pub management: Assessment,
    pub company_culture: Assessment,
    pub salary_benefits: Assessment,
}

impl DetailedAssessment {
    pub fn entries(&self) -> [(&'static str, &Assessment); 5] {
        [
            ("Work-Life Balance", &self.work_life_balance),
            ("Career Growth", &self.career_growth),
            ("Management", &self.management),
            ("Company Culture", &self.company_culture),
            ("Salary & Benefits", &self.salary_benefits),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReviews {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl AnalyticalReview {
    pub fn is_recommended(&self) -> bool {
        self.summary.overall_rating >= RECOMMENDATION_THRESHOLD
    }

    fn validate(&self) -> Result<(), DomainError> {
        check_rating("summary.overallRating", self.summary.overall_rating)?;

        let total = self.summary.total_reviews;
        if !total.is_finite() || total < 0.0 {
            return Err(DomainError::schema_mismatch(format!(
                "summary.totalReviews = {total} is not a non-negative count"
            )));
        }

        for (name, rating) in self.platform_ratings.entries() {
            check_rating(&format!("platformRatings.{name}"), rating)?;
        }

        for (name, assessment) in self.detailed_assessment.entries() {
            check_rating(&format!("detailedAssessment.{name}"), assessment.rating)?;
        }

        Ok(())
    }
}

fn check_rating(field: &str, rating: f64) -> Result<(), DomainError> {
    if rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(DomainError::schema_mismatch(format!(
            "{field} = {rating} is outside [{MIN_RATING}, {MAX_RATING}]"
        )))
    }
}

/// Verbatim quotes split into positive and negative feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbatimReview {
    pub company_name: String,
    pub good_reviews: Vec<String>,
    pub bad_reviews: Vec<String>,
}

impl VerbatimReview {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            good_reviews: Vec::new(),
            bad_reviews: Vec::new(),
        }
    }

    /// Shape-compatible body returned alongside a failure in retrieval mode.
    pub fn error_placeholder() -> Self {
        Self::new("Error")
    }

    pub fn is_empty(&self) -> bool {
        self.good_reviews.is_empty() && self.bad_reviews.is_empty()
    }
}

/// Colour band used when presenting a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    High,
    Medium,
    Low,
}

impl RatingBand {
    pub fn of(rating: f64) -> Self {
        if rating >= 4.0 {
            RatingBand::High
        } else if rating >= 3.0 {
            RatingBand::Medium
        } else {
            RatingBand::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingBand::High => "high",
            RatingBand::Medium => "medium",
            RatingBand::Low => "low",
        }
    }
}

/// Render a rating as five star glyphs: full, an optional half, then empty.
pub fn render_stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, MAX_RATING);
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;

    let mut stars = "★".repeat(full);
    if half {
        stars.push('½');
    }
    let used = full + usize::from(half);
    stars.push_str(&"☆".repeat(5usize.saturating_sub(used)));
    stars
}
