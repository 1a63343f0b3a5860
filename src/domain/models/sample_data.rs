use super::{
    AnalyticalReview, Assessment, DetailedAssessment, PlatformRatings, PromptMode, ReviewAnalysis,
    ReviewResult, SampleReviews, Summary, VerbatimReview,
};

const SAMPLE_COMPANY: &str = "Acme Corporation";

const SAMPLE_GOOD_REVIEWS: &[&str] = &[
    "Great work-life balance. Management respects personal time and rarely expects overtime.",
    "Excellent compensation package with competitive salary and comprehensive benefits.",
    "The team culture is supportive and collaborative. Everyone is willing to help each other succeed.",
    "Regular opportunities for professional development and growth within the company.",
    "Modern office with great amenities and flexible work arrangements.",
    "Management is transparent about company goals and challenges.",
    "Diverse workplace with inclusive policies and practices.",
    "The company is financially stable and growing, which provides good job security.",
];

const SAMPLE_BAD_REVIEWS: &[&str] = &[
    "Communication between departments can be challenging at times.",
    "Career progression can be slow in certain departments.",
    "Some projects are understaffed which leads to occasional burnout.",
    "The onboarding process for new employees needs improvement.",
    "Decision-making can be slow due to bureaucratic processes.",
    "Limited parking available at the main office location.",
    "Technology stack is outdated in some areas and needs updating.",
];

/// Static demonstration result. Never produced by the completion pipeline.
pub fn sample_review_result() -> ReviewResult {
    ReviewResult::Verbatim(VerbatimReview {
        company_name: SAMPLE_COMPANY.to_string(),
        good_reviews: strings(SAMPLE_GOOD_REVIEWS),
        bad_reviews: strings(SAMPLE_BAD_REVIEWS),
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn assessment(rating: f64, comments: &str) -> Assessment {
    Assessment {
        rating,
        comments: comments.to_string(),
    }
}

/// Static demonstration result in the analytical shape.
pub fn sample_analytical_result() -> ReviewResult {
    ReviewResult::Analytical(AnalyticalReview {
        summary: Summary {
            overall_rating: 3.9,
            total_reviews: 1248.0,
            recommendation: "A stable employer with good benefits; expect slower promotions."
                .to_string(),
        },
        platform_ratings: PlatformRatings {
            glassdoor: 3.8,
            indeed: 4.0,
            ambition_box: 3.7,
            google_maps: 4.2,
        },
        review_analysis: ReviewAnalysis {
            positive_themes: strings(&["Work-life balance", "Benefits", "Supportive teams"]),
            negative_themes: strings(&["Slow promotions", "Bureaucracy"]),
        },
        detailed_assessment: DetailedAssessment {
            work_life_balance: assessment(4.3, "Overtime is rare and flexible hours are common."),
            career_growth: assessment(3.1, "Promotion cycles are long in most departments."),
            management: assessment(3.6, "Transparent leadership, uneven middle management."),
            company_culture: assessment(4.1, "Collaborative and inclusive."),
            salary_benefits: assessment(4.0, "Competitive pay with comprehensive benefits."),
        },
        sample_reviews: SampleReviews {
            positive: strings(&SAMPLE_GOOD_REVIEWS[..3]),
            negative: strings(&SAMPLE_BAD_REVIEWS[..3]),
        },
    })
}

/// Demonstration result in the shape produced by `mode`.
pub fn sample_result(mode: PromptMode) -> ReviewResult {
    match mode {
        PromptMode::Synthesis => sample_analytical_result(),
        PromptMode::Retrieval => sample_review_result(),
    }
}
