//! Text rendering of a [`ReviewResult`] for the terminal.

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::{render_stars, AnalyticalReview, RatingBand, ReviewResult, VerbatimReview};

pub const NO_DATA_NOTICE: &str = "No data available.\n\
Please complete the company details form first:\n  \
company-insight query <COMPANY_NAME> <COMPANY_ADDRESS>";

pub fn format_result(result: &ReviewResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(match result {
            ReviewResult::Analytical(review) => format_analytical(review),
            ReviewResult::Verbatim(review) => format_verbatim(review),
        }),
    }
}

fn rating_line(label: &str, rating: f64) -> String {
    format!(
        "  {:<18} {} {:.1}/5 [{}]\n",
        label,
        render_stars(rating),
        rating,
        RatingBand::of(rating).as_str()
    )
}

fn bullet_list(output: &mut String, title: &str, items: &[String]) {
    output.push_str(&format!("{}\n", title));
    if items.is_empty() {
        output.push_str("  (none)\n");
    }
    for item in items {
        output.push_str(&format!("  - {}\n", item));
    }
}

fn format_analytical(review: &AnalyticalReview) -> String {
    let summary = &review.summary;
    let badge = if review.is_recommended() {
        "Recommended"
    } else {
        "Not Recommended"
    };

    let mut output = format!(
        "Company Review Analysis\n=======================\n\
         Overall: {} {:.1}/5 ({})\n\
         Based on {:.0} reviews from multiple platforms\n\
         {}\n\n",
        render_stars(summary.overall_rating),
        summary.overall_rating,
        badge,
        summary.total_reviews,
        summary.recommendation
    );

    output.push_str("Platform Ratings\n");
    for (platform, rating) in review.platform_ratings.entries() {
        output.push_str(&rating_line(platform, rating));
    }

    output.push_str("\nDetailed Assessment\n");
    for (aspect, assessment) in review.detailed_assessment.entries() {
        output.push_str(&rating_line(aspect, assessment.rating));
        output.push_str(&format!("    {}\n", assessment.comments));
    }

    output.push('\n');
    bullet_list(&mut output, "Positive Themes", &review.review_analysis.positive_themes);
    bullet_list(&mut output, "Negative Themes", &review.review_analysis.negative_themes);

    output.push('\n');
    bullet_list(&mut output, "Positive Reviews", &review.sample_reviews.positive);
    bullet_list(&mut output, "Negative Reviews", &review.sample_reviews.negative);

    output
}

fn format_verbatim(review: &VerbatimReview) -> String {
    let mut output = format!(
        "Reviews for {}\n{}\n",
        review.company_name,
        "=".repeat(12 + review.company_name.chars().count())
    );

    if review.is_empty() {
        output.push_str("No published reviews were found.\n");
        return output;
    }

    bullet_list(
        &mut output,
        &format!("Good Reviews ({})", review.good_reviews.len()),
        &review.good_reviews,
    );
    output.push('\n');
    bullet_list(
        &mut output,
        &format!("Bad Reviews ({})", review.bad_reviews.len()),
        &review.bad_reviews,
    );

    output
}
