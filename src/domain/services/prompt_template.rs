use crate::domain::{CompletionRequest, PromptMode, Query, ReviewType, SamplingConfig};

const EXTRA_INFO_PLACEHOLDER: &str = "N/A";

/// Synthesis prompt. `{review_type}` is replaced with the requested review type.
const SYNTHESIS_PROMPT: &str = "\
You are CompanyInsightAI, an assistant that summarizes how employees and customers \
talk about a company on Glassdoor, Indeed, Ambition Box and Google Maps.

For the company described by the user, generate realistic, illustrative review data. \
The data is a plausible synthesis, not a record of real reviews. Cover:

1. An overall rating (1-5) for each platform
2. Pros and cons mentioned in reviews
3. Recurring themes in positive reviews
4. Recurring themes in negative reviews
5. Work-life balance
6. Career growth opportunities
7. Management and leadership
8. Company culture
9. Salary and benefits

The user has requested {review_type} reviews.

Return ONLY a JSON object, no prose and no markdown, with exactly this structure. \
Every rating is a number between 1 and 5. Lists contain strings only and may be empty.

{
  \"summary\": { \"overallRating\": number, \"totalReviews\": number, \"recommendation\": string },
  \"platformRatings\": { \"glassdoor\": number, \"indeed\": number, \"ambitionBox\": number, \"googleMaps\": number },
  \"reviewAnalysis\": { \"positiveThemes\": string[], \"negativeThemes\": string[] },
  \"detailedAssessment\": {
    \"workLifeBalance\": { \"rating\": number, \"comments\": string },
    \"careerGrowth\": { \"rating\": number, \"comments\": string },
    \"management\": { \"rating\": number, \"comments\": string },
    \"companyCulture\": { \"rating\": number, \"comments\": string },
    \"salaryBenefits\": { \"rating\": number, \"comments\": string }
  },
  \"sampleReviews\": { \"positive\": string[], \"negative\": string[] }
}";

/// Retrieval prompt. `{review_type}` is replaced with the requested review type.
const RETRIEVAL_PROMPT: &str = "\
You are CompanyInsightAI, an assistant that collects what people have actually written \
about a company on Glassdoor, Indeed, Ambition Box and Google Maps.

For the company described by the user, return only verbatim feedback that was published \
online. Do not paraphrase, summarize, translate or invent quotes. If you cannot find any \
feedback, return empty lists.

The user has requested {review_type} reviews.

Return ONLY a JSON object, no prose and no markdown, with exactly this structure:

{
  \"company_name\": string,
  \"good_reviews\": string[],
  \"bad_reviews\": string[]
}";

fn review_type_phrase(review_type: ReviewType) -> &'static str {
    match review_type {
        ReviewType::Both => "both good and bad",
        ReviewType::Good => "mostly good",
        ReviewType::Bad => "mostly bad",
    }
}

/// Fixed system prompt for `mode`, with the requested review type filled in.
pub fn system_prompt(mode: PromptMode, review_type: ReviewType) -> String {
    let template = match mode {
        PromptMode::Synthesis => SYNTHESIS_PROMPT,
        PromptMode::Retrieval => RETRIEVAL_PROMPT,
    };
    template.replace("{review_type}", review_type_phrase(review_type))
}

/// Literal interpolation of the query fields.
pub fn render_user_content(query: &Query) -> String {
    format!(
        "Company Name: {}\nCompany Address: {}\nExtra Information: {}\nReview Type Needed: {}",
        query.company_name(),
        query.company_address(),
        query.extra_info().unwrap_or(EXTRA_INFO_PLACEHOLDER),
        query.review_type(),
    )
}

pub fn build_completion_request(
    query: &Query,
    mode: PromptMode,
    sampling: &SamplingConfig,
) -> CompletionRequest {
    CompletionRequest::new(
        system_prompt(mode, query.review_type()),
        render_user_content(query),
        mode,
        sampling.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QueryForm;

    #[test]
    fn test_user_content_uses_placeholders() {
        let query = QueryForm::new("Acme", "1 Main St").build().unwrap();
        let content = render_user_content(&query);

        assert!(content.contains("Company Name: Acme"));
        assert!(content.contains("Company Address: 1 Main St"));
        assert!(content.contains("Extra Information: N/A"));
        assert!(content.contains("Review Type Needed: both"));
    }

    #[test]
    fn test_user_content_includes_extra_info() {
        let query = QueryForm::new("Acme", "1 Main St")
            .with_extra_info("Fintech, 200 people")
            .with_review_type("bad")
            .build()
            .unwrap();
        let content = render_user_content(&query);

        assert!(content.contains("Extra Information: Fintech, 200 people"));
        assert!(content.contains("Review Type Needed: bad"));
    }

    #[test]
    fn test_system_prompt_per_mode() {
        let synthesis = system_prompt(PromptMode::Synthesis, ReviewType::Good);
        assert!(synthesis.contains("\"platformRatings\""));
        assert!(synthesis.contains("requested mostly good reviews"));
        assert!(!synthesis.contains("{review_type}"));

        let retrieval = system_prompt(PromptMode::Retrieval, ReviewType::Both);
        assert!(retrieval.contains("\"good_reviews\""));
        assert!(retrieval.contains("return empty lists"));
        assert!(retrieval.contains("requested both good and bad reviews"));
    }

    #[test]
    fn test_build_completion_request() {
        let query = QueryForm::new("Acme", "1 Main St").build().unwrap();
        let sampling = SamplingConfig::new("model-x").with_temperature(1.0);
        let request = build_completion_request(&query, PromptMode::Retrieval, &sampling);

        assert_eq!(request.mode(), PromptMode::Retrieval);
        assert_eq!(request.temperature(), 1.0);
        assert_eq!(request.user_content(), render_user_content(&query));
    }
}
