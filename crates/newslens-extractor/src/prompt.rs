//! Instruction template for impact extraction

/// Fixed system-role framing submitted with every extraction request
pub const SYSTEM_ROLE: &str =
    "You are a financial analyst specializing in Indian markets and company analysis.";

/// Builds the extraction instruction for the completion service.
///
/// The template is fixed with exactly one substitution point: the page
/// content. Everything else (field names, score range, the empty-array
/// fallback) is part of the contract the parser depends on.
pub struct PromptBuilder {
    content: String,
}

impl PromptBuilder {
    /// Create a builder for the given page content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Build the complete instruction text
    pub fn build(&self) -> String {
        format!(
            r#"Analyze the following news content and identify Indian companies that could be impacted by this news.

Content: {}

For each identified company, provide the following information in JSON format:
- company name: The exact name of the company
- impact type: "positive" or "negative" based on how the news affects the company
- company industry: The industry sector the company operates in
- impact score: A score from 0-10 where 10 is the highest impact
- listed: "Y" if the company is listed on BSE/NSE, "N" if not

Focus only on Indian companies and provide realistic impact assessments.
Return the results as a JSON array with the exact format specified above.

Example format:
[
    {{
        "company name": "Tata Motors",
        "impact type": "positive",
        "company industry": "Automotive",
        "impact score": 7,
        "listed": "Y"
    }}
]

If no relevant Indian companies are found, return an empty array []."#,
            self.content
        )
    }
}
