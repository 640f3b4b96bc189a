//! LLM prompt engineering for entity extraction

use augur_domain::Claim;

/// JSON schema hint passed to providers with a structured-output mode
pub const ENTITY_SCHEMA: &str = r#"{"type":"object","required":["mainSubject","secondaryEntities","keywords","context","searchQueries"],"properties":{"mainSubject":{"type":"string"},"secondaryEntities":{"type":"array","items":{"type":"string"}},"keywords":{"type":"array","items":{"type":"string"}},"context":{"type":"string"},"searchQueries":{"type":"array","items":{"type":"string"}}}}"#;

/// Builds prompts for the LLM to extract entities from a claim
pub struct EntityPromptBuilder<'a> {
    claim: &'a Claim,
    max_claim_length: usize,
}

impl<'a> EntityPromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(claim: &'a Claim, max_claim_length: usize) -> Self {
        Self {
            claim,
            max_claim_length,
        }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Market question:\n---\n");
        prompt.push_str(&truncate_chars(&self.claim.text, self.max_claim_length));
        prompt.push_str("\n---\n\n");

        if let Some(description) = &self.claim.description {
            prompt.push_str("Market description:\n---\n");
            prompt.push_str(&truncate_chars(description, self.max_claim_length));
            prompt.push_str("\n---\n\n");
        }

        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt
    }
}

/// Truncate to at most `max` characters, on a char boundary
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

const EXTRACTION_INSTRUCTIONS: &str = r#"Identify what the following prediction-market question is about so that evidence can be searched for it.

Rules:
- mainSubject: the single entity or topic the question hinges on (person, asset, organization, event)
- secondaryEntities: 1 to 4 other entities that matter for resolution
- keywords: 3 to 5 search keywords, most specific first
- context: one short sentence describing what must happen for the question to resolve YES
- searchQueries: 3 to 5 web search queries likely to surface factual reporting on the outcome
- Prefer proper nouns, tickers, dates and figures over generic words"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON object only, no additional text):
{
  "mainSubject": "string",
  "secondaryEntities": ["string"],
  "keywords": ["string"],
  "context": "string",
  "searchQueries": ["string"]
}

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;
