//! Parse LLM output into an entity set

use crate::error::ExtractorError;
use crate::fallback::local_extraction;
use augur_domain::entities::{
    MAX_KEYWORDS, MAX_SEARCH_QUERIES, MAX_SECONDARY_ENTITIES, MIN_SEARCH_QUERIES,
};
use augur_domain::EntitySet;
use augur_llm::strip_code_fences;
use serde::Deserialize;

/// Raw entity object as emitted by the model
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityCandidate {
    #[serde(default)]
    main_subject: String,
    #[serde(default)]
    secondary_entities: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    context: String,
    #[serde(default)]
    search_queries: Vec<String>,
}

/// Parse an extraction response into a normalized entity set
///
/// Code fences are stripped first. Lists are trimmed to their upper bounds
/// and search queries are topped up from the local tokenization of
/// `claim_text` when the model returns fewer than three.
///
/// # Errors
///
/// Fails on empty text, invalid JSON, a non-object payload, an empty
/// `mainSubject` or no search queries at all.
pub fn parse_entity_response(response: &str, claim_text: &str) -> Result<EntitySet, ExtractorError> {
    let json_str = strip_code_fences(response);
    if json_str.is_empty() {
        return Err(ExtractorError::EmptyResponse);
    }

    let candidate: EntityCandidate = serde_json::from_str(json_str)?;
    normalize(candidate, claim_text)
}

fn normalize(candidate: EntityCandidate, claim_text: &str) -> Result<EntitySet, ExtractorError> {
    let main_subject = candidate.main_subject.trim().to_string();
    if main_subject.is_empty() {
        return Err(ExtractorError::InvalidFormat("mainSubject is empty".to_string()));
    }

    let mut search_queries = clean_list(candidate.search_queries, MAX_SEARCH_QUERIES);
    if search_queries.is_empty() {
        return Err(ExtractorError::InvalidFormat("searchQueries is empty".to_string()));
    }

    let local = local_extraction(claim_text);

    if search_queries.len() < MIN_SEARCH_QUERIES {
        for query in local.search_queries {
            if search_queries.len() >= MIN_SEARCH_QUERIES {
                break;
            }
            if !search_queries.contains(&query) {
                search_queries.push(query);
            }
        }
    }

    let mut secondary_entities = clean_list(candidate.secondary_entities, MAX_SECONDARY_ENTITIES);
    if secondary_entities.is_empty() {
        secondary_entities.push(main_subject.clone());
    }

    let mut keywords = clean_list(candidate.keywords, MAX_KEYWORDS);
    if keywords.is_empty() {
        keywords.push(main_subject.clone());
    }

    let context = match candidate.context.trim() {
        "" => local.context,
        context => context.to_string(),
    };

    Ok(EntitySet {
        main_subject,
        secondary_entities,
        keywords,
        context,
        search_queries,
    })
}

/// Trim entries, drop empties and duplicates, keep at most `max`
fn clean_list(items: Vec<String>, max: usize) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(max);
    for item in items {
        let item = item.trim();
        if item.is_empty() || cleaned.iter().any(|c| c == item) {
            continue;
        }
        cleaned.push(item.to_string());
        if cleaned.len() == max {
            break;
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLAIM: &str = "Bitcoin will reach $100,000";

    #[test]
    fn test_parse_valid_json() {
        let response = r#"{
            "mainSubject": "Bitcoin",
            "secondaryEntities": ["BTC", "Crypto market"],
            "keywords": ["bitcoin", "price", "100k"],
            "context": "Bitcoin price reaching $100,000",
            "searchQueries": ["bitcoin price 100k", "BTC all time high", "bitcoin 100000"]
        }"#;

        let entities = parse_entity_response(response, CLAIM).unwrap();
        assert_eq!(entities.main_subject, "Bitcoin");
        assert_eq!(entities.secondary_entities, vec!["BTC", "Crypto market"]);
        assert_eq!(entities.keywords.len(), 3);
        assert_eq!(entities.context, "Bitcoin price reaching $100,000");
        assert_eq!(entities.search_queries.len(), 3);
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let response = "```json\n{\"mainSubject\": \"Bitcoin\", \"searchQueries\": [\"a\", \"b\", \"c\"]}\n```";
        let entities = parse_entity_response(response, CLAIM).unwrap();
        assert_eq!(entities.main_subject, "Bitcoin");
        assert_eq!(entities.search_queries, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_truncates_lists() {
        let response = r#"{
            "mainSubject": "X",
            "secondaryEntities": ["a", "b", "c", "d", "e", "f"],
            "keywords": ["1", "2", "3", "4", "5", "6", "7"],
            "context": "c",
            "searchQueries": ["q1", "q2", "q3", "q4", "q5", "q6"]
        }"#;
        let entities = parse_entity_response(response, CLAIM).unwrap();
        assert_eq!(entities.secondary_entities.len(), MAX_SECONDARY_ENTITIES);
        assert_eq!(entities.keywords.len(), MAX_KEYWORDS);
        assert_eq!(entities.search_queries.len(), MAX_SEARCH_QUERIES);
    }

    #[test]
    fn test_parse_tops_up_search_queries() {
        let response = r#"{"mainSubject": "Bitcoin", "searchQueries": ["bitcoin 100k"]}"#;
        let entities = parse_entity_response(response, CLAIM).unwrap();
        assert_eq!(
            entities.search_queries,
            vec!["bitcoin 100k", "Bitcoin will", "Bitcoin reach"]
        );
        // Missing context comes from the claim text
        assert_eq!(entities.context, CLAIM);
        assert_eq!(entities.secondary_entities, vec!["Bitcoin"]);
    }

    #[test]
    fn test_parse_empty_main_subject() {
        let response = r#"{"mainSubject": "  ", "searchQueries": ["a"]}"#;
        let result = parse_entity_response(response, CLAIM);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_no_queries() {
        let response = r#"{"mainSubject": "Bitcoin", "searchQueries": ["", " "]}"#;
        let result = parse_entity_response(response, CLAIM);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_entity_response("This is not JSON", CLAIM);
        assert!(matches!(result, Err(ExtractorError::JsonParse(_))));
    }

    #[test]
    fn test_parse_json_array_rejected() {
        let result = parse_entity_response(r#"["Bitcoin"]"#, CLAIM);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_empty_response() {
        let result = parse_entity_response("  ```\n```  ", CLAIM);
        assert!(matches!(result, Err(ExtractorError::EmptyResponse)));
    }

    #[test]
    fn test_clean_list_dedupes() {
        let items = vec!["a".to_string(), " a ".to_string(), "b".to_string()];
        assert_eq!(clean_list(items, 5), vec!["a", "b"]);
    }
}
