//! Deterministic local extraction used when the model cannot be relied on

use augur_domain::entities::{MAX_KEYWORDS, MAX_SECONDARY_ENTITIES};
use augur_domain::EntitySet;

/// Characters of claim text kept as context
const CONTEXT_CHARS: usize = 100;

/// Minimum length of a token to be picked as the main subject
const MIN_SUBJECT_CHARS: usize = 4;

/// Leading tokens combined with the main subject into search queries
const QUERY_TOKENS: usize = 3;

/// Subject used when the claim has no usable tokens at all
const UNKNOWN_SUBJECT: &str = "unknown";

/// Build an entity set purely from the claim's own tokens
///
/// Splits on whitespace and commas, picks the first token of at least four
/// characters as the main subject, and pairs it with up to three leading
/// tokens to form search queries. No model is involved, so the result is
/// fully deterministic.
///
/// # Examples
///
/// ```
/// use augur_extractor::local_extraction;
///
/// let entities = local_extraction("Bitcoin will reach $100,000");
/// assert_eq!(entities.main_subject, "Bitcoin");
/// assert_eq!(entities.search_queries[0], "Bitcoin will");
/// ```
pub fn local_extraction(text: &str) -> EntitySet {
    let tokens = tokenize(text);

    let main_index = tokens
        .iter()
        .position(|t| t.chars().count() >= MIN_SUBJECT_CHARS)
        .or(if tokens.is_empty() { None } else { Some(0) });

    let main_subject = main_index
        .map(|i| tokens[i].clone())
        .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string());

    let rest: Vec<String> = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != main_index)
        .map(|(_, t)| t.clone())
        .collect();

    let mut secondary_entities: Vec<String> =
        rest.iter().take(MAX_SECONDARY_ENTITIES).cloned().collect();
    if secondary_entities.is_empty() {
        secondary_entities.push(main_subject.clone());
    }

    let mut keywords = vec![main_subject.clone()];
    for token in &rest {
        if keywords.len() >= MAX_KEYWORDS {
            break;
        }
        if !keywords.contains(token) {
            keywords.push(token.clone());
        }
    }

    let mut search_queries: Vec<String> = rest
        .iter()
        .take(QUERY_TOKENS)
        .map(|t| format!("{} {}", main_subject, t))
        .collect();
    if search_queries.is_empty() {
        search_queries.push(main_subject.clone());
    }

    EntitySet {
        main_subject,
        secondary_entities,
        keywords,
        context: text.trim().chars().take(CONTEXT_CHARS).collect(),
        search_queries,
    }
}

/// Split on whitespace and commas, dropping sentence punctuation at token ends
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .map(|t| t.trim_matches(|c: char| matches!(c, '?' | '!' | '.' | ':' | ';' | '"' | '(' | ')')))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
