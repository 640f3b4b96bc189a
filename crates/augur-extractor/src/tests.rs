//! Integration tests for the EntityExtractor

#[cfg(test)]
mod tests {
    use crate::{local_extraction, EntityExtractor, ExtractorConfig, ExtractorError};
    use augur_domain::Claim;
    use augur_llm::MockProvider;
    use std::time::Duration;

    const BITCOIN: &str = "Bitcoin will reach $100,000";

    #[tokio::test]
    async fn test_unparsable_json_falls_back_to_local_tokens() {
        let llm = MockProvider::new("Sure! Here are the entities you asked for.");
        let extractor = EntityExtractor::new(llm.clone(), ExtractorConfig::default());

        let entities = extractor.extract(&Claim::new(BITCOIN)).await;

        assert!(!entities.main_subject.is_empty());
        assert_eq!(entities, local_extraction(BITCOIN));
        assert_eq!(llm.call_count(), 1, "single attempt, no retries");
    }

    #[tokio::test]
    async fn test_model_error_falls_back() {
        let extractor = EntityExtractor::new(MockProvider::failing(), ExtractorConfig::default());
        let entities = extractor.extract(&Claim::new(BITCOIN)).await;
        assert_eq!(entities.main_subject, "Bitcoin");
    }

    #[tokio::test]
    async fn test_empty_response_falls_back() {
        let extractor = EntityExtractor::new(MockProvider::new(""), ExtractorConfig::default());
        let entities = extractor.extract(&Claim::new(BITCOIN)).await;
        assert_eq!(entities, local_extraction(BITCOIN));
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let llm = MockProvider::new(r#"{"mainSubject": "Slow", "searchQueries": ["q"]}"#)
            .with_latency(Duration::from_millis(1_500));
        let config = ExtractorConfig {
            extraction_timeout_secs: 1,
            ..Default::default()
        };
        let extractor = EntityExtractor::new(llm, config);

        let claim = Claim::new(BITCOIN);
        assert!(matches!(
            extractor.try_extract(&claim).await,
            Err(ExtractorError::Timeout)
        ));
        assert_eq!(extractor.extract(&claim).await.main_subject, "Bitcoin");
    }

    #[tokio::test]
    async fn test_fenced_json_is_accepted() {
        let llm = MockProvider::new(
            "```json\n{\"mainSubject\": \"BTC\", \"searchQueries\": [\"btc 100k\", \"btc ath\", \"btc price\"]}\n```",
        );
        let extractor = EntityExtractor::new(llm, ExtractorConfig::default());
        let entities = extractor.extract(&Claim::new(BITCOIN)).await;
        assert_eq!(entities.main_subject, "BTC");
        assert_eq!(entities.search_queries.len(), 3);
    }

    #[tokio::test]
    async fn test_plain_generation_when_structured_disabled() {
        let llm = MockProvider::new(r#"{"mainSubject": "BTC", "searchQueries": ["a", "b", "c"]}"#);
        let config = ExtractorConfig {
            structured_output: false,
            ..Default::default()
        };
        let extractor = EntityExtractor::new(llm.clone(), config);
        let entities = extractor.extract(&Claim::new(BITCOIN)).await;
        assert_eq!(entities.main_subject, "BTC");
        assert_eq!(llm.call_count(), 1);
    }

    #[test]
    fn test_extract_from_sync_context() {
        let extractor = EntityExtractor::new(MockProvider::new("garbage"), ExtractorConfig::default());
        let entities = tokio_test::block_on(extractor.extract(&Claim::new("Ethereum merges in 2022")));
        assert_eq!(entities.main_subject, "Ethereum");
    }
}
