use blog_linker::{AccommodationExtractor, LinkerError, LlmExtractor};
use httpmock::prelude::*;

#[tokio::test]
async fn extracts_accommodations_from_model_json() {
    let server = MockServer::start();

    let generate_mock = server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "model": "gemma3:4b",
                "response": r#"[{"name": "Hotel Aurora", "place": "Rome", "country": "Italy"},
                                {"name": "Central Hotel", "place": "Donegal", "country": "Ireland"}]"#,
                "done": true
            }));
    });

    let extractor = LlmExtractor::new(server.url("/api/generate"), "gemma3:4b");
    let found = extractor.extract("We stayed at Hotel Aurora, Rome.").await.unwrap();

    generate_mock.assert();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].name, "Hotel Aurora");
    assert_eq!(found[0].location, "Rome, Italy");
    assert_eq!(found[1].location, "Donegal, Ireland");
}

#[tokio::test]
async fn survives_commentary_around_the_json() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "response": "Here you go:\n[{\"name\": \"Slieve League B&B\", \"place\": \"\", \"country\": \"Ireland\"}]\nHope that helps!",
                "done": true
            }));
    });

    let extractor = LlmExtractor::new(server.url("/api/generate"), "gemma3:4b");
    let found = extractor.extract("anything").await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Slieve League B&B");
    // Only the country was known.
    assert_eq!(found[0].location, "Ireland");
}

#[tokio::test]
async fn server_error_is_an_extraction_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/generate");
        then.status(500).body("model crashed");
    });

    let extractor = LlmExtractor::new(server.url("/api/generate"), "gemma3:4b");
    let err = extractor.extract("anything").await.unwrap_err();
    assert!(matches!(err, LinkerError::ExtractionError { .. }));
}
