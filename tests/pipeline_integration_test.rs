use blog_linker::{
    Accommodation, AccommodationExtractor, LinkEngine, LocalStorage, MockExtractor, Storage,
};
use tempfile::TempDir;

#[tokio::test]
async fn end_to_end_blog_post_processing() {
    let temp_dir = TempDir::new().unwrap();
    let base_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(base_path.clone());
    storage
        .write_file(
            "donegal_blog.md",
            b"# My Trip\nI visited the Central Hotel in Donegal.\n",
        )
        .await
        .unwrap();

    let bytes = storage.read_file("donegal_blog.md").await.unwrap();
    let document = String::from_utf8(bytes).unwrap();

    let engine = LinkEngine::new(MockExtractor::new(), "54321");
    let report = engine.run(&document).await.unwrap();

    storage
        .write_file("donegal_blog_linked.md", report.content.as_bytes())
        .await
        .unwrap();

    let output_path = temp_dir.path().join("donegal_blog_linked.md");
    assert!(output_path.exists());

    let output = std::fs::read_to_string(output_path).unwrap();
    assert!(output.contains(
        "[Central Hotel](https://booking.com/searchresults.html?ss=Central%20Hotel%2C%20Donegal%2C%20Ireland&aid=54321)"
    ));
    // Everything apart from the inserted link markup is untouched.
    assert!(output.starts_with("# My Trip\nI visited the "));
    assert!(output.ends_with(" in Donegal.\n"));
}

#[tokio::test]
async fn unmentioned_properties_leave_no_trace() {
    // The mock extractor reports three properties; only the one actually
    // mentioned in the text gets linked.
    let document = "We loved Harvey's Point Hotel above the lough.\n";
    let engine = LinkEngine::new(MockExtractor::new(), "12345");
    let report = engine.run(document).await.unwrap();

    assert!(report.content.contains("[Harvey's Point Hotel]("));
    assert!(!report.content.contains("[Central Hotel]"));
    assert!(!report.content.contains("[Slieve League B&B]"));
}

struct EmptyExtractor;

#[async_trait::async_trait]
impl AccommodationExtractor for EmptyExtractor {
    async fn extract(&self, _text: &str) -> blog_linker::Result<Vec<Accommodation>> {
        Ok(vec![])
    }
}

#[tokio::test]
async fn empty_extraction_passes_document_through() {
    let document = "# Quiet post\nNo hotels here.\n";
    let engine = LinkEngine::new(EmptyExtractor, "12345");
    let report = engine.run(document).await.unwrap();
    assert!(report.accommodations.is_empty());
    assert_eq!(report.content, document);
}
