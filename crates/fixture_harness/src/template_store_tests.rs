use super::*;
use std::fs;

#[tokio::test]
async fn test_filesystem_store_reads_nested_template() {
    let dir = tempfile::tempdir().unwrap();
    let template_dir = dir.path().join("cicd/.github/workflows");
    fs::create_dir_all(&template_dir).unwrap();
    fs::write(
        template_dir.join("Appinfra-030-apply.yml.mustache"),
        "name: Apply\n# GITHUB_STEP_SUMMARY\n",
    )
    .unwrap();

    let store = FilesystemTemplateStore::new(dir.path());
    let content = store
        .read_template("cicd/.github/workflows/Appinfra-030-apply.yml.mustache")
        .await
        .unwrap();
    assert!(content.contains("GITHUB_STEP_SUMMARY"));
}

#[tokio::test]
async fn test_filesystem_store_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilesystemTemplateStore::new(dir.path());

    let error = store.read_template("missing.yml.mustache").await.unwrap_err();
    assert!(matches!(error, TemplateStoreError::NotFound(ref path) if path == "missing.yml.mustache"));
}

#[tokio::test]
async fn test_in_memory_store_returns_registered_content() {
    let store = InMemoryTemplateStore::new()
        .with_template("action.yml.mustache", "permissions:\n  id-token: write\n");

    let content = store.read_template("action.yml.mustache").await.unwrap();
    assert!(content.contains("id-token: write"));
}

#[tokio::test]
async fn test_in_memory_store_reports_not_found() {
    let store = InMemoryTemplateStore::new();
    let error = store.read_template("absent.mustache").await.unwrap_err();
    assert!(matches!(error, TemplateStoreError::NotFound(_)));
}
