//! Maven repository test utilities

use mockito::{Mock, ServerGuard};

/// Minimal artifact-level metadata document advertising `latest`
pub fn maven_metadata(group: &str, name: &str, latest: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>{group}</groupId>
  <artifactId>{name}</artifactId>
  <versioning>
    <latest>{latest}</latest>
    <release>{latest}</release>
    <versions>
      <version>{latest}</version>
    </versions>
  </versioning>
</metadata>"#
    )
}

/// Serve metadata for `group:name` from the mock server
pub async fn mock_metadata(
    server: &mut ServerGuard,
    group: &str,
    name: &str,
    latest: &str,
) -> Mock {
    let path = format!("/{}/{}/maven-metadata.xml", group.replace('.', "/"), name);
    server
        .mock("GET", path.as_str())
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(maven_metadata(group, name, latest))
        .create_async()
        .await
}
