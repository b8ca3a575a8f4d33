//! Maven repository resolver reading `maven-metadata.xml`

use std::time::Duration;

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::ResolveError;
use crate::version::resolver::MetadataResolver;
use crate::version::types::ArtifactId;

/// Default base URL for Maven Central
pub const DEFAULT_MAVEN_REPOSITORY: &str = "https://repo1.maven.org/maven2";

/// Resolver for repositories using the Maven 2 directory layout
pub struct MavenResolver {
    client: Client,
    base_url: String,
}

impl MavenResolver {
    /// Creates a resolver for the repository at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("artifact-watch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Location of the artifact-level metadata document
    ///
    /// `org.example` / `lib` maps to `{base}/org/example/lib/maven-metadata.xml`.
    pub fn metadata_url(&self, artifact: &ArtifactId) -> String {
        format!(
            "{}/{}/{}/maven-metadata.xml",
            self.base_url,
            artifact.group().replace('.', "/"),
            artifact.name()
        )
    }
}

/// Artifact-level `maven-metadata.xml` document
#[derive(Debug, Deserialize)]
struct MavenMetadata {
    versioning: Option<Versioning>,
}

#[derive(Debug, Deserialize)]
struct Versioning {
    latest: Option<String>,
}

/// Name of the first element in the document
fn root_element(body: &str) -> Result<String, ResolveError> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(ResolveError::MalformedMetadata(
                    "document has no root element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(ResolveError::MalformedMetadata(e.to_string())),
        }
    }
}

fn parse_latest(body: &str) -> Result<String, ResolveError> {
    let root = root_element(body)?;
    if root != "metadata" {
        return Err(ResolveError::MalformedMetadata(format!(
            "unexpected root element <{}>",
            root
        )));
    }

    let metadata: MavenMetadata = quick_xml::de::from_str(body)
        .map_err(|e| ResolveError::MalformedMetadata(e.to_string()))?;

    metadata
        .versioning
        .and_then(|v| v.latest)
        .map(|latest| latest.trim().to_string())
        .filter(|latest| !latest.is_empty())
        .ok_or_else(|| ResolveError::MalformedMetadata("missing <latest> element".to_string()))
}

#[async_trait]
impl MetadataResolver for MavenResolver {
    async fn resolve(&self, artifact: &ArtifactId) -> Result<String, ResolveError> {
        let url = self.metadata_url(artifact);
        debug!("Fetching Maven metadata: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Maven repository returned status {}: {}", status, url);
            return Err(ResolveError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let latest = parse_latest(&body)?;

        debug!("Latest version of {} is {}", artifact, latest);
        Ok(latest)
    }
}
