use async_trait::async_trait;
use genie_core::{Error, Listing, Result};
use std::time::Duration;

use crate::handler::RemoteTree;

/// Transport settings for [`HttpTree`]
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
            user_agent: "genie/0.1 (snapshot exporter)".to_string(),
        }
    }
}

/// Remote tree served over HTTP (`/navigate` and `/file` endpoints)
pub struct HttpTree {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTree {
    pub fn new(api_url: impl Into<String>, options: HttpOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(options.user_agent)
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::Other(anyhow::anyhow!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}/{}", self.api_url, endpoint))
            .query(query)
            .send()
            .await
    }
}

#[async_trait]
impl RemoteTree for HttpTree {
    async fn list(&self, path: &str) -> Result<Listing> {
        let response = self
            .get("navigate", &[("path", path), ("fast", "true")])
            .await
            .map_err(|e| Error::listing(path, e))?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }

        response
            .json::<Listing>()
            .await
            .map_err(|e| Error::listing(path, format!("invalid listing body: {}", e)))
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let response = self
            .get("file", &[("path", path)])
            .await
            .map_err(|e| Error::fetch(path, e))?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(path, format!("failed to read response: {}", e)))?;

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn tree_for(server: &MockServer) -> HttpTree {
        HttpTree::new(format!("{}/api/", server.uri()), HttpOptions::default()).unwrap()
    }

    #[tokio::test]
    async fn test_list_sends_fast_navigate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/navigate"))
            .and(query_param("path", "/srv/shots"))
            .and(query_param("fast", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "path": "/srv/shots",
                "items": [
                    {"name": "a.png", "path": "/srv/shots/a.png", "is_dir": false, "size": 0, "extension": ".png"}
                ]
            })))
            .mount(&server)
            .await;

        let tree = tree_for(&server).await;
        assert!(!tree.api_url().ends_with('/'));

        let listing = tree.list("/srv/shots").await.unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].name, "a.png");
    }

    #[tokio::test]
    async fn test_list_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/navigate"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = tree_for(&server).await.list("/root").await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_fetch_returns_raw_bytes() {
        let server = MockServer::start().await;
        let body = vec![0u8, 159, 146, 150, 255];

        Mock::given(method("GET"))
            .and(path("/api/file"))
            .and(query_param("path", "/srv/a b.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
            .mount(&server)
            .await;

        let bytes = tree_for(&server).await.fetch("/srv/a b.bin").await.unwrap();
        assert_eq!(bytes, body);
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/file"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = tree_for(&server).await.fetch("/missing").await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    }
}
