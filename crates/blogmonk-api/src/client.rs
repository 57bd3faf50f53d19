//! Async REST client for the blog backend.
//!
//! [`BlogClient`] wraps a shared `reqwest::Client` and the configured base
//! URL. Each operation sends one request, retries once on a transient
//! transport failure, and hands the status + body to a pure `decode_*`
//! helper for status mapping and JSON parsing.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use blogmonk_core::prelude::*;
use blogmonk_core::{BlogId, BlogPost, NewBlogPost};

/// Async client for the blog REST backend.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    client: Client,
}

impl BlogClient {
    /// Create a client for the given base URL.
    ///
    /// The URL is validated up front so a typo fails at startup rather than
    /// on the first fetch. A trailing slash is tolerated.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|_| Error::invalid_url(base_url))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self {
            base_url: trimmed.to_string(),
            client,
        })
    }

    /// Create a client with a caller-supplied `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|_| Error::invalid_url(base_url))?;
        Ok(Self {
            base_url: trimmed.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn blogs_url(&self) -> String {
        format!("{}/blogs", self.base_url)
    }

    fn blog_url(&self, id: BlogId) -> String {
        format!("{}/blogs/{}", self.base_url, id)
    }

    /// Fetch the full collection of posts, in backend order.
    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>> {
        let (status, body) = self.get_with_retry(&self.blogs_url()).await?;
        decode_blog_list(status, &body)
    }

    /// Fetch a single post. Returns [`Error::NotFound`] on a 404.
    pub async fn get_blog(&self, id: BlogId) -> Result<BlogPost> {
        let (status, body) = self.get_with_retry(&self.blog_url(id)).await?;
        decode_blog(status, &body)
    }

    /// Create a post. The backend assigns the id and echoes the stored post.
    pub async fn create_blog(&self, input: &NewBlogPost) -> Result<BlogPost> {
        let url = self.blogs_url();
        let response = match self.client.post(&url).json(input).send().await {
            Ok(response) => response,
            // A connect failure never reached the backend, so one retry
            // cannot double-create. Timeouts are ambiguous and not retried.
            Err(e) if e.is_connect() => {
                warn!("create request failed to connect, retrying once: {}", e);
                self.client
                    .post(&url)
                    .json(input)
                    .send()
                    .await
                    .map_err(transport_error)?
            }
            Err(e) => return Err(transport_error(e)),
        };

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        decode_created(status, &body)
    }

    /// GET with one automatic retry on transient transport failure.
    async fn get_with_retry(&self, url: &str) -> Result<(u16, String)> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                warn!("request to {} failed, retrying once: {}", url, e);
                self.client.get(url).send().await.map_err(transport_error)?
            }
            Err(e) => return Err(transport_error(e)),
        };

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok((status, body))
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    Error::http(e.to_string())
}

// ─────────────────────────────────────────────────────────────────
// Response decoding (pure, no I/O)
// ─────────────────────────────────────────────────────────────────

/// Map a non-success status to the appropriate error variant.
fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    if status == 404 {
        return Err(Error::NotFound);
    }
    Err(Error::api(status, body))
}

pub fn decode_blog_list(status: u16, body: &str) -> Result<Vec<BlogPost>> {
    check_status(status, body)?;
    Ok(serde_json::from_str(body)?)
}

pub fn decode_blog(status: u16, body: &str) -> Result<BlogPost> {
    check_status(status, body)?;
    Ok(serde_json::from_str(body)?)
}

pub fn decode_created(status: u16, body: &str) -> Result<BlogPost> {
    check_status(status, body)?;
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const POST_JSON: &str = r#"{
        "id": 1,
        "title": "Understanding GST",
        "category": ["FINANCE", "TAX"],
        "description": "A primer",
        "date": "2024-01-05T10:30:00.000Z",
        "coverImage": "https://example.com/gst.jpg",
        "content": "Body text here"
    }"#;

    fn client() -> BlogClient {
        BlogClient::new("http://localhost:3001", Duration::from_secs(10)).unwrap()
    }

    #[test]
    fn test_urls() {
        let c = client();
        assert_eq!(c.blogs_url(), "http://localhost:3001/blogs");
        assert_eq!(c.blog_url(BlogId(42)), "http://localhost:3001/blogs/42");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let c = BlogClient::new("http://localhost:3001/", Duration::from_secs(10)).unwrap();
        assert_eq!(c.blogs_url(), "http://localhost:3001/blogs");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = BlogClient::new("not a url", Duration::from_secs(10)).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_decode_blog_list() {
        let body = format!("[{}]", POST_JSON);
        let posts = decode_blog_list(200, &body).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Understanding GST");
        assert_eq!(posts[0].cover_image, "https://example.com/gst.jpg");
    }

    #[test]
    fn test_decode_empty_list_is_ok() {
        let posts = decode_blog_list(200, "[]").unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_decode_blog_not_found() {
        let err = decode_blog(404, "{}").unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[test]
    fn test_decode_blog_server_error() {
        let err = decode_blog(500, "boom").unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_blog_malformed_json() {
        let err = decode_blog(200, "not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_decode_created_accepts_201() {
        let created = decode_created(201, POST_JSON).unwrap();
        assert_eq!(created.id, BlogId(1));
        assert_eq!(created.category, vec!["FINANCE", "TAX"]);
    }
}
