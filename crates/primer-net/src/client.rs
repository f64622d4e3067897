use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{NetError, NewPost, Post, User, UserUpdate};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Honour system proxy settings. Off for loopback test servers.
    pub proxy: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            proxy: true,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// For servers on this machine.
    pub fn local(base_url: impl Into<String>) -> Self {
        Self {
            proxy: false,
            ..Self::with_base_url(base_url)
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, NetError> {
        let mut builder = Client::builder().timeout(config.timeout);
        if !config.proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| NetError::Runtime(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn users(&self) -> Result<Vec<User>, NetError> {
        self.json(self.http.get(self.url("users"))).await
    }

    pub async fn posts(&self) -> Result<Vec<Post>, NetError> {
        self.json(self.http.get(self.url("posts"))).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post, NetError> {
        self.json(self.http.post(self.url("posts")).json(post)).await
    }

    pub async fn update_user(&self, update: &UserUpdate) -> Result<User, NetError> {
        let url = self.url(&format!("users/{}", update.id));
        self.json(self.http.put(url).json(update)).await
    }

    pub async fn delete_post(&self, id: u32) -> Result<(), NetError> {
        let url = self.url(&format!("posts/{id}"));
        log::debug!("DELETE {url}");
        let response = self.http.delete(url).send().await?;
        check_status(response.status())?;
        Ok(())
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NetError> {
        let response = request.send().await.inspect_err(|e| {
            log::warn!("request failed: {e}");
        })?;
        log::debug!("{} {}", response.status(), response.url());
        check_status(response.status())?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), NetError> {
    if status.is_success() {
        Ok(())
    } else {
        log::warn!("server answered {status}");
        Err(NetError::Status(status.as_u16()))
    }
}
