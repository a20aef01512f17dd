//! Client for the waypoint-api remote service
//!
//! Reads go through [`RemoteSource`] so hydration can run against any
//! source; writes are inherent methods on [`HttpRemote`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use waypoint_common::models::{
    Event, EventPatch, Member, MemberPatch, NewEvent, NewMember, NewRelationship, Relationship,
    RelationshipPatch, TravelSnapshot,
};

use crate::error::{FetchError, RemoteError};

const USER_AGENT: &str = concat!("waypoint-tracker/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Read side of the remote service, one call per collection
#[async_trait]
pub trait RemoteSource: Send + Sync {
    async fn fetch_travel(&self) -> Result<TravelSnapshot, FetchError>;
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError>;
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError>;
    async fn fetch_relationships(&self) -> Result<Vec<Relationship>, FetchError>;
}

/// reqwest-backed client for waypoint-api
#[derive(Debug, Clone)]
pub struct HttpRemote {
    http_client: Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, url = %url, "Remote request");
        self.http_client.request(method, url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.request(method, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        read_response(response).await
    }

    pub async fn get_event(&self, id: &str) -> Result<Event, RemoteError> {
        self.send_json::<(), _>(Method::GET, &format!("/events/{}", id), None)
            .await
    }

    pub async fn create_event(&self, input: &NewEvent) -> Result<Event, RemoteError> {
        self.send_json(Method::POST, "/events", Some(input)).await
    }

    pub async fn update_event(&self, id: &str, patch: &EventPatch) -> Result<Event, RemoteError> {
        self.send_json(Method::PATCH, &format!("/events/{}", id), Some(patch))
            .await
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), RemoteError> {
        self.send_json::<(), serde_json::Value>(Method::DELETE, &format!("/events/{}", id), None)
            .await
            .map(|_| ())
    }

    pub async fn create_member(&self, input: &NewMember) -> Result<Member, RemoteError> {
        self.send_json(Method::POST, "/members", Some(input)).await
    }

    pub async fn update_member(&self, id: &str, patch: &MemberPatch) -> Result<Member, RemoteError> {
        self.send_json(Method::PATCH, &format!("/members/{}", id), Some(patch))
            .await
    }

    pub async fn delete_member(&self, id: &str) -> Result<(), RemoteError> {
        self.send_json::<(), serde_json::Value>(Method::DELETE, &format!("/members/{}", id), None)
            .await
            .map(|_| ())
    }

    pub async fn create_relationship(
        &self,
        input: &NewRelationship,
    ) -> Result<Relationship, RemoteError> {
        self.send_json(Method::POST, "/relationships", Some(input))
            .await
    }

    pub async fn update_relationship(
        &self,
        id: &str,
        patch: &RelationshipPatch,
    ) -> Result<Relationship, RemoteError> {
        self.send_json(Method::PATCH, &format!("/relationships/{}", id), Some(patch))
            .await
    }

    pub async fn delete_relationship(&self, id: &str) -> Result<(), RemoteError> {
        self.send_json::<(), serde_json::Value>(
            Method::DELETE,
            &format!("/relationships/{}", id),
            None,
        )
        .await
        .map(|_| ())
    }

    /// Replace the remote travel state with the local snapshot
    pub async fn push_travel(&self, snapshot: &TravelSnapshot) -> Result<TravelSnapshot, RemoteError> {
        self.send_json(Method::PUT, "/travel", Some(snapshot)).await
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RemoteError::from_response(status, &body));
    }
    response
        .json()
        .await
        .map_err(|e| RemoteError::Transport(FetchError::Parse(e.to_string())))
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_travel(&self) -> Result<TravelSnapshot, FetchError> {
        self.get_json("/travel").await
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        self.get_json("/events").await
    }

    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        self.get_json("/members").await
    }

    async fn fetch_relationships(&self) -> Result<Vec<Relationship>, FetchError> {
        self.get_json("/relationships").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let remote = HttpRemote::new("http://127.0.0.1:5780/").unwrap();
        assert_eq!(remote.base_url(), "http://127.0.0.1:5780");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Reserve a port, then free it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let remote = HttpRemote::new(&format!("http://127.0.0.1:{}", port)).unwrap();
        let err = remote.fetch_events().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
