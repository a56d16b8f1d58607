//! HTTP Collection Resource
//!
//! `fetch`-backed implementation of [`CollectionResource`] via gloo-net.
//! Success is decided by the status class alone.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{classify, ApiError, ApiResult, CollectionResource};
use crate::config::ApiConfig;
use crate::models::Record;

/// REST client for any [`Record`] collection under one API base
#[derive(Debug, Clone)]
pub struct HttpResource {
    config: ApiConfig,
}

impl HttpResource {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn parse(err: gloo_net::Error) -> ApiError {
    ApiError::Parse(err.to_string())
}

fn check(method: &str, url: &str, response: Response) -> ApiResult<Response> {
    let status = response.status();
    match classify(status) {
        Ok(()) => {
            log::debug!("{method} {url} -> {status}");
            Ok(response)
        }
        Err(err) => {
            log::warn!("{method} {url} -> {status}");
            Err(err)
        }
    }
}

#[async_trait(?Send)]
impl<R, D> CollectionResource<R, D> for HttpResource
where
    R: Record + DeserializeOwned,
    D: Serialize + 'static,
{
    async fn list(&self) -> ApiResult<Vec<R>> {
        let url = self.config.collection_url(R::RESOURCE);
        let response = Request::get(&url).send().await.map_err(network)?;
        check("GET", &url, response)?.json::<Vec<R>>().await.map_err(parse)
    }

    async fn create(&self, draft: &D) -> ApiResult<R> {
        let url = self.config.collection_url(R::RESOURCE);
        let request = Request::post(&url).json(draft).map_err(parse)?;
        let response = request.send().await.map_err(network)?;
        check("POST", &url, response)?.json::<R>().await.map_err(parse)
    }

    async fn update(&self, id: u32, draft: &D) -> ApiResult<()> {
        let url = self.config.member_url(R::RESOURCE, id);
        let request = Request::put(&url).json(draft).map_err(parse)?;
        let response = request.send().await.map_err(network)?;
        // Body is optional on update; ignore it
        check("PUT", &url, response).map(|_| ())
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let url = self.config.member_url(R::RESOURCE, id);
        let response = Request::delete(&url).send().await.map_err(network)?;
        check("DELETE", &url, response).map(|_| ())
    }
}
