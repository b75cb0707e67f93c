use crate::api::Api;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::{Category, Region, RestaurantDetail, RestaurantSummary, ReviewFields, Session};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// [`Api`] over HTTP/JSON against the configured base URLs.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl HttpApi {
    /// Build a client for the given endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] if the TLS backend cannot be initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().build().map_err(ApiError::Client)?;
        Ok(Self::with_client(client, config))
    }

    /// Use an already configured `reqwest` client.
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        HttpApi { client, config }
    }

    pub(crate) fn regions_url(&self) -> String {
        format!("{}/regions", self.config.customer_url())
    }

    pub(crate) fn categories_url(&self) -> String {
        format!("{}/categories", self.config.customer_url())
    }

    pub(crate) fn restaurants_url(&self, region_id: u64, category_id: u64) -> String {
        format!(
            "{}/restaurants?region={region_id}&category={category_id}",
            self.config.customer_url()
        )
    }

    pub(crate) fn restaurant_url(&self, restaurant_id: u64) -> String {
        format!("{}/restaurants/{restaurant_id}", self.config.customer_url())
    }

    pub(crate) fn reviews_url(&self, restaurant_id: u64) -> String {
        format!(
            "{}/restaurants/{restaurant_id}/reviews",
            self.config.customer_url()
        )
    }

    pub(crate) fn session_url(&self) -> String {
        format!("{}/session", self.config.login_url())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = send(self.client.get(&url), &url).await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

/// Send a request and reject non-success statuses.
async fn send(request: RequestBuilder, url: &str) -> Result<reqwest::Response, ApiError> {
    debug!("eatfold: requesting {url}");
    let response = request.send().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

#[async_trait]
impl Api for HttpApi {
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.get_json(self.regions_url()).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(self.categories_url()).await
    }

    async fn fetch_restaurants(
        &self,
        region_id: u64,
        category_id: u64,
    ) -> Result<Vec<RestaurantSummary>, ApiError> {
        self.get_json(self.restaurants_url(region_id, category_id)).await
    }

    async fn fetch_restaurant(&self, restaurant_id: u64) -> Result<RestaurantDetail, ApiError> {
        self.get_json(self.restaurant_url(restaurant_id)).await
    }

    async fn post_login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.session_url();
        let request = self.client.post(&url).json(&LoginBody { email, password });
        let response = send(request, &url).await?;
        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    async fn post_review(
        &self,
        restaurant_id: u64,
        access_token: &str,
        review: &ReviewFields,
    ) -> Result<(), ApiError> {
        let url = self.reviews_url(restaurant_id);
        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {access_token}"))
            .json(review);
        send(request, &url).await?;
        Ok(())
    }
}
