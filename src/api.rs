use crate::error::ApiError;
use crate::model::{Category, Region, RestaurantDetail, RestaurantSummary, ReviewFields, Session};
use async_trait::async_trait;

/// The restaurant service as seen by the thunks.
///
/// [`HttpApi`](crate::HttpApi) talks to the real service; tests substitute
/// stubs. Every call either resolves with data or fails with an
/// [`ApiError`].
#[async_trait]
pub trait Api: Send + Sync {
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Restaurants in the given region and category.
    async fn fetch_restaurants(
        &self,
        region_id: u64,
        category_id: u64,
    ) -> Result<Vec<RestaurantSummary>, ApiError>;

    async fn fetch_restaurant(&self, restaurant_id: u64) -> Result<RestaurantDetail, ApiError>;

    /// Exchange credentials for an access token.
    async fn post_login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    /// Post a review on behalf of the holder of `access_token`.
    async fn post_review(
        &self,
        restaurant_id: u64,
        access_token: &str,
        review: &ReviewFields,
    ) -> Result<(), ApiError>;
}
