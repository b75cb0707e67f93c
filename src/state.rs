use crate::model::{Category, LoginFields, Region, RestaurantDetail, RestaurantSummary, ReviewFields};
use serde::{Deserialize, Serialize};

/// The application's whole state tree.
///
/// Only the reducer produces new values of this type. The default value is
/// the state a freshly created store starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub regions: Vec<Region>,
    pub categories: Vec<Category>,
    pub restaurants: Vec<RestaurantSummary>,
    /// The restaurant being viewed. `None` while loading.
    pub restaurant: Option<RestaurantDetail>,
    pub selected_region: Option<Region>,
    pub selected_category: Option<Category>,
    /// Empty when logged out.
    pub access_token: String,
    pub login_fields: LoginFields,
    #[serde(rename = "reviewField", alias = "reviewFields")]
    pub review_fields: ReviewFields,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        !self.access_token.is_empty()
    }
}
