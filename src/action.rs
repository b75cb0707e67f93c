use crate::model::{
    Category, FieldChange, LoginField, Region, RestaurantDetail, RestaurantSummary, ReviewField,
};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A typed description of an intended state change.
///
/// Actions serialize as `{"type": ..., "payload": ...}` with camelCase type
/// names, so a journal line reads the same as the action objects a browser
/// store would log:
///
/// ```
/// use eatfold::{Action, action};
///
/// let json = serde_json::to_string(&action::select_region(1)).unwrap();
/// assert_eq!(json, r#"{"type":"selectRegion","payload":{"regionId":1}}"#);
///
/// let json = serde_json::to_string(&action::logout()).unwrap();
/// assert_eq!(json, r#"{"type":"logout"}"#);
///
/// let decoded: Action =
///     serde_json::from_str(r#"{"type":"somethingElse","payload":{"id":1}}"#).unwrap();
/// assert_eq!(decoded, Action::Unknown);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    SetRegions(Vec<Region>),
    SetCategories(Vec<Category>),
    SetRestaurants(Vec<RestaurantSummary>),
    /// `None` marks the detail as loading.
    SetRestaurant(Option<RestaurantDetail>),
    #[serde(rename_all = "camelCase")]
    SelectRegion {
        region_id: u64,
    },
    #[serde(rename_all = "camelCase")]
    SelectCategory {
        category_id: u64,
    },
    #[serde(rename_all = "camelCase")]
    SetAccessToken {
        access_token: String,
    },
    Logout,
    ChangeLoginFields(FieldChange<LoginField>),
    ChangeReviewField(FieldChange<ReviewField>),
    /// Any decoded action whose type tag is not listed above.
    ///
    /// Reducers treat it as a no-op.
    Unknown,
}

/// Type tags of every action except [`Action::Unknown`].
const KNOWN_TYPES: [&str; 10] = [
    "setRegions",
    "setCategories",
    "setRestaurants",
    "setRestaurant",
    "selectRegion",
    "selectCategory",
    "setAccessToken",
    "logout",
    "changeLoginFields",
    "changeReviewField",
];

/// Wire shape of any action, known or not.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

/// Decoding side of [`Action`] without the catch-all.
#[derive(Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
enum KnownAction {
    SetRegions(Vec<Region>),
    SetCategories(Vec<Category>),
    SetRestaurants(Vec<RestaurantSummary>),
    SetRestaurant(Option<RestaurantDetail>),
    #[serde(rename_all = "camelCase")]
    SelectRegion {
        region_id: u64,
    },
    #[serde(rename_all = "camelCase")]
    SelectCategory {
        category_id: u64,
    },
    #[serde(rename_all = "camelCase")]
    SetAccessToken {
        access_token: String,
    },
    Logout,
    ChangeLoginFields(FieldChange<LoginField>),
    ChangeReviewField(FieldChange<ReviewField>),
}

impl From<KnownAction> for Action {
    fn from(known: KnownAction) -> Self {
        match known {
            KnownAction::SetRegions(regions) => Action::SetRegions(regions),
            KnownAction::SetCategories(categories) => Action::SetCategories(categories),
            KnownAction::SetRestaurants(restaurants) => Action::SetRestaurants(restaurants),
            KnownAction::SetRestaurant(restaurant) => Action::SetRestaurant(restaurant),
            KnownAction::SelectRegion { region_id } => Action::SelectRegion { region_id },
            KnownAction::SelectCategory { category_id } => Action::SelectCategory { category_id },
            KnownAction::SetAccessToken { access_token } => {
                Action::SetAccessToken { access_token }
            }
            KnownAction::Logout => Action::Logout,
            KnownAction::ChangeLoginFields(change) => Action::ChangeLoginFields(change),
            KnownAction::ChangeReviewField(change) => Action::ChangeReviewField(change),
        }
    }
}

/// Unrecognized type tags decode to [`Action::Unknown`] whatever their
/// payload. A known tag with a payload of the wrong shape is an error.
impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawAction { kind, payload } = RawAction::deserialize(deserializer)?;
        if !KNOWN_TYPES.contains(&kind.as_str()) {
            return Ok(Action::Unknown);
        }

        let mut tagged = serde_json::Map::new();
        tagged.insert("type".to_string(), Value::String(kind));
        tagged.insert("payload".to_string(), payload);
        KnownAction::deserialize(Value::Object(tagged))
            .map(Action::from)
            .map_err(de::Error::custom)
    }
}

impl Action {
    /// The serialized type tag, used for logging.
    pub fn action_type(&self) -> &'static str {
        match self {
            Action::SetRegions(_) => "setRegions",
            Action::SetCategories(_) => "setCategories",
            Action::SetRestaurants(_) => "setRestaurants",
            Action::SetRestaurant(_) => "setRestaurant",
            Action::SelectRegion { .. } => "selectRegion",
            Action::SelectCategory { .. } => "selectCategory",
            Action::SetAccessToken { .. } => "setAccessToken",
            Action::Logout => "logout",
            Action::ChangeLoginFields(_) => "changeLoginFields",
            Action::ChangeReviewField(_) => "changeReviewField",
            Action::Unknown => "unknown",
        }
    }
}

pub fn set_regions(regions: Vec<Region>) -> Action {
    Action::SetRegions(regions)
}

pub fn set_categories(categories: Vec<Category>) -> Action {
    Action::SetCategories(categories)
}

pub fn set_restaurants(restaurants: Vec<RestaurantSummary>) -> Action {
    Action::SetRestaurants(restaurants)
}

pub fn set_restaurant(restaurant: Option<RestaurantDetail>) -> Action {
    Action::SetRestaurant(restaurant)
}

pub fn select_region(region_id: u64) -> Action {
    Action::SelectRegion { region_id }
}

pub fn select_category(category_id: u64) -> Action {
    Action::SelectCategory { category_id }
}

pub fn set_access_token(access_token: impl Into<String>) -> Action {
    Action::SetAccessToken {
        access_token: access_token.into(),
    }
}

pub fn logout() -> Action {
    Action::Logout
}

pub fn change_login_fields(name: LoginField, value: impl Into<String>) -> Action {
    Action::ChangeLoginFields(FieldChange {
        name,
        value: value.into(),
    })
}

pub fn change_review_field(name: ReviewField, value: impl Into<String>) -> Action {
    Action::ChangeReviewField(FieldChange {
        name,
        value: value.into(),
    })
}
