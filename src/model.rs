use serde::{Deserialize, Serialize};

/// A selectable region filter (e.g. a city).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: u64,
    pub name: String,
}

/// A selectable restaurant category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// A restaurant as it appears in a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A restaurant's detail page: the summary fields plus address, menu and
/// reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl RestaurantDetail {
    /// Reviews ordered newest first (highest id first).
    pub fn latest_reviews(&self) -> Vec<&Review> {
        let mut reviews: Vec<&Review> = self.reviews.iter().collect();
        reviews.sort_by(|a, b| b.id.cmp(&a.id));
        reviews
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
}

/// A review left by a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub score: u32,
    #[serde(default)]
    pub description: String,
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
}

/// Draft contents of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    /// Replace one field, leaving the other untouched.
    pub fn with(self, name: LoginField, value: String) -> Self {
        match name {
            LoginField::Email => LoginFields {
                email: value,
                ..self
            },
            LoginField::Password => LoginFields {
                password: value,
                ..self
            },
        }
    }
}

/// Draft contents of the review form.
///
/// `score` is kept as the raw form text; the server validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFields {
    pub score: String,
    pub description: String,
}

impl ReviewFields {
    /// Replace one field, leaving the other untouched.
    pub fn with(self, name: ReviewField, value: String) -> Self {
        match name {
            ReviewField::Score => ReviewFields {
                score: value,
                ..self
            },
            ReviewField::Description => ReviewFields {
                description: value,
                ..self
            },
        }
    }
}

/// Names of the login form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
    Email,
    Password,
}

/// Names of the review form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewField {
    Score,
    Description,
}

/// A single form input change: which field, and its new text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange<F> {
    pub name: F,
    pub value: String,
}
