#![allow(dead_code)]

use async_trait::async_trait;
use eatfold::model::{
    Category, MenuItem, Region, RestaurantDetail, RestaurantSummary, Review, ReviewFields, Session,
};
use eatfold::{Action, Api, ApiError, AppState, Dispatch};
use std::sync::Mutex;

pub fn seoul() -> Region {
    Region {
        id: 1,
        name: "Seoul".to_string(),
    }
}

pub fn busan() -> Region {
    Region {
        id: 2,
        name: "Busan".to_string(),
    }
}

pub fn korean() -> Category {
    Category {
        id: 1,
        name: "Korean".to_string(),
    }
}

pub fn chinese() -> Category {
    Category {
        id: 2,
        name: "Chinese".to_string(),
    }
}

pub fn summary(id: u64, name: &str) -> RestaurantSummary {
    RestaurantSummary {
        id,
        name: name.to_string(),
        category_id: Some(1),
        address: None,
    }
}

pub fn wizard_kitchen() -> RestaurantDetail {
    RestaurantDetail {
        id: 1,
        name: "Wizard Kitchen".to_string(),
        address: "Gangnam-gu, Seoul".to_string(),
        category_id: Some(1),
        menu_items: vec![MenuItem {
            id: 1,
            name: "Kimchi stew".to_string(),
        }],
        reviews: vec![
            Review {
                id: 1,
                name: "tester".to_string(),
                score: 5,
                description: "Great!".to_string(),
            },
            Review {
                id: 2,
                name: "tester".to_string(),
                score: 3,
                description: "Decent".to_string(),
            },
        ],
    }
}

/// A state with one region and one category available.
pub fn browsable_state() -> AppState {
    AppState {
        regions: vec![seoul(), busan()],
        categories: vec![korean(), chinese()],
        ..AppState::default()
    }
}

/// Canned API responses; records every call in order.
#[derive(Default)]
pub struct StubApi {
    pub calls: Mutex<Vec<String>>,
    pub regions: Vec<Region>,
    pub categories: Vec<Category>,
    pub restaurants: Vec<RestaurantSummary>,
    pub restaurant: Option<RestaurantDetail>,
    /// Name of a call that fails with a 500.
    pub fail_on: Option<&'static str>,
}

impl StubApi {
    pub fn new() -> Self {
        StubApi {
            restaurant: Some(wizard_kitchen()),
            ..StubApi::default()
        }
    }

    pub fn failing_on(call: &'static str) -> Self {
        StubApi {
            fail_on: Some(call),
            ..StubApi::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, detail: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(detail);
        if self.fail_on == Some(call) {
            return Err(ApiError::Status {
                url: format!("stub://{call}"),
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Api for StubApi {
    async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.record("regions", "fetch_regions".to_string())?;
        Ok(self.regions.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("categories", "fetch_categories".to_string())?;
        Ok(self.categories.clone())
    }

    async fn fetch_restaurants(
        &self,
        region_id: u64,
        category_id: u64,
    ) -> Result<Vec<RestaurantSummary>, ApiError> {
        self.record(
            "restaurants",
            format!("fetch_restaurants({region_id}, {category_id})"),
        )?;
        Ok(self.restaurants.clone())
    }

    async fn fetch_restaurant(&self, restaurant_id: u64) -> Result<RestaurantDetail, ApiError> {
        self.record("restaurant", format!("fetch_restaurant({restaurant_id})"))?;
        Ok(self.restaurant.clone().unwrap_or_else(wizard_kitchen))
    }

    async fn post_login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.record("login", format!("post_login({email}, {password})"))?;
        Ok(Session {
            access_token: "TOKEN".to_string(),
        })
    }

    async fn post_review(
        &self,
        restaurant_id: u64,
        access_token: &str,
        review: &ReviewFields,
    ) -> Result<(), ApiError> {
        self.record(
            "review",
            format!(
                "post_review({restaurant_id}, {access_token}, {}, {})",
                review.score, review.description
            ),
        )?;
        Ok(())
    }
}

/// Records dispatched actions without reducing them; the state stays fixed.
#[derive(Debug, Default)]
pub struct MockStore {
    pub state: AppState,
    pub actions: Vec<Action>,
}

impl MockStore {
    pub fn new(state: AppState) -> Self {
        MockStore {
            state,
            actions: Vec::new(),
        }
    }
}

impl Dispatch for MockStore {
    fn dispatch(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn state(&self) -> &AppState {
        &self.state
    }
}
