use super::{Container, RestaurantContainer};
use crate::state::AppState;
use crate::views::{RestaurantLink, RestaurantListView};

/// The restaurant listing for the selected region and category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestaurantsContainer;

impl RestaurantsContainer {
    /// The detail container to show when a listed restaurant is chosen.
    pub fn on_select(&self, restaurant_id: u64) -> RestaurantContainer {
        RestaurantContainer::new(restaurant_id)
    }
}

impl Container for RestaurantsContainer {
    type View = RestaurantListView;

    fn render(&self, state: &AppState) -> RestaurantListView {
        RestaurantListView {
            items: state
                .restaurants
                .iter()
                .map(|r| RestaurantLink {
                    id: r.id,
                    name: r.name.clone(),
                })
                .collect(),
        }
    }
}
