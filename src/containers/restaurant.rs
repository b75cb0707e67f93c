use super::Container;
use crate::action;
use crate::model::{RestaurantDetail, ReviewField, ReviewFields};
use crate::state::AppState;
use crate::thunk::{self, Dispatchable};
use crate::views::{
    FormInput, FormView, InputKind, RestaurantDetailView, RestaurantView, ReviewLine,
};

/// Detail page of one restaurant, with the review form for logged-in users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantContainer {
    restaurant_id: u64,
}

/// The state a [`RestaurantContainer`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantSlice<'a> {
    pub restaurant: Option<&'a RestaurantDetail>,
    pub access_token: &'a str,
    pub review_fields: &'a ReviewFields,
}

impl RestaurantContainer {
    pub fn new(restaurant_id: u64) -> Self {
        RestaurantContainer { restaurant_id }
    }

    pub fn restaurant_id(&self) -> u64 {
        self.restaurant_id
    }

    pub fn select(state: &AppState) -> RestaurantSlice<'_> {
        RestaurantSlice {
            restaurant: state.restaurant.as_ref(),
            access_token: &state.access_token,
            review_fields: &state.review_fields,
        }
    }

    pub fn on_review_change(&self, name: ReviewField, value: impl Into<String>) -> Dispatchable {
        action::change_review_field(name, value).into()
    }

    pub fn on_submit(&self) -> Dispatchable {
        thunk::send_review(self.restaurant_id).into()
    }
}

impl Container for RestaurantContainer {
    type View = RestaurantView;

    fn render(&self, state: &AppState) -> RestaurantView {
        let slice = Self::select(state);
        let Some(restaurant) = slice.restaurant else {
            return RestaurantView::Loading;
        };

        let form = (!slice.access_token.is_empty()).then(|| review_form(slice.review_fields));

        RestaurantView::Detail(RestaurantDetailView {
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            menu: restaurant.menu_items.iter().map(|m| m.name.clone()).collect(),
            reviews: restaurant
                .latest_reviews()
                .into_iter()
                .map(|r| ReviewLine {
                    name: r.name.clone(),
                    score: r.score,
                    description: r.description.clone(),
                })
                .collect(),
            review_form: form,
        })
    }

    fn on_mount(&self) -> Vec<Dispatchable> {
        vec![thunk::load_restaurant(self.restaurant_id).into()]
    }
}

fn review_form(fields: &ReviewFields) -> FormView<ReviewField> {
    FormView {
        inputs: vec![
            FormInput {
                label: "Score",
                name: ReviewField::Score,
                kind: InputKind::Number,
                value: fields.score.clone(),
            },
            FormInput {
                label: "Review",
                name: ReviewField::Description,
                kind: InputKind::Text,
                value: fields.description.clone(),
            },
        ],
        submit: "Post review",
    }
}
