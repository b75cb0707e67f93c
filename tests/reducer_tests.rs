mod common;

use common::{browsable_state, korean, seoul, summary, wizard_kitchen};
use eatfold::action::{
    change_login_fields, change_review_field, logout, select_category, select_region,
    set_access_token, set_categories, set_regions, set_restaurant, set_restaurants,
};
use eatfold::model::{LoginField, LoginFields, ReviewField, ReviewFields};
use eatfold::{Action, AppState, reduce_or_init, reducer};
use serde_json::json;

#[test]
fn test_initial_state_from_nothing() {
    let state = reduce_or_init(None, &Action::Unknown);
    assert_eq!(state, AppState::default());
    assert!(state.regions.is_empty());
    assert!(state.restaurant.is_none());
    assert!(state.selected_region.is_none());
    assert_eq!(state.access_token, "");
    assert_eq!(state.login_fields, LoginFields::default());
    assert_eq!(state.review_fields, ReviewFields::default());
}

#[test]
fn test_initial_state_json_shape() {
    let state = reduce_or_init(None, &Action::Unknown);
    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({
            "regions": [],
            "categories": [],
            "restaurants": [],
            "restaurant": null,
            "selectedRegion": null,
            "selectedCategory": null,
            "accessToken": "",
            "loginFields": {"email": "", "password": ""},
            "reviewField": {"score": "", "description": ""},
        })
    );
}

#[test]
fn test_unknown_action_keeps_state() {
    let state = AppState {
        access_token: "TOKEN".to_string(),
        ..browsable_state()
    };
    assert_eq!(reducer(state.clone(), &Action::Unknown), state);
}

#[test]
fn test_set_regions() {
    let state = reducer(AppState::default(), &set_regions(vec![seoul()]));
    assert_eq!(state.regions, vec![seoul()]);
}

#[test]
fn test_set_categories() {
    let state = reducer(AppState::default(), &set_categories(vec![korean()]));
    assert_eq!(state.categories, vec![korean()]);
}

#[test]
fn test_set_restaurants() {
    let restaurants = vec![summary(1, "Wizard Kitchen")];
    let state = reducer(AppState::default(), &set_restaurants(restaurants.clone()));
    assert_eq!(state.restaurants, restaurants);
}

#[test]
fn test_set_restaurant() {
    let state = reducer(AppState::default(), &set_restaurant(Some(wizard_kitchen())));
    let restaurant = state.restaurant.unwrap();
    assert_eq!(restaurant.id, 1);
    assert_eq!(restaurant.name, "Wizard Kitchen");
}

#[test]
fn test_set_restaurant_none_marks_loading() {
    let state = AppState {
        restaurant: Some(wizard_kitchen()),
        ..AppState::default()
    };
    let state = reducer(state, &set_restaurant(None));
    assert!(state.restaurant.is_none());
}

#[test]
fn test_select_region() {
    let state = reducer(browsable_state(), &select_region(1));
    assert_eq!(state.selected_region, Some(seoul()));
}

#[test]
fn test_select_missing_region_clears_selection() {
    let state = reducer(browsable_state(), &select_region(1));
    let state = reducer(state, &select_region(99));
    assert_eq!(state.selected_region, None);
}

#[test]
fn test_select_category() {
    let state = reducer(browsable_state(), &select_category(1));
    assert_eq!(state.selected_category, Some(korean()));
}

#[test]
fn test_select_category_leaves_region() {
    let state = reducer(browsable_state(), &select_region(1));
    let state = reducer(state, &select_category(2));
    assert_eq!(state.selected_region, Some(seoul()));
    assert_eq!(state.selected_category.unwrap().name, "Chinese");
}

#[test]
fn test_set_access_token() {
    let state = reducer(AppState::default(), &set_access_token("qwer!!"));
    assert_eq!(state.access_token, "qwer!!");
    assert!(state.is_logged_in());
}

#[test]
fn test_logout_clears_only_token() {
    let state = AppState {
        access_token: "ACCESS_TOKEN".to_string(),
        restaurant: Some(wizard_kitchen()),
        login_fields: LoginFields {
            email: "email".to_string(),
            password: "password".to_string(),
        },
        review_fields: ReviewFields {
            score: "5".to_string(),
            description: "Good".to_string(),
        },
        ..AppState::default()
    };
    let next = reducer(state.clone(), &logout());

    assert_eq!(next.access_token, "");
    assert!(!next.is_logged_in());
    assert_eq!(next.restaurant, state.restaurant);
    assert_eq!(next.login_fields, state.login_fields);
    assert_eq!(next.review_fields, state.review_fields);
}

fn filled_login() -> AppState {
    AppState {
        login_fields: LoginFields {
            email: "email".to_string(),
            password: "password".to_string(),
        },
        ..AppState::default()
    }
}

#[test]
fn test_change_login_email() {
    let state = reducer(filled_login(), &change_login_fields(LoginField::Email, "test@test"));
    assert_eq!(
        state.login_fields,
        LoginFields {
            email: "test@test".to_string(),
            password: "password".to_string(),
        }
    );
}

#[test]
fn test_change_login_password() {
    let state = reducer(filled_login(), &change_login_fields(LoginField::Password, "test"));
    assert_eq!(
        state.login_fields,
        LoginFields {
            email: "email".to_string(),
            password: "test".to_string(),
        }
    );
}

#[test]
fn test_change_review_score() {
    let state = reducer(
        AppState::default(),
        &change_review_field(ReviewField::Score, "5"),
    );
    assert_eq!(
        state.review_fields,
        ReviewFields {
            score: "5".to_string(),
            description: String::new(),
        }
    );
}

#[test]
fn test_change_review_description() {
    let state = reducer(
        AppState::default(),
        &change_review_field(ReviewField::Description, "Best lunch spot!"),
    );
    assert_eq!(
        state.review_fields,
        ReviewFields {
            score: String::new(),
            description: "Best lunch spot!".to_string(),
        }
    );
}

#[test]
fn test_state_accepts_review_fields_alias() {
    let state: AppState = serde_json::from_value(json!({
        "reviewFields": {"score": "4", "description": "ok"}
    }))
    .unwrap();
    assert_eq!(state.review_fields.score, "4");
    assert!(state.regions.is_empty());

    let state: AppState = serde_json::from_value(json!({
        "reviewField": {"score": "5", "description": ""}
    }))
    .unwrap();
    assert_eq!(state.review_fields.score, "5");
}
