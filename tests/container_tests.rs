mod common;

use common::{StubApi, browsable_state, korean, seoul, wizard_kitchen};
use eatfold::action::{change_login_fields, change_review_field, logout, select_region};
use eatfold::containers::{
    CategoriesContainer, LoginContainer, RegionsContainer, RestaurantContainer,
    RestaurantsContainer,
};
use eatfold::model::{LoginField, ReviewField};
use eatfold::thunk::{load_initial_data, load_restaurant, load_restaurants, request_login, send_review};
use eatfold::views::{InputKind, LoginView, RestaurantView};
use eatfold::{AppState, Container, Dispatchable, Store, mount};

fn logged_in_with_restaurant() -> AppState {
    AppState {
        restaurant: Some(wizard_kitchen()),
        access_token: "ACCESS_TOKEN".to_string(),
        ..AppState::default()
    }
}

#[test]
fn test_restaurant_mount_loads_detail() {
    let container = RestaurantContainer::new(1);
    assert_eq!(
        container.on_mount(),
        vec![Dispatchable::Thunk(load_restaurant(1))]
    );
}

#[test]
fn test_restaurant_renders_loading() {
    let view = RestaurantContainer::new(1).render(&AppState::default());
    assert_eq!(view, RestaurantView::Loading);
    assert!(view.to_string().contains("Loading"));
}

#[test]
fn test_restaurant_renders_name_and_address() {
    let view = RestaurantContainer::new(1).render(&logged_in_with_restaurant());
    let text = view.to_string();
    assert!(text.contains("Wizard Kitchen"));
    assert!(text.contains("Seoul"));
    assert!(text.contains("Kimchi stew"));
}

#[test]
fn test_restaurant_renders_review_form_when_logged_in() {
    let RestaurantView::Detail(detail) =
        RestaurantContainer::new(1).render(&logged_in_with_restaurant())
    else {
        panic!("expected detail view");
    };
    let form = detail.review_form.expect("review form");

    assert_eq!(form.input("Score").unwrap().kind, InputKind::Number);
    assert_eq!(form.input("Review").unwrap().kind, InputKind::Text);
    assert_eq!(form.submit, "Post review");
}

#[test]
fn test_restaurant_hides_review_form_when_logged_out() {
    let state = AppState {
        access_token: String::new(),
        ..logged_in_with_restaurant()
    };
    let view = RestaurantContainer::new(1).render(&state);
    let text = view.to_string();
    assert!(!text.contains("Score"));
    assert!(!text.contains("Post review"));
}

#[test]
fn test_restaurant_reviews_newest_first() {
    let RestaurantView::Detail(detail) =
        RestaurantContainer::new(1).render(&logged_in_with_restaurant())
    else {
        panic!("expected detail view");
    };
    let descriptions: Vec<_> = detail.reviews.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Decent", "Great!"]);
}

#[test]
fn test_restaurant_review_changes_dispatch_field_changes() {
    let container = RestaurantContainer::new(1);
    let controls = [
        (ReviewField::Score, "3"),
        (ReviewField::Description, "Tasty"),
    ];
    for (name, value) in controls {
        assert_eq!(
            container.on_review_change(name, value),
            Dispatchable::Action(change_review_field(name, value))
        );
    }
}

#[test]
fn test_restaurant_submit_sends_review() {
    assert_eq!(
        RestaurantContainer::new(7).on_submit(),
        Dispatchable::Thunk(send_review(7))
    );
}

#[tokio::test]
async fn test_restaurant_mount_against_store() {
    let mut store = Store::builder(StubApi::new())
        .initial_state(AppState {
            access_token: "TOKEN".to_string(),
            ..AppState::default()
        })
        .build()
        .unwrap();
    let container = RestaurantContainer::new(1);

    let view = mount(&mut store, &container).await.unwrap();
    assert!(matches!(view, RestaurantView::Detail(ref d) if d.review_form.is_some()));

    store
        .submit(container.on_review_change(ReviewField::Score, "4"))
        .await
        .unwrap();
    store.submit(container.on_submit()).await.unwrap();
    assert_eq!(store.state().review_fields.score, "4");
}

#[test]
fn test_login_renders_logout_with_token() {
    let state = AppState {
        access_token: "token".to_string(),
        ..AppState::default()
    };
    let view = LoginContainer.render(&state);
    assert_eq!(view, LoginView::LoggedIn { logout: "Log out" });
    assert!(view.to_string().contains("[Log out]"));
}

#[test]
fn test_login_renders_form_without_token() {
    let view = LoginContainer.render(&AppState::default());
    let LoginView::Form(form) = &view else {
        panic!("expected login form");
    };
    assert_eq!(form.submit, "Log In");
    assert_eq!(form.input("E-mail").unwrap().kind, InputKind::Email);
    assert_eq!(form.input("Password").unwrap().kind, InputKind::Password);
}

#[test]
fn test_login_form_masks_password() {
    let mut state = AppState::default();
    state.login_fields.password = "secret".to_string();
    let text = LoginContainer.render(&state).to_string();
    assert!(text.contains("******"));
    assert!(!text.contains("secret"));
}

#[test]
fn test_login_handlers() {
    let login = LoginContainer;
    assert_eq!(
        login.on_change(LoginField::Email, "test@test.com"),
        Dispatchable::Action(change_login_fields(LoginField::Email, "test@test.com"))
    );
    assert_eq!(
        login.on_change(LoginField::Password, "password"),
        Dispatchable::Action(change_login_fields(LoginField::Password, "password"))
    );
    assert_eq!(login.on_submit(), Dispatchable::Thunk(request_login()));
    assert_eq!(login.on_logout(), Dispatchable::Action(logout()));
}

#[test]
fn test_regions_marks_selected() {
    let state = AppState {
        selected_region: Some(seoul()),
        ..browsable_state()
    };
    let view = RegionsContainer.render(&state);
    assert_eq!(view.items.len(), 2);
    assert!(view.items[0].selected);
    assert!(!view.items[1].selected);
    assert!(view.to_string().contains("Seoul(V)"));
}

#[test]
fn test_regions_select_reloads_restaurants() {
    assert_eq!(
        RegionsContainer.on_select(1),
        vec![
            Dispatchable::Action(select_region(1)),
            Dispatchable::Thunk(load_restaurants()),
        ]
    );
    assert_eq!(
        RegionsContainer.on_mount(),
        vec![Dispatchable::Thunk(load_initial_data())]
    );
}

#[test]
fn test_categories_marks_selected() {
    let state = AppState {
        selected_category: Some(korean()),
        ..browsable_state()
    };
    let view = CategoriesContainer.render(&state);
    assert!(view.items[0].selected);
    assert!(view.to_string().contains("Korean(V)"));
    assert_eq!(CategoriesContainer.on_select(2).len(), 2);
}

#[test]
fn test_restaurants_listing_and_selection() {
    let state = AppState {
        restaurants: vec![common::summary(3, "Noodle House")],
        ..AppState::default()
    };
    let view = RestaurantsContainer.render(&state);
    assert_eq!(view.items[0].id, 3);
    assert!(view.to_string().contains("Noodle House"));
    assert_eq!(RestaurantsContainer.on_select(3).restaurant_id(), 3);
}
