use crate::action::{self, Action};
use crate::api::Api;
use crate::error::ApiError;
use crate::store::Dispatch;
use log::{debug, info};

/// An asynchronous action creator.
///
/// Each variant is an ordered pipeline: steps either dispatch a plain
/// [`Action`] or await one call to the [`Api`]. A later step starts only after
/// the previous one finished. The first API error aborts the pipeline;
/// anything dispatched before it stays in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thunk {
    /// Fetch regions, then categories.
    LoadInitialData,
    /// Fetch restaurants for the selected region and category.
    ///
    /// Does nothing unless both are selected.
    LoadRestaurants,
    /// Mark the detail as loading, then fetch it.
    LoadRestaurant { restaurant_id: u64 },
    /// Log in with the drafted credentials.
    RequestLogin,
    /// Post the drafted review, then reload the restaurant.
    ///
    /// Does nothing when logged out.
    SendReview { restaurant_id: u64 },
}

pub fn load_initial_data() -> Thunk {
    Thunk::LoadInitialData
}

pub fn load_restaurants() -> Thunk {
    Thunk::LoadRestaurants
}

pub fn load_restaurant(restaurant_id: u64) -> Thunk {
    Thunk::LoadRestaurant { restaurant_id }
}

pub fn request_login() -> Thunk {
    Thunk::RequestLogin
}

pub fn send_review(restaurant_id: u64) -> Thunk {
    Thunk::SendReview { restaurant_id }
}

impl Thunk {
    /// Run the pipeline against `store`, calling `api` for remote steps.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] raised by `api`. Steps after it are
    /// skipped.
    pub async fn run<D, C>(self, store: &mut D, api: &C) -> Result<(), ApiError>
    where
        D: Dispatch + ?Sized,
        C: Api + ?Sized,
    {
        match self {
            Thunk::LoadInitialData => run_load_initial_data(store, api).await,
            Thunk::LoadRestaurants => run_load_restaurants(store, api).await,
            Thunk::LoadRestaurant { restaurant_id } => {
                run_load_restaurant(store, api, restaurant_id).await
            }
            Thunk::RequestLogin => run_request_login(store, api).await,
            Thunk::SendReview { restaurant_id } => {
                run_send_review(store, api, restaurant_id).await
            }
        }
    }
}

async fn run_load_initial_data<D, C>(store: &mut D, api: &C) -> Result<(), ApiError>
where
    D: Dispatch + ?Sized,
    C: Api + ?Sized,
{
    let regions = api.fetch_regions().await?;
    store.dispatch(action::set_regions(regions));

    let categories = api.fetch_categories().await?;
    store.dispatch(action::set_categories(categories));
    Ok(())
}

async fn run_load_restaurants<D, C>(store: &mut D, api: &C) -> Result<(), ApiError>
where
    D: Dispatch + ?Sized,
    C: Api + ?Sized,
{
    let state = store.state();
    let (Some(region), Some(category)) = (&state.selected_region, &state.selected_category)
    else {
        debug!("eatfold: loadRestaurants skipped, region or category not selected");
        return Ok(());
    };
    let (region_id, category_id) = (region.id, category.id);

    let restaurants = api.fetch_restaurants(region_id, category_id).await?;
    store.dispatch(action::set_restaurants(restaurants));
    Ok(())
}

async fn run_load_restaurant<D, C>(
    store: &mut D,
    api: &C,
    restaurant_id: u64,
) -> Result<(), ApiError>
where
    D: Dispatch + ?Sized,
    C: Api + ?Sized,
{
    store.dispatch(action::set_restaurant(None));

    let restaurant = api.fetch_restaurant(restaurant_id).await?;
    store.dispatch(action::set_restaurant(Some(restaurant)));
    Ok(())
}

async fn run_request_login<D, C>(store: &mut D, api: &C) -> Result<(), ApiError>
where
    D: Dispatch + ?Sized,
    C: Api + ?Sized,
{
    let fields = store.state().login_fields.clone();

    let session = api.post_login(&fields.email, &fields.password).await?;
    info!("eatfold: logged in as {}", fields.email);
    store.dispatch(action::set_access_token(session.access_token));
    Ok(())
}

async fn run_send_review<D, C>(
    store: &mut D,
    api: &C,
    restaurant_id: u64,
) -> Result<(), ApiError>
where
    D: Dispatch + ?Sized,
    C: Api + ?Sized,
{
    let state = store.state();
    if !state.is_logged_in() {
        debug!("eatfold: sendReview skipped, not logged in");
        return Ok(());
    }
    let access_token = state.access_token.clone();
    let review = state.review_fields.clone();

    api.post_review(restaurant_id, &access_token, &review).await?;
    info!("eatfold: review posted for restaurant {restaurant_id}");

    run_load_restaurant(store, api, restaurant_id).await
}

/// Something a container asks the store to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatchable {
    Action(Action),
    Thunk(Thunk),
}

impl From<Action> for Dispatchable {
    fn from(action: Action) -> Self {
        Dispatchable::Action(action)
    }
}

impl From<Thunk> for Dispatchable {
    fn from(thunk: Thunk) -> Self {
        Dispatchable::Thunk(thunk)
    }
}
