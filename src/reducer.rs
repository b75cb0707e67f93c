use crate::action::Action;
use crate::state::AppState;

/// A pure function that folds an action into state.
///
/// Reducers receive owned state and return owned state. They must be pure
/// (no I/O, no side effects) and return the state untouched for actions they
/// do not handle.
///
/// # Examples
///
/// ```
/// use eatfold::{Action, AppState, ReduceFn};
///
/// fn ignore_everything(state: AppState, _action: &Action) -> AppState {
///     state
/// }
///
/// let reducer: ReduceFn<AppState> = ignore_everything;
/// ```
pub type ReduceFn<S> = fn(S, &Action) -> S;

/// The application reducer.
///
/// Each transition replaces exactly the fields it names and carries every
/// other field over from `state`.
///
/// # Examples
///
/// ```
/// use eatfold::{action, reducer, AppState};
/// use eatfold::model::Region;
///
/// let state = AppState {
///     regions: vec![Region { id: 1, name: "Seoul".into() }],
///     ..AppState::default()
/// };
/// let state = reducer(state, &action::select_region(1));
/// assert_eq!(state.selected_region.unwrap().name, "Seoul");
/// ```
pub fn reducer(state: AppState, action: &Action) -> AppState {
    match action {
        Action::SetRegions(regions) => AppState {
            regions: regions.clone(),
            ..state
        },
        Action::SetCategories(categories) => AppState {
            categories: categories.clone(),
            ..state
        },
        Action::SetRestaurants(restaurants) => AppState {
            restaurants: restaurants.clone(),
            ..state
        },
        Action::SetRestaurant(restaurant) => AppState {
            restaurant: restaurant.clone(),
            ..state
        },
        Action::SelectRegion { region_id } => {
            let selected_region = state.regions.iter().find(|r| r.id == *region_id).cloned();
            AppState {
                selected_region,
                ..state
            }
        }
        Action::SelectCategory { category_id } => {
            let selected_category = state
                .categories
                .iter()
                .find(|c| c.id == *category_id)
                .cloned();
            AppState {
                selected_category,
                ..state
            }
        }
        Action::SetAccessToken { access_token } => AppState {
            access_token: access_token.clone(),
            ..state
        },
        // Drafts and the viewed restaurant survive a logout.
        Action::Logout => AppState {
            access_token: String::new(),
            ..state
        },
        Action::ChangeLoginFields(change) => {
            let login_fields = state.login_fields.with(change.name, change.value.clone());
            AppState {
                login_fields,
                ..state
            }
        }
        Action::ChangeReviewField(change) => {
            let review_fields = state.review_fields.with(change.name, change.value.clone());
            AppState {
                review_fields,
                ..state
            }
        }
        Action::Unknown => state,
    }
}

/// Apply `reducer` to a possibly absent previous state.
///
/// A store that has not reduced anything yet starts from
/// [`AppState::default`].
pub fn reduce_or_init(state: Option<AppState>, action: &Action) -> AppState {
    reducer(state.unwrap_or_default(), action)
}
