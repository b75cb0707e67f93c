//! Bindings between the store and the view models.
//!
//! A container reads the slice of state it needs, turns user events into
//! [`Dispatchable`]s, and renders a view model. Containers never mutate state
//! themselves: handlers return what should be dispatched and the caller
//! submits it to the [`Store`].

mod login;
mod restaurant;
mod restaurants;
mod selectors;

pub use login::LoginContainer;
pub use restaurant::RestaurantContainer;
pub use restaurants::RestaurantsContainer;
pub use selectors::{CategoriesContainer, RegionsContainer};

use crate::error::ApiError;
use crate::state::AppState;
use crate::store::Store;
use crate::thunk::Dispatchable;

/// Common surface of every container.
pub trait Container {
    /// The view model this container renders.
    type View;

    /// Build the view model from the current state.
    fn render(&self, state: &AppState) -> Self::View;

    /// What to dispatch when the container first appears.
    fn on_mount(&self) -> Vec<Dispatchable> {
        Vec::new()
    }
}

/// Run a container's mount dispatches, then render it from the resulting
/// state.
///
/// # Errors
///
/// Returns the API error that aborted a mount dispatch. Actions dispatched
/// before it stay applied.
pub async fn mount<C: Container>(store: &mut Store, container: &C) -> Result<C::View, ApiError> {
    store.submit_all(container.on_mount()).await?;
    Ok(container.render(store.state()))
}
