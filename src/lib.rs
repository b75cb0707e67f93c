pub mod action;
mod api;
pub mod config;
pub mod containers;
mod error;
mod http;
pub mod journal;
pub mod model;
mod reducer;
mod state;
mod store;
pub mod thunk;
pub mod views;

pub use action::Action;
pub use api::Api;
pub use config::ApiConfig;
pub use containers::{Container, mount};
pub use error::ApiError;
pub use http::HttpApi;
pub use journal::{ActionJournal, Checkpoint};
pub use reducer::{ReduceFn, reduce_or_init, reducer};
pub use state::AppState;
pub use store::{Dispatch, Listener, Store, StoreBuilder};
pub use thunk::{Dispatchable, Thunk};
