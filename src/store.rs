use crate::action::Action;
use crate::api::Api;
use crate::error::ApiError;
use crate::journal::ActionJournal;
use crate::reducer::{ReduceFn, reducer};
use crate::state::AppState;
use crate::thunk::{Dispatchable, Thunk};
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The capability thunks run against: submit an action, read the state.
///
/// [`Store`] reduces every dispatched action. Tests can implement this with a
/// recorder that keeps a fixed state and only collects actions.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);

    fn state(&self) -> &AppState;
}

/// Callback invoked with the new state after every dispatch.
pub type Listener = Box<dyn FnMut(&AppState) + Send>;

/// The single owner of the application state.
///
/// All mutation goes through [`Store::dispatch`], which folds the action
/// with the configured reducer, records it in the journal (if any) and
/// notifies subscribers.
pub struct Store {
    state: AppState,
    reducer: ReduceFn<AppState>,
    api: Arc<dyn Api>,
    listeners: Vec<Listener>,
    journal: Option<ActionJournal>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("journal", &self.journal.as_ref().map(|j| j.path()))
            .finish()
    }
}

impl Store {
    /// A store with default state and the application reducer.
    pub fn new(api: impl Api + 'static) -> Self {
        Store {
            state: AppState::default(),
            reducer,
            api: Arc::new(api),
            listeners: Vec::new(),
            journal: None,
        }
    }

    /// Create a builder for configuring a store.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use eatfold::{ApiConfig, HttpApi, Store};
    ///
    /// let api = HttpApi::new(ApiConfig::from_env()).unwrap();
    /// let store = Store::builder(api)
    ///     .journal("./data/actions.jsonl")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder(api: impl Api + 'static) -> StoreBuilder {
        StoreBuilder::new(Arc::new(api))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register a callback run after each dispatch with the new state.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Reduce `action` into the state.
    ///
    /// Never fails. A journal write error is logged and the transition still
    /// happens.
    pub fn dispatch(&mut self, action: Action) {
        debug!("eatfold: dispatch {}", action.action_type());

        if let Some(journal) = self.journal.as_mut() {
            if let Err(e) = journal.append(&action) {
                warn!(
                    "eatfold: could not record {} in {}: {e}",
                    action.action_type(),
                    journal.path().display()
                );
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = (self.reducer)(state, &action);

        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Run an asynchronous action creator against this store.
    ///
    /// # Errors
    ///
    /// Returns the API error that aborted the pipeline.
    pub async fn run(&mut self, thunk: Thunk) -> Result<(), ApiError> {
        let api = Arc::clone(&self.api);
        thunk.run(self, api.as_ref()).await
    }

    /// Dispatch a plain action or run a thunk.
    pub async fn submit(&mut self, dispatchable: impl Into<Dispatchable>) -> Result<(), ApiError> {
        match dispatchable.into() {
            Dispatchable::Action(action) => {
                self.dispatch(action);
                Ok(())
            }
            Dispatchable::Thunk(thunk) => self.run(thunk).await,
        }
    }

    /// Submit each item in order, stopping at the first error.
    pub async fn submit_all(
        &mut self,
        dispatchables: impl IntoIterator<Item = Dispatchable>,
    ) -> Result<(), ApiError> {
        for dispatchable in dispatchables {
            self.submit(dispatchable).await?;
        }
        Ok(())
    }

    /// Path of the action journal, if one is configured.
    pub fn journal_path(&self) -> Option<&Path> {
        self.journal.as_ref().map(|j| j.path())
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        Store::dispatch(self, action);
    }

    fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for [`Store`].
///
/// # Examples
///
/// ```
/// use eatfold::{ApiConfig, AppState, HttpApi, Store};
///
/// let api = HttpApi::with_client(reqwest::Client::new(), ApiConfig::default());
/// let store = Store::builder(api)
///     .initial_state(AppState {
///         access_token: "TOKEN".into(),
///         ..AppState::default()
///     })
///     .build()
///     .unwrap();
/// assert!(store.state().is_logged_in());
/// ```
pub struct StoreBuilder {
    api: Arc<dyn Api>,
    state: AppState,
    reducer: ReduceFn<AppState>,
    journal_path: Option<PathBuf>,
}

impl StoreBuilder {
    pub fn new(api: Arc<dyn Api>) -> Self {
        StoreBuilder {
            api,
            state: AppState::default(),
            reducer,
            journal_path: None,
        }
    }

    /// Start from `state` instead of the default.
    pub fn initial_state(mut self, state: AppState) -> Self {
        self.state = state;
        self
    }

    /// Fold actions with `reducer` instead of the application reducer.
    pub fn reducer(mut self, reducer: ReduceFn<AppState>) -> Self {
        self.reducer = reducer;
        self
    }

    /// Record every dispatched action in a journal at `path`.
    pub fn journal(mut self, path: impl AsRef<Path>) -> Self {
        self.journal_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the store, opening the journal if one was configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal cannot be opened or created.
    pub fn build(self) -> io::Result<Store> {
        let journal = self.journal_path.map(ActionJournal::open).transpose()?;
        Ok(Store {
            state: self.state,
            reducer: self.reducer,
            api: self.api,
            listeners: Vec::new(),
            journal,
        })
    }
}
