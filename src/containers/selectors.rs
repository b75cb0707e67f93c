use super::Container;
use crate::action;
use crate::state::AppState;
use crate::thunk::{self, Dispatchable};
use crate::views::{SelectableItem, SelectorView};

/// Region picker. Choosing a region reloads the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionsContainer;

impl RegionsContainer {
    pub fn on_select(&self, region_id: u64) -> Vec<Dispatchable> {
        vec![
            action::select_region(region_id).into(),
            thunk::load_restaurants().into(),
        ]
    }
}

impl Container for RegionsContainer {
    type View = SelectorView;

    fn render(&self, state: &AppState) -> SelectorView {
        let selected = state.selected_region.as_ref().map(|r| r.id);
        SelectorView {
            items: state
                .regions
                .iter()
                .map(|r| SelectableItem {
                    id: r.id,
                    name: r.name.clone(),
                    selected: Some(r.id) == selected,
                })
                .collect(),
        }
    }

    fn on_mount(&self) -> Vec<Dispatchable> {
        vec![thunk::load_initial_data().into()]
    }
}

/// Category picker. Choosing a category reloads the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoriesContainer;

impl CategoriesContainer {
    pub fn on_select(&self, category_id: u64) -> Vec<Dispatchable> {
        vec![
            action::select_category(category_id).into(),
            thunk::load_restaurants().into(),
        ]
    }
}

impl Container for CategoriesContainer {
    type View = SelectorView;

    fn render(&self, state: &AppState) -> SelectorView {
        let selected = state.selected_category.as_ref().map(|c| c.id);
        SelectorView {
            items: state
                .categories
                .iter()
                .map(|c| SelectableItem {
                    id: c.id,
                    name: c.name.clone(),
                    selected: Some(c.id) == selected,
                })
                .collect(),
        }
    }
}
