//! Presentational view models.
//!
//! Containers build these from state; they hold plain data only and have no
//! access to the store. `Display` renders them as plain text, which is what
//! the demo prints and what tests inspect.

use std::fmt;

/// What kind of control a form input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Password,
    Number,
    Text,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Number => "number",
            InputKind::Text => "text",
        }
    }
}

/// A labelled input bound to one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput<F> {
    pub label: &'static str,
    pub name: F,
    pub kind: InputKind,
    pub value: String,
}

/// A form: its inputs and the caption of its submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<F> {
    pub inputs: Vec<FormInput<F>>,
    pub submit: &'static str,
}

impl<F> FormView<F> {
    pub fn input(&self, label: &str) -> Option<&FormInput<F>> {
        self.inputs.iter().find(|i| i.label == label)
    }
}

impl<F> fmt::Display for FormView<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for input in &self.inputs {
            let value = match input.kind {
                InputKind::Password => "*".repeat(input.value.chars().count()),
                _ => input.value.clone(),
            };
            writeln!(f, "{} ({}): {}", input.label, input.kind.as_str(), value)?;
        }
        write!(f, "[{}]", self.submit)
    }
}

/// One entry of a region or category picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub id: u64,
    pub name: String,
    pub selected: bool,
}

/// A region or category picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorView {
    pub items: Vec<SelectableItem>,
}

impl fmt::Display for SelectorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            let mark = if item.selected { "(V)" } else { "" };
            writeln!(f, "- {}{mark}", item.name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantLink {
    pub id: u64,
    pub name: String,
}

/// The filtered restaurant listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantListView {
    pub items: Vec<RestaurantLink>,
}

impl fmt::Display for RestaurantListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "- {} (#{})", item.name, item.id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewLine {
    pub name: String,
    pub score: u32,
    pub description: String,
}

/// A restaurant detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetailView {
    pub name: String,
    pub address: String,
    pub menu: Vec<String>,
    /// Newest first.
    pub reviews: Vec<ReviewLine>,
    /// Present only for logged-in users.
    pub review_form: Option<FormView<crate::model::ReviewField>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantView {
    Loading,
    Detail(RestaurantDetailView),
}

impl fmt::Display for RestaurantView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = match self {
            RestaurantView::Loading => return write!(f, "Loading..."),
            RestaurantView::Detail(detail) => detail,
        };

        writeln!(f, "{}", detail.name)?;
        writeln!(f, "Address: {}", detail.address)?;
        if !detail.menu.is_empty() {
            writeln!(f, "Menu")?;
            for item in &detail.menu {
                writeln!(f, "- {item}")?;
            }
        }
        if let Some(form) = &detail.review_form {
            writeln!(f, "{form}")?;
        }
        if !detail.reviews.is_empty() {
            writeln!(f, "Reviews")?;
            for review in &detail.reviews {
                writeln!(
                    f,
                    "{}: {} stars - {}",
                    review.name, review.score, review.description
                )?;
            }
        }
        Ok(())
    }
}

/// The login area: a form when logged out, a logout button otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginView {
    Form(FormView<crate::model::LoginField>),
    LoggedIn { logout: &'static str },
}

impl fmt::Display for LoginView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginView::Form(form) => write!(f, "{form}"),
            LoginView::LoggedIn { logout } => write!(f, "Logged in\n[{logout}]"),
        }
    }
}
