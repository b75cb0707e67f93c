use super::Container;
use crate::action;
use crate::model::{LoginField, LoginFields};
use crate::state::AppState;
use crate::thunk::{self, Dispatchable};
use crate::views::{FormInput, FormView, InputKind, LoginView};

/// Login form while logged out, logout button while logged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginContainer;

/// The state a [`LoginContainer`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginSlice<'a> {
    pub access_token: &'a str,
    pub login_fields: &'a LoginFields,
}

impl LoginContainer {
    pub fn select(state: &AppState) -> LoginSlice<'_> {
        LoginSlice {
            access_token: &state.access_token,
            login_fields: &state.login_fields,
        }
    }

    pub fn on_change(&self, name: LoginField, value: impl Into<String>) -> Dispatchable {
        action::change_login_fields(name, value).into()
    }

    pub fn on_submit(&self) -> Dispatchable {
        thunk::request_login().into()
    }

    pub fn on_logout(&self) -> Dispatchable {
        action::logout().into()
    }
}

impl Container for LoginContainer {
    type View = LoginView;

    fn render(&self, state: &AppState) -> LoginView {
        let slice = Self::select(state);
        if !slice.access_token.is_empty() {
            return LoginView::LoggedIn { logout: "Log out" };
        }

        let fields = slice.login_fields;
        LoginView::Form(FormView {
            inputs: vec![
                FormInput {
                    label: "E-mail",
                    name: LoginField::Email,
                    kind: InputKind::Email,
                    value: fields.email.clone(),
                },
                FormInput {
                    label: "Password",
                    name: LoginField::Password,
                    kind: InputKind::Password,
                    value: fields.password.clone(),
                },
            ],
            submit: "Log In",
        })
    }
}
