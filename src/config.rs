//! Endpoint configuration for [`HttpApi`](crate::HttpApi).

use std::env;

/// Base URL of the public restaurant (customer) API.
pub const DEFAULT_CUSTOMER_URL: &str = "https://eatgo-customer-api.ahastudio.com";

/// Base URL of the public login API.
pub const DEFAULT_LOGIN_URL: &str = "https://eatgo-login-api.ahastudio.com";

/// Environment variable overriding [`DEFAULT_CUSTOMER_URL`].
pub const CUSTOMER_URL_ENV: &str = "EATFOLD_CUSTOMER_API_URL";

/// Environment variable overriding [`DEFAULT_LOGIN_URL`].
pub const LOGIN_URL_ENV: &str = "EATFOLD_LOGIN_API_URL";

/// Where the API client sends its requests.
///
/// Restaurants, regions, categories and reviews live on the customer API;
/// sessions are created on the login API.
///
/// # Examples
///
/// ```
/// use eatfold::ApiConfig;
///
/// let config = ApiConfig::default().with_customer_url("http://localhost:8080/");
/// assert_eq!(config.customer_url(), "http://localhost:8080");
/// assert_eq!(config.login_url(), eatfold::config::DEFAULT_LOGIN_URL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    customer_url: String,
    login_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            customer_url: DEFAULT_CUSTOMER_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults, overridden by [`CUSTOMER_URL_ENV`] and [`LOGIN_URL_ENV`]
    /// when they are set and non-empty.
    pub fn from_env() -> Self {
        let mut config = ApiConfig::default();
        if let Some(url) = non_empty_var(CUSTOMER_URL_ENV) {
            config = config.with_customer_url(url);
        }
        if let Some(url) = non_empty_var(LOGIN_URL_ENV) {
            config = config.with_login_url(url);
        }
        config
    }

    /// Set the customer API base URL. A trailing `/` is dropped.
    pub fn with_customer_url(mut self, url: impl Into<String>) -> Self {
        self.customer_url = trim_base(url.into());
        self
    }

    /// Set the login API base URL. A trailing `/` is dropped.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = trim_base(url.into());
        self
    }

    pub fn customer_url(&self) -> &str {
        &self.customer_url
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
