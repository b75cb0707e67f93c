//! Browse the live restaurant service from the terminal.
//!
//! ```text
//! cargo run --example browse                 # list regions and categories
//! cargo run --example browse -- 1 1          # restaurants in region 1, category 1
//! cargo run --example browse -- 1 1 1        # ... and the detail page of restaurant 1
//! ```
//!
//! Set `EATFOLD_EMAIL`/`EATFOLD_PASSWORD` to log in first, and
//! `EATFOLD_JOURNAL` to record every dispatched action.

use eatfold::containers::{
    CategoriesContainer, LoginContainer, RegionsContainer, RestaurantsContainer,
};
use eatfold::model::LoginField;
use eatfold::{ApiConfig, Container, HttpApi, Store, mount};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<u64> = env::args()
        .skip(1)
        .map(|a| a.parse::<u64>())
        .collect::<Result<_, _>>()?;

    let api = HttpApi::new(ApiConfig::from_env())?;
    let mut builder = Store::builder(api);
    if let Ok(path) = env::var("EATFOLD_JOURNAL") {
        builder = builder.journal(path);
    }
    let mut store = builder.build()?;

    let login = LoginContainer;
    if let (Ok(email), Ok(password)) = (env::var("EATFOLD_EMAIL"), env::var("EATFOLD_PASSWORD")) {
        store
            .submit_all([
                login.on_change(LoginField::Email, email),
                login.on_change(LoginField::Password, password),
                login.on_submit(),
            ])
            .await?;
    }
    println!("{}\n", login.render(store.state()));

    let regions = RegionsContainer;
    let categories = CategoriesContainer;
    println!("Regions\n{}", mount(&mut store, &regions).await?);
    println!("Categories\n{}", categories.render(store.state()));

    let [region_id, category_id, rest @ ..] = args.as_slice() else {
        return Ok(());
    };
    store.submit_all(regions.on_select(*region_id)).await?;
    store.submit_all(categories.on_select(*category_id)).await?;

    let restaurants = RestaurantsContainer;
    println!("Restaurants\n{}", restaurants.render(store.state()));

    if let Some(restaurant_id) = rest.first() {
        let detail = restaurants.on_select(*restaurant_id);
        println!("{}", mount(&mut store, &detail).await?);
    }
    Ok(())
}
