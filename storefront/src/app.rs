//! Storefront facade
//!
//! Wires the catalog, cart and checkout together for one page view.

use std::sync::Arc;

use danten_client::{CatalogClient, CatalogProvider, ClientError, OrderLog, OrderLogClient};
use shared::models::{CartLine, CheckoutForm, FoodItem};

use crate::cart::{CART_KEY, Cart, CartStore, JsonFileCartStore};
use crate::catalog::{self, CatalogState};
use crate::checkout::{ChatHandoff, ChatLauncher, CheckoutDispatcher, CheckoutOutcome};
use crate::core::{Config, StorefrontProfile};
use crate::utils::{AppError, AppResult, ErrorCode};

pub struct Storefront {
    profile: StorefrontProfile,
    provider: Arc<dyn CatalogProvider>,
    catalog: CatalogState,
    cart: Cart,
    dispatcher: CheckoutDispatcher,
}

impl Storefront {
    /// Network-backed storefront with the cart persisted under `data_dir`
    pub fn from_config(config: &Config, launcher: Arc<dyn ChatLauncher>) -> AppResult<Self> {
        let http = config
            .client_config()
            .build_http_client()
            .map_err(client_error)?;
        let provider = Arc::new(CatalogClient::new(http.clone(), config.catalog_source()));
        let order_log = Arc::new(OrderLogClient::new(http, config.order_log_url.clone()));
        let store = Arc::new(JsonFileCartStore::new(&config.data_dir, CART_KEY));
        Ok(Self::with_parts(config, provider, order_log, launcher, store))
    }

    /// Assemble from explicit collaborators
    pub fn with_parts(
        config: &Config,
        provider: Arc<dyn CatalogProvider>,
        order_log: Arc<dyn OrderLog>,
        launcher: Arc<dyn ChatLauncher>,
        store: Arc<dyn CartStore>,
    ) -> Self {
        let profile = config.storefront_profile();
        let dispatcher = CheckoutDispatcher::new(
            order_log,
            launcher,
            ChatHandoff::new(config.chat_destination.clone()),
            profile.clone(),
        )
        .with_success_delay(config.success_delay());

        Self {
            profile,
            provider,
            catalog: CatalogState::Loading,
            cart: Cart::open(store),
            dispatcher,
        }
    }

    pub fn profile(&self) -> &StorefrontProfile {
        &self.profile
    }

    /// Fetch the catalog (once per page view)
    pub async fn load_catalog(&mut self) -> &CatalogState {
        self.catalog = catalog::load_catalog(self.provider.as_ref()).await;
        &self.catalog
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// Items in a category; unknown keywords yield an empty list
    pub fn menu(&self, category: &str) -> Vec<&FoodItem> {
        match self.catalog.catalog() {
            Some(catalog) => catalog.filter(category),
            None => Vec::new(),
        }
    }

    pub fn item(&self, id: &str) -> AppResult<&FoodItem> {
        self.catalog
            .catalog()
            .and_then(|c| c.find(id))
            .ok_or_else(|| AppError::new(ErrorCode::FoodNotFound).with_detail("id", id))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Add one of a catalog item to the cart
    pub fn add_to_cart(&mut self, id: &str) -> AppResult<&CartLine> {
        let item = self.item(id)?.clone();
        self.cart.add_item(item);
        self.cart
            .get(id)
            .ok_or_else(|| AppError::internal("cart line missing after add"))
    }

    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> AppResult<()> {
        if !self.cart.set_quantity(id, quantity) {
            return Err(AppError::new(ErrorCode::CartItemNotFound).with_detail("id", id));
        }
        Ok(())
    }

    pub fn remove_from_cart(&mut self, id: &str) -> AppResult<()> {
        if !self.cart.remove_item(id) {
            return Err(AppError::new(ErrorCode::CartItemNotFound).with_detail("id", id));
        }
        Ok(())
    }

    /// Check out the whole cart
    pub async fn checkout(&mut self, form: &CheckoutForm) -> AppResult<CheckoutOutcome> {
        let outcome = self.dispatcher.checkout_cart(&mut self.cart, form).await;
        self.dispatcher.reset();
        outcome
    }

    /// Order one catalog item directly
    pub async fn order(
        &mut self,
        id: &str,
        quantity: u32,
        form: &CheckoutForm,
    ) -> AppResult<CheckoutOutcome> {
        let item = self.item(id)?.clone();
        let outcome = self.dispatcher.order_single(&item, quantity, form).await;
        self.dispatcher.reset();
        outcome
    }
}

fn client_error(e: ClientError) -> AppError {
    AppError::with_message(e.code(), e.to_string())
}
