use log::*;
use lpg_common::Won;

use crate::{
    db_types::{MenuItem, NewMenuItem, NewStore, Store, StoreCategory, StoreSummary, WorkingDays},
    traits::{CatalogError, CatalogManagement},
};

/// Browse-and-register API for the store/menu catalog.
#[derive(Debug, Clone)]
pub struct CatalogApi<B> {
    db: B,
}

impl<B> CatalogApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> CatalogApi<B>
where B: CatalogManagement
{
    pub async fn categories(&self) -> Result<Vec<StoreCategory>, CatalogError> {
        self.db.fetch_categories().await
    }

    pub async fn stores_in_category(&self, category: StoreCategory) -> Result<Vec<StoreSummary>, CatalogError> {
        self.db.fetch_stores_in_category(category).await
    }

    pub async fn store_by_name(&self, name: &str) -> Result<Option<Store>, CatalogError> {
        self.db.fetch_store_by_name(name).await
    }

    /// The menu of the given store. Asking for a store that doesn't exist is an error (unlike order lines, where a
    /// dangling reference merely degrades): the browse flow always goes category → store → menu.
    pub async fn menus_for_store(&self, store_id: i64) -> Result<Vec<MenuItem>, CatalogError> {
        if self.db.fetch_store_by_id(store_id).await?.is_none() {
            return Err(CatalogError::StoreNotFound(store_id));
        }
        self.db.fetch_menus_for_store(store_id).await
    }

    pub async fn register_store(&self, store: NewStore) -> Result<Store, CatalogError> {
        if store.name.trim().is_empty() {
            return Err(CatalogError::InvalidRegistration("The store name is required".to_string()));
        }
        if store.min_order_amount < Won::from(0) {
            return Err(CatalogError::InvalidRegistration("The minimum order amount cannot be negative".to_string()));
        }
        if !(0.0..=5.0).contains(&store.rating) {
            return Err(CatalogError::InvalidRegistration(format!(
                "The rating must be between 0 and 5, not {}",
                store.rating
            )));
        }
        // Normalises the day list ("Mon, wed" -> "Mon,Wed") and rejects unknown day names
        let working_days = store
            .working_days
            .as_str()
            .parse::<WorkingDays>()
            .map_err(|e| CatalogError::InvalidRegistration(e.to_string()))?;
        let store = self.db.insert_store(NewStore { working_days, ..store }).await?;
        info!("🏪️ New store registered: '{}' ({})", store.name, store.category);
        Ok(store)
    }

    pub async fn register_menu(&self, menu: NewMenuItem) -> Result<MenuItem, CatalogError> {
        if menu.name.trim().is_empty() {
            return Err(CatalogError::InvalidRegistration("The menu name is required".to_string()));
        }
        if menu.price < Won::from(0) {
            return Err(CatalogError::InvalidRegistration("The price cannot be negative".to_string()));
        }
        if self.db.fetch_store_by_id(menu.store_id).await?.is_none() {
            return Err(CatalogError::StoreNotFound(menu.store_id));
        }
        let item = self.db.insert_menu(menu).await?;
        info!("🏪️ New menu item registered: '{}' at store #{}", item.name, item.store_id);
        Ok(item)
    }
}
