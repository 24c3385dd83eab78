use chrono::Duration;
use lunch_pool_engine::{
    db_types::{
        ChatMessage,
        MenuItem,
        NewChatMessage,
        NewMenuItem,
        NewOrderLine,
        NewStore,
        OrderLine,
        OrderLineDetail,
        Store,
        StoreCategory,
        StorePopularity,
        StoreSummary,
        StoreTotalRow,
    },
    CatalogError,
    CatalogManagement,
    ChatError,
    ChatManagement,
    OrderPoolDatabase,
    OrderPoolError,
};
use mockall::mock;

mock! {
    pub OrderPool {}
    impl OrderPoolDatabase for OrderPool {
        fn url(&self) -> &str;
        async fn insert_order_line(&self, line: NewOrderLine) -> Result<OrderLine, OrderPoolError>;
        async fn fetch_order_lines(&self) -> Result<Vec<OrderLineDetail>, OrderPoolError>;
        async fn fetch_store_totals(&self) -> Result<Vec<StoreTotalRow>, OrderPoolError>;
        async fn delete_order_line(&self, id: i64) -> Result<Option<OrderLine>, OrderPoolError>;
        async fn delete_order_lines(&self, ids: &[i64]) -> Result<u64, OrderPoolError>;
        async fn delete_order_line_by_match(&self, eater: &str, store: &str, menu: &str) -> Result<u64, OrderPoolError>;
        async fn clear_order_lines(&self) -> Result<u64, OrderPoolError>;
        async fn fetch_popular_store_counts(&self) -> Result<Vec<StorePopularity>, OrderPoolError>;
    }
}

mock! {
    pub Catalog {}
    impl CatalogManagement for Catalog {
        async fn fetch_categories(&self) -> Result<Vec<StoreCategory>, CatalogError>;
        async fn fetch_stores_in_category(&self, category: StoreCategory) -> Result<Vec<StoreSummary>, CatalogError>;
        async fn fetch_store_by_id(&self, store_id: i64) -> Result<Option<Store>, CatalogError>;
        async fn fetch_store_by_name(&self, name: &str) -> Result<Option<Store>, CatalogError>;
        async fn fetch_menus_for_store(&self, store_id: i64) -> Result<Vec<MenuItem>, CatalogError>;
        async fn insert_store(&self, store: NewStore) -> Result<Store, CatalogError>;
        async fn insert_menu(&self, menu: NewMenuItem) -> Result<MenuItem, CatalogError>;
    }
}

mock! {
    pub Chat {}
    impl ChatManagement for Chat {
        async fn fetch_recent_messages(&self, window: Duration) -> Result<Vec<ChatMessage>, ChatError>;
        async fn insert_chat_message(&self, message: NewChatMessage) -> Result<ChatMessage, ChatError>;
    }
}
