use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use lunch_pool_engine::{
    events::{EventHandlers, EventHooks, EventProducers},
    sqlite::MIGRATOR,
    CatalogApi,
    ChatApi,
    OrderPoolApi,
    RouletteApi,
    SqliteDatabase,
};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    refresh_worker::start_refresh_worker,
    routes::{
        health,
        AddOrderRoute,
        CategoriesRoute,
        ChatMessagesRoute,
        ClearOrdersRoute,
        ConflictsRoute,
        DeleteOrderRoute,
        DeleteOrdersRoute,
        MenusForStoreRoute,
        PoolStatusRoute,
        PopularityRoute,
        PostChatMessageRoute,
        RegisterMenuRoute,
        RegisterStoreRoute,
        RetractMatchRoute,
        SpinRouletteRoute,
        StoresInCategoryRoute,
    },
};

const EVENT_BUFFER_SIZE: usize = 25;

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if config.auto_migrate {
        MIGRATOR.run(db.pool()).await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
        info!("🚀️ Schema migrations complete");
    }
    let handlers = create_logging_event_handlers();
    let producers = handlers.producers();
    handlers.start_handlers().await;
    if config.disable_refresh_worker {
        warn!("🚀️ The live-refresh worker is disabled. Viewers will not converge without polling `/api/status`.");
    } else {
        start_refresh_worker(db.clone(), config.refresh_interval);
    }
    let srv = create_server_instance(config, db, producers)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    producers: EventProducers,
) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let pool_api = OrderPoolApi::new(db.clone(), producers.clone());
        let catalog_api = CatalogApi::new(db.clone());
        let chat_api = ChatApi::new(db.clone());
        let roulette_api = RouletteApi::new(db.clone(), producers.clone());
        let app = App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("lps::access_log"))
            .app_data(web::Data::new(pool_api))
            .app_data(web::Data::new(catalog_api))
            .app_data(web::Data::new(chat_api))
            .app_data(web::Data::new(roulette_api))
            .app_data(web::Data::new(config.clone()));
        let api_scope = web::scope("/api")
            .service(PoolStatusRoute::<SqliteDatabase>::new())
            .service(ConflictsRoute::<SqliteDatabase>::new())
            .service(PopularityRoute::<SqliteDatabase>::new())
            .service(AddOrderRoute::<SqliteDatabase>::new())
            .service(DeleteOrderRoute::<SqliteDatabase>::new())
            .service(DeleteOrdersRoute::<SqliteDatabase>::new())
            .service(RetractMatchRoute::<SqliteDatabase>::new())
            .service(ClearOrdersRoute::<SqliteDatabase>::new())
            .service(CategoriesRoute::<SqliteDatabase>::new())
            .service(StoresInCategoryRoute::<SqliteDatabase>::new())
            .service(MenusForStoreRoute::<SqliteDatabase>::new())
            .service(RegisterStoreRoute::<SqliteDatabase>::new())
            .service(RegisterMenuRoute::<SqliteDatabase>::new())
            .service(ChatMessagesRoute::<SqliteDatabase>::new())
            .service(PostChatMessageRoute::<SqliteDatabase>::new())
            .service(SpinRouletteRoute::<SqliteDatabase>::new());
        app.service(health).service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}

/// Wires the engine's event hooks to the server log. Events are observability only; a hook can never fail a
/// request.
fn create_logging_event_handlers() -> EventHandlers {
    let mut hooks = EventHooks::default();
    hooks.on_roulette_spun(|ev| {
        Box::pin(async move {
            info!("🎲️ Roulette result: {} picks up for '{}'", ev.winner, ev.store_name);
        })
    });
    hooks.on_pool_cleared(|ev| {
        Box::pin(async move {
            info!("🍱️ The pool was cleared ({} lines). A new session is open.", ev.lines_removed);
        })
    });
    EventHandlers::new(EVENT_BUFFER_SIZE, hooks)
}
