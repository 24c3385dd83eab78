//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause
//! the current worker to stop processing new requests. For this reason, any long, non-cpu-bound operation (e.g. I/O,
//! database operations, etc.) should be expressed as futures or asynchronous functions. Async handlers get executed
//! concurrently by worker threads and thus don't block execution.
use std::str::FromStr;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Duration;
use log::*;
use lunch_pool_engine::{
    db_types::{NewMenuItem, NewStore, StoreCategory},
    CatalogApi,
    CatalogManagement,
    ChatApi,
    ChatManagement,
    OrderPoolApi,
    OrderPoolDatabase,
    RouletteApi,
};

use crate::{
    config::ServerConfig,
    data_objects::{
        ChatPostRequest,
        ChatWindowParams,
        DeleteOrdersRequest,
        JsonResponse,
        NewOrderRequest,
        RetractMatchRequest,
        RouletteRequest,
    },
    errors::ServerError,
};

// Actix-web cannot handle generics in attribute-macro handlers, so generic routes are registered manually via the
// `route!` macro.
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ident),+) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where
            A: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------  Order pool  ----------------------------------------------------
route!(pool_status => Get "/status" impl OrderPoolDatabase);
/// The full pool snapshot: every line, per-store aggregates with eligibility, the grand total and the conflict
/// report. Polling clients hit this on every tick; each call is a fresh read of ground truth.
pub async fn pool_status<B: OrderPoolDatabase>(
    api: web::Data<OrderPoolApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET pool status");
    let status = api.pool_status().await?;
    Ok(HttpResponse::Ok().json(status))
}

route!(conflicts => Get "/conflicts" impl OrderPoolDatabase);
pub async fn conflicts<B: OrderPoolDatabase>(api: web::Data<OrderPoolApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET conflicts");
    let report = api.conflicts().await?;
    Ok(HttpResponse::Ok().json(report))
}

route!(popularity => Get "/popularity" impl OrderPoolDatabase);
pub async fn popularity<B: OrderPoolDatabase>(api: web::Data<OrderPoolApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET popularity");
    let ranking = api.popularity().await?;
    Ok(HttpResponse::Ok().json(ranking))
}

route!(add_order => Post "/orders" impl OrderPoolDatabase);
pub async fn add_order<B: OrderPoolDatabase>(
    body: web::Json<NewOrderRequest>,
    api: web::Data<OrderPoolApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    debug!("💻️ POST new order line for {}", request.eater_name);
    let line = api.add_order(request.into()).await?;
    Ok(HttpResponse::Ok().json(line))
}

route!(delete_order => Delete "/orders/{id}" impl OrderPoolDatabase);
/// Retract exactly one line by id: one atomic step of the conflict-resolution workflow. The caller re-reads
/// `/status` (or waits for the next poll tick) to see the recomputed pool.
pub async fn delete_order<B: OrderPoolDatabase>(
    path: web::Path<i64>,
    api: web::Data<OrderPoolApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ DELETE order line [{id}]");
    let removed = api.retract_line(id).await?;
    Ok(HttpResponse::Ok().json(removed))
}

route!(delete_orders => Post "/orders/delete" impl OrderPoolDatabase);
pub async fn delete_orders<B: OrderPoolDatabase>(
    body: web::Json<DeleteOrdersRequest>,
    api: web::Data<OrderPoolApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let ids = body.into_inner().ids;
    debug!("💻️ POST delete {} order lines", ids.len());
    let removed = api.retract_lines(&ids).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!("{removed} order lines retracted"))))
}

route!(retract_match => Post "/orders/retract-match" impl OrderPoolDatabase);
pub async fn retract_match<B: OrderPoolDatabase>(
    body: web::Json<RetractMatchRequest>,
    api: web::Data<OrderPoolApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let RetractMatchRequest { eater_name, store_name, menu_name } = body.into_inner();
    debug!("💻️ POST retract by match: ({eater_name}, {store_name}, {menu_name})");
    api.retract_line_by_match(&eater_name, &store_name, &menu_name).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!("{eater_name} gave up their {menu_name} order"))))
}

route!(clear_orders => Post "/orders/clear" impl OrderPoolDatabase);
/// Unconditional and irreversible: empties the whole pool and starts a new session.
pub async fn clear_orders<B: OrderPoolDatabase>(
    api: web::Data<OrderPoolApi<B>>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ POST clear order pool");
    let removed = api.clear_pool().await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!("Pool cleared. {removed} order lines removed"))))
}

//----------------------------------------------   Catalog   ----------------------------------------------------
route!(categories => Get "/categories" impl CatalogManagement);
pub async fn categories<B: CatalogManagement>(api: web::Data<CatalogApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET categories");
    let categories = api.categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

route!(stores_in_category => Get "/stores/{category}" impl CatalogManagement);
pub async fn stores_in_category<B: CatalogManagement>(
    path: web::Path<String>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let raw = path.into_inner();
    let category = StoreCategory::from_str(&raw).map_err(|e| ServerError::InvalidRequestPath(e.to_string()))?;
    trace!("💻️ GET stores in category {category}");
    let stores = api.stores_in_category(category).await?;
    Ok(HttpResponse::Ok().json(stores))
}

route!(menus_for_store => Get "/menus/{store_id}" impl CatalogManagement);
pub async fn menus_for_store<B: CatalogManagement>(
    path: web::Path<i64>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let store_id = path.into_inner();
    trace!("💻️ GET menus for store #{store_id}");
    let menus = api.menus_for_store(store_id).await?;
    Ok(HttpResponse::Ok().json(menus))
}

route!(register_store => Post "/stores" impl CatalogManagement);
pub async fn register_store<B: CatalogManagement>(
    body: web::Json<NewStore>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let new_store = body.into_inner();
    debug!("💻️ POST register store '{}'", new_store.name);
    let store = api.register_store(new_store).await?;
    Ok(HttpResponse::Ok().json(store))
}

route!(register_menu => Post "/menus" impl CatalogManagement);
pub async fn register_menu<B: CatalogManagement>(
    body: web::Json<NewMenuItem>,
    api: web::Data<CatalogApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let new_menu = body.into_inner();
    debug!("💻️ POST register menu '{}' for store #{}", new_menu.name, new_menu.store_id);
    let menu = api.register_menu(new_menu).await?;
    Ok(HttpResponse::Ok().json(menu))
}

//----------------------------------------------     Chat    ----------------------------------------------------
route!(chat_messages => Get "/chat" impl ChatManagement);
pub async fn chat_messages<B: ChatManagement>(
    query: web::Query<ChatWindowParams>,
    api: web::Data<ChatApi<B>>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServerError> {
    let window = query.into_inner().window_secs.map(Duration::seconds).unwrap_or(config.chat_window);
    trace!("💻️ GET chat messages ({}s window)", window.num_seconds());
    let messages = api.recent_messages(window).await?;
    Ok(HttpResponse::Ok().json(messages))
}

route!(post_chat_message => Post "/chat" impl ChatManagement);
pub async fn post_chat_message<B: ChatManagement>(
    body: web::Json<ChatPostRequest>,
    api: web::Data<ChatApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let ChatPostRequest { username, message } = body.into_inner();
    debug!("💻️ POST chat message from {username}");
    let stored = api.post_message(&username, &message).await?;
    Ok(HttpResponse::Ok().json(stored))
}

//----------------------------------------------   Roulette   ----------------------------------------------------
route!(spin_roulette => Post "/roulette" impl OrderPoolDatabase, CatalogManagement, ChatManagement);
/// Runs the pickup-duty draw for exactly one eligible store. Refusals (unknown store, store below its minimum,
/// nobody in the pot) are reported errors with no draw and no chat post.
pub async fn spin_roulette<B: OrderPoolDatabase + CatalogManagement + ChatManagement>(
    body: web::Json<RouletteRequest>,
    api: web::Data<RouletteApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let store_name = body.into_inner().store_name;
    debug!("💻️ POST spin roulette for '{store_name}'");
    let outcome = api.spin(&store_name).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
