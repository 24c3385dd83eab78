use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::events::{EventHandler, EventProducer, Handler, OrderAddedEvent, PoolClearedEvent, RouletteSpunEvent};

/// The producer ends of every configured hook. APIs clone this freely; publishing to an empty producer list is a
/// no-op.
#[derive(Default, Clone)]
pub struct EventProducers {
    pub order_added_producer: Vec<EventProducer<OrderAddedEvent>>,
    pub pool_cleared_producer: Vec<EventProducer<PoolClearedEvent>>,
    pub roulette_spun_producer: Vec<EventProducer<RouletteSpunEvent>>,
}

pub struct EventHandlers {
    pub on_order_added: Option<EventHandler<OrderAddedEvent>>,
    pub on_pool_cleared: Option<EventHandler<PoolClearedEvent>>,
    pub on_roulette_spun: Option<EventHandler<RouletteSpunEvent>>,
}

impl EventHandlers {
    pub fn new(buffer_size: usize, hooks: EventHooks) -> Self {
        let on_order_added = hooks.on_order_added.map(|f| EventHandler::new(buffer_size, f));
        let on_pool_cleared = hooks.on_pool_cleared.map(|f| EventHandler::new(buffer_size, f));
        let on_roulette_spun = hooks.on_roulette_spun.map(|f| EventHandler::new(buffer_size, f));
        Self { on_order_added, on_pool_cleared, on_roulette_spun }
    }

    pub fn producers(&self) -> EventProducers {
        let mut result = EventProducers::default();
        if let Some(handler) = &self.on_order_added {
            result.order_added_producer.push(handler.subscribe());
        }
        if let Some(handler) = &self.on_pool_cleared {
            result.pool_cleared_producer.push(handler.subscribe());
        }
        if let Some(handler) = &self.on_roulette_spun {
            result.roulette_spun_producer.push(handler.subscribe());
        }
        result
    }

    pub async fn start_handlers(self) {
        if let Some(handler) = self.on_order_added {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
        if let Some(handler) = self.on_pool_cleared {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
        if let Some(handler) = self.on_roulette_spun {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
    }
}

#[derive(Default, Clone)]
pub struct EventHooks {
    pub on_order_added: Option<Handler<OrderAddedEvent>>,
    pub on_pool_cleared: Option<Handler<PoolClearedEvent>>,
    pub on_roulette_spun: Option<Handler<RouletteSpunEvent>>,
}

impl EventHooks {
    pub fn on_order_added<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(OrderAddedEvent) -> BoxFuture<'static, ()>) + Send + Sync + 'static {
        self.on_order_added = Some(Arc::new(f));
        self
    }

    pub fn on_pool_cleared<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(PoolClearedEvent) -> BoxFuture<'static, ()>) + Send + Sync + 'static {
        self.on_pool_cleared = Some(Arc::new(f));
        self
    }

    pub fn on_roulette_spun<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(RouletteSpunEvent) -> BoxFuture<'static, ()>) + Send + Sync + 'static {
        self.on_roulette_spun = Some(Arc::new(f));
        self
    }
}
