use log::*;
use rand::thread_rng;

use crate::{
    db_types::NewChatMessage,
    events::{EventProducers, RouletteSpunEvent},
    helpers::RESERVED_BOT_NAME,
    pool_api::{aggregation, errors::RouletteError, objects::RouletteOutcome, roulette},
    traits::{CatalogManagement, ChatManagement, OrderPoolDatabase},
};

/// `RouletteApi` runs the pickup-duty draw for one eligible store and announces the result to the shared chat.
pub struct RouletteApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> RouletteApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }
}

impl<B> RouletteApi<B>
where B: OrderPoolDatabase + CatalogManagement + ChatManagement
{
    /// Spins the roulette for `store_name`.
    ///
    /// The store must exist and must currently have met its minimum order amount; the candidate pool is the
    /// distinct eaters with at least one line there. Precondition failures are reported errors; no draw happens
    /// and nothing is posted to chat. The winner announcement is attributed to the reserved bot identity.
    ///
    /// Note the race this inherits by design: eligibility is checked against one read, and a retraction from
    /// another session can invalidate it before the announcement lands. The next poll tick shows everyone the same
    /// final state either way.
    pub async fn spin(&self, store_name: &str) -> Result<RouletteOutcome, RouletteError> {
        let store =
            self.db.fetch_store_by_name(store_name).await?.ok_or_else(|| RouletteError::StoreNotFound(store_name.to_string()))?;
        let aggregates = aggregation::build_aggregates(self.db.fetch_store_totals().await?);
        let is_eligible =
            aggregates.iter().any(|aggregate| aggregate.store_name == store.name && aggregate.eligible);
        if !is_eligible {
            debug!("🎲️ Roulette refused: '{}' has not reached {}", store.name, store.min_order_amount);
            return Err(RouletteError::StoreNotEligible(store.name));
        }
        let lines = self.db.fetch_order_lines().await?;
        let candidates = roulette::candidate_pool(&lines, &store.name);
        let winner = {
            let mut rng = thread_rng();
            roulette::draw(&candidates, &mut rng)
                .ok_or_else(|| RouletteError::NoParticipants(store.name.clone()))?
                .to_string()
        };
        info!("🎲️ The roulette picked {winner} out of {} participants at '{}'", candidates.len(), store.name);
        let announcement =
            format!("🎉 [roulette] {winner} won the draw for '{}' — enjoy the pickup run! 🏃", store.name);
        self.db.insert_chat_message(NewChatMessage::new(RESERVED_BOT_NAME, announcement.clone())).await?;
        for producer in &self.producers.roulette_spun_producer {
            producer.publish_event(RouletteSpunEvent::new(store.name.clone(), winner.clone())).await;
        }
        Ok(RouletteOutcome { store_name: store.name, winner, candidates, announcement })
    }
}
