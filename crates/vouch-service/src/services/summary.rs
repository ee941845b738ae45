//! Summary service
//!
//! Mines aggregate statistics out of every vouch message on record.

use tracing::{info, instrument};
use vouch_core::extract_stats;

use crate::dto::SummaryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Summary service
pub struct SummaryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SummaryService<'a> {
    /// Create a new SummaryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the community totals shown on the landing page.
    ///
    /// Every message body is re-scanned on each call; totals always reflect
    /// the current store, which is why the endpoint is served uncached.
    #[instrument(skip(self))]
    pub async fn summarize(&self) -> ServiceResult<SummaryResponse> {
        let messages = self.ctx.vouch_repo().all_messages().await?;
        let stats = extract_stats(&messages);

        let total_vouches = self
            .ctx
            .vouch_repo()
            .max_vouch_number()
            .await?
            .map_or(0, i64::from);

        info!(
            scanned = messages.len(),
            total_vouches, "Computed vouch summary"
        );

        Ok(SummaryResponse {
            total_vouches,
            total_inr: stats.total_inr,
            nitro: stats.nitro,
            decors: stats.decors,
            owo: stats.owo,
            crypto: stats.crypto,
            crypto_giveaways: stats.crypto_giveaways,
        })
    }
}
