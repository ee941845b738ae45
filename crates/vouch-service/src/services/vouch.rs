//! Vouch service
//!
//! Handles the paginated, searchable vouch listing.

use tracing::{info, instrument};
use vouch_core::traits::VouchQuery;

use crate::dto::mappers::vouch_to_response;
use crate::dto::{PageMeta, VouchListResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vouch service
pub struct VouchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VouchService<'a> {
    /// Create a new VouchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List vouches, newest first, optionally filtered by a search term.
    ///
    /// The `total` in the pagination block is the highest vouch number on
    /// record when unfiltered, so deleted vouches still count toward the
    /// public tally. Under a search filter it is the match count instead.
    #[instrument(skip(self))]
    pub async fn list_vouches(
        &self,
        page: i64,
        limit: i64,
        search: Option<String>,
    ) -> ServiceResult<VouchListResponse> {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let offset = (page - 1) * limit;

        let vouches = self
            .ctx
            .vouch_repo()
            .list(VouchQuery {
                offset,
                limit,
                search: search.clone(),
            })
            .await?;

        let actual_count = self.ctx.vouch_repo().count(search.as_deref()).await?;
        let total = if search.is_some() {
            actual_count
        } else {
            self.ctx
                .vouch_repo()
                .max_vouch_number()
                .await?
                .map_or(actual_count, i64::from)
        };

        info!(page, limit, returned = vouches.len(), "Listed vouches");

        let directory = self.ctx.mention_directory();
        Ok(VouchListResponse {
            vouches: vouches
                .into_iter()
                .map(|vouch| vouch_to_response(vouch, directory))
                .collect(),
            pagination: PageMeta::new(page, limit, total, actual_count),
        })
    }
}
