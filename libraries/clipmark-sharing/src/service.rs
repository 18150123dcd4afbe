//! Share and rating workflows
//!
//! The service composes the document store and identity provider into
//! the cross-user flows: share a playlist, work through the inbox of
//! received shares, and rate playlists that were shared around.
//!
//! Multi-step flows are deliberately non-atomic pairs of single-document
//! calls; the store offers no cross-call transactions.

use std::sync::Arc;

use tracing::{debug, info};

use clipmark_core::traits::{DocumentStore, IdentityProvider};
use clipmark_core::types::{
    Playlist, PlaylistId, Principal, RatingRecord, RatingSummary, ShareId, ShareRecord,
    ShareStatus,
};
use clipmark_storage::PlaylistStore;

use crate::error::{Result, ShareError, ShareOp};

/// Cross-user sharing and rating service.
pub struct SharingService {
    store: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl SharingService {
    /// Create a service over the given backends
    pub fn new(store: Arc<dyn DocumentStore>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    async fn require_user(&self) -> Result<Principal> {
        self.identity
            .current_user()
            .await
            .ok_or(ShareError::AuthRequired)
    }

    /// Share one of the user's playlists with another user by email.
    ///
    /// The record carries a point-in-time snapshot of the playlist, so
    /// later edits by the owner do not change what the recipient gets.
    pub async fn share(
        &self,
        playlists: &PlaylistStore,
        playlist_id: &PlaylistId,
        recipient_email: &str,
    ) -> Result<ShareRecord> {
        let principal = self.require_user().await?;
        let playlist = playlists
            .get(playlist_id)
            .map_err(|_| ShareError::not_found("playlist", playlist_id.as_str()))?;

        if recipient_email.to_lowercase() == principal.email.to_lowercase() {
            return Err(ShareError::SelfShareForbidden);
        }

        let record = ShareRecord::pending(
            playlist_id.clone(),
            principal.email.clone(),
            principal.user_id.clone(),
            recipient_email,
            playlist.snapshot(),
        );
        let stored = self
            .store
            .create_share(&record)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Share, e))?;
        info!(share_id = %stored.id, recipient = %stored.shared_with_email, "playlist shared");
        Ok(stored)
    }

    /// Shares addressed to the signed-in user, in any lifecycle state.
    ///
    /// Returns an empty list when nobody is signed in; the inbox is
    /// simply empty, never an auth error.
    pub async fn list_received(&self) -> Result<Vec<ShareRecord>> {
        let Some(principal) = self.identity.current_user().await else {
            return Ok(Vec::new());
        };
        self.store
            .shares_for_recipient(&principal.email)
            .await
            .map_err(|e| ShareError::operation(ShareOp::ListReceived, e))
    }

    /// Accept a received share, adding the playlist to the user's
    /// collection.
    ///
    /// The local playlist is built from the share's snapshot with a
    /// fresh id and a `" (shared)"` name suffix. Accepting the same
    /// share twice inserts nothing the second time; only the status
    /// update is replayed. The local insert happens before the remote
    /// status update.
    pub async fn accept(
        &self,
        playlists: &mut PlaylistStore,
        share_id: &ShareId,
    ) -> Result<Playlist> {
        let principal = self.require_user().await?;
        let share = self
            .store
            .get_share(share_id)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Accept, e))?
            .ok_or_else(|| ShareError::not_found("share", share_id.as_str()))?;

        let playlist = match playlists.find_by_original(&share.playlist_id) {
            Some(existing) => {
                debug!(share_id = %share_id, "share already accepted, replaying status only");
                existing.clone()
            }
            None => {
                let playlist = Playlist::from_snapshot(
                    share.playlist_data.clone(),
                    share.owner_email.clone(),
                    share.playlist_id.clone(),
                );
                let playlist = playlists.insert(playlist).clone();
                self.store
                    .save_playlist(&principal.user_id, &playlist)
                    .await
                    .map_err(|e| ShareError::operation(ShareOp::Accept, e))?;
                playlist
            }
        };

        if share.status == ShareStatus::Pending {
            self.store
                .set_share_status(share_id, ShareStatus::Accepted)
                .await
                .map_err(|e| ShareError::operation(ShareOp::Accept, e))?;
        }
        info!(share_id = %share_id, playlist = %playlist.name, "share accepted");
        Ok(playlist)
    }

    /// Decline a received share. Nothing is added locally.
    pub async fn decline(&self, share_id: &ShareId) -> Result<()> {
        self.require_user().await?;
        self.store
            .get_share(share_id)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Decline, e))?
            .ok_or_else(|| ShareError::not_found("share", share_id.as_str()))?;
        self.store
            .set_share_status(share_id, ShareStatus::Declined)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Decline, e))
    }

    /// Shares the signed-in user has sent, in any lifecycle state
    pub async fn list_sent(&self) -> Result<Vec<ShareRecord>> {
        let principal = self.require_user().await?;
        self.store
            .shares_for_owner(&principal.user_id)
            .await
            .map_err(|e| ShareError::operation(ShareOp::ListSent, e))
    }

    /// Cancel a sent share, removing the record outright
    pub async fn cancel(&self, share_id: &ShareId) -> Result<()> {
        self.require_user().await?;
        self.store
            .delete_share(share_id)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Cancel, e))
    }

    /// Rate a shared playlist, 1-5 stars.
    ///
    /// One rating per `(playlist, user)` pair: an existing record is
    /// updated in place, otherwise a new one is created. The value is
    /// also mirrored onto the local copy's display rating when one
    /// exists.
    pub async fn rate_shared(
        &self,
        playlists: &mut PlaylistStore,
        playlist_id: &PlaylistId,
        rating: u8,
    ) -> Result<RatingRecord> {
        if !(1..=5).contains(&rating) {
            return Err(ShareError::InvalidRating(rating));
        }
        let principal = self.require_user().await?;

        let existing = self
            .store
            .rating_for_user(playlist_id, &principal.user_id)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Rate, e))?;

        let record = match existing {
            Some(mut record) => {
                record.rating = rating;
                record.updated_at = chrono::Utc::now();
                self.store
                    .update_rating(playlist_id, &principal.user_id, rating, record.updated_at)
                    .await
                    .map_err(|e| ShareError::operation(ShareOp::Rate, e))?;
                record
            }
            None => {
                let record = RatingRecord::new(
                    playlist_id.clone(),
                    principal.user_id.clone(),
                    principal.email.clone(),
                    rating,
                );
                self.store
                    .create_rating(&record)
                    .await
                    .map_err(|e| ShareError::operation(ShareOp::Rate, e))?;
                record
            }
        };

        self.mirror_local_rating(playlists, playlist_id, rating);
        Ok(record)
    }

    /// All rating records for a playlist, across users
    pub async fn ratings_for(&self, playlist_id: &PlaylistId) -> Result<Vec<RatingRecord>> {
        self.store
            .ratings_for_playlist(playlist_id)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Ratings, e))
    }

    /// Aggregated rating for a playlist
    pub async fn rating_summary(&self, playlist_id: &PlaylistId) -> Result<RatingSummary> {
        let records = self.ratings_for(playlist_id).await?;
        Ok(RatingSummary::of(&records))
    }

    /// The signed-in user's own rating, `None` when unauthenticated or
    /// unrated
    pub async fn my_rating(&self, playlist_id: &PlaylistId) -> Result<Option<RatingRecord>> {
        let Some(principal) = self.identity.current_user().await else {
            return Ok(None);
        };
        self.store
            .rating_for_user(playlist_id, &principal.user_id)
            .await
            .map_err(|e| ShareError::operation(ShareOp::Ratings, e))
    }

    // The rated id is the owner's playlist id; locally it is either the
    // user's own playlist or a received copy carrying that id as origin.
    fn mirror_local_rating(
        &self,
        playlists: &mut PlaylistStore,
        playlist_id: &PlaylistId,
        rating: u8,
    ) {
        let local_id = playlists
            .get(playlist_id)
            .map(|p| p.id.clone())
            .ok()
            .or_else(|| playlists.find_by_original(playlist_id).map(|p| p.id.clone()));
        if let Some(local_id) = local_id {
            // 1-5 always fits the 0-5 display range
            let _ = playlists.set_rating(&local_id, rating);
        }
    }
}

impl std::fmt::Debug for SharingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharingService").finish_non_exhaustive()
    }
}
