//! In-memory `DocumentStore` backend
//!
//! Mirrors the production document database layout: per-user `tags` and
//! `playlists` collections plus the global share and rating collections.
//! Used as the backend in tests and local sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use clipmark_core::error::{ClipmarkError, Result};
use clipmark_core::traits::DocumentStore;
use clipmark_core::types::{
    Playlist, PlaylistId, RatingRecord, ShareId, ShareRecord, ShareStatus, Tag, TagId, UserId,
};

#[derive(Default)]
struct Collections {
    // user id -> documents, oldest first
    tags: HashMap<UserId, Vec<Tag>>,
    playlists: HashMap<UserId, Vec<Playlist>>,
    shares: Vec<ShareRecord>,
    ratings: Vec<RatingRecord>,
}

/// In-memory document store.
///
/// Every method is atomic on one document, like the production store;
/// there are no cross-call transactions.
#[derive(Default)]
pub struct MemoryDocumentStore {
    inner: RwLock<Collections>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for MemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDocumentStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn save_tag(&self, user: &UserId, tag: &Tag) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .tags
            .entry(user.clone())
            .or_default()
            .push(tag.clone());
        Ok(())
    }

    async fn user_tags(&self, user: &UserId) -> Result<Vec<Tag>> {
        let inner = self.inner.read().await;
        let mut tags = inner.tags.get(user).cloned().unwrap_or_default();
        tags.reverse();
        Ok(tags)
    }

    async fn update_tag(&self, user: &UserId, id: &TagId, title: &str, memo: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        let tag = inner
            .tags
            .get_mut(user)
            .and_then(|tags| tags.iter_mut().find(|t| &t.id == id))
            .ok_or_else(|| ClipmarkError::not_found("tag", id.as_str()))?;
        tag.edit(title, memo);
        Ok(())
    }

    async fn delete_tag(&self, user: &UserId, id: &TagId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let tags = inner
            .tags
            .get_mut(user)
            .ok_or_else(|| ClipmarkError::not_found("tag", id.as_str()))?;
        let pos = tags
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| ClipmarkError::not_found("tag", id.as_str()))?;
        tags.remove(pos);
        Ok(())
    }

    async fn save_playlist(&self, user: &UserId, playlist: &Playlist) -> Result<()> {
        let mut inner = self.inner.write().await;
        let playlists = inner.playlists.entry(user.clone()).or_default();
        // Full overwrite when the document already exists
        if let Some(existing) = playlists.iter_mut().find(|p| p.id == playlist.id) {
            *existing = playlist.clone();
        } else {
            playlists.push(playlist.clone());
        }
        Ok(())
    }

    async fn user_playlists(&self, user: &UserId) -> Result<Vec<Playlist>> {
        let inner = self.inner.read().await;
        let mut playlists = inner.playlists.get(user).cloned().unwrap_or_default();
        playlists.reverse();
        Ok(playlists)
    }

    async fn delete_playlist(&self, user: &UserId, id: &PlaylistId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let playlists = inner
            .playlists
            .get_mut(user)
            .ok_or_else(|| ClipmarkError::not_found("playlist", id.as_str()))?;
        let pos = playlists
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ClipmarkError::not_found("playlist", id.as_str()))?;
        playlists.remove(pos);
        Ok(())
    }

    async fn create_share(&self, record: &ShareRecord) -> Result<ShareRecord> {
        let mut stored = record.clone();
        stored.shared_at = Some(Utc::now());
        debug!(share_id = %stored.id, recipient = %stored.shared_with_email, "share created");
        let mut inner = self.inner.write().await;
        inner.shares.push(stored.clone());
        Ok(stored)
    }

    async fn get_share(&self, id: &ShareId) -> Result<Option<ShareRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.shares.iter().find(|s| &s.id == id).cloned())
    }

    async fn shares_for_recipient(&self, email: &str) -> Result<Vec<ShareRecord>> {
        let email = email.to_lowercase();
        let inner = self.inner.read().await;
        Ok(inner
            .shares
            .iter()
            .filter(|s| s.shared_with_email == email)
            .cloned()
            .collect())
    }

    async fn shares_for_owner(&self, owner: &UserId) -> Result<Vec<ShareRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .shares
            .iter()
            .filter(|s| &s.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn set_share_status(&self, id: &ShareId, status: ShareStatus) -> Result<()> {
        let mut inner = self.inner.write().await;
        let share = inner
            .shares
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| ClipmarkError::not_found("share", id.as_str()))?;
        // Accepted and declined are terminal
        if share.status.is_terminal() {
            return Err(ClipmarkError::validation(format!(
                "share is already {}",
                share.status.as_str()
            )));
        }
        share.status = status;
        Ok(())
    }

    async fn delete_share(&self, id: &ShareId) -> Result<()> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .shares
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| ClipmarkError::not_found("share", id.as_str()))?;
        inner.shares.remove(pos);
        Ok(())
    }

    async fn create_rating(&self, record: &RatingRecord) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.ratings.push(record.clone());
        Ok(())
    }

    async fn update_rating(
        &self,
        playlist: &PlaylistId,
        user: &UserId,
        rating: u8,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut inner = self.inner.write().await;
        let record = inner
            .ratings
            .iter_mut()
            .find(|r| &r.playlist_id == playlist && &r.user_id == user)
            .ok_or_else(|| ClipmarkError::not_found("rating", playlist.as_str()))?;
        record.rating = rating;
        record.updated_at = updated_at;
        Ok(())
    }

    async fn ratings_for_playlist(&self, playlist: &PlaylistId) -> Result<Vec<RatingRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .ratings
            .iter()
            .filter(|r| &r.playlist_id == playlist)
            .cloned()
            .collect())
    }

    async fn rating_for_user(
        &self,
        playlist: &PlaylistId,
        user: &UserId,
    ) -> Result<Option<RatingRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .ratings
            .iter()
            .find(|r| &r.playlist_id == playlist && &r.user_id == user)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipmark_core::types::VideoId;

    fn tag(title: &str) -> Tag {
        Tag::new(VideoId::new("vid"), "Video", title, "", 30, 10)
    }

    fn share_to(recipient: &str) -> ShareRecord {
        let playlist = Playlist::new("Highlights", vec![tag("a")]);
        ShareRecord::pending(
            playlist.id.clone(),
            "owner@x.com",
            UserId::new("owner"),
            recipient,
            playlist.snapshot(),
        )
    }

    #[tokio::test]
    async fn user_documents_come_back_newest_first() {
        let store = MemoryDocumentStore::new();
        let user = UserId::new("u1");
        store.save_tag(&user, &tag("first")).await.unwrap();
        store.save_tag(&user, &tag("second")).await.unwrap();

        let tags = store.user_tags(&user).await.unwrap();
        assert_eq!(tags[0].title, "second");
        assert_eq!(tags[1].title, "first");
    }

    #[tokio::test]
    async fn save_playlist_overwrites_existing_document() {
        let store = MemoryDocumentStore::new();
        let user = UserId::new("u1");
        let mut playlist = Playlist::new("Highlights", vec![tag("a")]);
        store.save_playlist(&user, &playlist).await.unwrap();

        playlist.name = "Renamed".to_string();
        store.save_playlist(&user, &playlist).await.unwrap();

        let playlists = store.user_playlists(&user).await.unwrap();
        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].name, "Renamed");
    }

    #[tokio::test]
    async fn create_share_assigns_timestamp() {
        let store = MemoryDocumentStore::new();
        let record = share_to("b@x.com");
        assert!(record.shared_at.is_none());

        let stored = store.create_share(&record).await.unwrap();
        assert!(stored.shared_at.is_some());

        let fetched = store.get_share(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched.shared_at, stored.shared_at);
    }

    #[tokio::test]
    async fn recipient_lookup_is_case_insensitive() {
        let store = MemoryDocumentStore::new();
        store.create_share(&share_to("B@X.Com")).await.unwrap();

        let shares = store.shares_for_recipient("b@x.com").await.unwrap();
        assert_eq!(shares.len(), 1);
        let shares = store.shares_for_recipient("B@X.COM").await.unwrap();
        assert_eq!(shares.len(), 1);
    }

    #[tokio::test]
    async fn terminal_share_status_never_transitions() {
        let store = MemoryDocumentStore::new();
        let record = share_to("b@x.com");
        store.create_share(&record).await.unwrap();

        store
            .set_share_status(&record.id, ShareStatus::Accepted)
            .await
            .unwrap();
        let err = store
            .set_share_status(&record.id, ShareStatus::Declined)
            .await
            .unwrap_err();
        assert!(matches!(err, ClipmarkError::Validation(_)));

        let share = store.get_share(&record.id).await.unwrap().unwrap();
        assert_eq!(share.status, ShareStatus::Accepted);
    }

    #[tokio::test]
    async fn rating_update_targets_the_playlist_user_pair() {
        let store = MemoryDocumentStore::new();
        let playlist = PlaylistId::new("p1");
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");
        store
            .create_rating(&RatingRecord::new(
                playlist.clone(),
                alice.clone(),
                "alice@x.com",
                3,
            ))
            .await
            .unwrap();
        store
            .create_rating(&RatingRecord::new(
                playlist.clone(),
                bob.clone(),
                "bob@x.com",
                5,
            ))
            .await
            .unwrap();

        store
            .update_rating(&playlist, &alice, 4, Utc::now())
            .await
            .unwrap();

        let mine = store
            .rating_for_user(&playlist, &alice)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(mine.rating, 4);
        let theirs = store
            .rating_for_user(&playlist, &bob)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(theirs.rating, 5);
        assert_eq!(store.ratings_for_playlist(&playlist).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn deleting_missing_documents_reports_not_found() {
        let store = MemoryDocumentStore::new();
        let user = UserId::new("u1");
        let err = store.delete_tag(&user, &TagId::new("nope")).await.unwrap_err();
        assert!(matches!(err, ClipmarkError::NotFound { .. }));
        let err = store.delete_share(&ShareId::new("nope")).await.unwrap_err();
        assert!(matches!(err, ClipmarkError::NotFound { .. }));
    }
}
