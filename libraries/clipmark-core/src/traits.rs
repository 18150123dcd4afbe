/// Collaborator traits for Clipmark
///
/// The document store, identity provider, and video player are external
/// services. Clipmark reaches each one only through the narrow seams
/// defined here, so implementations can be swapped (production client,
/// in-memory double) without touching the workflow code.
use crate::error::Result;
use crate::types::{
    Playlist, PlaylistId, Principal, RatingRecord, ShareId, ShareRecord, ShareStatus, Tag, TagId,
    UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Callback invoked whenever the signed-in user changes.
///
/// Receives `Some(principal)` on sign-in and `None` on sign-out.
pub type AuthStateCallback = Box<dyn Fn(Option<&Principal>) + Send + Sync>;

/// Document database seam.
///
/// Collections: per-user `tags` and `playlists`, plus the global
/// `sharedPlaylists` and `playlistRatings` collections. Each single call
/// is atomic on its own document; there are no cross-call transactions,
/// so multi-step workflows (rating upsert, accept) live above this trait.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // Per-user tag collection

    /// Persist a tag in the user's collection
    async fn save_tag(&self, user: &UserId, tag: &Tag) -> Result<()>;

    /// All tags for a user, newest first
    async fn user_tags(&self, user: &UserId) -> Result<Vec<Tag>>;

    /// Update a stored tag's title and memo
    async fn update_tag(&self, user: &UserId, id: &TagId, title: &str, memo: &str) -> Result<()>;

    /// Delete a tag document
    async fn delete_tag(&self, user: &UserId, id: &TagId) -> Result<()>;

    // Per-user playlist collection

    /// Persist a playlist document (full overwrite)
    async fn save_playlist(&self, user: &UserId, playlist: &Playlist) -> Result<()>;

    /// All playlists for a user, newest first
    async fn user_playlists(&self, user: &UserId) -> Result<Vec<Playlist>>;

    /// Delete a playlist document
    async fn delete_playlist(&self, user: &UserId, id: &PlaylistId) -> Result<()>;

    // Global share collection

    /// Create a share record; the store assigns the server timestamp.
    /// Returns the stored record with `shared_at` set.
    async fn create_share(&self, record: &ShareRecord) -> Result<ShareRecord>;

    /// Look up a share by id
    async fn get_share(&self, id: &ShareId) -> Result<Option<ShareRecord>>;

    /// All shares addressed to the given (lowercased) email
    async fn shares_for_recipient(&self, email: &str) -> Result<Vec<ShareRecord>>;

    /// All shares created by the given owner
    async fn shares_for_owner(&self, owner: &UserId) -> Result<Vec<ShareRecord>>;

    /// Update a share's lifecycle status
    async fn set_share_status(&self, id: &ShareId, status: ShareStatus) -> Result<()>;

    /// Remove a share record outright
    async fn delete_share(&self, id: &ShareId) -> Result<()>;

    // Global rating collection

    /// Insert a new rating record
    async fn create_rating(&self, record: &RatingRecord) -> Result<()>;

    /// Update an existing rating's value and `updated_at`
    async fn update_rating(
        &self,
        playlist: &PlaylistId,
        user: &UserId,
        rating: u8,
        updated_at: DateTime<Utc>,
    ) -> Result<()>;

    /// All ratings for a playlist, across users
    async fn ratings_for_playlist(&self, playlist: &PlaylistId) -> Result<Vec<RatingRecord>>;

    /// A single user's rating for a playlist, if present
    async fn rating_for_user(
        &self,
        playlist: &PlaylistId,
        user: &UserId,
    ) -> Result<Option<RatingRecord>>;
}

/// Identity provider seam (email/password and OAuth-style sign-in).
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account and sign it in
    async fn sign_up(&self, email: &str, password: &str) -> Result<Principal>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<Principal>;

    /// Sign in through the configured OAuth provider.
    ///
    /// Returns `None` when a popup was blocked and a redirect-based flow
    /// has been started instead; the eventual result arrives through
    /// `on_auth_state_changed`.
    async fn sign_in_with_provider(&self) -> Result<Option<Principal>>;

    /// Sign the current user out
    async fn sign_out(&self) -> Result<()>;

    /// The currently signed-in user, if any
    async fn current_user(&self) -> Option<Principal>;

    /// Register a listener for auth state changes
    async fn on_auth_state_changed(&self, callback: AuthStateCallback);
}
