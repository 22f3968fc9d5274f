use crate::api::album::interfaces::AlbumScope;
use crate::immich_client::{ImmichError, ImmichResult};
use common_types::{Album, User};
use std::collections::HashSet;
use tracing::debug;

/// Albums from both lists that `me` is not a member of, without duplicates.
#[must_use]
pub fn owned_albums(owned: &[Album], shared: &[Album], me: Option<&User>) -> Vec<Album> {
    let mut seen = HashSet::new();
    owned
        .iter()
        .chain(shared)
        .filter(|album| me.is_none_or(|user| !album.is_shared_with(user)))
        .filter(|album| seen.insert(album.id.clone()))
        .cloned()
        .collect()
}

/// Albums from the shared list that `me` is a member of.
#[must_use]
pub fn shared_with_me(shared: &[Album], me: Option<&User>) -> Vec<Album> {
    let Some(user) = me else {
        return Vec::new();
    };
    shared
        .iter()
        .filter(|album| album.is_shared_with(user))
        .cloned()
        .collect()
}

/// Combines the owned and shared album lists into what `scope` shows.
///
/// Fails with [`ImmichError::NoAlbums`] when both lists are empty.
pub fn albums_for_scope(
    scope: AlbumScope,
    owned: &[Album],
    shared: &[Album],
    me: Option<&User>,
) -> ImmichResult<Vec<Album>> {
    if owned.is_empty() && shared.is_empty() {
        return Err(ImmichError::NoAlbums);
    }

    let albums = match scope {
        AlbumScope::Shared => shared.to_vec(),
        AlbumScope::Owned => owned_albums(owned, shared, me),
        AlbumScope::All => {
            let mut albums = owned_albums(owned, shared, me);
            albums.extend(shared_with_me(shared, me));
            albums
        }
    };
    debug!(
        "Scope {scope}: {} owned + {} shared fetched, {} shown",
        owned.len(),
        shared.len(),
        albums.len()
    );
    Ok(albums)
}
