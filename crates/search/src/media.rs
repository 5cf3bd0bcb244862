//! The searchable media catalog model.
//!
//! Candidates arrive from the remote library already fetched; the scorer
//! only reads the fields relevant to ranking. The media type is a closed
//! sum so secondary scoring handles every variant explicitly.

use serde::{Deserialize, Serialize};

/// A searchable entity from the media library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Display name, the primary match target.
    pub name: String,
    /// Whether the user flagged this item as a favorite.
    #[serde(default)]
    pub favorite: bool,
    /// The media type with its type-specific fields.
    #[serde(flatten)]
    pub kind: MediaKind,
}

/// Media type tag plus the secondary fields that type contributes to
/// scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaKind {
    Artist,
    Album(AlbumFields),
    Track(TrackFields),
    Playlist,
    Audiobook(AudiobookFields),
    Podcast(PodcastFields),
    PodcastEpisode(PodcastFields),
    Radio,
}

impl MediaKind {
    /// Lowercase label for display and logging.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Artist => "artist",
            MediaKind::Album(_) => "album",
            MediaKind::Track(_) => "track",
            MediaKind::Playlist => "playlist",
            MediaKind::Audiobook(_) => "audiobook",
            MediaKind::Podcast(_) => "podcast",
            MediaKind::PodcastEpisode(_) => "podcast_episode",
            MediaKind::Radio => "radio",
        }
    }
}

/// Album fields relevant to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumFields {
    /// Flattened artist names, e.g. "Pink Floyd" or "Simon & Garfunkel".
    #[serde(default)]
    pub artists: String,
    /// Whether the album is in the requesting account's library.
    #[serde(default)]
    pub in_library: bool,
}

/// Track fields relevant to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackFields {
    /// Flattened artist names.
    #[serde(default)]
    pub artists: String,
    /// Name of the containing album, when known.
    #[serde(default)]
    pub album: Option<String>,
}

/// Audiobook fields relevant to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudiobookFields {
    /// Flattened author names.
    #[serde(default)]
    pub authors: String,
    /// Flattened narrator names.
    #[serde(default)]
    pub narrators: String,
}

/// Descriptive fields for podcasts and podcast episodes.
///
/// Replaces the upstream API's open metadata map with explicit optional
/// fields. Secondary scoring scans `author`, `publisher`, `owner`,
/// `creator` in that order and short-circuits on the first exact match;
/// `description` is checked independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodcastFields {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PodcastFields {
    /// The creator-like fields in scan order.
    pub(crate) fn creator_fields(&self) -> [Option<&str>; 4] {
        [
            self.author.as_deref(),
            self.publisher.as_deref(),
            self.owner.as_deref(),
            self.creator.as_deref(),
        ]
    }
}

impl MediaItem {
    /// Creates an item with the given name and kind.
    pub fn new(name: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            name: name.into(),
            favorite: false,
            kind,
        }
    }

    /// Creates an artist item.
    pub fn artist(name: impl Into<String>) -> Self {
        Self::new(name, MediaKind::Artist)
    }

    /// Creates an album item with its flattened artist names.
    pub fn album(name: impl Into<String>, artists: impl Into<String>) -> Self {
        Self::new(
            name,
            MediaKind::Album(AlbumFields {
                artists: artists.into(),
                in_library: false,
            }),
        )
    }

    /// Creates a track item with its flattened artist names and
    /// containing album.
    pub fn track(
        name: impl Into<String>,
        artists: impl Into<String>,
        album: Option<String>,
    ) -> Self {
        Self::new(
            name,
            MediaKind::Track(TrackFields {
                artists: artists.into(),
                album,
            }),
        )
    }

    /// Sets the favorite flag.
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Marks an album as being in the account's library. No-op for other
    /// media types.
    pub fn with_in_library(mut self, in_library: bool) -> Self {
        if let MediaKind::Album(fields) = &mut self.kind {
            fields.in_library = in_library;
        }
        self
    }
}
