use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MangaId;

/// Where a series sits in the user's library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[default]
    Wishlist,
    Reading,
    Collected,
    Completed,
}

impl ReadingStatus {
    pub const ALL: [ReadingStatus; 4] = [
        ReadingStatus::Wishlist,
        ReadingStatus::Reading,
        ReadingStatus::Collected,
        ReadingStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReadingStatus::Wishlist => "Wishlist",
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Collected => "Collected",
            ReadingStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown reading status: {}", s))
    }
}

/// Read-only snapshot of one library record.
///
/// `title`, `cover_url` and `total_volumes` are copied from the catalog when
/// the entry is added and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionEntry {
    pub manga_id: MangaId,
    pub title: String,
    pub cover_url: Option<String>,
    pub volumes_bought: u32,
    pub total_volumes: Option<u32>,
    pub current_volume: u32,
    pub completed: bool,
    pub status: ReadingStatus,
}

impl CollectionEntry {
    pub fn progress(&self) -> CollectionProgress {
        CollectionProgress {
            volumes_bought: self.volumes_bought,
            current_volume: self.current_volume,
            completed: self.completed,
        }
    }
}

/// Progress fields overwritten together by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollectionProgress {
    pub volumes_bought: u32,
    pub current_volume: u32,
    pub completed: bool,
}

impl CollectionProgress {
    /// Caps both volume counters at `total_volumes` when it is known.
    pub fn clamped(self, total_volumes: Option<u32>) -> Self {
        match total_volumes {
            Some(total) => CollectionProgress {
                volumes_bought: self.volumes_bought.min(total),
                current_volume: self.current_volume.min(total),
                completed: self.completed,
            },
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("Collected".parse::<ReadingStatus>(), Ok(ReadingStatus::Collected));
        assert_eq!("wishlist".parse::<ReadingStatus>(), Ok(ReadingStatus::Wishlist));
        assert!("Dropped".parse::<ReadingStatus>().is_err());
    }

    #[test]
    fn test_progress_clamped_to_total_volumes() {
        let progress = CollectionProgress {
            volumes_bought: 999,
            current_volume: 500,
            completed: true,
        };
        assert_eq!(
            progress.clamped(Some(12)),
            CollectionProgress {
                volumes_bought: 12,
                current_volume: 12,
                completed: true,
            }
        );
        assert_eq!(progress.clamped(None), progress);
    }

    #[test]
    fn test_default_status_is_wishlist() {
        assert_eq!(ReadingStatus::default(), ReadingStatus::Wishlist);
    }
}
