use crate::domain::TrackInfo;
use indexmap::IndexMap;
use std::sync::Arc;

/// Remote track list in server order, keyed by stream URL.
#[derive(Default)]
pub struct Catalog {
    tracks: IndexMap<String, Arc<TrackInfo>>,
}

impl Catalog {
    pub fn replace(&mut self, tracks: Vec<Arc<TrackInfo>>) {
        self.tracks = tracks
            .into_iter()
            .map(|track| (track.stream_url.clone(), track))
            .collect();
    }

    pub fn get_by_index(&self, index: usize) -> Option<&Arc<TrackInfo>> {
        self.tracks.get_index(index).map(|(_, track)| track)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<TrackInfo>> {
        self.tracks.values()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
