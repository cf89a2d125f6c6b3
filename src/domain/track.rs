/// One entry of the remote track list, with its stream URL already
/// resolved against the service base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub id: Option<String>,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub stream_url: String,
}

impl TrackInfo {
    /// Tracks are identified by what actually gets played. Two catalog
    /// rows pointing at the same stream are the same track.
    pub fn same_stream(&self, other: &TrackInfo) -> bool {
        self.stream_url == other.stream_url
    }
}
