use crate::domain::TrackInfo;
use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver};
use serde::Deserialize;
use std::{sync::Arc, thread, time::Duration};

/// Blocking client for the music service's public endpoints.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

/// Rows of the `/api/v1/song` listing as the service sends them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SongPayload {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    title: String,
    artist_name: String,
    song_src: String,
    #[serde(default)]
    album: Option<String>,
}

/// Some deployments wrap the listing in an object, others send the
/// bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SongListing {
    Wrapped { songs: Vec<SongPayload> },
    Bare(Vec<SongPayload>),
}

impl SongListing {
    fn into_songs(self) -> Vec<SongPayload> {
        match self {
            SongListing::Wrapped { songs } => songs,
            SongListing::Bare(songs) => songs,
        }
    }
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn stream_url(&self, file: &str) -> String {
        format!("{}/api/v1/stream/{file}", self.base_url)
    }

    pub fn fetch_tracks(&self) -> Result<Vec<Arc<TrackInfo>>> {
        let url = format!("{}/api/v1/song", self.base_url);
        tracing::info!("fetching track list from {url}");

        let body = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()?
            .text()?;

        let listing: SongListing =
            serde_json::from_str(&body).context("track list was not valid JSON")?;

        Ok(listing
            .into_songs()
            .into_iter()
            .map(|song| Arc::new(self.to_track(song)))
            .collect())
    }

    /// Runs the listing fetch on a worker thread; the result arrives
    /// on the returned channel.
    pub fn fetch_tracks_bg(&self) -> Receiver<Result<Vec<Arc<TrackInfo>>>> {
        let (tx, rx) = bounded(1);
        let client = self.clone();

        thread::spawn(move || {
            let _ = tx.send(client.fetch_tracks());
        });

        rx
    }

    fn to_track(&self, song: SongPayload) -> TrackInfo {
        TrackInfo {
            id: song.id,
            title: song.title,
            artist: song.artist_name,
            album: song.album.filter(|album| !album.is_empty()),
            stream_url: self.stream_url(&song.song_src),
        }
    }
}
