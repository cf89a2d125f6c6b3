use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use std::{
    io::Cursor,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crate::player::MediaBackend;

/// Playback through the default audio device. Stream bytes are pulled
/// fully into memory before decoding, so seeks never wait on the
/// network.
pub struct RodioBackend {
    sink: Sink,
    http: reqwest::blocking::Client,
    duration: Option<Duration>,
    track_ended: Arc<AtomicBool>,
    _stream: OutputStream,
}

impl RodioBackend {
    pub fn new() -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()?;
        let sink = Sink::connect_new(stream.mixer());

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            sink,
            http,
            duration: None,
            track_ended: Arc::new(AtomicBool::new(false)),
            _stream: stream,
        })
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if url.starts_with("http://") || url.starts_with("https://") {
            let response = self
                .http
                .get(url)
                .send()
                .with_context(|| format!("request to {url} failed"))?
                .error_for_status()?;

            Ok(response.bytes()?.to_vec())
        } else {
            std::fs::read(url).with_context(|| format!("could not read {url}"))
        }
    }
}

impl MediaBackend for RodioBackend {
    fn load(&mut self, url: &str) -> Result<()> {
        // The old source is dropped before the fetch; a failed load
        // leaves the sink empty rather than resuming the old track.
        self.sink.clear();
        self.duration = None;
        self.track_ended.store(false, Ordering::SeqCst);

        let bytes = self.fetch_bytes(url)?;
        let source = decode(bytes, extension_of(url))?;

        self.duration = source.total_duration();
        self.sink
            .append(EndSignal::new(source, Arc::clone(&self.track_ended)));

        Ok(())
    }

    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    fn is_stopped(&self) -> bool {
        self.sink.empty()
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn try_seek(&mut self, pos: Duration) -> Result<()> {
        self.sink
            .try_seek(pos)
            .map_err(|e| anyhow::anyhow!("seek failed: {e}"))
    }

    fn set_gain(&mut self, gain: f32) {
        self.sink.set_volume(gain);
    }

    fn track_ended(&self) -> bool {
        self.track_ended.load(Ordering::SeqCst) && self.sink.empty()
    }
}

/// Extension of the final path segment, with any query or fragment
/// stripped first.
fn extension_of(url: &str) -> Option<&str> {
    let tail = url.rsplit('/').next()?;
    let tail = tail.split(['?', '#']).next()?;

    match tail.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

fn decode(bytes: Vec<u8>, ext: Option<&str>) -> Result<Decoder<Cursor<Vec<u8>>>> {
    let len = bytes.len() as u64;

    let mut builder = Decoder::builder()
        .with_data(Cursor::new(bytes))
        .with_byte_len(len)
        .with_seekable(true);

    if let Some(ext) = ext {
        let hint = match ext {
            "adif" | "adts" => "aac",
            "m4b" | "m4p" | "mp4" => "m4a",
            "bit" | "mpga" => "mp3",
            "wave" => "wav",
            _ => ext,
        };
        builder = builder.with_hint(hint);
    }

    Ok(builder.build()?)
}

/// Passthrough source that flips a flag when the inner decoder runs
/// out of samples.
struct EndSignal<I> {
    input: I,
    ended: Arc<AtomicBool>,
}

impl<I> EndSignal<I> {
    fn new(input: I, ended: Arc<AtomicBool>) -> Self {
        EndSignal { input, ended }
    }
}

impl<I> Iterator for EndSignal<I>
where
    I: Source,
{
    type Item = rodio::Sample;

    fn next(&mut self) -> Option<Self::Item> {
        match self.input.next() {
            Some(sample) => Some(sample),
            None => {
                self.ended.store(true, Ordering::SeqCst);
                None
            }
        }
    }
}

impl<I> Source for EndSignal<I>
where
    I: Source,
{
    fn current_span_len(&self) -> Option<usize> {
        self.input.current_span_len()
    }

    fn channels(&self) -> rodio::ChannelCount {
        self.input.channels()
    }

    fn sample_rate(&self) -> rodio::SampleRate {
        self.input.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.input.total_duration()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.input.try_seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::extension_of;

    #[test]
    fn extension_comes_from_the_last_segment() {
        assert_eq!(extension_of("http://h/api/v1/stream/song.mp3"), Some("mp3"));
        assert_eq!(extension_of("/local/dir/track.flac"), Some("flac"));
    }

    #[test]
    fn query_and_fragment_are_stripped() {
        assert_eq!(
            extension_of("http://h/stream/song.m4a?token=abc#t=10"),
            Some("m4a")
        );
    }

    #[test]
    fn extensionless_urls_have_no_hint() {
        assert_eq!(extension_of("http://h/api/v1/stream/abc123"), None);
        assert_eq!(extension_of("http://h/stream/.hidden"), None);
    }
}
