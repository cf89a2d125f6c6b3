use anyhow::{Result, anyhow};
use ostinato::{
    domain::TrackInfo,
    player::{MediaBackend, MediaEvent, PlayerHandle},
};
use std::{
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

const EVENT_WAIT: Duration = Duration::from_secs(2);

#[derive(Default)]
struct FakeState {
    loaded: Option<String>,
    paused: bool,
    gain: f32,
    position: Duration,
    seeks: Vec<Duration>,
    ended: bool,
    fail_next_load: bool,
}

/// Scripted stand-in for the audio device. Tests poke the shared state
/// to simulate things only real hardware would do, like running out of
/// samples.
#[derive(Clone, Default)]
struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    fn share(&self) -> Arc<Mutex<FakeState>> {
        Arc::clone(&self.state)
    }
}

impl MediaBackend for FakeBackend {
    fn load(&mut self, url: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.loaded = None;
        state.ended = false;
        state.position = Duration::ZERO;

        if state.fail_next_load {
            state.fail_next_load = false;
            return Err(anyhow!("no route to host"));
        }

        state.loaded = Some(url.to_string());
        state.paused = true;
        Ok(())
    }

    fn play(&mut self) {
        self.state.lock().unwrap().paused = false;
    }

    fn pause(&mut self) {
        self.state.lock().unwrap().paused = true;
    }

    fn is_paused(&self) -> bool {
        self.state.lock().unwrap().paused
    }

    fn is_stopped(&self) -> bool {
        self.state.lock().unwrap().loaded.is_none()
    }

    fn position(&self) -> Duration {
        self.state.lock().unwrap().position
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(180))
    }

    fn try_seek(&mut self, pos: Duration) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.seeks.push(pos);
        state.position = pos;
        Ok(())
    }

    fn set_gain(&mut self, gain: f32) {
        self.state.lock().unwrap().gain = gain;
    }

    fn track_ended(&self) -> bool {
        self.state.lock().unwrap().ended
    }
}

fn spawn_fake() -> (PlayerHandle, Arc<Mutex<FakeState>>) {
    let backend = FakeBackend::default();
    let shared = backend.share();
    let handle = PlayerHandle::spawn_with(move || Ok(Box::new(backend) as Box<dyn MediaBackend>));

    (handle, shared)
}

fn track(url: &str) -> Arc<TrackInfo> {
    Arc::new(TrackInfo {
        id: None,
        title: "Integration".to_string(),
        artist: "Suite".to_string(),
        album: None,
        stream_url: url.to_string(),
    })
}

/// Drains events until one matches, so slow-arriving Position ticks
/// never trip an assertion about a different event.
fn wait_for<F>(handle: &PlayerHandle, mut pred: F) -> MediaEvent
where
    F: FnMut(&MediaEvent) -> bool,
{
    let deadline = Instant::now() + EVENT_WAIT;
    while let Ok(event) = handle.events().recv_deadline(deadline) {
        if pred(&event) {
            return event;
        }
    }
    panic!("timed out waiting for a matching player event");
}

fn wait_until(mut cond: impl FnMut() -> bool) {
    let deadline = Instant::now() + EVENT_WAIT;
    while Instant::now() < deadline {
        if cond() {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("timed out waiting on backend state");
}

#[test]
fn loading_a_track_reports_metadata_then_playback() {
    let (handle, shared) = spawn_fake();

    handle
        .play(track("https://svc/api/v1/stream/a.mp3"))
        .unwrap();

    let metadata = wait_for(&handle, |e| matches!(e, MediaEvent::MetadataLoaded(_)));
    assert!(matches!(
        metadata,
        MediaEvent::MetadataLoaded(Some(total)) if total == Duration::from_secs(180)
    ));

    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(true)));

    let state = shared.lock().unwrap();
    assert_eq!(
        state.loaded.as_deref(),
        Some("https://svc/api/v1/stream/a.mp3")
    );
    assert!(!state.paused);
}

#[test]
fn toggling_pauses_and_resumes_the_device() {
    let (handle, shared) = spawn_fake();
    handle.play(track("stream/a")).unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(true)));

    handle.toggle_playback().unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(false)));
    assert!(shared.lock().unwrap().paused);

    handle.toggle_playback().unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(true)));
    assert!(!shared.lock().unwrap().paused);
}

#[test]
fn seeks_reach_the_device_and_positions_flow_back() {
    let (handle, shared) = spawn_fake();
    handle.play(track("stream/a")).unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(true)));

    handle.seek(Duration::from_secs(90)).unwrap();

    wait_until(|| {
        shared
            .lock()
            .unwrap()
            .seeks
            .contains(&Duration::from_secs(90))
    });
    wait_for(&handle, |e| {
        matches!(e, MediaEvent::Position(pos) if *pos >= Duration::from_secs(90))
    });
}

#[test]
fn gain_changes_reach_the_device() {
    let (handle, shared) = spawn_fake();

    handle.set_gain(0.25).unwrap();

    wait_until(|| shared.lock().unwrap().gain == 0.25);
}

#[test]
fn an_exhausted_source_reports_the_end_once() {
    let (handle, shared) = spawn_fake();
    handle.play(track("stream/a")).unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(true)));

    shared.lock().unwrap().ended = true;
    wait_for(&handle, |e| matches!(e, MediaEvent::TrackEnded));

    // A finished engine goes quiet until the next track.
    let followup = handle.events().recv_timeout(Duration::from_millis(200));
    assert!(followup.is_err());
}

#[test]
fn a_failed_load_reports_an_error_and_a_paused_state() {
    let (handle, shared) = spawn_fake();
    shared.lock().unwrap().fail_next_load = true;

    handle.play(track("stream/broken")).unwrap();

    let error = wait_for(&handle, |e| matches!(e, MediaEvent::Error(_)));
    assert!(matches!(
        error,
        MediaEvent::Error(message) if message.contains("no route to host")
    ));

    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(false)));
    assert!(shared.lock().unwrap().loaded.is_none());
}

#[test]
fn toggling_while_stopped_reports_a_paused_state() {
    let (handle, shared) = spawn_fake();
    shared.lock().unwrap().fail_next_load = true;
    handle.play(track("stream/broken")).unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(false)));

    handle.toggle_playback().unwrap();

    // A stopped engine still answers the toggle.
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(false)));
    assert!(shared.lock().unwrap().loaded.is_none());
}

#[test]
fn a_second_load_replaces_the_first() {
    let (handle, shared) = spawn_fake();
    handle.play(track("stream/a")).unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::StateChanged(true)));

    handle.play(track("stream/b")).unwrap();
    wait_for(&handle, |e| matches!(e, MediaEvent::MetadataLoaded(_)));

    wait_until(|| shared.lock().unwrap().loaded.as_deref() == Some("stream/b"));
}
