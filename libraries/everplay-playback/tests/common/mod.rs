//! Shared test harness: inspectable output and store capabilities
#![allow(dead_code)]

use everplay_core::{CoreError, KeyValueStore, Playlist};
use everplay_playback::{AudioOutput, PlaybackError, PlayerConfig, PlayerEngine, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Observable state of the mock audio output
#[derive(Debug, Default)]
pub struct OutputState {
    pub src: Option<String>,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub gain: f32,
    pub playing: bool,
    /// When set, play requests are denied (blocked autoplay)
    pub block_play: bool,
    pub play_requests: u32,
    pub source_loads: u32,
}

/// Mock audio output the test keeps a handle to after boxing
#[derive(Clone, Default)]
pub struct MockOutput(pub Rc<RefCell<OutputState>>);

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the host reporting metadata for the loaded source
    pub fn announce_duration(&self, duration: Duration) {
        self.0.borrow_mut().duration = Some(duration);
    }

    pub fn src(&self) -> Option<String> {
        self.0.borrow().src.clone()
    }
}

impl AudioOutput for MockOutput {
    fn set_source(&mut self, src: &str) {
        let mut s = self.0.borrow_mut();
        s.src = Some(src.to_string());
        s.position = Duration::ZERO;
        s.duration = None;
        s.playing = false;
        s.source_loads += 1;
    }

    fn play(&mut self) -> Result<()> {
        let mut s = self.0.borrow_mut();
        s.play_requests += 1;
        if s.block_play {
            return Err(PlaybackError::AutoplayBlocked);
        }
        s.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.0.borrow_mut().playing = false;
    }

    fn set_position(&mut self, position: Duration) {
        self.0.borrow_mut().position = position;
    }

    fn position(&self) -> Duration {
        self.0.borrow().position
    }

    fn duration(&self) -> Option<Duration> {
        self.0.borrow().duration
    }

    fn set_gain(&mut self, gain: f32) {
        self.0.borrow_mut().gain = gain;
    }
}

/// Key-value store the test can pre-seed and inspect after boxing
#[derive(Clone, Default)]
pub struct MockStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Make every write fail, as a disabled or full store would
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }
}

impl KeyValueStore for MockStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> everplay_core::Result<()> {
        if *self.fail_writes.borrow() {
            return Err(CoreError::StorageWrite("quota exceeded".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> everplay_core::Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Two-track playlist used across suites
pub const TWO_TRACKS: &str = r#"[
    {"src":"a.mp3","title":"A"},
    {"src":"b.mp3"}
]"#;

/// Engine plus handles to its collaborators
pub fn engine_with_handles(json: &str) -> (PlayerEngine, MockOutput, MockStore) {
    let output = MockOutput::new();
    let store = MockStore::new();
    let engine = PlayerEngine::new(
        Playlist::from_json(json).unwrap(),
        Box::new(output.clone()),
        Box::new(store.clone()),
        PlayerConfig::default(),
    );
    (engine, output, store)
}
