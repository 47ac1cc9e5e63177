//! Background delivery of [`EditorState`] snapshots to registered listeners.
//!
//! Every content or selection change requests a rebuild; rebuilds run off
//! the caller's thread. A request that is overtaken by a newer one before it
//! finishes is dropped, and a snapshot equal to the last delivered one is
//! not delivered again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::buffer::StringBuffer;
use crate::selection::Selection;
use crate::state::EditorState;

/// Receiver of editor state snapshots. Called on a background thread.
pub trait EditorStateListener: Send + Sync {
    fn on_editor_state_changed(&self, state: &EditorState);
}

#[derive(Default)]
struct Delivered {
    generation: u64,
    state: Option<EditorState>,
}

/// Fans editor state snapshots out to listeners, skipping stale and
/// duplicate ones.
#[derive(Default)]
pub struct EditorStateNotifier {
    listeners: Mutex<Vec<Arc<dyn EditorStateListener>>>,
    generation: Arc<AtomicU64>,
    delivered: Arc<Mutex<Delivered>>,
}

impl EditorStateNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Arc<dyn EditorStateListener>) {
        self.listeners.lock().unwrap().push(listener);
    }

    /// Remove a previously registered listener, matched by identity.
    pub fn unregister(&self, listener: &Arc<dyn EditorStateListener>) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|candidate| !Arc::ptr_eq(candidate, listener));
    }

    /// Rebuild the state for the given content revision and deliver it to
    /// every listener, unless a newer revision supersedes it first or it
    /// equals the last delivered snapshot.
    ///
    /// Returns the worker handle so callers can await delivery; production
    /// hosts usually drop it.
    pub fn notify(
        &self,
        content: &str,
        selection: Selection,
        editor_enabled: bool,
        color: u32,
    ) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let listeners: Vec<_> = self.listeners.lock().unwrap().clone();
        let latest = Arc::clone(&self.generation);
        let delivered = Arc::clone(&self.delivered);
        let content = content.to_owned();
        thread::spawn(move || {
            if listeners.is_empty() {
                return;
            }
            let buffer = StringBuffer::from_text(&content);
            let state = EditorState::build(&buffer, selection, editor_enabled, color);
            if latest.load(Ordering::SeqCst) != generation {
                debug!(generation, "state snapshot superseded, dropping");
                return;
            }
            let mut last = delivered.lock().unwrap();
            if last.generation > generation {
                return;
            }
            if last.state.as_ref() == Some(&state) {
                debug!(generation, "state snapshot unchanged, not delivering");
                return;
            }
            for listener in &listeners {
                listener.on_editor_state_changed(&state);
            }
            last.generation = generation;
            last.state = Some(state);
        })
    }

    /// Deliver a fresh snapshot to one listener regardless of staleness or
    /// deduplication. Used right after registration to seed the listener.
    pub fn force_notify(
        &self,
        listener: Arc<dyn EditorStateListener>,
        content: &str,
        selection: Selection,
        editor_enabled: bool,
        color: u32,
    ) -> JoinHandle<()> {
        let content = content.to_owned();
        thread::spawn(move || {
            let buffer = StringBuffer::from_text(&content);
            let state = EditorState::build(&buffer, selection, editor_enabled, color);
            listener.on_editor_state_changed(&state);
        })
    }
}
