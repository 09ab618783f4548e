//! Music toggle semantics over an abstract platform audio context.
//!
//! The piece treats audio as best-effort: a missing track, a missing output
//! device or a context that never finishes resuming must all degrade to
//! silence without disturbing the animation.

/// Lifecycle state of the platform audio context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// The context exists but is not yet allowed to produce sound.
    Suspended,
    /// The context is live and can play.
    Running,
}

/// Platform half of the music feature. Implementations wrap a real output
/// device; tests use an in-memory fake.
pub trait AudioBackend {
    fn state(&self) -> ContextState;
    /// Asks a suspended context to start. Completion is observed later
    /// through [`AudioBackend::state`]; the call itself must not block.
    fn resume(&mut self);
    /// Whether a track was loaded at startup.
    fn has_track(&self) -> bool;
    fn is_playing(&self) -> bool;
    /// Starts looping playback from the current position.
    fn begin_loop(&mut self);
    /// Pauses playback, keeping the position for the next `begin_loop`.
    fn pause(&mut self);
}

/// Drives the toggle command against the backend.
///
/// A toggle on a running context applies immediately. On a suspended
/// context, resumption is requested and the toggle is parked until
/// [`MusicController::poll`] observes the context running; the draw loop
/// never waits on it. If resumption never completes, the music simply never
/// toggles.
pub struct MusicController {
    backend: Box<dyn AudioBackend>,
    pending_toggle: bool,
}

impl MusicController {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            pending_toggle: false,
        }
    }

    /// Handles the toggle key.
    pub fn request_toggle(&mut self) {
        match self.backend.state() {
            ContextState::Running => self.toggle(),
            ContextState::Suspended => {
                self.backend.resume();
                self.pending_toggle = true;
            }
        }
    }

    /// Runs a parked toggle once the context has come up. Called between
    /// ticks.
    pub fn poll(&mut self) {
        if self.pending_toggle && self.backend.state() == ContextState::Running {
            self.pending_toggle = false;
            self.toggle();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.backend.is_playing()
    }

    fn toggle(&mut self) {
        if !self.backend.has_track() {
            return;
        }
        if self.backend.is_playing() {
            self.backend.pause();
        } else {
            self.backend.begin_loop();
        }
    }
}

impl std::fmt::Debug for MusicController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicController")
            .field("pending_toggle", &self.pending_toggle)
            .finish()
    }
}

/// Trackless backend used when no music asset was found. Always running,
/// never playing; every toggle is a silent no-op.
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn state(&self) -> ContextState {
        ContextState::Running
    }

    fn resume(&mut self) {}

    fn has_track(&self) -> bool {
        false
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn begin_loop(&mut self) {}

    fn pause(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    /// Backend fake whose context state is flipped by the test, standing in
    /// for the platform confirming an asynchronous resume.
    struct FakeBackend {
        state: Rc<Cell<ContextState>>,
        resume_requests: Rc<Cell<u32>>,
        has_track: bool,
        playing: bool,
    }

    fn fake(initial: ContextState) -> (Box<FakeBackend>, Rc<Cell<ContextState>>, Rc<Cell<u32>>) {
        let state = Rc::new(Cell::new(initial));
        let resumes = Rc::new(Cell::new(0));
        let backend = Box::new(FakeBackend {
            state: state.clone(),
            resume_requests: resumes.clone(),
            has_track: true,
            playing: false,
        });
        (backend, state, resumes)
    }

    impl AudioBackend for FakeBackend {
        fn state(&self) -> ContextState {
            self.state.get()
        }

        fn resume(&mut self) {
            self.resume_requests.set(self.resume_requests.get() + 1);
        }

        fn has_track(&self) -> bool {
            self.has_track
        }

        fn is_playing(&self) -> bool {
            self.playing
        }

        fn begin_loop(&mut self) {
            self.playing = true;
        }

        fn pause(&mut self) {
            self.playing = false;
        }
    }

    #[test]
    fn toggle_starts_then_stops_playback() {
        let (backend, _, _) = fake(ContextState::Running);
        let mut music = MusicController::new(backend);

        music.request_toggle();
        assert!(music.is_playing());
        music.request_toggle();
        assert!(!music.is_playing());
    }

    #[test]
    fn double_toggle_restores_the_original_state() {
        let (backend, _, _) = fake(ContextState::Running);
        let mut music = MusicController::new(backend);

        music.request_toggle();
        let playing_before = music.is_playing();
        music.request_toggle();
        music.request_toggle();
        assert_eq!(music.is_playing(), playing_before);
    }

    #[test]
    fn suspended_context_defers_the_toggle_until_resumed() {
        let (backend, state, resumes) = fake(ContextState::Suspended);
        let mut music = MusicController::new(backend);

        music.request_toggle();
        assert_eq!(resumes.get(), 1, "resume should have been requested");
        assert!(!music.is_playing(), "toggle must wait for the context");

        // Polling while still suspended does nothing.
        music.poll();
        assert!(!music.is_playing());

        // The platform confirms the resume; the parked toggle fires once.
        state.set(ContextState::Running);
        music.poll();
        assert!(music.is_playing());
        music.poll();
        assert!(music.is_playing(), "the continuation must not re-fire");
    }

    #[test]
    fn toggle_without_a_track_is_a_no_op() {
        let (mut backend, _, _) = fake(ContextState::Running);
        backend.has_track = false;
        let mut music = MusicController::new(backend);

        music.request_toggle();
        assert!(!music.is_playing());
    }

    #[test]
    fn silent_backend_swallows_toggles() {
        let mut music = MusicController::new(Box::new(SilentBackend));
        music.request_toggle();
        music.poll();
        assert!(!music.is_playing());
    }
}
