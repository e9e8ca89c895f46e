//! Seam between the player and the platform audio primitive.
//!
//! Engines accept fire-and-forget requests. Outcomes (started, paused,
//! metadata, failures) come back later as [`MediaEvent`](super::MediaEvent)s.

pub trait MediaEngine {
    /// Source last assigned through [`MediaEngine::load`].
    fn source(&self) -> Option<&str>;

    fn load(&mut self, src: &str);

    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Track duration in seconds; NaN until metadata has loaded.
    fn duration(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    fn set_volume(&mut self, level: f64);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::MediaEngine;

    #[derive(Debug, Clone, PartialEq)]
    pub enum EngineCall {
        Load(String),
        Play,
        Pause,
        Seek(f64),
        Volume(f64),
    }

    /// Records every request; behaves like an element that loads instantly.
    #[derive(Debug)]
    pub struct RecordingEngine {
        pub calls: Vec<EngineCall>,
        pub source: Option<String>,
        pub paused: bool,
        pub duration: f64,
    }

    impl Default for RecordingEngine {
        fn default() -> Self {
            Self {
                calls: Vec::new(),
                source: None,
                paused: true,
                duration: f64::NAN,
            }
        }
    }

    impl RecordingEngine {
        pub fn count(&self, call: &EngineCall) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }

        pub fn loads(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, EngineCall::Load(_)))
                .count()
        }
    }

    impl MediaEngine for RecordingEngine {
        fn source(&self) -> Option<&str> {
            self.source.as_deref()
        }

        fn load(&mut self, src: &str) {
            self.calls.push(EngineCall::Load(src.to_string()));
            self.source = Some(src.to_string());
        }

        fn play(&mut self) {
            self.calls.push(EngineCall::Play);
            if self.source.is_some() {
                self.paused = false;
            }
        }

        fn pause(&mut self) {
            self.calls.push(EngineCall::Pause);
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.calls.push(EngineCall::Seek(seconds));
        }

        fn set_volume(&mut self, level: f64) {
            self.calls.push(EngineCall::Volume(level));
        }
    }
}
