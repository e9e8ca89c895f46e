// Desktop-webview audio engine: a JavaScript bridge driven through `eval`,
// polled into the same media event stream the browser build listens to.
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::debug;

use super::ControllerSignal;
use crate::player::{MediaEngine, MediaError, MediaEvent};

const POLL_INTERVAL_MS: u64 = 250;

const BRIDGE_BOOTSTRAP_JS: &str = r#"
(() => {
  if (window.__playdeckAudioBridge) {
    return true;
  }

  const audio = document.createElement("audio");
  audio.id = "playdeck-audio-native";
  audio.crossOrigin = "anonymous";
  audio.preload = "metadata";
  audio.style.display = "none";
  document.body.appendChild(audio);

  let rejection = null;

  const safePlay = async () => {
    try {
      await audio.play();
    } catch (err) {
      if (!err || err.name !== "AbortError") {
        rejection = (err && (err.message || err.name)) || "unknown error";
      }
    }
  };

  window.__playdeckAudioBridge = {
    apply(cmd) {
      switch (cmd.type) {
        case "load":
          audio.src = cmd.src;
          break;
        case "play":
          safePlay();
          break;
        case "pause":
          audio.pause();
          break;
        case "seek":
          audio.currentTime = cmd.position;
          break;
        case "volume":
          audio.volume = cmd.level;
          break;
      }
    },
    snapshot() {
      const taken = rejection;
      rejection = null;
      return {
        current_time: audio.currentTime || 0,
        duration: Number.isFinite(audio.duration) ? audio.duration : null,
        paused: audio.paused,
        ended: audio.ended,
        error_code: audio.error ? audio.error.code : null,
        rejection: taken,
      };
    },
  };
  return true;
})();
"#;

/// State reported by the bridge on each poll.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct BridgeSnapshot {
    #[serde(default)]
    pub current_time: f64,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default = "default_paused")]
    pub paused: bool,
    #[serde(default)]
    pub ended: bool,
    #[serde(default)]
    pub error_code: Option<u16>,
    #[serde(default)]
    pub rejection: Option<String>,
}

fn default_paused() -> bool {
    true
}

impl Default for BridgeSnapshot {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: None,
            paused: true,
            ended: false,
            error_code: None,
            rejection: None,
        }
    }
}

/// Translate the difference between two polls into media callbacks, in the
/// order the element would have fired them.
pub(crate) fn snapshot_events(prev: &BridgeSnapshot, next: &BridgeSnapshot) -> Vec<MediaEvent> {
    let mut events = Vec::new();

    if next.duration != prev.duration {
        if let Some(duration) = next.duration {
            events.push(MediaEvent::LoadedMetadata { duration });
        }
    }
    if prev.paused && !next.paused {
        events.push(MediaEvent::Play);
    }
    if next.current_time != prev.current_time {
        events.push(MediaEvent::TimeUpdate {
            current_time: next.current_time,
            duration: next.duration.unwrap_or(f64::NAN),
        });
    }
    if !prev.paused && next.paused {
        events.push(MediaEvent::Pause);
    }
    if next.ended && !prev.ended {
        events.push(MediaEvent::Ended);
    }
    if next.error_code != prev.error_code {
        if let Some(code) = next.error_code {
            events.push(MediaEvent::Error(MediaError::from_code(code)));
        }
    }
    if let Some(message) = &next.rejection {
        events.push(MediaEvent::Error(MediaError::PlayRejected(message.clone())));
    }

    events
}

pub struct PlatformAudio {
    source: Option<String>,
    paused: bool,
    duration: Option<f64>,
}

impl PlatformAudio {
    pub fn new() -> Self {
        Self {
            source: None,
            paused: true,
            duration: None,
        }
    }

    fn is_synced_with(&self, snapshot: &BridgeSnapshot) -> bool {
        self.paused == snapshot.paused && self.duration == snapshot.duration
    }

    fn sync(&mut self, snapshot: &BridgeSnapshot) {
        self.paused = snapshot.paused;
        self.duration = snapshot.duration;
    }
}

fn ensure_bridge() {
    let _ = document::eval(BRIDGE_BOOTSTRAP_JS);
}

fn bridge_command(value: serde_json::Value) {
    ensure_bridge();
    let payload = serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string());
    let script = format!(
        r#"(function () {{
            const bridge = window.__playdeckAudioBridge;
            if (!bridge) return false;
            bridge.apply({payload});
            return true;
        }})();"#
    );
    let _ = document::eval(&script);
}

async fn bridge_snapshot() -> Option<BridgeSnapshot> {
    ensure_bridge();
    let eval = document::eval(
        r#"return (function () {
            const bridge = window.__playdeckAudioBridge;
            return bridge ? bridge.snapshot() : null;
        })();"#,
    );
    eval.join::<Option<BridgeSnapshot>>().await.ok().flatten()
}

async fn bridge_delay_ms(ms: u64) {
    let script = format!(
        r#"return (async function () {{
            await new Promise(resolve => setTimeout(resolve, {ms}));
            return true;
        }})();"#
    );
    let _ = document::eval(&script).await;
}

impl MediaEngine for PlatformAudio {
    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn load(&mut self, src: &str) {
        bridge_command(serde_json::json!({ "type": "load", "src": src }));
        self.source = Some(src.to_string());
    }

    fn play(&mut self) {
        bridge_command(serde_json::json!({ "type": "play" }));
        self.paused = false;
    }

    fn pause(&mut self) {
        bridge_command(serde_json::json!({ "type": "pause" }));
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn duration(&self) -> f64 {
        self.duration.unwrap_or(f64::NAN)
    }

    fn set_current_time(&mut self, seconds: f64) {
        bridge_command(serde_json::json!({ "type": "seek", "position": seconds }));
    }

    fn set_volume(&mut self, level: f64) {
        bridge_command(serde_json::json!({ "type": "volume", "level": level }));
    }
}

async fn poll_bridge(controller: ControllerSignal) {
    let mut controller = controller.0;
    let mut previous = BridgeSnapshot::default();
    loop {
        bridge_delay_ms(POLL_INTERVAL_MS).await;
        let Some(snapshot) = bridge_snapshot().await else {
            continue;
        };
        let events = snapshot_events(&previous, &snapshot);
        if !events.is_empty() || !controller.peek().engine().is_synced_with(&snapshot) {
            let mut player = controller.write();
            player.engine_mut().sync(&snapshot);
            for event in events {
                player.handle_media_event(event);
            }
        }
        previous = snapshot;
    }
}

/// Starts the bridge polling loop. Renders nothing.
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<ControllerSignal>();
    use_hook(move || {
        debug!("starting audio bridge polling");
        spawn(poll_bridge(controller));
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(at: f64) -> BridgeSnapshot {
        BridgeSnapshot {
            current_time: at,
            duration: Some(180.0),
            paused: false,
            ..BridgeSnapshot::default()
        }
    }

    #[test]
    fn start_of_playback_reports_metadata_then_play() {
        let events = snapshot_events(&BridgeSnapshot::default(), &playing(0.4));
        assert_eq!(
            events,
            vec![
                MediaEvent::LoadedMetadata { duration: 180.0 },
                MediaEvent::Play,
                MediaEvent::TimeUpdate {
                    current_time: 0.4,
                    duration: 180.0
                },
            ]
        );
    }

    #[test]
    fn steady_state_produces_nothing() {
        assert!(snapshot_events(&playing(3.0), &playing(3.0)).is_empty());
    }

    #[test]
    fn pause_and_end_are_reported_once() {
        let mut ended = playing(180.0);
        ended.paused = true;
        ended.ended = true;
        let events = snapshot_events(&playing(179.8), &ended);
        assert!(events.contains(&MediaEvent::Pause));
        assert!(events.contains(&MediaEvent::Ended));
        assert!(snapshot_events(&ended, &ended).is_empty());
    }

    #[test]
    fn failures_become_error_events() {
        let mut failed = BridgeSnapshot::default();
        failed.error_code = Some(4);
        failed.rejection = Some("NotAllowedError".to_string());
        let events = snapshot_events(&BridgeSnapshot::default(), &failed);
        assert_eq!(
            events,
            vec![
                MediaEvent::Error(MediaError::SourceNotSupported),
                MediaEvent::Error(MediaError::PlayRejected("NotAllowedError".to_string())),
            ]
        );
    }

    #[test]
    fn snapshot_parses_bridge_json() {
        let snapshot: BridgeSnapshot = serde_json::from_str(
            r#"{"current_time":1.5,"duration":null,"paused":false,"ended":false,"error_code":null,"rejection":null}"#,
        )
        .expect("snapshot");
        assert_eq!(snapshot.duration, None);
        assert!(!snapshot.paused);
    }

    #[test]
    fn engine_tracks_synced_state() {
        let mut engine = PlatformAudio::new();
        assert!(engine.duration().is_nan());
        let snapshot = playing(1.0);
        assert!(!engine.is_synced_with(&snapshot));
        engine.sync(&snapshot);
        assert!(engine.is_synced_with(&snapshot));
        assert_eq!(engine.duration(), 180.0);
        assert!(!engine.is_paused());
    }
}
