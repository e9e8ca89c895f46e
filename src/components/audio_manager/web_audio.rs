// Browser audio engine backed by a single `<audio>` element.
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlAudioElement};

use super::ControllerSignal;
use crate::player::{MediaEngine, MediaError, MediaEvent};

const AUDIO_ELEMENT_ID: &str = "playdeck-audio";

const MEDIA_EVENTS: [&str; 6] = ["play", "pause", "timeupdate", "loadedmetadata", "ended", "error"];

type Dispatch = Rc<dyn Fn(MediaEvent)>;

pub struct PlatformAudio {
    audio: Option<HtmlAudioElement>,
    source: Option<String>,
    dispatch: Rc<RefCell<Option<Dispatch>>>,
}

impl PlatformAudio {
    pub fn new() -> Self {
        let audio = get_or_create_audio_element();
        if audio.is_none() {
            warn!("could not create the audio element; playback is disabled");
        }
        Self {
            audio,
            source: None,
            dispatch: Rc::default(),
        }
    }

    fn element(&self) -> Option<HtmlAudioElement> {
        self.audio.clone()
    }

    /// Route asynchronous failures (rejected play promises) into the event stream.
    fn set_dispatch(&self, dispatch: Dispatch) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }
}

impl MediaEngine for PlatformAudio {
    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn load(&mut self, src: &str) {
        if let Some(audio) = &self.audio {
            audio.set_src(src);
        }
        self.source = Some(src.to_string());
    }

    fn play(&mut self) {
        let Some(audio) = &self.audio else {
            return;
        };
        match audio.play() {
            Ok(promise) => {
                let dispatch = self.dispatch.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let Err(err) = JsFuture::from(promise).await else {
                        return;
                    };
                    let Some(error) = play_rejection(&err) else {
                        return;
                    };
                    let handler = dispatch.borrow().clone();
                    if let Some(handler) = handler {
                        handler(MediaEvent::Error(error));
                    }
                });
            }
            Err(err) => warn!("audio.play() threw: {err:?}"),
        }
    }

    fn pause(&mut self) {
        if let Some(audio) = &self.audio {
            if let Err(err) = audio.pause() {
                warn!("audio.pause() threw: {err:?}");
            }
        }
    }

    fn is_paused(&self) -> bool {
        self.audio.as_ref().map(|a| a.paused()).unwrap_or(true)
    }

    fn duration(&self) -> f64 {
        self.audio.as_ref().map(|a| a.duration()).unwrap_or(f64::NAN)
    }

    fn set_current_time(&mut self, seconds: f64) {
        if let Some(audio) = &self.audio {
            audio.set_current_time(seconds);
        }
    }

    fn set_volume(&mut self, level: f64) {
        if let Some(audio) = &self.audio {
            audio.set_volume(level);
        }
    }
}

/// Initialize the global audio element once.
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_cross_origin(Some("anonymous"));
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// Interrupted plays (a new source or a pause) reject with `AbortError`;
/// those are expected and dropped.
fn play_rejection(err: &JsValue) -> Option<MediaError> {
    let field = |key: &str| {
        js_sys::Reflect::get(err, &key.into())
            .ok()
            .and_then(|value| value.as_string())
    };
    let name = field("name").unwrap_or_default();
    if name == "AbortError" {
        debug!("play request superseded");
        return None;
    }
    let message = field("message")
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| if name.is_empty() { "unknown error".to_string() } else { name });
    Some(MediaError::PlayRejected(message))
}

fn media_event(name: &str, audio: &HtmlAudioElement) -> Option<MediaEvent> {
    let event = match name {
        "play" => MediaEvent::Play,
        "pause" => MediaEvent::Pause,
        "timeupdate" => MediaEvent::TimeUpdate {
            current_time: audio.current_time(),
            duration: audio.duration(),
        },
        "loadedmetadata" => MediaEvent::LoadedMetadata {
            duration: audio.duration(),
        },
        "ended" => MediaEvent::Ended,
        "error" => {
            let code = audio.error().map(|err| err.code()).unwrap_or(0);
            MediaEvent::Error(MediaError::from_code(code))
        }
        _ => return None,
    };
    Some(event)
}

/// Defer controller writes to the next tick so DOM callbacks never overlap a
/// borrow held by an event handler.
fn event_dispatcher(controller: ControllerSignal) -> Dispatch {
    let runtime = Runtime::current();
    Rc::new(move |event: MediaEvent| {
        let runtime = runtime.clone();
        let mut controller = controller.0;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            let _guard = RuntimeGuard::new(runtime);
            controller.write().handle_media_event(event);
        });
    })
}

fn attach_media_listeners(controller: ControllerSignal) {
    let dispatch = event_dispatcher(controller);
    let audio = {
        let player = controller.0.peek();
        player.engine().set_dispatch(dispatch.clone());
        player.engine().element()
    };
    let Some(audio) = audio else {
        return;
    };

    for name in MEDIA_EVENTS {
        let element = audio.clone();
        let dispatch = dispatch.clone();
        let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(event) = media_event(name, &element) {
                dispatch(event);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        if let Err(err) =
            audio.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
        {
            warn!("failed to listen for {name}: {err:?}");
        }
        callback.forget();
    }
    debug!("media listeners attached");
}

/// Wires the audio element's callbacks into the controller. Renders nothing.
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<ControllerSignal>();
    use_hook(move || attach_media_listeners(controller));

    rsx! {}
}
