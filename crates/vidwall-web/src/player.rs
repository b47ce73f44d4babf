//! YouTube IFrame API player backend
//!
//! The page script renders each card's `<iframe>` (id from [`player_element_id`],
//! src from `ContentRef::embed_url`). A `YT.Player` is attached to it lazily,
//! once both the iframe and the IFrame API script are present, so cards can be
//! created before either has loaded.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vidwall_board::{CardId, ContentRef, PlaybackState, PlayerBackend, PlayerError, PlayerHandle, Size};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// DOM id of the iframe hosting a card's player
pub fn player_element_id(card: CardId) -> String {
    format!("vidwall-player-{}", card)
}

/// Map `YT.PlayerState` codes
fn playback_state(code: i32) -> PlaybackState {
    match code {
        0 => PlaybackState::Ended,
        1 => PlaybackState::Playing,
        2 => PlaybackState::Paused,
        3 => PlaybackState::Buffering,
        5 => PlaybackState::Cued,
        _ => PlaybackState::Unstarted,
    }
}

fn backend_error(e: JsValue) -> PlayerError {
    PlayerError::Backend(format!("{:?}", e))
}

/// Creates one [`YouTubePlayer`] per card
#[derive(Default)]
pub struct YouTubeBackend;

impl PlayerBackend for YouTubeBackend {
    fn instantiate(
        &mut self,
        card: CardId,
        content: &ContentRef,
        _size: Size,
    ) -> Result<Box<dyn PlayerHandle>, PlayerError> {
        log::debug!("player for card {} ({}) pending attach", card, content);
        Ok(Box::new(YouTubePlayer::new(player_element_id(card))))
    }
}

/// Handle to a `YT.Player` bound to a card's iframe
pub struct YouTubePlayer {
    element_id: String,
    player: RefCell<Option<JsValue>>,
    ready: Rc<Cell<bool>>,
    on_ready: RefCell<Option<Closure<dyn FnMut(JsValue)>>>,
    destroyed: bool,
}

impl YouTubePlayer {
    fn new(element_id: String) -> Self {
        Self {
            element_id,
            player: RefCell::new(None),
            ready: Rc::new(Cell::new(false)),
            on_ready: RefCell::new(None),
            destroyed: false,
        }
    }

    /// Construct the `YT.Player` if the API and the iframe are both available
    fn try_attach(&self) -> Result<(), PlayerError> {
        if self.player.borrow().is_some() {
            return Ok(());
        }

        let window = web_sys::window().ok_or(PlayerError::NotReady)?;
        let element_present = window
            .document()
            .and_then(|d| d.get_element_by_id(&self.element_id))
            .is_some();
        if !element_present {
            return Err(PlayerError::NotReady);
        }

        let yt = js_sys::Reflect::get(&window, &"YT".into()).map_err(backend_error)?;
        if yt.is_undefined() {
            return Err(PlayerError::NotReady);
        }
        let constructor = js_sys::Reflect::get(&yt, &"Player".into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(PlayerError::NotReady)?;

        let ready = self.ready.clone();
        let on_ready = Closure::wrap(Box::new(move |_event: JsValue| {
            ready.set(true);
        }) as Box<dyn FnMut(JsValue)>);

        let events = js_sys::Object::new();
        js_sys::Reflect::set(&events, &"onReady".into(), on_ready.as_ref()).map_err(backend_error)?;
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"events".into(), &events).map_err(backend_error)?;

        let player = js_sys::Reflect::construct(
            &constructor,
            &js_sys::Array::of2(&JsValue::from_str(&self.element_id), &options),
        )
        .map_err(backend_error)?;

        *self.player.borrow_mut() = Some(player);
        *self.on_ready.borrow_mut() = Some(on_ready);
        log::debug!("attached player to #{}", self.element_id);
        Ok(())
    }

    /// Call a method on the attached player
    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, PlayerError> {
        if self.destroyed {
            return Err(PlayerError::Destroyed);
        }
        let player = self.player.borrow();
        let player = player.as_ref().ok_or(PlayerError::NotReady)?;
        let function = js_sys::Reflect::get(player, &method.into())
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| PlayerError::Backend(format!("player has no {}()", method)))?;

        let array = js_sys::Array::new();
        for arg in args {
            array.push(arg);
        }
        js_sys::Reflect::apply(&function, player, &array).map_err(backend_error)
    }

    fn call_f64(&self, method: &str) -> Result<f64, PlayerError> {
        self.call(method, &[])?
            .as_f64()
            .ok_or_else(|| PlayerError::Backend(format!("{}() returned no number", method)))
    }
}

impl PlayerHandle for YouTubePlayer {
    fn is_ready(&self) -> bool {
        if self.destroyed {
            return false;
        }
        if let Err(e) = self.try_attach() {
            if e != PlayerError::NotReady {
                log::debug!("attaching #{} failed: {}", self.element_id, e);
            }
        }
        self.ready.get()
    }

    fn set_size(&mut self, size: Size) -> Result<(), PlayerError> {
        self.call("setSize", &[size.width.into(), size.height.into()]).map(|_| ())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.call("playVideo", &[]).map(|_| ())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.call("pauseVideo", &[]).map(|_| ())
    }

    fn state(&self) -> Result<PlaybackState, PlayerError> {
        self.call_f64("getPlayerState").map(|code| playback_state(code as i32))
    }

    fn seek_to(&mut self, seconds: f64) -> Result<(), PlayerError> {
        self.call("seekTo", &[seconds.into(), true.into()]).map(|_| ())
    }

    fn duration(&self) -> Result<f64, PlayerError> {
        self.call_f64("getDuration")
    }

    fn current_time(&self) -> Result<f64, PlayerError> {
        self.call_f64("getCurrentTime")
    }

    fn buffered_fraction(&self) -> Result<f64, PlayerError> {
        self.call_f64("getVideoLoadedFraction")
    }

    fn set_volume(&mut self, volume: u8) -> Result<(), PlayerError> {
        self.call("setVolume", &[(volume as u32).into()]).map(|_| ())
    }

    fn mute(&mut self) -> Result<(), PlayerError> {
        self.call("mute", &[]).map(|_| ())
    }

    fn unmute(&mut self) -> Result<(), PlayerError> {
        self.call("unMute", &[]).map(|_| ())
    }

    fn is_muted(&self) -> Result<bool, PlayerError> {
        self.call("isMuted", &[])?
            .as_bool()
            .ok_or_else(|| PlayerError::Backend("isMuted() returned no boolean".to_string()))
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Err(e) = self.call("destroy", &[]) {
            log::debug!("destroying #{}: {}", self.element_id, e);
        }
        self.destroyed = true;
        self.ready.set(false);
        self.player.borrow_mut().take();
        self.on_ready.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_codes() {
        assert_eq!(playback_state(-1), PlaybackState::Unstarted);
        assert_eq!(playback_state(0), PlaybackState::Ended);
        assert_eq!(playback_state(1), PlaybackState::Playing);
        assert_eq!(playback_state(2), PlaybackState::Paused);
        assert_eq!(playback_state(3), PlaybackState::Buffering);
        assert_eq!(playback_state(5), PlaybackState::Cued);
    }

    #[test]
    fn test_element_id() {
        assert_eq!(player_element_id(12), "vidwall-player-12");
    }
}
