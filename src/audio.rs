use crate::constants::{AUDIO_CLICK_URL, AUDIO_EXPLOSION_URL};
use crate::effect::{Clip, SoundPlayer};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn clip_url(clip: Clip) -> &'static str {
    match clip {
        Clip::Explosion => AUDIO_EXPLOSION_URL,
        Clip::Click => AUDIO_CLICK_URL,
    }
}

/// Plays clips through preloaded `<audio>` elements.
pub struct HtmlAudioPlayer {
    clips: Vec<(Clip, web::HtmlAudioElement)>,
}

impl HtmlAudioPlayer {
    pub fn new() -> anyhow::Result<Self> {
        let mut clips = Vec::with_capacity(Clip::ALL.len());
        for clip in Clip::ALL {
            let el = web::HtmlAudioElement::new_with_src(clip_url(clip))
                .map_err(|e| anyhow::anyhow!("{} audio element: {:?}", clip.name(), e))?;
            el.set_preload("auto");
            clips.push((clip, el));
        }
        Ok(Self { clips })
    }
}

impl SoundPlayer for HtmlAudioPlayer {
    fn play(&self, clip: Clip) {
        let Some((_, el)) = self.clips.iter().find(|(c, _)| *c == clip) else {
            return;
        };
        el.set_current_time(0.0);
        // Autoplay policies reject playback before the first user gesture
        match el.play() {
            Ok(promise) => spawn_local(settle(clip, promise)),
            Err(e) => log::warn!("[audio] play error: {} {:?}", clip.name(), e),
        }
    }
}

async fn settle(clip: Clip, promise: js_sys::Promise) {
    if let Err(e) = JsFuture::from(promise).await {
        log::warn!("[audio] playback blocked: {} {:?}", clip.name(), e);
    }
}
