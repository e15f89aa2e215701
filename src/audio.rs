//! Per-arc key playback
//!
//! Each arc owns one playable key handle, addressed by index. A strike
//! rewinds the key and restarts it, cutting off any in-progress playback of
//! that same key. Playback failures (missing asset, autoplay policy) are
//! dropped: a missed cue is indistinguishable from normal operation.

#[cfg(target_arch = "wasm32")]
use web_sys::HtmlAudioElement;

/// Relative asset path of the key sound for `index`
pub fn key_source(index: usize) -> String {
    format!("sounds/key-wave-{index}.wav")
}

/// One audio handle per arc
#[cfg(target_arch = "wasm32")]
pub struct KeyBank {
    keys: Vec<Option<HtmlAudioElement>>,
}

#[cfg(target_arch = "wasm32")]
impl KeyBank {
    /// Create a handle per arc at the given volume
    ///
    /// An arc whose handle fails to create stays silent; the rest of the
    /// bank keeps playing.
    pub fn load(count: usize, volume: f32) -> Self {
        let keys = (0..count)
            .map(|index| {
                let key = HtmlAudioElement::new_with_src(&key_source(index)).ok();
                if key.is_none() {
                    log::warn!("Failed to create key {index} - arc stays silent");
                }
                key
            })
            .collect();

        let bank = Self { keys };
        bank.set_volume(volume);
        bank
    }

    /// Apply a clamped volume to every key
    pub fn set_volume(&self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0) as f64;
        for key in self.keys.iter().flatten() {
            key.set_volume(volume);
        }
    }

    /// Rewind and restart the key for `index`, interrupting it mid-play
    pub fn strike(&self, index: usize) {
        let Some(Some(key)) = self.keys.get(index) else {
            return;
        };
        key.set_current_time(0.0);
        let _ = key.play();
    }
}
