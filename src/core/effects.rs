// Side-effect requests dispatched to platform collaborators.

/// Fire-and-forget alert actions. Implementations must not block; the engine
/// never awaits them.
pub trait AlertEffects {
    fn vibrate(&mut self, duration_ms: i32);
    fn play_sound(&mut self, uri: &str);
    fn show_notification(&mut self, text: &str);
    fn clear_notification(&mut self);
}

/// No-op sink for hosts without signaling hardware.
impl AlertEffects for () {
    fn vibrate(&mut self, _duration_ms: i32) {}
    fn play_sound(&mut self, _uri: &str) {}
    fn show_notification(&mut self, _text: &str) {}
    fn clear_notification(&mut self) {}
}
