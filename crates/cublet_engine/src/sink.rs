use crate::Cublet;

/// Receiver for cube state updates, typically a renderer.
pub trait RenderSink {
    /// Called after every animation tick and once more when a move completes.
    fn on_state_changed(&mut self, cublets: &[Cublet]);
}

impl RenderSink for () {
    fn on_state_changed(&mut self, _cublets: &[Cublet]) {}
}

impl<F: FnMut(&[Cublet])> RenderSink for F {
    fn on_state_changed(&mut self, cublets: &[Cublet]) {
        self(cublets);
    }
}
