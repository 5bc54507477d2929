//! Shared test doubles.

use std::cell::RefCell;
use std::rc::Rc;

use certkit_editor::{Guide, Renderer};
use certkit_scene::Scene;

/// Renderer that records every notification for assertions.
#[derive(Default)]
pub struct RecordingRenderer {
    pub state: Rc<RefCell<RenderLog>>,
}

#[derive(Default)]
pub struct RenderLog {
    pub scene_updates: usize,
    pub guides: Vec<Guide>,
    pub guide_updates: usize,
}

impl RecordingRenderer {
    pub fn new() -> (Self, Rc<RefCell<RenderLog>>) {
        let renderer = Self::default();
        let log = Rc::clone(&renderer.state);
        (renderer, log)
    }
}

impl Renderer for RecordingRenderer {
    fn scene_changed(&mut self, _scene: &Scene) {
        self.state.borrow_mut().scene_updates += 1;
    }

    fn guides_changed(&mut self, guides: &[Guide]) {
        let mut state = self.state.borrow_mut();
        state.guides = guides.to_vec();
        state.guide_updates += 1;
    }
}
