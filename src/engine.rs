//! Engine facade: load state, frame context, externally triggered mutators.
//!
//! The [`Engine`] ties the pieces together for a host application driving a
//! fixed-period scheduler (~33 ms ticks): it owns the resolved scene graph
//! once loading completes, the per-frame inputs ([`FrameContext`]), and the
//! internal frame clock. Until a document has loaded and resolved, a frame
//! renders only the background; the graph traversal is a no-op.
//!
//! Single-threaded and synchronous: nothing here suspends, blocks, or
//! locks. The only mutators callable from outside the frame loop are
//! [`Engine::toggle_material_switch`] (wired to an input handler) and
//! [`Engine::set_animation_clock`] (wired to an external clock, if the
//! internal [`Timer`] is not used).

use std::sync::Arc;

use log::info;

use crate::document::SceneDocument;
use crate::errors::Result;
use crate::render::{driver, FrameContext, Primitive, RenderBackend};
use crate::scene::SceneGraph;
use crate::utils::Timer;

/// The top-level frame-driven facade over the scene-graph core.
pub struct Engine {
    graph: Option<SceneGraph>,
    frame: FrameContext,
    timer: Timer,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: None,
            frame: FrameContext::default(),
            timer: Timer::new(),
        }
    }

    /// Builds and installs the scene graph from a parsed document and the
    /// primitive factory's output. On success the scene is ready and
    /// subsequent frames traverse it.
    pub fn load(
        &mut self,
        document: &SceneDocument,
        primitives: Vec<(String, Arc<dyn Primitive>)>,
    ) -> Result<()> {
        let graph = SceneGraph::build(document, primitives)?;
        info!("scene ready: root {:?}", document.root_id);
        self.graph = Some(graph);
        Ok(())
    }

    /// Whether a document has loaded and resolved.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.graph.is_some()
    }

    #[must_use]
    pub fn graph(&self) -> Option<&SceneGraph> {
        self.graph.as_ref()
    }

    #[must_use]
    pub fn frame_context(&self) -> &FrameContext {
        &self.frame
    }

    /// Advances the global material-switch index by one; every component
    /// with more than one declared material cycles in lockstep.
    pub fn toggle_material_switch(&mut self) {
        self.frame.material_switch = self.frame.material_switch.wrapping_add(1);
    }

    /// Sets the animation clock explicitly, for hosts that supply their
    /// own monotonic instant instead of calling [`Engine::tick`].
    pub fn set_animation_clock(&mut self, instant_ms: f64) {
        self.frame.current_instant_ms = instant_ms;
    }

    /// Advances the animation clock from the internal timer. Call once per
    /// scheduler tick.
    pub fn tick(&mut self) {
        self.timer.tick();
        self.frame.current_instant_ms = self.timer.elapsed_ms();
    }

    /// Renders one frame. Before the scene is ready this clears the frame
    /// with default globals and returns.
    pub fn render_frame(&mut self, backend: &mut dyn RenderBackend) {
        let Some(graph) = self.graph.as_mut() else {
            backend.begin_frame(&crate::document::SceneGlobals::default());
            backend.end_frame();
            return;
        };

        backend.begin_frame(graph.globals());
        driver::render_frame(graph, &self.frame, backend);
        backend.end_frame();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
