//! Composite redraw pipeline.
//!
//! ARCHITECTURE
//! ============
//! Each redraw trigger starts a two-stage asynchronous load: background photo
//! first, then the logo from inside the background's completion callback, so
//! the two loads never race each other. Every trigger is stamped with a
//! monotonically increasing generation; completion callbacks carrying a stale
//! generation are discarded, guaranteeing last-triggered-wins rather than
//! last-completed-wins.
//!
//! The pure [`PipelineState`] is separated from the browser-bound
//! [`Compositor`] so the staleness rules can be tested without WASM.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

/// Where the current redraw cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelinePhase {
    /// No redraw scheduled.
    #[default]
    Idle,
    /// Waiting for the background photo to load.
    LoadingBackground,
    /// Background drawn; waiting for the logo asset.
    LoadingLogo,
    /// Both layers drawn. Terminal until the next trigger.
    Composited,
    /// An image failed to load; the canvas keeps its previous contents.
    LoadFailed,
}

/// Generation-stamped pipeline state.
#[derive(Debug, Clone, Default)]
pub struct PipelineState {
    generation: u64,
    phase: PipelinePhase,
}

impl PipelineState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new redraw cycle and return its generation token. Any cycle
    /// already in flight becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = PipelinePhase::LoadingBackground;
        self.generation
    }

    /// Whether `generation` is still the latest trigger.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Record a background load completion. Returns false for stale tokens.
    pub fn background_loaded(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = PipelinePhase::LoadingLogo;
        true
    }

    /// Record a logo load completion. Returns false for stale tokens.
    pub fn composited(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = PipelinePhase::Composited;
        true
    }

    /// Record a load failure. Stale failures are ignored so an abandoned
    /// cycle cannot clobber the state of a newer one.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = PipelinePhase::LoadFailed;
        true
    }

    #[must_use]
    pub fn phase(&self) -> PipelinePhase {
        self.phase
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{HtmlCanvasElement, HtmlImageElement};

    use super::PipelineState;
    use crate::anchor::LogoAnchor;
    use crate::render;

    /// The full compositor: wraps [`PipelineState`] and owns the offscreen
    /// canvas the composite is drawn to.
    pub struct Compositor {
        canvas: HtmlCanvasElement,
        state: Rc<RefCell<PipelineState>>,
    }

    impl Compositor {
        #[must_use]
        pub fn new(canvas: HtmlCanvasElement) -> Self {
            Self { canvas, state: Rc::new(RefCell::new(PipelineState::new())) }
        }

        #[must_use]
        pub fn canvas(&self) -> &HtmlCanvasElement {
            &self.canvas
        }

        #[must_use]
        pub fn state(&self) -> std::cell::Ref<'_, PipelineState> {
            self.state.borrow()
        }

        /// Trigger a full redraw: load the background photo, draw it at its
        /// natural pixel size, then load and draw the logo at `anchor`.
        ///
        /// Load failures are logged and leave the canvas unchanged; they never
        /// propagate past the load boundary. In-flight loads from earlier
        /// triggers are not cancelled, but their completions are discarded.
        pub fn redraw(&self, photo_url: &str, logo_url: &str, anchor: LogoAnchor) {
            let generation = self.state.borrow_mut().begin();

            let Ok(photo) = HtmlImageElement::new() else {
                log::error!("failed to create background image element");
                self.state.borrow_mut().fail(generation);
                return;
            };
            photo.set_cross_origin(Some("anonymous"));

            let state = Rc::clone(&self.state);
            let canvas = self.canvas.clone();
            let logo_url = logo_url.to_owned();
            let photo_for_draw = photo.clone();
            let onload = Closure::once_into_js(move || {
                if !state.borrow().is_current(generation) {
                    return;
                }
                if let Err(err) = render::draw_background(&canvas, &photo_for_draw) {
                    log::error!("failed to draw background: {err:?}");
                    state.borrow_mut().fail(generation);
                    return;
                }
                state.borrow_mut().background_loaded(generation);
                load_and_draw_logo(&state, &canvas, &logo_url, anchor, generation);
            });
            photo.set_onload(Some(onload.unchecked_ref()));

            let state = Rc::clone(&self.state);
            let onerror = Closure::once_into_js(move || {
                if state.borrow_mut().fail(generation) {
                    log::error!("failed to load restaurant photo");
                }
            });
            photo.set_onerror(Some(onerror.unchecked_ref()));

            photo.set_src(photo_url);
        }
    }

    fn load_and_draw_logo(
        state: &Rc<RefCell<PipelineState>>,
        canvas: &HtmlCanvasElement,
        logo_url: &str,
        anchor: LogoAnchor,
        generation: u64,
    ) {
        let Ok(logo) = HtmlImageElement::new() else {
            log::error!("failed to create logo image element");
            state.borrow_mut().fail(generation);
            return;
        };
        logo.set_cross_origin(Some("anonymous"));

        let state_load = Rc::clone(state);
        let canvas = canvas.clone();
        let logo_for_draw = logo.clone();
        let onload = Closure::once_into_js(move || {
            if !state_load.borrow().is_current(generation) {
                return;
            }
            match render::draw_logo(&canvas, &logo_for_draw, anchor) {
                Ok(()) => {
                    state_load.borrow_mut().composited(generation);
                }
                Err(err) => {
                    log::error!("failed to draw logo: {err:?}");
                    state_load.borrow_mut().fail(generation);
                }
            }
        });
        logo.set_onload(Some(onload.unchecked_ref()));

        let state_error = Rc::clone(state);
        let onerror = Closure::once_into_js(move || {
            if state_error.borrow_mut().fail(generation) {
                log::error!("failed to load logo asset");
            }
        });
        logo.set_onerror(Some(onerror.unchecked_ref()));

        logo.set_src(logo_url);
    }
}

pub use browser::Compositor;
