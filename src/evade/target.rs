use crate::config::{CardConfig, ConfigError, PointerMode};

use super::controller::{EvasionController, Relocation, RenderPosition};
use super::geometry::{PointerSample, TargetRect, ViewportBounds};
use super::random::RandomSource;
use super::taps::TapCounter;

/// Which interaction model a target uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Continuous pointer, target jumps away
    Pointer,
    /// Touch-primary, target counts taps then gives up
    Touch,
}

/// Everything a target may need to react to an input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetContext {
    pub pointer: PointerSample,
    pub rect: Option<TargetRect>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TargetResponse {
    Unchanged,
    Moved(RenderPosition),
    Relabeled { label: String, exhausted: bool },
}

/// The "No" button's behaviour, independent of how the host renders it
pub trait EvasiveTarget: Send + Sync {
    fn kind(&self) -> TargetKind;

    /// Press/tap on the target
    fn activate(&mut self, ctx: TargetContext) -> TargetResponse;

    /// Pointer moved somewhere on screen
    fn pointer_moved(&mut self, ctx: TargetContext) -> TargetResponse;

    fn set_viewport(&mut self, viewport: ViewportBounds);

    fn render_position(&self) -> RenderPosition;

    fn label(&self) -> &str;

    fn is_hidden(&self) -> bool;

    fn opacity(&self) -> f32;
}

fn moved(relocation: Relocation) -> TargetResponse {
    log::trace!(
        "{:?} relocation, new center ({:.1}, {:.1})",
        relocation.strategy,
        relocation.center.x,
        relocation.center.y
    );
    TargetResponse::Moved(RenderPosition::Fixed(relocation.position))
}

/// Desktop target: a jumping button with a fixed label
pub struct PointerTarget {
    controller: EvasionController,
    label: String,
}

impl PointerTarget {
    pub fn new(controller: EvasionController, label: impl Into<String>) -> Self {
        Self {
            controller,
            label: label.into(),
        }
    }
}

impl EvasiveTarget for PointerTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Pointer
    }

    fn activate(&mut self, ctx: TargetContext) -> TargetResponse {
        self.controller
            .arm(ctx.pointer, ctx.rect)
            .map_or(TargetResponse::Unchanged, moved)
    }

    fn pointer_moved(&mut self, ctx: TargetContext) -> TargetResponse {
        self.controller
            .on_proximity_tick(ctx.pointer, ctx.rect)
            .map_or(TargetResponse::Unchanged, moved)
    }

    fn set_viewport(&mut self, viewport: ViewportBounds) {
        self.controller.set_viewport(viewport);
    }

    fn render_position(&self) -> RenderPosition {
        self.controller.render_position()
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn is_hidden(&self) -> bool {
        false
    }

    fn opacity(&self) -> f32 {
        1.0
    }
}

/// Touch target: never moves, relabels on every tap
pub struct TouchTarget {
    counter: TapCounter,
}

impl TouchTarget {
    pub fn new(counter: TapCounter) -> Self {
        Self { counter }
    }
}

impl EvasiveTarget for TouchTarget {
    fn kind(&self) -> TargetKind {
        TargetKind::Touch
    }

    fn activate(&mut self, _ctx: TargetContext) -> TargetResponse {
        if self.counter.is_exhausted() {
            return TargetResponse::Unchanged;
        }
        let outcome = self.counter.register_tap();
        TargetResponse::Relabeled {
            label: self.counter.current_label().to_string(),
            exhausted: outcome.exhausted,
        }
    }

    fn pointer_moved(&mut self, _ctx: TargetContext) -> TargetResponse {
        TargetResponse::Unchanged
    }

    fn set_viewport(&mut self, _viewport: ViewportBounds) {}

    fn render_position(&self) -> RenderPosition {
        RenderPosition::Natural
    }

    fn label(&self) -> &str {
        self.counter.current_label()
    }

    fn is_hidden(&self) -> bool {
        self.counter.is_exhausted()
    }

    fn opacity(&self) -> f32 {
        if self.counter.is_exhausted() {
            0.0
        } else if self.counter.is_final_warning() {
            0.3
        } else {
            0.7
        }
    }
}

/// Answers "is the primary input a coarse pointer?"
pub trait CapabilityProbe {
    fn is_coarse_pointer(&self) -> bool;
}

/// Probe honouring the configured pointer mode, falling back to the platform
#[derive(Debug, Clone, Copy)]
pub struct PlatformProbe {
    pub mode: PointerMode,
}

impl CapabilityProbe for PlatformProbe {
    fn is_coarse_pointer(&self) -> bool {
        match self.mode {
            PointerMode::Fine => false,
            PointerMode::Coarse => true,
            PointerMode::Auto => platform_is_coarse(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_is_coarse() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let coarse = window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let has_touch = js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false);
    coarse || has_touch
}

#[cfg(all(not(target_arch = "wasm32"), any(target_os = "android", target_os = "ios")))]
fn platform_is_coarse() -> bool {
    true
}

#[cfg(all(not(target_arch = "wasm32"), not(any(target_os = "android", target_os = "ios"))))]
fn platform_is_coarse() -> bool {
    false
}

/// Pick the target variant once, up front
pub fn select_target(
    probe: &dyn CapabilityProbe,
    config: &CardConfig,
    viewport: ViewportBounds,
    rng: impl RandomSource + Send + Sync + 'static,
) -> Result<Box<dyn EvasiveTarget>, ConfigError> {
    let label = config
        .tap_labels
        .first()
        .cloned()
        .ok_or(ConfigError::EmptyTapLabels)?;

    if probe.is_coarse_pointer() {
        let counter = TapCounter::new(config.tap_labels.clone())?
            .with_exhaustion_callback(|| log::info!("the evasive button gave up"));
        Ok(Box::new(TouchTarget::new(counter)))
    } else {
        let controller = EvasionController::new(config.detection_geometry(), viewport, rng);
        Ok(Box::new(PointerTarget::new(controller, label)))
    }
}
