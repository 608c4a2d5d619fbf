// game/session.rs

use bevy::prelude::Resource;

use crate::evade::{EvasiveTarget, TargetContext, TargetResponse, ViewportBounds};

use super::celebration::CelebrationController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Asking the question; the "No" button is live
    Question,
    /// "Yes" was pressed; terminal
    Celebration,
}

/// One card instance - owns the evasive button and the confetti guard
#[derive(Resource)]
pub struct CardSession {
    phase: CardPhase,
    target: Box<dyn EvasiveTarget>,
    celebration: CelebrationController,
    gave_up: bool,
}

impl CardSession {
    pub fn new(target: Box<dyn EvasiveTarget>, celebration: CelebrationController) -> Self {
        CardSession {
            phase: CardPhase::Question,
            target,
            celebration,
            gave_up: false,
        }
    }

    // === Query Methods ===

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    pub fn target(&self) -> &dyn EvasiveTarget {
        self.target.as_ref()
    }

    pub fn celebration(&self) -> &CelebrationController {
        &self.celebration
    }

    /// Did the touch button run out of labels?
    pub fn gave_up(&self) -> bool {
        self.gave_up
    }

    // === Mutation Methods ===

    /// Press on the "No" button
    pub fn press_target(&mut self, ctx: TargetContext) -> TargetResponse {
        if self.phase != CardPhase::Question {
            return TargetResponse::Unchanged;
        }
        let response = self.target.activate(ctx);
        if let TargetResponse::Relabeled { exhausted: true, .. } = response {
            self.gave_up = true;
        }
        response
    }

    /// Pointer moved while the question is showing
    pub fn pointer_moved(&mut self, ctx: TargetContext) -> TargetResponse {
        if self.phase != CardPhase::Question {
            return TargetResponse::Unchanged;
        }
        self.target.pointer_moved(ctx)
    }

    pub fn set_viewport(&mut self, viewport: ViewportBounds) {
        self.target.set_viewport(viewport);
    }

    /// Press on "Yes"; only the first call does anything
    pub fn accept(&mut self, now: f32) -> bool {
        if self.phase == CardPhase::Celebration {
            return false;
        }
        self.phase = CardPhase::Celebration;
        self.celebration.fire(now);
        true
    }

    /// "Once More" - refire unless a run is still going
    pub fn replay(&mut self, now: f32) -> bool {
        self.phase == CardPhase::Celebration && self.celebration.fire(now)
    }

    pub fn celebration_mut(&mut self) -> &mut CelebrationController {
        &mut self.celebration
    }
}
