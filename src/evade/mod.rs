mod controller;
mod geometry;
mod random;
mod taps;
mod target;
mod tracker;

pub use controller::RenderPosition;
pub use geometry::{DetectionGeometry, Footprint, PointerSample, TargetRect, ViewportBounds};
pub use random::{RandomSource, SeededRandom};
#[cfg(test)]
pub use random::sequence;
pub use target::{
    EvasiveTarget, PlatformProbe, TargetContext, TargetResponse, select_target,
};
pub use tracker::{PointerTracker, SubscriptionId, TrackerEvent};
