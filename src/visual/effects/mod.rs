pub mod ambience;
pub mod confetti;
pub mod fade;
pub mod petals;

pub use ambience::animate_ambience;
pub use confetti::{emit_confetti, simulate_confetti};
pub use fade::{fade_in, pulse_hearts};
pub use petals::animate_petals;
