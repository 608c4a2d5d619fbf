pub mod card;
pub mod celebration;
pub mod session;
pub mod textures;

pub use card::{AcceptButton, CardRoot, EvadeButton, EvadeLabel, HeartPulse, PetalGlyph, spawn_card};
pub use celebration::{
    CelebrationRoot, DustMoteGlyph, FadeIn, ReplayButton, RisingHeartGlyph, SymbolBob,
    spawn_celebration,
};
pub use session::{EffectsRng, setup_card_config, setup_session};
pub use textures::{HeartImage, setup_heart_image};
