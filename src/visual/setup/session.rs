use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::window_viewport;
use crate::config::CardConfig;
use crate::evade::{PlatformProbe, SeededRandom, select_target};
use crate::game::{celebration::CelebrationController, session::CardSession};
use crate::input::PointerFeed;

/// Randomness for decoration only (petals, confetti)
#[derive(Resource)]
pub struct EffectsRng(pub SeededRandom);

impl Default for EffectsRng {
    fn default() -> Self {
        Self(SeededRandom::from_entropy())
    }
}

/// System: Load the card config, falling back to the built-in card
pub fn setup_card_config(mut commands: Commands) {
    let config = match CardConfig::load() {
        Ok(config) => {
            info!(
                "Loaded card config: {} tap labels, {} petals",
                config.tap_labels.len(),
                config.petals.count
            );
            config
        }
        Err(e) => {
            error!("Failed to load card config: {}, using defaults", e);
            CardConfig::default()
        }
    };
    commands.insert_resource(config);
}

/// System: Pick the evasive button variant and create the session
pub fn setup_session(
    mut commands: Commands,
    config: Res<CardConfig>,
    mut feed: ResMut<PointerFeed>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    // The tracker starts empty; seed it with the real window size
    if let Ok(window) = windows.single() {
        feed.publish_viewport(window_viewport(window));
    }

    let probe = PlatformProbe {
        mode: config.pointer_mode,
    };
    match select_target(&probe, &config, feed.viewport(), SeededRandom::from_entropy()) {
        Ok(target) => {
            info!("Evasive button uses the {:?} variant", target.kind());
            let celebration = CelebrationController::new(&config.celebration);
            commands.insert_resource(CardSession::new(target, celebration));
        }
        Err(e) => {
            error!("Failed to build the evasive button: {}", e);
            panic!("Cannot continue without a card session");
        }
    }
}
