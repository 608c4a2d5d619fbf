use crate::input::PointerTracking;
use crate::visual::effects::{
    animate_ambience, animate_petals, emit_confetti, fade_in, pulse_hearts, simulate_confetti,
};
use crate::visual::interactions::{
    PointerInbox, accept_hover_feedback, drain_pointer_inbox, enter_celebration, handle_accept_press,
    handle_evade_press, handle_replay_press, subscribe_evade_inbox, sync_evade_button,
};
use crate::visual::setup::{EffectsRng, setup_card_config, setup_heart_image, setup_session, spawn_card};
use bevy::prelude::*;

pub struct CardPlugin;

impl Plugin for CardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInbox>()
            .init_resource::<EffectsRng>()
            // Config first, then the session (needs config), then the UI (needs session and the heart texture)
            .add_systems(
                Startup,
                (
                    setup_card_config,
                    setup_heart_image,
                    setup_session,
                    spawn_card,
                    subscribe_evade_inbox,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    // The "No" button
                    handle_evade_press,
                    drain_pointer_inbox,
                    sync_evade_button,
                    // "Yes" and the celebration screen
                    handle_accept_press,
                    accept_hover_feedback,
                    enter_celebration,
                    handle_replay_press,
                    // Effects
                    emit_confetti,
                    simulate_confetti,
                    animate_petals,
                    animate_ambience,
                    fade_in,
                    pulse_hearts,
                )
                    .chain()
                    .after(PointerTracking),
            );
    }
}
