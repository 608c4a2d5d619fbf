use bevy::prelude::*;

use crate::{
    config::CardConfig,
    game::session::{CardPhase, CardSession},
    input::PointerFeed,
    visual::{
        interactions::evade::EvadeSubscription,
        setup::{AcceptButton, CardRoot, EffectsRng, HeartImage, ReplayButton, spawn_celebration},
        theme,
    },
};

/// System: "Yes" pressed
pub fn handle_accept_press(
    interactions: Query<&Interaction, (Changed<Interaction>, With<AcceptButton>)>,
    time: Res<Time>,
    mut session: ResMut<CardSession>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed && session.accept(time.elapsed_secs()) {
            info!("Accepted!");
        }
    }
}

/// System: Brighten "Yes" while hovered
pub fn accept_hover_feedback(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<AcceptButton>)>,
) {
    for (interaction, mut background) in &mut buttons {
        background.0 = match interaction {
            Interaction::Hovered | Interaction::Pressed => theme::ACCEPT_FILL_HOVER,
            Interaction::None => theme::ACCEPT_FILL,
        };
    }
}

/// System: Swap the question screen for the celebration screen
pub fn enter_celebration(
    mut commands: Commands,
    session: Res<CardSession>,
    config: Res<CardConfig>,
    heart: Res<HeartImage>,
    mut rng: ResMut<EffectsRng>,
    time: Res<Time>,
    cards: Query<Entity, With<CardRoot>>,
    mut feed: ResMut<PointerFeed>,
    subscription: Option<Res<EvadeSubscription>>,
) {
    if session.phase() != CardPhase::Celebration || cards.is_empty() {
        return;
    }

    for card in &cards {
        commands.entity(card).despawn();
    }

    // The button is gone; stop queueing pointer updates for it
    if let Some(subscription) = subscription {
        feed.unsubscribe(subscription.0);
        commands.remove_resource::<EvadeSubscription>();
    }

    spawn_celebration(&mut commands, &config, &heart, &mut rng.0, time.elapsed_secs());
    info!("Celebration screen shown");
}

/// System: "Once More" pressed
pub fn handle_replay_press(
    interactions: Query<&Interaction, (Changed<Interaction>, With<ReplayButton>)>,
    time: Res<Time>,
    mut session: ResMut<CardSession>,
) {
    for interaction in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if session.replay(time.elapsed_secs()) {
            info!("Replaying celebration (run {})", session.celebration().runs());
        } else {
            debug!("Celebration still running, replay ignored");
        }
    }
}
