use bevy::prelude::*;

use crate::config::CardConfig;
use crate::evade::RandomSource;
use crate::game::ambience::{Ambience, DustMote, RisingHeart};
use crate::visual::theme;

use super::card::{HeartPulse, button_node, square, text_bundle};
use super::textures::HeartImage;

/// Root of the accepted screen; ambient motion is timed from `shown_at`
#[derive(Component)]
pub struct CelebrationRoot {
    pub shown_at: f32,
}

#[derive(Component)]
pub struct ReplayButton;

#[derive(Component)]
pub struct DustMoteGlyph(pub DustMote);

#[derive(Component)]
pub struct RisingHeartGlyph(pub RisingHeart);

/// Position in the heraldic symbol row
#[derive(Component)]
pub struct SymbolBob {
    pub index: usize,
}

/// Text or image that fades from transparent up to `alpha`
#[derive(Component)]
pub struct FadeIn {
    pub start: f32,
    pub duration: f32,
    pub alpha: f32,
}

/// Spawn the "accepted" screen; confetti pieces are parented to its root
pub fn spawn_celebration(
    commands: &mut Commands,
    config: &CardConfig,
    heart: &HeartImage,
    rng: &mut dyn RandomSource,
    now: f32,
) -> Entity {
    let text = &config.text;
    let ambience = Ambience::generate(
        config.celebration.dust_motes,
        config.celebration.rising_hearts,
        rng,
    );
    let fade = |delay: f32, alpha: f32| FadeIn {
        start: now + delay,
        duration: 0.8,
        alpha,
    };

    commands
        .spawn((
            CelebrationRoot { shown_at: now },
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
        ))
        .with_children(|root| {
            // Background layers first so the text draws over them
            for mote in ambience.motes {
                root.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Percent(mote.left_pct),
                        top: Val::Percent(mote.top_pct),
                        ..square(mote.size)
                    },
                    BackgroundColor(theme::faded_ivory(0.0)),
                    BorderRadius::MAX,
                    DustMoteGlyph(mote),
                ));
            }
            for rising in ambience.hearts {
                root.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        ..square(rising.size)
                    },
                    heart.node(theme::faded_ivory(0.0)),
                    Visibility::Hidden,
                    RisingHeartGlyph(rising),
                ));
            }

            root.spawn((
                square(72.0),
                heart.node(theme::faded_ivory(0.0)),
                HeartPulse { base_size: 72.0 },
                fade(0.2, 1.0),
            ));
            root.spawn((
                text_bundle(text.accepted_title.clone(), theme::HEADING_SIZE, theme::faded_ivory(0.0)),
                fade(0.4, 1.0),
            ));
            root.spawn((
                text_bundle(
                    text.accepted_subtitle.to_uppercase(),
                    theme::BODY_SIZE,
                    theme::faded_gold(0.0),
                ),
                fade(0.6, 1.0),
            ));

            root.spawn(Node {
                align_items: AlignItems::Center,
                column_gap: Val::Px(24.0),
                margin: UiRect::vertical(Val::Px(16.0)),
                ..default()
            })
            .with_children(|row| {
                for (index, symbol) in config.celebration.symbols.iter().enumerate() {
                    row.spawn((
                        text_bundle(symbol.clone(), 28.0, theme::faded_ivory(0.0)),
                        SymbolBob { index },
                        fade(0.9, 0.25),
                    ));
                }
            });

            root.spawn((
                Button,
                ReplayButton,
                BackgroundColor(theme::EVADE_FILL),
                Node {
                    margin: UiRect::top(Val::Px(32.0)),
                    ..button_node(config.footprint)
                },
            ))
            .with_children(|button| {
                button.spawn((
                    text_bundle(
                        text.replay_label.clone(),
                        theme::BUTTON_TEXT_SIZE,
                        theme::faded_ivory(0.0),
                    ),
                    fade(1.1, 0.7),
                ));
            });
        })
        .id()
}
