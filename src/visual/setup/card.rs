use bevy::prelude::*;

use crate::config::CardConfig;
use crate::evade::Footprint;
use crate::game::{petals::{Petal, PetalField}, session::CardSession};
use crate::visual::theme;

use super::session::EffectsRng;
use super::textures::HeartImage;

/// Root of the question screen; despawned on "Yes".
/// Full-screen at the origin, so absolute children use viewport coordinates.
#[derive(Component)]
pub struct CardRoot;

#[derive(Component)]
pub struct AcceptButton;

/// The evasive "No" button
#[derive(Component)]
pub struct EvadeButton;

#[derive(Component)]
pub struct EvadeLabel;

#[derive(Component)]
pub struct PetalGlyph(pub Petal);

/// Heart image that beats; `base_size` is its resting edge length
#[derive(Component)]
pub struct HeartPulse {
    pub base_size: f32,
}

pub(crate) fn button_node(footprint: Footprint) -> Node {
    Node {
        width: Val::Px(footprint.width),
        height: Val::Px(footprint.height),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub(crate) fn text_bundle(text: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

pub(crate) fn square(size: f32) -> Node {
    Node {
        width: Val::Px(size),
        height: Val::Px(size),
        ..default()
    }
}

/// Petals share the card's ivory, dimmed per petal
pub(crate) fn petal_color(opacity: f32) -> Color {
    theme::faded_ivory(opacity)
}

/// Hairline, centered glyph, hairline
fn ornament_row(
    parent: &mut ChildSpawnerCommands,
    text: String,
    size: f32,
    text_alpha: f32,
    line_alpha: f32,
    margin: UiRect,
) {
    let hairline = || {
        (
            Node {
                flex_grow: 1.0,
                height: Val::Px(1.0),
                ..default()
            },
            BackgroundColor(theme::faded_gold(line_alpha)),
        )
    };

    parent
        .spawn(Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(576.0),
            align_items: AlignItems::Center,
            column_gap: Val::Px(16.0),
            margin,
            ..default()
        })
        .with_children(|row| {
            row.spawn(hairline());
            row.spawn(text_bundle(text, size, theme::faded_gold(text_alpha)));
            row.spawn(hairline());
        });
}

/// System: Spawn the question screen with its drifting petals
pub fn spawn_card(
    mut commands: Commands,
    config: Res<CardConfig>,
    session: Res<CardSession>,
    heart: Res<HeartImage>,
    mut rng: ResMut<EffectsRng>,
) {
    let text = &config.text;
    let footprint = config.footprint;
    let target = session.target();
    let petals = PetalField::generate(config.petals.count, &config.petals.symbols, &mut rng.0);

    commands
        .spawn((
            CardRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
        ))
        .with_children(|root| {
            // Petals are absolute so they stay out of the column layout
            for petal in petals.petals {
                root.spawn((
                    text_bundle(petal.symbol.clone(), petal.size, petal_color(petal.opacity)),
                    Node {
                        position_type: PositionType::Absolute,
                        ..default()
                    },
                    Visibility::Hidden,
                    PetalGlyph(petal),
                ));
            }

            ornament_row(root, text.ornament.clone(), 14.0, 1.0, 0.3, UiRect::bottom(Val::Px(16.0)));

            root.spawn((square(64.0), heart.node(theme::IVORY), HeartPulse { base_size: 64.0 }));
            root.spawn(text_bundle(text.recipient.clone(), theme::TITLE_SIZE, theme::IVORY));
            root.spawn(text_bundle(
                text.question.to_uppercase(),
                theme::BODY_SIZE,
                theme::GOLD,
            ));
            root.spawn(text_bundle(
                text.tagline.clone(),
                theme::BODY_SIZE,
                theme::faded_ivory(0.25),
            ));

            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(24.0),
                margin: UiRect::top(Val::Px(32.0)),
                ..default()
            })
            .with_children(|row| {
                row.spawn((
                    Button,
                    AcceptButton,
                    button_node(footprint),
                    BackgroundColor(theme::ACCEPT_FILL),
                ))
                .with_children(|button| {
                    button.spawn(text_bundle(
                        text.accept_label.clone(),
                        theme::BUTTON_TEXT_SIZE,
                        theme::BACKGROUND,
                    ));
                });

                // Drawn above everything once it leaves the row
                row.spawn((
                    Button,
                    EvadeButton,
                    button_node(footprint),
                    BackgroundColor(theme::EVADE_FILL),
                    GlobalZIndex(10),
                ))
                .with_children(|button| {
                    button.spawn((
                        EvadeLabel,
                        text_bundle(
                            target.label().to_string(),
                            theme::BUTTON_TEXT_SIZE,
                            theme::faded_ivory(target.opacity()),
                        ),
                    ));
                });
            });

            ornament_row(root, text.footer.to_uppercase(), 10.0, 0.3, 0.2, UiRect::top(Val::Px(40.0)));
        });

    info!("Spawned card for '{}'", text.recipient);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_petals_are_dimmed_ivory() {
        let ivory = theme::IVORY.to_srgba();
        for opacity in [0.05, 0.2, 0.35] {
            let petal = petal_color(opacity).to_srgba();
            assert_eq!(
                (petal.red, petal.green, petal.blue),
                (ivory.red, ivory.green, ivory.blue)
            );
            assert!((petal.alpha - opacity).abs() < 1e-6);
        }
    }

    #[test]
    fn test_square_is_square() {
        let node = square(72.0);
        assert_eq!(node.width, Val::Px(72.0));
        assert_eq!(node.height, node.width);
    }
}
