use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};

use crate::{
    evade::{RenderPosition, SubscriptionId, TargetContext, TargetRect, TargetResponse, TrackerEvent},
    game::session::CardSession,
    input::PointerFeed,
    visual::{
        setup::{CardRoot, EvadeButton, EvadeLabel},
        theme,
    },
};

/// Tracker events queued for the card, drained once per frame in arrival order
#[derive(Resource, Clone, Default)]
pub struct PointerInbox(Arc<Mutex<Vec<TrackerEvent>>>);

impl PointerInbox {
    pub fn push(&self, event: TrackerEvent) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).push(event);
    }

    pub fn drain(&self) -> Vec<TrackerEvent> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

/// Handle for the inbox's tracker subscription, removed on "Yes"
#[derive(Resource)]
pub struct EvadeSubscription(pub SubscriptionId);

/// System: Subscribe the inbox to the pointer tracker
pub fn subscribe_evade_inbox(
    mut commands: Commands,
    mut feed: ResMut<PointerFeed>,
    inbox: Res<PointerInbox>,
) {
    let sink = inbox.clone();
    let id = feed.subscribe(move |event| sink.push(*event));
    commands.insert_resource(EvadeSubscription(id));
}

/// Logical-pixel rect of a laid-out node, `None` before the first layout
pub fn measure_target(node: &ComputedNode, transform: &UiGlobalTransform) -> Option<TargetRect> {
    let scale = node.inverse_scale_factor();
    let size = node.size() * scale;
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    Some(TargetRect::from_center(transform.translation * scale, size))
}

/// System: Press/tap on the "No" button
pub fn handle_evade_press(
    interactions: Query<
        (&Interaction, &ComputedNode, &UiGlobalTransform),
        (Changed<Interaction>, With<EvadeButton>),
    >,
    feed: Res<PointerFeed>,
    mut session: ResMut<CardSession>,
) {
    for (interaction, node, transform) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }

        let ctx = TargetContext {
            pointer: feed.pointer(),
            rect: measure_target(node, transform),
        };
        match session.press_target(ctx) {
            TargetResponse::Moved(position) => info!("No button jumped to {:?}", position),
            TargetResponse::Relabeled { label, .. } if session.gave_up() => {
                info!("No button gave up after '{}'", label)
            }
            TargetResponse::Relabeled { label, .. } => info!("No button now reads '{}'", label),
            TargetResponse::Unchanged => {}
        }
    }
}

/// System: Feed queued pointer and viewport updates into the session
pub fn drain_pointer_inbox(
    inbox: Res<PointerInbox>,
    buttons: Query<(&ComputedNode, &UiGlobalTransform), With<EvadeButton>>,
    mut session: ResMut<CardSession>,
) {
    let events = inbox.drain();
    if events.is_empty() {
        return;
    }

    // Measured once; after a jump the controller only needs the size
    let rect = buttons
        .single()
        .ok()
        .and_then(|(node, transform)| measure_target(node, transform));

    for event in events {
        match event {
            TrackerEvent::Pointer(pointer) => {
                if let TargetResponse::Moved(position) =
                    session.pointer_moved(TargetContext { pointer, rect })
                {
                    debug!("No button fled to {:?}", position);
                }
            }
            TrackerEvent::Viewport(viewport) => session.set_viewport(viewport),
        }
    }
}

/// System: Mirror the target's position, label and visibility onto the button.
///
/// An evaded button is reparented onto the full-screen [`CardRoot`], so its
/// `left`/`top` are viewport coordinates and the row reflowing cannot shift it.
pub fn sync_evade_button(
    mut commands: Commands,
    session: Res<CardSession>,
    cards: Query<Entity, With<CardRoot>>,
    mut buttons: Query<(Entity, &mut Node, &mut Visibility, &ChildOf), With<EvadeButton>>,
    mut labels: Query<(&mut Text, &mut TextColor), With<EvadeLabel>>,
) {
    let target = session.target();

    for (button, mut node, mut visibility, child_of) in &mut buttons {
        match target.render_position() {
            RenderPosition::Natural => {
                if node.position_type != PositionType::Relative {
                    node.position_type = PositionType::Relative;
                    node.left = Val::Auto;
                    node.top = Val::Auto;
                }
            }
            RenderPosition::Fixed(position) => {
                if let Ok(card) = cards.single() {
                    if child_of.parent() != card {
                        commands.entity(button).insert(ChildOf(card));
                    }
                }
                let (left, top) = (Val::Px(position.x), Val::Px(position.y));
                if node.position_type != PositionType::Absolute || node.left != left || node.top != top
                {
                    node.position_type = PositionType::Absolute;
                    node.left = left;
                    node.top = top;
                }
            }
        }

        let wanted = if target.is_hidden() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        visibility.set_if_neq(wanted);
    }

    for (mut text, mut color) in &mut labels {
        if text.0 != target.label() {
            text.0 = target.label().to_string();
        }
        let wanted = theme::faded_ivory(target.opacity());
        if color.0 != wanted {
            color.0 = wanted;
        }
    }
}
