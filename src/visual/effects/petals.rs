use bevy::prelude::*;

use crate::{input::PointerFeed, visual::setup::PetalGlyph};

/// System: Drift background petals down the card
pub fn animate_petals(
    time: Res<Time>,
    feed: Res<PointerFeed>,
    mut petals: Query<(&PetalGlyph, &mut Node, &mut Visibility)>,
) {
    let t = time.elapsed_secs();
    let viewport = feed.viewport();

    for (glyph, mut node, mut visibility) in &mut petals {
        match glyph.0.screen_position(t, viewport) {
            Some(position) => {
                node.left = Val::Px(position.x);
                node.top = Val::Px(position.y);
                visibility.set_if_neq(Visibility::Inherited);
            }
            // Still waiting out its delay
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}
