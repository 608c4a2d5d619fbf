use bevy::prelude::*;

use crate::{
    game::ambience::symbol_bob,
    input::PointerFeed,
    visual::{
        setup::{CelebrationRoot, DustMoteGlyph, RisingHeartGlyph, SymbolBob},
        theme,
    },
};

type MoteQuery<'w, 's> = Query<
    'w,
    's,
    (&'static DustMoteGlyph, &'static mut Node, &'static mut BackgroundColor),
    (Without<RisingHeartGlyph>, Without<SymbolBob>),
>;

type RisingHeartQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static RisingHeartGlyph,
        &'static mut Node,
        &'static mut ImageNode,
        &'static mut Visibility,
    ),
    (Without<DustMoteGlyph>, Without<SymbolBob>),
>;

type SymbolQuery<'w, 's> =
    Query<'w, 's, (&'static SymbolBob, &'static mut Node), (Without<DustMoteGlyph>, Without<RisingHeartGlyph>)>;

/// System: Sparkle the dust, float the hearts and bob the symbol row
pub fn animate_ambience(
    time: Res<Time>,
    feed: Res<PointerFeed>,
    roots: Query<&CelebrationRoot>,
    mut motes: MoteQuery,
    mut hearts: RisingHeartQuery,
    mut symbols: SymbolQuery,
) {
    let Ok(root) = roots.single() else {
        return;
    };
    // Everything is timed from the moment the screen appeared
    let t = time.elapsed_secs() - root.shown_at;
    let viewport = feed.viewport();

    for (glyph, mut node, mut color) in &mut motes {
        let mote = &glyph.0;
        let edge = Val::Px(mote.size * mote.scale(t));
        node.width = edge;
        node.height = edge;
        color.0 = theme::faded_ivory(mote.opacity(t));
    }

    for (glyph, mut node, mut image, mut visibility) in &mut hearts {
        let heart = &glyph.0;
        match heart.screen_position(t, viewport) {
            Some(position) => {
                node.left = Val::Px(position.x);
                node.top = Val::Px(position.y);
                image.color = theme::faded_ivory(heart.opacity(t));
                visibility.set_if_neq(Visibility::Inherited);
            }
            None => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }

    for (symbol, mut node) in &mut symbols {
        node.top = Val::Px(symbol_bob(symbol.index, t));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::evade::ViewportBounds;
    use crate::game::ambience::{DustMote, RisingHeart};
    use bevy::ecs::system::RunSystemOnce;

    /// Celebration shown at t=1, sampled at t=2.25
    fn world() -> World {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs_f32(2.25));
        world.insert_resource(time);

        let mut feed = PointerFeed::default();
        feed.publish_viewport(ViewportBounds::new(800.0, 600.0));
        world.insert_resource(feed);

        world.spawn((CelebrationRoot { shown_at: 1.0 }, Node::default()));
        world
    }

    #[test]
    fn test_symbols_bob_from_shown_time() {
        let mut world = world();
        let first = world.spawn((SymbolBob { index: 0 }, Node::default())).id();
        let late = world.spawn((SymbolBob { index: 8 }, Node::default())).id();

        world.run_system_once(animate_ambience).unwrap();

        // Half a bob period after the screen appeared: the first symbol is at the top
        let top = world.get::<Node>(first).unwrap().top;
        assert_eq!(top, Val::Px(symbol_bob(0, 1.25)));
        assert!(symbol_bob(0, 1.25) < -3.9);
        // The ninth symbol has not started yet
        assert_eq!(world.get::<Node>(late).unwrap().top, Val::Px(0.0));
    }

    #[test]
    fn test_rising_hearts_wait_then_appear() {
        let mut world = world();
        let heart = RisingHeart {
            left_pct: 50.0,
            delay: 0.25,
            size: 20.0,
            duration: 10.0,
        };
        let waiting = RisingHeart {
            delay: 2.0,
            ..heart.clone()
        };
        let shown = world
            .spawn((Node::default(), ImageNode::default(), Visibility::Hidden, RisingHeartGlyph(heart.clone())))
            .id();
        let hidden = world
            .spawn((Node::default(), ImageNode::default(), Visibility::Hidden, RisingHeartGlyph(waiting)))
            .id();

        world.run_system_once(animate_ambience).unwrap();

        assert_eq!(world.get::<Visibility>(shown), Some(&Visibility::Inherited));
        assert_eq!(world.get::<Visibility>(hidden), Some(&Visibility::Hidden));

        let expected = heart.screen_position(1.25, ViewportBounds::new(800.0, 600.0)).unwrap();
        let node = world.get::<Node>(shown).unwrap();
        assert_eq!(node.left, Val::Px(expected.x));
        assert_eq!(node.top, Val::Px(expected.y));
        let alpha = world.get::<ImageNode>(shown).unwrap().color.alpha();
        assert!((alpha - heart.opacity(1.25)).abs() < 1e-6);
    }

    #[test]
    fn test_dust_motes_sparkle() {
        let mut world = world();
        let mote = DustMote {
            left_pct: 10.0,
            top_pct: 10.0,
            delay: 0.0,
            size: 4.0,
        };
        let entity = world
            .spawn((Node::default(), BackgroundColor(Color::NONE), DustMoteGlyph(mote.clone())))
            .id();

        world.run_system_once(animate_ambience).unwrap();

        let node = world.get::<Node>(entity).unwrap();
        assert_eq!(node.width, Val::Px(mote.size * mote.scale(1.25)));
        assert_eq!(node.height, node.width);
        let alpha = world.get::<BackgroundColor>(entity).unwrap().0.alpha();
        assert!((alpha - mote.opacity(1.25)).abs() < 1e-6);
        assert!(alpha > 0.0);
    }

    #[test]
    fn test_nothing_moves_without_celebration() {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(PointerFeed::default());
        let symbol = world.spawn((SymbolBob { index: 0 }, Node::default())).id();

        world.run_system_once(animate_ambience).unwrap();

        assert_eq!(world.get::<Node>(symbol).unwrap().top, Val::Auto);
    }
}
