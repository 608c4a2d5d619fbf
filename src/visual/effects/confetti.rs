use bevy::prelude::*;

use crate::{
    game::{
        particles::{Particle, ParticleShape},
        session::CardSession,
    },
    input::PointerFeed,
    visual::setup::{CelebrationRoot, EffectsRng, HeartImage},
};

#[derive(Component)]
pub struct ConfettiPiece(pub Particle);

fn piece_color(particle: &Particle) -> Color {
    let [r, g, b] = particle.color;
    Color::srgb_u8(r, g, b).with_alpha(particle.opacity())
}

/// System: Spawn whatever bursts the celebration schedules this frame
pub fn emit_confetti(
    mut commands: Commands,
    time: Res<Time>,
    mut session: ResMut<CardSession>,
    feed: Res<PointerFeed>,
    heart: Res<HeartImage>,
    mut rng: ResMut<EffectsRng>,
    roots: Query<Entity, With<CelebrationRoot>>,
) {
    let bursts = session.celebration_mut().tick(time.elapsed_secs());
    if bursts.is_empty() {
        return;
    }
    let Ok(root) = roots.single() else {
        warn!("Confetti scheduled without a celebration screen");
        return;
    };

    let viewport = feed.viewport();
    for burst in &bursts {
        for _ in 0..burst.particle_count {
            let particle = Particle::spawn(burst, viewport, &mut rng.0);
            spawn_piece(&mut commands, root, particle, &heart);
        }
    }
}

/// Hearts are tinted heart images, circles are fully rounded fills
fn spawn_piece(commands: &mut Commands, root: Entity, particle: Particle, heart: &HeartImage) -> Entity {
    let node = Node {
        position_type: PositionType::Absolute,
        left: Val::Px(particle.position.x),
        top: Val::Px(particle.position.y),
        width: Val::Px(particle.size),
        height: Val::Px(particle.size),
        ..default()
    };
    let color = piece_color(&particle);

    let mut piece = commands.spawn((node, GlobalZIndex(20), ChildOf(root)));
    match particle.shape {
        ParticleShape::Heart => piece.insert(heart.node(color)),
        ParticleShape::Circle => piece.insert((BackgroundColor(color), BorderRadius::MAX)),
    };
    piece.insert(ConfettiPiece(particle)).id()
}

/// System: Integrate confetti and despawn pieces past their lifetime
pub fn simulate_confetti(
    mut commands: Commands,
    time: Res<Time>,
    mut pieces: Query<(
        Entity,
        &mut ConfettiPiece,
        &mut Node,
        Option<&mut BackgroundColor>,
        Option<&mut ImageNode>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut piece, mut node, background, image) in &mut pieces {
        piece.0.step(dt);

        if piece.0.is_expired() {
            commands.entity(entity).despawn();
            continue;
        }

        node.left = Val::Px(piece.0.position.x);
        node.top = Val::Px(piece.0.position.y);

        let color = piece_color(&piece.0);
        if let Some(mut background) = background {
            background.0 = color;
        }
        if let Some(mut image) = image {
            image.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evade::ViewportBounds;
    use crate::evade::sequence;
    use crate::game::celebration::BurstSpec;
    use bevy::ecs::system::RunSystemOnce;

    fn particle(shape: ParticleShape) -> Particle {
        let mut rng = sequence(vec![0.5]);
        let mut particle = Particle::spawn(&BurstSpec::CENTER_BURST, ViewportBounds::new(800.0, 600.0), &mut rng);
        particle.shape = shape;
        particle
    }

    fn spawn_in_world(world: &mut World, particle: Particle) -> Entity {
        let root = world.spawn(Node::default()).id();
        world
            .run_system_once(move |mut commands: Commands, heart: Res<HeartImage>| {
                spawn_piece(&mut commands, root, particle.clone(), &heart)
            })
            .unwrap()
    }

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(HeartImage(Handle::default()));
        world
    }

    #[test]
    fn test_heart_pieces_are_heart_images() {
        let mut world = world();
        let piece = spawn_in_world(&mut world, particle(ParticleShape::Heart));

        assert!(world.get::<ImageNode>(piece).is_some());
        assert!(world.get::<BackgroundColor>(piece).is_none());
        assert!(world.get::<BorderRadius>(piece).is_none());
    }

    #[test]
    fn test_circle_pieces_are_rounded() {
        let mut world = world();
        let piece = spawn_in_world(&mut world, particle(ParticleShape::Circle));

        assert!(world.get::<ImageNode>(piece).is_none());
        assert!(world.get::<BackgroundColor>(piece).is_some());
        assert_eq!(world.get::<BorderRadius>(piece), Some(&BorderRadius::MAX));
    }

    #[test]
    fn test_simulation_tints_both_shapes() {
        let mut world = world();
        world.insert_resource(Time::<()>::default());
        let heart = spawn_in_world(&mut world, particle(ParticleShape::Heart));
        let circle = spawn_in_world(&mut world, particle(ParticleShape::Circle));

        // Fade the pieces out of band, then let the system restore their color
        world.get_mut::<ImageNode>(heart).unwrap().color = Color::NONE;
        world.get_mut::<BackgroundColor>(circle).unwrap().0 = Color::NONE;
        world.run_system_once(simulate_confetti).unwrap();

        let expected = piece_color(&particle(ParticleShape::Heart));
        assert_eq!(world.get::<ImageNode>(heart).unwrap().color, expected);
        assert_eq!(world.get::<BackgroundColor>(circle).unwrap().0, expected);
    }
}
