use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

use crate::evade::{PointerSample, PointerTracker};

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerFeed>().add_systems(
            Update,
            (track_cursor_pos, track_touches)
                .chain()
                .in_set(PointerTracking),
        );
    }
}

/// Systems that publish into the [`PointerFeed`]; card logic runs after them
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerTracking;

/// The app-wide pointer tracker
#[derive(Resource, Default, Deref, DerefMut)]
pub struct PointerFeed(pub PointerTracker);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut feed: ResMut<PointerFeed>) {
    for e in ev_cursor.read() {
        // Every sample is published, not just the last one of the frame
        // (logical pixels, top-left origin)
        feed.publish_pointer(PointerSample::from(e.position));
    }
}

fn track_touches(mut touch_events: MessageReader<TouchInput>, mut feed: ResMut<PointerFeed>) {
    for ev in touch_events.read() {
        match ev.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                feed.publish_pointer(PointerSample::from(ev.position));
            }
            TouchPhase::Ended | TouchPhase::Canceled => {}
        }
    }
}
