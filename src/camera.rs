use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::evade::ViewportBounds;
use crate::input::{PointerFeed, PointerTracking};
use crate::visual::theme;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(theme::BACKGROUND))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, track_viewport.in_set(PointerTracking));
    }
}

#[derive(Component)]
pub struct MainCamera;

/// The card is pure UI, so a plain 2D camera is enough
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Read the primary window size in logical pixels
pub fn window_viewport(window: &Window) -> ViewportBounds {
    ViewportBounds::new(window.width(), window.height())
}

/// Publish window resizes to the pointer tracker
fn track_viewport(
    mut feed: ResMut<PointerFeed>,
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
) {
    if let Ok(window) = windows.single() {
        let viewport = window_viewport(window);

        // publish_viewport ignores unchanged sizes
        if viewport != feed.viewport() {
            info!(
                "Viewport resized to {}x{}",
                viewport.width, viewport.height
            );
            feed.publish_viewport(viewport);
        }
    }
}
