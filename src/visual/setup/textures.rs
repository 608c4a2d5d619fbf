use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::game::shapes::{HEART_TEXTURE_SIZE, heart_mask};

/// White heart texture, tinted per use through `ImageNode::color`
#[derive(Resource)]
pub struct HeartImage(pub Handle<Image>);

impl HeartImage {
    /// Heart-shaped UI image in `color`
    pub fn node(&self, color: Color) -> ImageNode {
        ImageNode::new(self.0.clone()).with_color(color)
    }
}

/// System: Rasterize the heart once at startup
pub fn setup_heart_image(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let size = HEART_TEXTURE_SIZE as u32;
    let image = Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        heart_mask(HEART_TEXTURE_SIZE),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );
    commands.insert_resource(HeartImage(images.add(image)));
}
