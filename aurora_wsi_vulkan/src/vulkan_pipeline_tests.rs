//! Unit tests for vulkan_pipeline.rs
//!
//! Pipeline creation needs a live device; the fixed-function defaults that
//! feed it are plain structs and are checked here.

use super::*;

#[test]
fn test_viewport_covers_extent() {
    let viewport = full_extent_viewport(vk::Extent2D {
        width: 640,
        height: 480,
    });

    assert_eq!(viewport.x, 0.0);
    assert_eq!(viewport.y, 0.0);
    assert_eq!(viewport.width, 640.0);
    assert_eq!(viewport.height, 480.0);
}

#[test]
fn test_viewport_uses_standard_depth_range() {
    let viewport = full_extent_viewport(vk::Extent2D {
        width: 1,
        height: 1,
    });

    assert_eq!(viewport.min_depth, 0.0);
    assert_eq!(viewport.max_depth, 1.0);
}

#[test]
fn test_blend_attachment_writes_rgba() {
    let attachment = disabled_blend_attachment();

    let expected = vk::ColorComponentFlags::R
        | vk::ColorComponentFlags::G
        | vk::ColorComponentFlags::B
        | vk::ColorComponentFlags::A;
    assert_eq!(attachment.color_write_mask, expected);
}

#[test]
fn test_blend_attachment_has_blending_disabled() {
    let attachment = disabled_blend_attachment();
    assert_eq!(attachment.blend_enable, vk::FALSE);
}
