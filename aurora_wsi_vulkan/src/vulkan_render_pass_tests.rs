//! Unit tests for vulkan_render_pass.rs
//!
//! `vk` description structs are plain data, so attachment/subpass/dependency
//! marshaling is checked here without a device. Render-pass creation itself
//! needs a live device and is exercised by the demo.

use super::*;

// ============================================================================
// FORMAT CLASSIFICATION
// ============================================================================

#[test]
fn test_depth_formats_classify_as_depth() {
    assert!(is_depth_format(vk::Format::D16_UNORM));
    assert!(is_depth_format(vk::Format::D32_SFLOAT));
    assert!(is_depth_format(vk::Format::D24_UNORM_S8_UINT));
    assert!(is_depth_format(vk::Format::D32_SFLOAT_S8_UINT));
    assert!(is_depth_format(vk::Format::S8_UINT));
}

#[test]
fn test_color_formats_classify_as_color() {
    assert!(!is_depth_format(vk::Format::B8G8R8A8_UNORM));
    assert!(!is_depth_format(vk::Format::R8G8B8A8_SRGB));
    assert!(!is_depth_format(vk::Format::R16G16B16A16_SFLOAT));
    assert!(!is_depth_format(vk::Format::UNDEFINED));
}

// ============================================================================
// ATTACHMENT DESCRIPTIONS
// ============================================================================

#[test]
fn test_color_attachment_desc_marshaling() {
    let desc = color_attachment_desc(
        vk::Format::B8G8R8A8_SRGB,
        vk::ImageLayout::PRESENT_SRC_KHR,
    );

    assert_eq!(desc.format, vk::Format::B8G8R8A8_SRGB);
    assert_eq!(desc.samples, vk::SampleCountFlags::TYPE_1);
    assert_eq!(desc.load_op, vk::AttachmentLoadOp::CLEAR);
    assert_eq!(desc.store_op, vk::AttachmentStoreOp::STORE);
    assert_eq!(desc.stencil_load_op, vk::AttachmentLoadOp::DONT_CARE);
    assert_eq!(desc.stencil_store_op, vk::AttachmentStoreOp::DONT_CARE);
    assert_eq!(desc.initial_layout, vk::ImageLayout::UNDEFINED);
    assert_eq!(desc.final_layout, vk::ImageLayout::PRESENT_SRC_KHR);
}

#[test]
fn test_depth_attachment_desc_marshaling() {
    let desc = depth_attachment_desc(vk::Format::D24_UNORM_S8_UINT);

    assert_eq!(desc.format, vk::Format::D24_UNORM_S8_UINT);
    assert_eq!(desc.load_op, vk::AttachmentLoadOp::CLEAR);
    // Depth contents are not needed after the pass
    assert_eq!(desc.store_op, vk::AttachmentStoreOp::DONT_CARE);
    assert_eq!(
        desc.final_layout,
        vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL
    );
}

// ============================================================================
// SUBPASS CLASSIFICATION
// ============================================================================

#[test]
fn test_subpass_classifies_color_and_depth() {
    let color = color_attachment_desc(
        vk::Format::B8G8R8A8_UNORM,
        vk::ImageLayout::PRESENT_SRC_KHR,
    );
    let depth = depth_attachment_desc(vk::Format::D32_SFLOAT);

    let mut subpass = Subpass::default();
    subpass.use_attachment(0, &color).unwrap();
    subpass.use_attachment(1, &depth).unwrap();

    assert_eq!(subpass.color_refs.len(), 1);
    assert_eq!(subpass.color_refs[0].attachment, 0);
    assert_eq!(
        subpass.color_refs[0].layout,
        vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL
    );

    let depth_ref = subpass.depth_ref.expect("depth reference missing");
    assert_eq!(depth_ref.attachment, 1);
    assert_eq!(
        depth_ref.layout,
        vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL
    );
}

#[test]
fn test_subpass_rejects_second_depth_attachment() {
    let depth = depth_attachment_desc(vk::Format::D32_SFLOAT);

    let mut subpass = Subpass::default();
    subpass.use_attachment(0, &depth).unwrap();
    assert!(subpass.use_attachment(1, &depth).is_err());
}

#[test]
fn test_subpass_accepts_multiple_color_attachments() {
    let color = color_attachment_desc(
        vk::Format::R8G8B8A8_UNORM,
        vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
    );

    let mut subpass = Subpass::default();
    subpass.use_attachment(0, &color).unwrap();
    subpass.use_attachment(1, &color).unwrap();
    subpass.use_attachment(2, &color).unwrap();

    assert_eq!(subpass.color_refs.len(), 3);
    let indexes: Vec<u32> = subpass.color_refs.iter().map(|r| r.attachment).collect();
    assert_eq!(indexes, vec![0, 1, 2]);
}

#[test]
fn test_input_attachment_uses_shader_read_layout() {
    let mut subpass = Subpass::default();
    subpass.input_attachment(2);

    assert_eq!(subpass.input_refs.len(), 1);
    assert_eq!(subpass.input_refs[0].attachment, 2);
    assert_eq!(
        subpass.input_refs[0].layout,
        vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL
    );
}

// ============================================================================
// DEPENDENCIES
// ============================================================================

#[test]
fn test_external_dependency_without_depth() {
    let dep = external_dependency(false);

    assert_eq!(dep.src_subpass, vk::SUBPASS_EXTERNAL);
    assert_eq!(dep.dst_subpass, 0);
    assert_eq!(
        dep.src_stage_mask,
        vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
    );
    assert_eq!(dep.src_access_mask, vk::AccessFlags::empty());
    assert_eq!(dep.dst_access_mask, vk::AccessFlags::COLOR_ATTACHMENT_WRITE);
}

#[test]
fn test_external_dependency_with_depth_adds_depth_stages() {
    let dep = external_dependency(true);

    assert!(dep
        .src_stage_mask
        .contains(vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS));
    assert!(dep
        .dst_access_mask
        .contains(vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE));
}

#[test]
fn test_subpass_chain_dependency_marshaling() {
    let dep = subpass_chain_dependency(0, 1);

    assert_eq!(dep.src_subpass, 0);
    assert_eq!(dep.dst_subpass, 1);
    assert_eq!(
        dep.src_stage_mask,
        vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
    );
    assert_eq!(dep.src_access_mask, vk::AccessFlags::COLOR_ATTACHMENT_WRITE);
    assert_eq!(dep.dst_stage_mask, vk::PipelineStageFlags::FRAGMENT_SHADER);
    assert_eq!(dep.dst_access_mask, vk::AccessFlags::INPUT_ATTACHMENT_READ);
    assert_eq!(dep.dependency_flags, vk::DependencyFlags::BY_REGION);
}
