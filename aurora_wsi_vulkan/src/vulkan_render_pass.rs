//! Renderpass - attachment / subpass / dependency description and creation
//!
//! Collects attachment descriptions, subpasses, and subpass dependencies,
//! then creates the `vk::RenderPass` on demand:
//!
//! ```no_run
//! # use aurora_wsi_vulkan::Renderpass;
//! # use ash::vk;
//! # fn demo(device: &ash::Device) -> aurora_wsi::Result<()> {
//! let mut renderpass = Renderpass::new(device);
//! let color = renderpass.add_color_attachment(
//!     vk::Format::B8G8R8A8_SRGB,
//!     vk::ClearColorValue { float32: [0.0, 0.0, 0.3, 1.0] },
//!     vk::ImageLayout::PRESENT_SRC_KHR,
//! );
//! let depth = renderpass.add_depth_attachment(
//!     vk::Format::D24_UNORM_S8_UINT,
//!     vk::ClearDepthStencilValue { depth: 1.0, stencil: 0 },
//! );
//! renderpass.add_subpass(&[color, depth])?;
//! renderpass.create()?;
//! # Ok(())
//! # }
//! ```
//!
//! Attachments are classified per subpass by their format: depth formats land
//! in the depth-stencil slot, everything else is a color attachment. Don't
//! change the description after handing the pass to a pipeline.

use aurora_wsi::aurora::{Error, Result};
use aurora_wsi::{wsi_err, wsi_error};
use ash::vk;

/// One subpass: the attachment references it reads and writes
#[derive(Default)]
struct Subpass {
    input_refs: Vec<vk::AttachmentReference>,
    color_refs: Vec<vk::AttachmentReference>,
    depth_ref: Option<vk::AttachmentReference>,
}

impl Subpass {
    /// Attach for write, classified by the attachment's format
    fn use_attachment(&mut self, index: u32, desc: &vk::AttachmentDescription) -> Result<()> {
        if is_depth_format(desc.format) {
            if self.depth_ref.is_some() {
                wsi_error!(
                    "aurora::vulkan",
                    "Subpass already has a depth attachment (adding index {})",
                    index
                );
                return Err(Error::InvalidResource(format!(
                    "Subpass already has a depth attachment (adding index {})",
                    index
                )));
            }
            self.depth_ref = Some(vk::AttachmentReference {
                attachment: index,
                layout: vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
            });
        } else {
            self.color_refs.push(vk::AttachmentReference {
                attachment: index,
                layout: vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
            });
        }
        Ok(())
    }

    /// Attach for shader read (input attachment)
    fn input_attachment(&mut self, index: u32) {
        self.input_refs.push(vk::AttachmentReference {
            attachment: index,
            layout: vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
        });
    }
}

/// Render pass description builder with lazy creation
pub struct Renderpass {
    device: ash::Device,
    render_pass: vk::RenderPass,

    /// Format of the first color attachment (what a swapchain should use)
    pub surface_format: vk::Format,
    /// Format of the depth attachment, if one was added
    pub depth_format: vk::Format,
    /// Clear values, index-aligned with the attachments
    pub clear_values: Vec<vk::ClearValue>,

    attachments: Vec<vk::AttachmentDescription>,
    subpasses: Vec<Subpass>,
    dependencies: Vec<vk::SubpassDependency>,
}

impl Renderpass {
    pub fn new(device: &ash::Device) -> Self {
        Self {
            device: device.clone(),
            render_pass: vk::RenderPass::null(),
            surface_format: vk::Format::UNDEFINED,
            depth_format: vk::Format::UNDEFINED,
            clear_values: Vec::new(),
            attachments: Vec::new(),
            subpasses: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Add a color attachment; returns its index
    ///
    /// The attachment is cleared on load and stored; `final_layout` defaults
    /// are the caller's business, `PRESENT_SRC_KHR` for a swapchain target.
    pub fn add_color_attachment(
        &mut self,
        format: vk::Format,
        clear: vk::ClearColorValue,
        final_layout: vk::ImageLayout,
    ) -> u32 {
        self.attachments.push(color_attachment_desc(format, final_layout));
        self.clear_values.push(vk::ClearValue { color: clear });
        if self.surface_format == vk::Format::UNDEFINED {
            self.surface_format = format;
        }
        (self.attachments.len() - 1) as u32
    }

    /// Add a depth-stencil attachment; returns its index
    pub fn add_depth_attachment(
        &mut self,
        format: vk::Format,
        clear: vk::ClearDepthStencilValue,
    ) -> u32 {
        self.attachments.push(depth_attachment_desc(format));
        self.clear_values.push(vk::ClearValue {
            depth_stencil: clear,
        });
        self.depth_format = format;
        (self.attachments.len() - 1) as u32
    }

    /// Add a subpass writing the listed attachments; returns the subpass index
    ///
    /// Each index is classified as color or depth-stencil by the attachment's
    /// format. At most one depth attachment per subpass.
    pub fn add_subpass(&mut self, attachment_indexes: &[u32]) -> Result<u32> {
        let mut subpass = Subpass::default();
        for &index in attachment_indexes {
            let desc = self.attachments.get(index as usize).ok_or_else(|| {
                wsi_err!(
                    "aurora::vulkan",
                    "Attachment index {} out of range ({} attachments)",
                    index,
                    self.attachments.len()
                )
            })?;
            subpass.use_attachment(index, desc)?;
        }
        self.subpasses.push(subpass);
        Ok((self.subpasses.len() - 1) as u32)
    }

    /// Mark attachments as shader-read inputs of an existing subpass
    pub fn add_input_attachments(&mut self, subpass: u32, attachment_indexes: &[u32]) -> Result<()> {
        let attachment_count = self.attachments.len();
        let entry = self.subpasses.get_mut(subpass as usize).ok_or_else(|| {
            wsi_err!("aurora::vulkan", "Subpass index {} out of range", subpass)
        })?;
        for &index in attachment_indexes {
            if index as usize >= attachment_count {
                return Err(wsi_err!(
                    "aurora::vulkan",
                    "Attachment index {} out of range ({} attachments)",
                    index,
                    attachment_count
                ));
            }
            entry.input_attachment(index);
        }
        Ok(())
    }

    /// Chain two subpasses: color writes of `src` become readable inputs of `dst`
    pub fn add_subpass_dependency(&mut self, src_subpass: u32, dst_subpass: u32) {
        self.dependencies
            .push(subpass_chain_dependency(src_subpass, dst_subpass));
    }

    /// Create the `vk::RenderPass`; idempotent
    ///
    /// When the caller added no dependency, the standard EXTERNAL -> first
    /// subpass dependency is synthesized.
    pub fn create(&mut self) -> Result<vk::RenderPass> {
        if self.render_pass != vk::RenderPass::null() {
            return Ok(self.render_pass);
        }
        if self.attachments.is_empty() {
            return Err(wsi_err!("aurora::vulkan", "Render pass has no attachments"));
        }
        if self.subpasses.is_empty() {
            return Err(wsi_err!("aurora::vulkan", "Render pass has no subpasses"));
        }

        let subpass_descs: Vec<vk::SubpassDescription> = self
            .subpasses
            .iter()
            .map(|subpass| {
                let mut desc = vk::SubpassDescription::default()
                    .pipeline_bind_point(vk::PipelineBindPoint::GRAPHICS)
                    .color_attachments(&subpass.color_refs)
                    .input_attachments(&subpass.input_refs);
                if let Some(ref depth_ref) = subpass.depth_ref {
                    desc = desc.depth_stencil_attachment(depth_ref);
                }
                desc
            })
            .collect();

        let default_dependencies;
        let dependencies: &[vk::SubpassDependency] = if self.dependencies.is_empty() {
            default_dependencies =
                [external_dependency(self.depth_format != vk::Format::UNDEFINED)];
            &default_dependencies
        } else {
            &self.dependencies
        };

        let create_info = vk::RenderPassCreateInfo::default()
            .attachments(&self.attachments)
            .subpasses(&subpass_descs)
            .dependencies(dependencies);

        let render_pass = unsafe { self.device.create_render_pass(&create_info, None) }
            .map_err(|e| wsi_err!("aurora::vulkan", "Failed to create render pass: {:?}", e))?;

        self.render_pass = render_pass;
        Ok(render_pass)
    }

    /// The render pass handle, creating it on first use
    pub fn handle(&mut self) -> Result<vk::RenderPass> {
        self.create()
    }

    /// The created render pass, or null before `create`
    pub fn pass(&self) -> vk::RenderPass {
        self.render_pass
    }

    /// Destroy the created render pass; the description survives and
    /// `create` can be called again
    pub fn destroy(&mut self) {
        if self.render_pass != vk::RenderPass::null() {
            unsafe {
                self.device.destroy_render_pass(self.render_pass, None);
            }
            self.render_pass = vk::RenderPass::null();
        }
    }
}

impl Drop for Renderpass {
    fn drop(&mut self) {
        self.destroy();
    }
}

// --- Description helpers ---

/// Whether the format has a depth or stencil aspect
fn is_depth_format(format: vk::Format) -> bool {
    matches!(
        format,
        vk::Format::D16_UNORM
            | vk::Format::X8_D24_UNORM_PACK32
            | vk::Format::D32_SFLOAT
            | vk::Format::S8_UINT
            | vk::Format::D16_UNORM_S8_UINT
            | vk::Format::D24_UNORM_S8_UINT
            | vk::Format::D32_SFLOAT_S8_UINT
    )
}

/// Cleared-and-stored single-sample color attachment
fn color_attachment_desc(
    format: vk::Format,
    final_layout: vk::ImageLayout,
) -> vk::AttachmentDescription {
    vk::AttachmentDescription::default()
        .format(format)
        .samples(vk::SampleCountFlags::TYPE_1)
        .load_op(vk::AttachmentLoadOp::CLEAR)
        .store_op(vk::AttachmentStoreOp::STORE)
        .stencil_load_op(vk::AttachmentLoadOp::DONT_CARE)
        .stencil_store_op(vk::AttachmentStoreOp::DONT_CARE)
        .initial_layout(vk::ImageLayout::UNDEFINED)
        .final_layout(final_layout)
}

/// Cleared depth-stencil attachment; contents are discarded after the pass
fn depth_attachment_desc(format: vk::Format) -> vk::AttachmentDescription {
    vk::AttachmentDescription::default()
        .format(format)
        .samples(vk::SampleCountFlags::TYPE_1)
        .load_op(vk::AttachmentLoadOp::CLEAR)
        .store_op(vk::AttachmentStoreOp::DONT_CARE)
        .stencil_load_op(vk::AttachmentLoadOp::DONT_CARE)
        .stencil_store_op(vk::AttachmentStoreOp::DONT_CARE)
        .initial_layout(vk::ImageLayout::UNDEFINED)
        .final_layout(vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL)
}

/// Standard EXTERNAL -> first-subpass dependency; waits on the attachment
/// output stages so the pass doesn't start writing too early
fn external_dependency(has_depth: bool) -> vk::SubpassDependency {
    let (stage_mask, access_mask) = if has_depth {
        (
            vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT
                | vk::PipelineStageFlags::EARLY_FRAGMENT_TESTS,
            vk::AccessFlags::COLOR_ATTACHMENT_WRITE
                | vk::AccessFlags::DEPTH_STENCIL_ATTACHMENT_WRITE,
        )
    } else {
        (
            vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
            vk::AccessFlags::COLOR_ATTACHMENT_WRITE,
        )
    };

    vk::SubpassDependency::default()
        .src_subpass(vk::SUBPASS_EXTERNAL)
        .dst_subpass(0)
        .src_stage_mask(stage_mask)
        .src_access_mask(vk::AccessFlags::empty())
        .dst_stage_mask(stage_mask)
        .dst_access_mask(access_mask)
}

/// Color writes of `src` become input-attachment reads of `dst`, by region
fn subpass_chain_dependency(src_subpass: u32, dst_subpass: u32) -> vk::SubpassDependency {
    vk::SubpassDependency::default()
        .src_subpass(src_subpass)
        .dst_subpass(dst_subpass)
        .src_stage_mask(vk::PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT)
        .src_access_mask(vk::AccessFlags::COLOR_ATTACHMENT_WRITE)
        .dst_stage_mask(vk::PipelineStageFlags::FRAGMENT_SHADER)
        .dst_access_mask(vk::AccessFlags::INPUT_ATTACHMENT_READ)
        .dependency_flags(vk::DependencyFlags::BY_REGION)
}

#[cfg(test)]
#[path = "vulkan_render_pass_tests.rs"]
mod tests;
