/// Pipeline - graphics pipeline with classic fixed-function defaults
///
/// Wraps shader-module loading and `vkCreateGraphicsPipelines` for the common
/// "two shader stages, draw into one color + depth render pass" case. State
/// that real renderers tune (blending, culling, depth compare) is fixed to the
/// conventional defaults; anything fancier should build its own create-info.

use aurora_wsi::aurora::{Error, Result};
use aurora_wsi::{wsi_err, wsi_error};
use ash::vk;
use std::ffi::CString;
use std::path::Path;

use crate::vulkan_shader::Shader;

/// Graphics pipeline helper bound to one render pass
///
/// Load both shader stages, then create the pipeline:
///
/// ```no_run
/// # use aurora_wsi_vulkan::Pipeline;
/// # use ash::vk;
/// # fn demo(device: &ash::Device, render_pass: vk::RenderPass) -> aurora_wsi::Result<()> {
/// let mut pipeline = Pipeline::new(device, render_pass);
/// pipeline.load_vert_shader("shaders/vert.spv")?;
/// pipeline.load_frag_shader("shaders/frag.spv")?;
/// pipeline.create_graphics_pipeline(vk::Extent2D { width: 640, height: 480 })?;
/// # Ok(())
/// # }
/// ```
pub struct Pipeline {
    device: ash::Device,
    render_pass: vk::RenderPass,
    vert_shader: Option<Shader>,
    frag_shader: Option<Shader>,
    pipeline_layout: vk::PipelineLayout,
    pipeline: vk::Pipeline,
}

impl Pipeline {
    pub fn new(device: &ash::Device, render_pass: vk::RenderPass) -> Self {
        Self {
            device: device.clone(),
            render_pass,
            vert_shader: None,
            frag_shader: None,
            pipeline_layout: vk::PipelineLayout::null(),
            pipeline: vk::Pipeline::null(),
        }
    }

    // --- Shader modules ---

    /// Load the vertex stage from a SPIR-V file
    pub fn load_vert_shader<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.vert_shader = Some(Shader::load(
            &self.device,
            path.as_ref(),
            vk::ShaderStageFlags::VERTEX,
        )?);
        Ok(())
    }

    /// Load the fragment stage from a SPIR-V file
    pub fn load_frag_shader<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.frag_shader = Some(Shader::load(
            &self.device,
            path.as_ref(),
            vk::ShaderStageFlags::FRAGMENT,
        )?);
        Ok(())
    }

    // --- Pipeline ---

    /// Create the graphics pipeline for the given framebuffer extent
    ///
    /// Both shader stages must be loaded first.
    pub fn create_graphics_pipeline(&mut self, extent: vk::Extent2D) -> Result<vk::Pipeline> {
        let vert = self.vert_shader.as_ref().ok_or_else(|| {
            wsi_error!("aurora::vulkan", "No vertex shader loaded");
            Error::InvalidResource("No vertex shader loaded".to_string())
        })?;
        let frag = self.frag_shader.as_ref().ok_or_else(|| {
            wsi_error!("aurora::vulkan", "No fragment shader loaded");
            Error::InvalidResource("No fragment shader loaded".to_string())
        })?;

        let vert_entry = CString::new(vert.entry_point()).map_err(|e| {
            wsi_err!("aurora::vulkan", "Invalid vertex entry point name: {}", e)
        })?;
        let frag_entry = CString::new(frag.entry_point()).map_err(|e| {
            wsi_err!("aurora::vulkan", "Invalid fragment entry point name: {}", e)
        })?;

        let shader_stages = [
            vk::PipelineShaderStageCreateInfo::default()
                .stage(vk::ShaderStageFlags::VERTEX)
                .module(vert.module())
                .name(&vert_entry),
            vk::PipelineShaderStageCreateInfo::default()
                .stage(vk::ShaderStageFlags::FRAGMENT)
                .module(frag.module())
                .name(&frag_entry),
        ];

        // No vertex buffers: positions come from the shader
        let vertex_input = vk::PipelineVertexInputStateCreateInfo::default();

        let input_assembly = vk::PipelineInputAssemblyStateCreateInfo::default()
            .topology(vk::PrimitiveTopology::TRIANGLE_LIST)
            .primitive_restart_enable(false);

        let viewports = [full_extent_viewport(extent)];
        let scissors = [vk::Rect2D {
            offset: vk::Offset2D { x: 0, y: 0 },
            extent,
        }];
        let viewport_state = vk::PipelineViewportStateCreateInfo::default()
            .viewports(&viewports)
            .scissors(&scissors);

        let rasterizer = vk::PipelineRasterizationStateCreateInfo::default()
            .depth_clamp_enable(false)
            .rasterizer_discard_enable(false)
            .polygon_mode(vk::PolygonMode::FILL)
            .line_width(1.0)
            .cull_mode(vk::CullModeFlags::BACK)
            .front_face(vk::FrontFace::CLOCKWISE)
            .depth_bias_enable(false);

        let multisampling = vk::PipelineMultisampleStateCreateInfo::default()
            .sample_shading_enable(false)
            .rasterization_samples(vk::SampleCountFlags::TYPE_1);

        let depth_stencil = vk::PipelineDepthStencilStateCreateInfo::default()
            .depth_test_enable(true)
            .depth_write_enable(true)
            .depth_compare_op(vk::CompareOp::LESS_OR_EQUAL)
            .depth_bounds_test_enable(false)
            .stencil_test_enable(false);

        let blend_attachments = [disabled_blend_attachment()];
        let color_blending = vk::PipelineColorBlendStateCreateInfo::default()
            .logic_op_enable(false)
            .logic_op(vk::LogicOp::COPY)
            .attachments(&blend_attachments)
            .blend_constants([0.0, 0.0, 0.0, 0.0]);

        // Empty layout: no descriptor sets, no push constants
        let layout_info = vk::PipelineLayoutCreateInfo::default();
        let pipeline_layout = unsafe { self.device.create_pipeline_layout(&layout_info, None) }
            .map_err(|e| wsi_err!("aurora::vulkan", "Failed to create pipeline layout: {:?}", e))?;

        let pipeline_info = vk::GraphicsPipelineCreateInfo::default()
            .stages(&shader_stages)
            .vertex_input_state(&vertex_input)
            .input_assembly_state(&input_assembly)
            .viewport_state(&viewport_state)
            .rasterization_state(&rasterizer)
            .multisample_state(&multisampling)
            .depth_stencil_state(&depth_stencil)
            .color_blend_state(&color_blending)
            .layout(pipeline_layout)
            .render_pass(self.render_pass)
            .subpass(0);

        let pipelines = unsafe {
            self.device.create_graphics_pipelines(
                vk::PipelineCache::null(),
                std::slice::from_ref(&pipeline_info),
                None,
            )
        };
        let pipeline = match pipelines {
            Ok(pipelines) => pipelines[0],
            Err((_, e)) => {
                unsafe { self.device.destroy_pipeline_layout(pipeline_layout, None) };
                return Err(wsi_err!(
                    "aurora::vulkan",
                    "Failed to create graphics pipeline: {:?}",
                    e
                ));
            }
        };

        self.pipeline_layout = pipeline_layout;
        self.pipeline = pipeline;
        Ok(pipeline)
    }

    /// The created pipeline, or null before `create_graphics_pipeline`
    pub fn handle(&self) -> vk::Pipeline {
        self.pipeline
    }

    /// The created pipeline layout, or null before `create_graphics_pipeline`
    pub fn layout(&self) -> vk::PipelineLayout {
        self.pipeline_layout
    }
}

/// Viewport covering the whole extent with the standard depth range
fn full_extent_viewport(extent: vk::Extent2D) -> vk::Viewport {
    vk::Viewport {
        x: 0.0,
        y: 0.0,
        width: extent.width as f32,
        height: extent.height as f32,
        min_depth: 0.0,
        max_depth: 1.0,
    }
}

/// RGBA write mask with blending disabled
fn disabled_blend_attachment() -> vk::PipelineColorBlendAttachmentState {
    vk::PipelineColorBlendAttachmentState {
        color_write_mask: vk::ColorComponentFlags::R
            | vk::ColorComponentFlags::G
            | vk::ColorComponentFlags::B
            | vk::ColorComponentFlags::A,
        blend_enable: vk::FALSE,
        ..Default::default()
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        unsafe {
            // Nothing may still be executing with this pipeline
            let _ = self.device.device_wait_idle();

            if self.pipeline_layout != vk::PipelineLayout::null() {
                self.device.destroy_pipeline_layout(self.pipeline_layout, None);
            }
            if self.pipeline != vk::Pipeline::null() {
                self.device.destroy_pipeline(self.pipeline, None);
            }
        }
        // Shader modules are destroyed by their own Drop
    }
}

#[cfg(test)]
#[path = "vulkan_pipeline_tests.rs"]
mod tests;
