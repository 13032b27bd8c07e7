/// Shader - SPIR-V loading and shader-module creation

use aurora_wsi::aurora::{Error, Result};
use aurora_wsi::{wsi_err, wsi_error, wsi_info};
use ash::vk;
use spirq::spirv::ExecutionModel;
use std::io::Cursor;
use std::path::Path;

/// Owned shader module
///
/// The module is destroyed on drop; keep the shader alive until every
/// pipeline built from it has been created.
pub struct Shader {
    pub(crate) module: vk::ShaderModule,
    pub(crate) stage: vk::ShaderStageFlags,
    pub(crate) entry_point: String,
    /// Vulkan device (for cleanup)
    device: ash::Device,
}

impl Shader {
    /// Load a SPIR-V file and create the shader module
    pub fn load(device: &ash::Device, path: &Path, stage: vk::ShaderStageFlags) -> Result<Self> {
        wsi_info!("aurora::vulkan", "Loading shader: {}", path.display());
        let bytes = std::fs::read(path).map_err(|e| {
            wsi_error!(
                "aurora::vulkan",
                "Failed to read shader file {}: {}",
                path.display(),
                e
            );
            Error::InvalidResource(format!("Failed to read shader file {}: {}", path.display(), e))
        })?;
        Self::from_spirv(device, &bytes, stage)
    }

    /// Create a shader module from an in-memory SPIR-V blob
    pub fn from_spirv(device: &ash::Device, bytes: &[u8], stage: vk::ShaderStageFlags) -> Result<Self> {
        // read_spv re-aligns the byte blob to the u32 words Vulkan wants
        let code = ash::util::read_spv(&mut Cursor::new(bytes))
            .map_err(|e| wsi_err!("aurora::vulkan", "Invalid SPIR-V blob: {}", e))?;

        let entry_point = Self::find_entry_point(&code, stage)?;

        let create_info = vk::ShaderModuleCreateInfo::default().code(&code);
        let module = unsafe { device.create_shader_module(&create_info, None) }
            .map_err(|e| wsi_err!("aurora::vulkan", "Failed to create shader module: {:?}", e))?;

        Ok(Self {
            module,
            stage,
            entry_point,
            device: device.clone(),
        })
    }

    /// Reflect the blob and find the entry point matching the requested stage
    fn find_entry_point(code: &[u32], stage: vk::ShaderStageFlags) -> Result<String> {
        let entry_points = spirq::ReflectConfig::new()
            .spv(code)
            .reflect()
            .map_err(|e| wsi_err!("aurora::vulkan", "SPIR-V reflection failed: {:?}", e))?;

        let wanted = match stage {
            vk::ShaderStageFlags::VERTEX => ExecutionModel::Vertex,
            vk::ShaderStageFlags::FRAGMENT => ExecutionModel::Fragment,
            vk::ShaderStageFlags::COMPUTE => ExecutionModel::GLCompute,
            vk::ShaderStageFlags::GEOMETRY => ExecutionModel::Geometry,
            other => {
                return Err(wsi_err!(
                    "aurora::vulkan",
                    "Unsupported shader stage: {:?}",
                    other
                ))
            }
        };

        entry_points
            .iter()
            .find(|entry_point| entry_point.exec_model == wanted)
            .map(|entry_point| entry_point.name.clone())
            .ok_or_else(|| {
                wsi_error!(
                    "aurora::vulkan",
                    "SPIR-V module has no {:?} entry point",
                    stage
                );
                Error::InvalidResource(format!("SPIR-V module has no {:?} entry point", stage))
            })
    }

    /// The wrapped `vk::ShaderModule`
    pub fn module(&self) -> vk::ShaderModule {
        self.module
    }

    /// Stage this module was created for
    pub fn stage(&self) -> vk::ShaderStageFlags {
        self.stage
    }

    /// Name of the stage's entry point (usually `main`)
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.device.destroy_shader_module(self.module, None);
        }
    }
}
