/// Surface - window surface creation and presentation-support queries

use aurora_wsi::aurora::{Error, Result};
use aurora_wsi::{wsi_err, wsi_error};
use ash::vk;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

/// Owned window surface
///
/// Create one per window; [`Context`](crate::Context) keeps its own internally.
/// The `vk::SurfaceKHR` is destroyed on drop, so the surface must not outlive
/// the instance it was created from.
pub struct Surface {
    surface: vk::SurfaceKHR,
    loader: ash::khr::surface::Instance,
}

impl Surface {
    /// Create a surface for the given window
    ///
    /// # Arguments
    ///
    /// * `entry` - Vulkan entry
    /// * `instance` - Vulkan instance (created with the window's required extensions)
    /// * `window` - Any window exposing raw display/window handles
    pub fn new<W: HasDisplayHandle + HasWindowHandle>(
        entry: &ash::Entry,
        instance: &ash::Instance,
        window: &W,
    ) -> Result<Self> {
        let display_handle = window.display_handle().map_err(|e| {
            wsi_error!("aurora::vulkan", "Failed to get display handle: {}", e);
            Error::InitializationFailed(format!("Failed to get display handle: {}", e))
        })?;
        let window_handle = window.window_handle().map_err(|e| {
            wsi_error!("aurora::vulkan", "Failed to get window handle: {}", e);
            Error::InitializationFailed(format!("Failed to get window handle: {}", e))
        })?;

        let surface = unsafe {
            ash_window::create_surface(
                entry,
                instance,
                display_handle.as_raw(),
                window_handle.as_raw(),
                None,
            )
            .map_err(|e| {
                wsi_error!("aurora::vulkan", "Failed to create surface: {:?}", e);
                Error::InitializationFailed(format!("Failed to create surface: {:?}", e))
            })?
        };

        let loader = ash::khr::surface::Instance::new(entry, instance);

        Ok(Self { surface, loader })
    }

    /// The wrapped `vk::SurfaceKHR`
    pub fn handle(&self) -> vk::SurfaceKHR {
        self.surface
    }

    /// Surface extension loader (for capability/format queries)
    pub fn loader(&self) -> &ash::khr::surface::Instance {
        &self.loader
    }

    /// Whether the given queue family of a device can present to this surface
    pub fn can_present(&self, physical_device: vk::PhysicalDevice, queue_family: u32) -> Result<bool> {
        unsafe {
            self.loader
                .get_physical_device_surface_support(physical_device, queue_family, self.surface)
                .map_err(|e| wsi_err!("aurora::vulkan", "Failed to query surface support: {:?}", e))
        }
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        unsafe {
            self.loader.destroy_surface(self.surface, None);
        }
    }
}
