/// Context - Vulkan instance / device bring-up for a window
///
/// Owns the entry, instance, validation messenger, chosen physical device,
/// logical device, queues, and the window surface. Resource lifetime is tied
/// to the context: drop waits for the device to go idle, then destroys
/// everything in reverse creation order.

use aurora_wsi::aurora::{Error, Result};
use aurora_wsi::{wsi_bail, wsi_err, wsi_error, wsi_info};
use ash::vk;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::ffi::{CStr, CString};
use std::mem::ManuallyDrop;

use crate::debug;
use crate::vulkan_surface::Surface;

/// Configuration for [`Context::new`]
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Application name reported to the driver
    pub app_name: String,
    /// Enable `VK_LAYER_KHRONOS_validation` and the debug messenger
    pub enable_validation: bool,
    /// Which validation severities are surfaced
    pub debug_severity: debug::DebugSeverity,
    /// Where validation messages go
    pub debug_output: debug::DebugOutput,
    /// Which validation message categories are surfaced
    pub message_filter: debug::MessageFilter,
    /// Abort the process on the first validation error
    pub break_on_error: bool,
    /// Count validation messages for the end-of-run report
    pub enable_stats: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            app_name: "Aurora Application".to_string(),
            enable_validation: false,
            debug_severity: debug::DebugSeverity::ErrorsAndWarnings,
            debug_output: debug::DebugOutput::Console,
            message_filter: debug::MessageFilter::default(),
            break_on_error: false,
            enable_stats: true,
        }
    }
}

/// Vulkan instance/device context bound to one window surface
pub struct Context {
    entry: ash::Entry,
    instance: ash::Instance,

    debug_utils_loader: Option<ash::ext::debug_utils::Instance>,
    debug_messenger: Option<vk::DebugUtilsMessengerEXT>,

    physical_device: vk::PhysicalDevice,
    device: ash::Device,

    graphics_queue: vk::Queue,
    graphics_queue_family: u32,
    present_queue: vk::Queue,
    present_queue_family: u32,

    /// Dropped by hand before the instance in `Drop` (field drop would run
    /// after the instance is already gone)
    surface: ManuallyDrop<Surface>,
}

impl Context {
    /// Create the instance, pick a device that can present to the window,
    /// and create the logical device and queues
    pub fn new<W: HasDisplayHandle + HasWindowHandle>(
        window: &W,
        config: ContextConfig,
    ) -> Result<Self> {
        unsafe {
            // Load the Vulkan library
            let entry = ash::Entry::load().map_err(|e| {
                wsi_error!("aurora::vulkan", "Failed to load Vulkan library: {:?}", e);
                Error::InitializationFailed(format!("Failed to load Vulkan library: {:?}", e))
            })?;

            // Application info
            let app_name = CString::new(config.app_name.as_str()).map_err(|e| {
                wsi_error!("aurora::vulkan", "Invalid application name: {}", e);
                Error::InvalidResource(format!("Invalid application name: {}", e))
            })?;
            let app_info = vk::ApplicationInfo::default()
                .application_name(&app_name)
                .application_version(vk::make_api_version(0, 1, 0, 0))
                .engine_name(c"Aurora WSI")
                .engine_version(vk::make_api_version(0, 0, 1, 0))
                .api_version(vk::API_VERSION_1_1);

            // Extensions the window system needs, plus debug utils when validating
            let display_handle = window.display_handle().map_err(|e| {
                wsi_error!("aurora::vulkan", "Failed to get display handle: {}", e);
                Error::InitializationFailed(format!("Failed to get display handle: {}", e))
            })?;
            let mut extension_names =
                ash_window::enumerate_required_extensions(display_handle.as_raw())
                    .map_err(|e| {
                        wsi_error!(
                            "aurora::vulkan",
                            "Failed to get required extensions: {}",
                            e
                        );
                        Error::InitializationFailed(format!(
                            "Failed to get required extensions: {}",
                            e
                        ))
                    })?
                    .to_vec();
            if config.enable_validation {
                extension_names.push(ash::ext::debug_utils::NAME.as_ptr());
            }

            // Validation layers
            let layer_names = if config.enable_validation {
                vec![c"VK_LAYER_KHRONOS_validation".as_ptr()]
            } else {
                vec![]
            };

            let create_info = vk::InstanceCreateInfo::default()
                .application_info(&app_info)
                .enabled_layer_names(&layer_names)
                .enabled_extension_names(&extension_names);

            let instance = entry.create_instance(&create_info, None).map_err(|e| {
                wsi_error!("aurora::vulkan", "Failed to create Vulkan instance: {:?}", e);
                Error::InitializationFailed(format!("Failed to create instance: {:?}", e))
            })?;

            // Debug messenger
            let (debug_utils_loader, debug_messenger) = if config.enable_validation {
                let debug_utils = ash::ext::debug_utils::Instance::new(&entry, &instance);

                debug::init_debug_config(debug::DebugConfig {
                    severity: config.debug_severity,
                    output: config.debug_output.clone(),
                    message_filter: config.message_filter,
                    break_on_error: config.break_on_error,
                    enable_stats: config.enable_stats,
                });

                let debug_info = vk::DebugUtilsMessengerCreateInfoEXT::default()
                    .message_severity(debug::severity_flags(config.debug_severity))
                    .message_type(
                        vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                            | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                            | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
                    )
                    .pfn_user_callback(Some(debug::vulkan_debug_callback));

                let messenger = debug_utils
                    .create_debug_utils_messenger(&debug_info, None)
                    .map_err(|e| {
                        wsi_error!(
                            "aurora::vulkan",
                            "Failed to create debug messenger: {:?}",
                            e
                        );
                        Error::InitializationFailed(format!(
                            "Failed to create debug messenger: {:?}",
                            e
                        ))
                    })?;

                (Some(debug_utils), Some(messenger))
            } else {
                (None, None)
            };

            // The surface lives as long as the context
            let surface = Surface::new(&entry, &instance, window)?;

            // Pick the physical device
            let (physical_device, graphics_queue_family, present_queue_family) =
                Self::pick_physical_device(&instance, &surface)?;

            let properties = instance.get_physical_device_properties(physical_device);
            wsi_info!(
                "aurora::vulkan",
                "Selected GPU: {}",
                CStr::from_ptr(properties.device_name.as_ptr()).to_string_lossy()
            );

            // Create the logical device
            let queue_priorities = [1.0];
            let queue_create_infos = if graphics_queue_family == present_queue_family {
                vec![vk::DeviceQueueCreateInfo::default()
                    .queue_family_index(graphics_queue_family)
                    .queue_priorities(&queue_priorities)]
            } else {
                vec![
                    vk::DeviceQueueCreateInfo::default()
                        .queue_family_index(graphics_queue_family)
                        .queue_priorities(&queue_priorities),
                    vk::DeviceQueueCreateInfo::default()
                        .queue_family_index(present_queue_family)
                        .queue_priorities(&queue_priorities),
                ]
            };

            let device_extension_names = vec![ash::khr::swapchain::NAME.as_ptr()];

            let device_create_info = vk::DeviceCreateInfo::default()
                .queue_create_infos(&queue_create_infos)
                .enabled_extension_names(&device_extension_names);

            let device = instance
                .create_device(physical_device, &device_create_info, None)
                .map_err(|e| {
                    wsi_error!("aurora::vulkan", "Failed to create logical device: {:?}", e);
                    Error::InitializationFailed(format!("Failed to create device: {:?}", e))
                })?;

            let graphics_queue = device.get_device_queue(graphics_queue_family, 0);
            let present_queue = device.get_device_queue(present_queue_family, 0);

            Ok(Self {
                entry,
                instance,
                debug_utils_loader,
                debug_messenger,
                physical_device,
                device,
                graphics_queue,
                graphics_queue_family,
                present_queue,
                present_queue_family,
                surface: ManuallyDrop::new(surface),
            })
        }
    }

    /// Score devices (discrete first) and pick one with a graphics queue
    /// family and a queue family that can present to the surface
    fn pick_physical_device(
        instance: &ash::Instance,
        surface: &Surface,
    ) -> Result<(vk::PhysicalDevice, u32, u32)> {
        let physical_devices = unsafe { instance.enumerate_physical_devices() }.map_err(|e| {
            wsi_error!(
                "aurora::vulkan",
                "Failed to enumerate physical devices: {:?}",
                e
            );
            Error::InitializationFailed(format!("Failed to enumerate physical devices: {:?}", e))
        })?;

        let mut best: Option<(vk::PhysicalDevice, u32, u32)> = None;
        let mut best_score = 0;

        for device in physical_devices {
            let queue_families =
                unsafe { instance.get_physical_device_queue_family_properties(device) };

            let graphics_family = queue_families
                .iter()
                .enumerate()
                .find(|(_, qf)| qf.queue_flags.contains(vk::QueueFlags::GRAPHICS))
                .map(|(i, _)| i as u32);

            let present_family = (0..queue_families.len() as u32)
                .find(|&i| surface.can_present(device, i).unwrap_or(false));

            if let (Some(graphics_family), Some(present_family)) = (graphics_family, present_family)
            {
                let properties = unsafe { instance.get_physical_device_properties(device) };
                let score = match properties.device_type {
                    vk::PhysicalDeviceType::DISCRETE_GPU => 1000,
                    vk::PhysicalDeviceType::INTEGRATED_GPU => 100,
                    _ => 1,
                };
                if score > best_score {
                    best_score = score;
                    best = Some((device, graphics_family, present_family));
                }
            }
        }

        best.ok_or_else(|| {
            wsi_error!(
                "aurora::vulkan",
                "No GPU with graphics and present support found"
            );
            Error::InitializationFailed(
                "No GPU with graphics and present support found".to_string(),
            )
        })
    }

    // --- Accessors ---

    pub fn entry(&self) -> &ash::Entry {
        &self.entry
    }

    pub fn instance(&self) -> &ash::Instance {
        &self.instance
    }

    pub fn physical_device(&self) -> vk::PhysicalDevice {
        self.physical_device
    }

    pub fn device(&self) -> &ash::Device {
        &self.device
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn graphics_queue(&self) -> vk::Queue {
        self.graphics_queue
    }

    pub fn graphics_queue_family(&self) -> u32 {
        self.graphics_queue_family
    }

    pub fn present_queue(&self) -> vk::Queue {
        self.present_queue
    }

    pub fn present_queue_family(&self) -> u32 {
        self.present_queue_family
    }

    // --- Format queries ---

    /// Pick a surface format, preferring 8-bit sRGB
    pub fn surface_format(&self) -> Result<vk::SurfaceFormatKHR> {
        let formats = unsafe {
            self.surface
                .loader()
                .get_physical_device_surface_formats(self.physical_device, self.surface.handle())
        }
        .map_err(|e| wsi_err!("aurora::vulkan", "Failed to query surface formats: {:?}", e))?;

        if formats.is_empty() {
            wsi_bail!("aurora::vulkan", "Surface reports no formats");
        }

        Ok(formats
            .iter()
            .find(|f| {
                f.format == vk::Format::B8G8R8A8_SRGB || f.format == vk::Format::R8G8B8A8_SRGB
            })
            .copied()
            .unwrap_or(formats[0]))
    }

    /// Pick a depth format the device supports for depth-stencil attachments
    pub fn find_depth_format(&self) -> Result<vk::Format> {
        let candidates = [
            vk::Format::D32_SFLOAT,
            vk::Format::D24_UNORM_S8_UINT,
            vk::Format::D16_UNORM,
        ];
        for format in candidates {
            let properties = unsafe {
                self.instance
                    .get_physical_device_format_properties(self.physical_device, format)
            };
            if properties
                .optimal_tiling_features
                .contains(vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT)
            {
                return Ok(format);
            }
        }
        wsi_bail!("aurora::vulkan", "No supported depth format found");
    }

    /// Wait for the device to be idle (e.g. before teardown)
    pub fn wait_idle(&self) -> Result<()> {
        unsafe { self.device.device_wait_idle() }
            .map_err(|e| wsi_err!("aurora::vulkan", "Device wait idle failed: {:?}", e))
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe {
            // Let in-flight work finish before anything is destroyed
            let _ = self.device.device_wait_idle();

            self.device.destroy_device(None);

            // Surface before instance
            ManuallyDrop::drop(&mut self.surface);

            if let (Some(loader), Some(messenger)) =
                (&self.debug_utils_loader, self.debug_messenger)
            {
                loader.destroy_debug_utils_messenger(messenger, None);
            }

            self.instance.destroy_instance(None);
        }
    }
}
