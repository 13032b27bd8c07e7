/*!
# Aurora WSI - Vulkan Helpers

Vulkan-side companions to the `aurora_wsi` window layer, built on the Ash
bindings.

Each helper wraps one family of Vulkan object-creation calls with a friendlier
constructor and a RAII destructor:

- **Surface**: window surface creation and presentation-support queries
- **Context**: instance / physical device / logical device bring-up
- **Shader**: SPIR-V loading and shader-module creation
- **Pipeline**: graphics pipeline with classic fixed-function defaults
- **Renderpass**: attachment / subpass / dependency description and creation

A window is anything implementing the `raw-window-handle` traits, which
`aurora_wsi::WsiWindow` does.
*/

// Vulkan helper modules
mod debug;
mod vulkan_context;
mod vulkan_pipeline;
mod vulkan_render_pass;
mod vulkan_shader;
mod vulkan_surface;

pub use vulkan_context::{Context, ContextConfig};
pub use vulkan_pipeline::Pipeline;
pub use vulkan_render_pass::Renderpass;
pub use vulkan_shader::Shader;
pub use vulkan_surface::Surface;

// Re-export debug utilities
pub use debug::{
    init_debug_config, print_validation_stats_report, validation_stats, DebugConfig, DebugOutput,
    DebugSeverity, MessageFilter, ValidationStats,
};
