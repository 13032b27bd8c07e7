//! Aurora WSI demo
//!
//! Creates a window, brings up Vulkan with validation enabled, builds a
//! color+depth render pass and a graphics pipeline from SPIR-V files, then
//! prints normalized events until the window closes (Escape closes too).
//!
//! Shader paths default to `shaders/vert.spv` and `shaders/frag.spv` and can
//! be overridden as the first two arguments.

use aurora_wsi::{wsi_info, wsi_warn, Action, Event, Keycode, WsiWindow};
use aurora_wsi_vulkan::{
    print_validation_stats_report, Context, ContextConfig, Pipeline, Renderpass,
};
use ash::vk;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() {
    if let Err(e) = run() {
        eprintln!("demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> aurora_wsi::Result<()> {
    let mut window = WsiWindow::new("Aurora WSI Demo", WIDTH, HEIGHT)?;

    let context = Context::new(
        &window,
        ContextConfig {
            app_name: "Aurora WSI Demo".to_string(),
            enable_validation: true,
            ..ContextConfig::default()
        },
    )?;

    // Formats come from the device, not hard-coded
    let surface_format = context.surface_format()?;
    let depth_format = context.find_depth_format()?;

    let mut renderpass = Renderpass::new(context.device());
    let color = renderpass.add_color_attachment(
        surface_format.format,
        vk::ClearColorValue {
            float32: [0.0, 0.0, 0.3, 1.0],
        },
        vk::ImageLayout::PRESENT_SRC_KHR,
    );
    let depth = renderpass.add_depth_attachment(
        depth_format,
        vk::ClearDepthStencilValue {
            depth: 1.0,
            stencil: 0,
        },
    );
    renderpass.add_subpass(&[color, depth])?;

    let mut pipeline = Pipeline::new(context.device(), renderpass.handle()?);

    let args: Vec<String> = std::env::args().collect();
    let vert_path = args.get(1).map(String::as_str).unwrap_or("shaders/vert.spv");
    let frag_path = args.get(2).map(String::as_str).unwrap_or("shaders/frag.spv");
    if std::path::Path::new(vert_path).exists() && std::path::Path::new(frag_path).exists() {
        pipeline.load_vert_shader(vert_path)?;
        pipeline.load_frag_shader(frag_path)?;
        pipeline.create_graphics_pipeline(vk::Extent2D {
            width: WIDTH,
            height: HEIGHT,
        })?;
        wsi_info!("aurora::demo", "Graphics pipeline created");
    } else {
        wsi_warn!(
            "aurora::demo",
            "Shader files not found ({} / {}), skipping pipeline creation",
            vert_path,
            frag_path
        );
    }

    window.set_text_input(true);

    while let Some(event) = window.get_event() {
        match &event {
            Event::Mouse { action, x, y, btn } => {
                if *action != Action::Move {
                    println!("mouse {:?} {:?} at ({}, {})", btn, action, x, y);
                }
            }
            Event::Key {
                action: Action::Down,
                keycode,
            } => {
                println!("key down: {:?} (modifiers {:?})", keycode, window.modifiers());
                if *keycode == Keycode::Escape {
                    window.close();
                }
            }
            Event::Key { .. } => {}
            Event::Text { text } => println!("text: {:?}", text),
            Event::Move { x, y } => println!("window moved to ({}, {})", x, y),
            Event::Resize { width, height } => println!("window resized to {}x{}", width, height),
            Event::Focus { has_focus } => println!("focus: {}", has_focus),
            Event::Close => println!("close requested"),
        }
    }

    // Vulkan objects before the context, context before the report
    drop(pipeline);
    drop(renderpass);
    context.wait_idle()?;
    drop(context);

    print_validation_stats_report();
    Ok(())
}
