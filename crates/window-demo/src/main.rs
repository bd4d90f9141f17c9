// File: crates/window-demo/src/main.rs
// Summary: Windowed host screen for the chart widget via RGBA blit (CPU) using winit + softbuffer.

mod host;

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use chart_core::{theme, RandomSource};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::host::HostScreen;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,winit=warn")))
        .init();

    // Arg: optional theme name
    let theme_name = std::env::args().nth(1).unwrap_or_else(|| "light".to_string());
    let style = theme::find(&theme_name)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Constellation Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0))
        .build(&event_loop)
        .context("build window")?;
    let style = style.for_density(window.scale_factor() as f32);

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut screen = HostScreen::new(style, Box::new(RandomSource::new()));
    let size = window.inner_size();
    screen.resize(size.width, size.height);
    let mut cursor: Option<(f64, f64)> = None;
    info!(theme = style.name, "host screen ready; click the button or press Space for new data");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::Resumed => {
                screen.on_resume();
                window.request_redraw();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    screen.resize(new_size.width, new_size.height);
                    window.request_redraw();
                }
                WindowEvent::Focused(true) => {
                    screen.on_resume();
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => cursor = Some((position.x, position.y)),
                WindowEvent::CursorLeft { .. } => cursor = None,
                WindowEvent::MouseInput { state: ElementState::Released, button: MouseButton::Left, .. } => {
                    if let Some((x, y)) = cursor {
                        if screen.on_pointer_up(x, y) {
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Space | VirtualKeyCode::Return),
                            ..
                        },
                    ..
                } => {
                    screen.on_button_click();
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut screen, &mut surface) {
                    error!("present error: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Render the screen and blit it into the softbuffer frame.
fn present(screen: &mut HostScreen, surface: &mut softbuffer::Surface) -> Result<()> {
    let rgba = screen.render_rgba8()?;
    let (w, h) = screen.size();
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer wants 0x00RRGGBB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
