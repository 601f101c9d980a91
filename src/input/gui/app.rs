//! Main application loop: window, event polling, and per-frame control flow.
//!
//! All the real work happens in the core; this module only maps window
//! events onto it and hands the finished framebuffer to the surface.

use std::error::Error;

use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use super::keymap::Keymap;
use super::present::copy_bgrx_to_rgba;
use crate::core::config::ViewerConfig;
use crate::core::data::colour::{Palette, pack_bgrx};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::kernel;
use crate::core::navigation::NavigationState;
use crate::core::pacing::FramePacer;

/// Everything the per-frame loop touches.
struct App {
    pixels: Pixels<'static>,
    buffer: PixelBuffer,
    navigation: NavigationState,
    palette: Palette,
    keymap: Keymap,
    pacer: FramePacer,
}

impl App {
    fn new(window: &'static Window, config: &ViewerConfig) -> Result<Self, Box<dyn Error>> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut buffer = PixelBuffer::new(size.width, size.height)?;
        // prime the buffer so the first presented frame is not garbage
        buffer.fill(pack_bgrx(100, 0, 0));

        let navigation = config.navigation;
        let palette = Palette::new(config.palette_mode, navigation.clamped_iteration_limit());

        Ok(Self {
            pixels,
            buffer,
            navigation,
            palette,
            keymap: Keymap::default(),
            pacer: FramePacer::new(config.target_fps),
        })
    }

    /// Rebuilds the framebuffer and surface for the new window size.
    ///
    /// `PixelBuffer::replace` allocates the new region before dropping the
    /// old one, so the render path always holds a valid buffer.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        if width == 0 || height == 0 {
            // minimised window; keep the old buffer until a real size arrives
            return Ok(());
        }

        self.buffer.replace(width, height)?;
        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        Ok(())
    }

    /// Runs one paced frame. Returns false once quit has been requested.
    fn frame(&mut self) -> Result<bool, Box<dyn Error>> {
        let dt = self.pacer.next_frame();

        let input = self.keymap.snapshot();
        self.navigation.advance(&input, f64::from(dt));
        if !self.navigation.running {
            return Ok(false);
        }

        let limit = self.navigation.clamped_iteration_limit();
        if !self.palette.matches(self.palette.mode(), limit) {
            log::debug!("palette rebuilt for iteration limit {limit}");
            self.palette = Palette::new(self.palette.mode(), limit);
        }

        let viewport = self.navigation.viewport()?;
        kernel::render(&mut self.buffer, &viewport, &self.palette);

        copy_bgrx_to_rgba(self.buffer.as_bytes(), self.pixels.frame_mut());
        self.pixels.render()?;

        log::trace!("frame dt={dt:.4}s limit={limit}");
        Ok(true)
    }
}

/// Opens the window and runs the viewer until quit or close.
pub fn run_viewer(config: ViewerConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelglide")
            .with_inner_size(LogicalSize::new(
                f64::from(config.width),
                f64::from(config.height),
            ))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, &config)?;

    event_loop.run(move |event, elwt| {
        // repaint continuously; the pacer does the throttling
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent {
                window_id,
                ref event,
            } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::Resized(size) => {
                    if let Err(e) = app.resize(size.width, size.height) {
                        log::error!("resize failed: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if let PhysicalKey::Code(code) = key_event.physical_key {
                        app.keymap.handle_key_event(code, key_event.state);
                    }
                }
                _ => {}
            },
            Event::AboutToWait => match app.frame() {
                Ok(true) => {}
                Ok(false) => elwt.exit(),
                Err(e) => {
                    log::error!("frame failed: {e}");
                    elwt.exit();
                }
            },
            _ => {}
        }
    })?;

    Ok(())
}
