// File: crates/viewer/src/window.rs
// Summary: Blocking window sink: shows one chart per window via RGBA blit (CPU) using winit + softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use sensor_chart_core::{Chart, ChartSink, RenderOptions};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// Opens a window per chart and returns from `present` once it is closed.
///
/// winit allows a single event loop per process, so it is created on the
/// first chart and reused for every window after that.
pub struct WindowSink {
    event_loop: Option<EventLoop<()>>,
    opts: RenderOptions,
}

impl WindowSink {
    pub fn new(opts: RenderOptions) -> Self {
        Self { event_loop: None, opts }
    }
}

/// Last rendered frame as 0RGB words, keyed by the size it was rendered at.
type Frame = (PhysicalSize<u32>, Vec<u32>);

impl ChartSink for WindowSink {
    fn present(&mut self, chart: &Chart) -> Result<()> {
        let opts = self.opts.clone();
        let event_loop = self.event_loop.get_or_insert_with(EventLoop::new);

        let title = if chart.title.is_empty() { "Sensor Chart" } else { chart.title.as_str() };
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
            .build(&*event_loop)
            .map_err(|e| anyhow!("creating window for '{title}': {e}"))?;
        let window_id = window.id();

        let context = unsafe { softbuffer::Context::new(&window) }
            .map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
            .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        log::info!("showing '{title}'; close the window or press Esc to continue");

        let mut size = window.inner_size();
        let mut frame: Option<Frame> = None;
        let mut failure: Option<anyhow::Error> = None;

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id: id } if id == window_id => match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        input: KeyboardInput {
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                        ..
                    } => {
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(new_size) => {
                        size = new_size;
                        window.request_redraw();
                    }
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window_id => {
                    if let Err(e) = draw(chart, &opts, size, &mut surface, &mut frame) {
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        drop(surface);
        drop(window);
        log::debug!("window '{title}' dismissed");
        failure.map_or(Ok(()), Err)
    }
}

fn draw(
    chart: &Chart,
    opts: &RenderOptions,
    size: PhysicalSize<u32>,
    surface: &mut softbuffer::Surface,
    frame: &mut Option<Frame>,
) -> Result<()> {
    // minimized
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resizing window surface: {e}"))?;

    if frame.as_ref().map_or(true, |(at, _)| *at != size) {
        let opts = RenderOptions { width: size.width as i32, height: size.height as i32, ..opts.clone() };
        let (rgba, ..) = chart.render_to_rgba8(&opts)?;
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32)
            .collect();
        *frame = Some((size, pixels));
    }
    let pixels = frame.as_ref().map(|(_, px)| px.as_slice()).unwrap_or_default();

    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("window buffer: {e}"))?;
    let n = buffer.len().min(pixels.len());
    buffer[..n].copy_from_slice(&pixels[..n]);
    buffer.present().map_err(|e| anyhow!("presenting frame: {e}"))?;
    Ok(())
}
