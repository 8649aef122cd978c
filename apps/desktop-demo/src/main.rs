//! Desktop demo: a single swipeable to-do row.
//!
//! Drag the row right to reveal the orange schedule panel, left to reveal
//! the blue done panel. Short drags snap back; drags past a fifteenth of the
//! window width snap open.

use std::cell::Cell;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use swiperow_widget::{Point, PointerEventKind, Rect, SwipeRow};

mod canvas;
use canvas::Canvas;

const ITEM_HEIGHT: f32 = 72.0;

const BACKGROUND: u32 = 0x00F2F2F7;
const CONTENT_FILL: u32 = 0x00FFFFFF;
const CONTENT_BAR: u32 = 0x001C1C1E;
const SCHEDULE_ORANGE: u32 = 0x00FF9500;
const DONE_BLUE: u32 = 0x00007AFF;
const MARKER_WHITE: u32 = 0x00FFFFFF;

fn centered_square(frame: Rect, side: f32) -> Rect {
    Rect::new(
        frame.x + (frame.width - side) / 2.0,
        frame.y + (frame.height - side) / 2.0,
        side,
        side,
    )
}

fn paint_content(canvas: &mut Canvas, frame: Rect) {
    canvas.fill_rect(frame, CONTENT_FILL);
    // Placeholder bar standing in for the "To-do item" label.
    canvas.fill_rect(
        Rect::new(frame.x + 20.0, frame.y + frame.height / 2.0 - 4.0, 140.0, 8.0),
        CONTENT_BAR,
    );
}

fn paint_left(canvas: &mut Canvas, frame: Rect) {
    canvas.fill_rect(frame, SCHEDULE_ORANGE);
    canvas.fill_rect(centered_square(frame, 26.0), MARKER_WHITE);
}

fn paint_right(canvas: &mut Canvas, frame: Rect) {
    canvas.fill_rect(frame, DONE_BLUE);
    canvas.fill_rect(centered_square(frame, 26.0), MARKER_WHITE);
}

struct App {
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    row: SwipeRow<Canvas>,
    canvas: Canvas,
    dirty: Rc<Cell<bool>>,
    start: Instant,
    /// Last cursor position in window coordinates.
    cursor: Point,
    mouse_down: bool,
}

impl App {
    fn new() -> Self {
        let dirty = Rc::new(Cell::new(true));
        let invalidate = Rc::clone(&dirty);

        let row = SwipeRow::new(ITEM_HEIGHT, paint_content, paint_left, paint_right)
            .on_invalidate(move || invalidate.set(true));

        Self {
            window: None,
            context: None,
            surface: None,
            row,
            canvas: Canvas::new(),
            dirty,
            start: Instant::now(),
            cursor: Point::ZERO,
            mouse_down: false,
        }
    }

    /// Vertical offset of the row strip, centered in the window.
    fn row_y(&self) -> f32 {
        let height = self
            .window
            .as_ref()
            .map(|window| window.inner_size().height as f32)
            .unwrap_or(0.0);
        ((height - ITEM_HEIGHT) / 2.0).max(0.0)
    }

    fn forward_pointer(&mut self, kind: PointerEventKind) {
        let local = Point::new(self.cursor.x, self.cursor.y - self.row_y());
        self.row.handle_pointer(kind, local);
    }

    fn draw(&mut self) -> Result<()> {
        let Some(window) = self.window.as_ref() else {
            return Ok(());
        };
        let row_y = self.row_y();
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        surface
            .resize(
                NonZeroU32::new(size.width).unwrap(),
                NonZeroU32::new(size.height).unwrap(),
            )
            .map_err(|e| anyhow::anyhow!("failed to resize surface: {e}"))?;

        self.canvas.resize(size.width, size.height);
        self.canvas.clear(BACKGROUND);

        self.canvas.set_origin(Point::new(0.0, row_y));
        self.canvas
            .set_clip(Rect::new(0.0, row_y, size.width as f32, ITEM_HEIGHT));
        self.row.paint(&mut self.canvas);

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("failed to get surface buffer: {e}"))?;
        buffer.copy_from_slice(self.canvas.pixels());
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("failed to present buffer: {e}"))?;

        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes()
                .with_title("Swipe actions")
                .with_inner_size(LogicalSize::new(420, 280));

            let window = Rc::new(event_loop.create_window(attributes).unwrap());
            let context = Context::new(Rc::clone(&window)).unwrap();
            let surface = Surface::new(&context, Rc::clone(&window)).unwrap();

            self.row
                .set_container_width(window.inner_size().width as f32);
            window.request_redraw();

            self.window = Some(window);
            self.context = Some(context);
            self.surface = Some(surface);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.row.set_container_width(size.width as f32);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                if self.mouse_down {
                    self.forward_pointer(PointerEventKind::Move);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.mouse_down = true;
                    self.forward_pointer(PointerEventKind::Down);
                }
                ElementState::Released => {
                    self.mouse_down = false;
                    self.forward_pointer(PointerEventKind::Up);
                }
            },
            WindowEvent::RedrawRequested => {
                let now_nanos = self.start.elapsed().as_nanos() as u64;
                self.row.on_frame(now_nanos);
                if let Err(err) = self.draw() {
                    log::error!("draw failed: {err:#}");
                }
            }
            _ => {}
        }

        if self.dirty.replace(false) {
            window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Wait is enough here: snap animation frames are driven by the
        // dirty-flag redraw chain, not by polling.
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("drag right for schedule, left for done; short drags snap back");

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
