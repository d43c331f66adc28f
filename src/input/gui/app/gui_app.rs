use crate::controllers::interactive::ports::audio_output::AudioOutputPort;
use crate::controllers::interactive::session::RenderSession;
use crate::input::gui::app::pointer_input::{PointerCommand, PointerInput};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, warn};
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

pub struct GuiApp<P: GuiPresenterPort, A: AudioOutputPort> {
    window: &'static Window,
    session: RenderSession<P, A>,
    pointer: PointerInput,
    redraw_pending: bool,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort, A: AudioOutputPort> GuiApp<P, A> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        session: RenderSession<P, A>,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let pointer = PointerInput::new(
            session.raster().width(),
            session.raster().height(),
            size.width,
            size.height,
        );

        Self {
            window,
            session,
            pointer,
            redraw_pending: true,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Shows the first preview and runs the event loop until the window
    /// closes.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        self.session.start(Instant::now())?;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                let response = self.egui_state.on_window_event(self.window, event);

                if response.repaint {
                    self.redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = self.redraw() {
                            error!("Render error: {}", e);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.pointer.set_window_size(size.width, size.height);

                        if let Err(e) = self.session.presenter_mut().resize(size.width, size.height) {
                            self.report(e);
                        }
                        self.redraw_pending = true;
                    }
                    WindowEvent::CursorLeft { .. } => self.pointer.handle_cursor_left(),
                    WindowEvent::MouseInput { state, button, .. } if response.consumed => {
                        self.pointer.handle_consumed_button(*button, *state);
                    }
                    _ if response.consumed => {}
                    WindowEvent::CursorMoved { position, .. } => {
                        let command = self.pointer.handle_cursor_moved(position.x, position.y);
                        self.dispatch(command);
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        let command = self.pointer.handle_button(*button, *state);
                        self.dispatch(command);
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let command = self.pointer.handle_wheel(*delta);
                        self.dispatch(command);
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                match self.session.tick(Instant::now()) {
                    Ok(Some(_)) => self.redraw_pending = true,
                    Ok(None) => {}
                    Err(e) => self.report(e),
                }

                if self.redraw_pending {
                    self.window.request_redraw();
                }

                match self.session.next_deadline() {
                    Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
                    None => elwt.set_control_flow(ControlFlow::Wait),
                }
            }
            _ => {}
        })?;

        Ok(())
    }

    fn dispatch(&mut self, command: Option<PointerCommand>) {
        let Some(command) = command else {
            return;
        };

        let now = Instant::now();
        let result = match command {
            PointerCommand::Click { x, y } => self.session.click(x, y).map(|_| ()),
            PointerCommand::Zoom { x, y, direction } => {
                self.session.zoom_at(x, y, direction, now).map(|_| ())
            }
            PointerCommand::Pan { dx, dy } => self.session.pan_by_pixels(dx, dy, now).map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.last_error_message = None;
                self.redraw_pending = true;
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: impl std::error::Error) {
        warn!("{}", err);
        self.last_error_message = Some(err.to_string());
        self.redraw_pending = true;
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.redraw_pending = false;

        let egui_output = self.update_ui();

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero())
        {
            self.redraw_pending = true;
        }

        self.session.presenter_mut().render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let session = &self.session;
        let last_error_message = &self.last_error_message;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Explorer")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 200.0])
                .show(ctx, |ui| {
                    let viewport = session.viewport();

                    ui.heading("Fractal Sonifier");
                    ui.separator();

                    ui.label(format!(
                        "Real: [{:.6}, {:.6}]",
                        viewport.x_min(),
                        viewport.x_max()
                    ));
                    ui.label(format!(
                        "Imag: [{:.6}, {:.6}]",
                        viewport.y_min(),
                        viewport.y_max()
                    ));
                    ui.label(format!("Max iterations: {}", session.budget().full()));
                    ui.label(format!("Phase: {}", session.phase().display_name()));
                    ui.label(format!(
                        "Strategy: {}",
                        session.config().strategy.display_name()
                    ));

                    if let Some(frame) = session.last_frame() {
                        ui.label(format!(
                            "Frame {} ({:?}, {} strips): {} ms",
                            frame.generation,
                            frame.quality,
                            frame.strips,
                            frame.render_duration.as_millis()
                        ));
                    }

                    if let Some(click) = session.last_click() {
                        ui.separator();
                        ui.label(format!(
                            "Clicked ({:.6}, {:.6})",
                            click.point.real, click.point.imag
                        ));
                        ui.label(format!(
                            "{} / {} iterations, {:.1} Hz",
                            click.iterations, click.max_iterations, click.frequency
                        ));
                    }

                    if let Some(message) = last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }
}
