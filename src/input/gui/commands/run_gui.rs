use crate::controllers::interactive::ports::audio_output::AudioOutputPort;
use crate::controllers::interactive::session::RenderSession;
use crate::controllers::interactive::session_config::SessionConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use log::info;
use std::marker::PhantomData;
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: SessionConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: SessionConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute<A: AudioOutputPort>(&self, audio: A) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Sonifier")
                .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = self
            .presenter_factory
            .build(window, self.config.width, self.config.height)?;
        let session = RenderSession::new(self.config, presenter, audio)?;

        info!(
            "window open at {}x{}, {} render strips",
            self.config.width,
            self.config.height,
            session.strip_count()
        );

        GuiApp::new(window, &event_loop, session).run(event_loop)
    }
}
