use crate::config::SessionConfig;
use crate::controllers::interactive::commands::{Command, ViewAction, interpret};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::input_event::InputEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::ports::frame_renderer::FrameRenderer;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::view_state::ViewState;
use std::mem;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    Exit,
}

/// Owns the view and both frame buffers. Every accepted input produces one
/// full render into the back buffer, which becomes the front buffer only
/// once the render has completed.
pub struct InteractiveController<R, P> {
    view: ViewState,
    width: u32,
    height: u32,
    front: Raster,
    back: Raster,
    renderer: R,
    presenter: P,
    generation: u64,
}

impl<R, P> InteractiveController<R, P>
where
    R: FrameRenderer,
    P: InteractiveControllerPresenterPort,
{
    pub fn new(config: &SessionConfig, renderer: R, presenter: P) -> Self {
        let (width, height) = (config.width(), config.height());

        Self {
            view: ViewState::default(),
            width,
            height,
            front: Raster::new(width, height),
            back: Raster::new(width, height),
            renderer,
            presenter,
            generation: 0,
        }
    }

    /// Renders and presents the initial view.
    pub fn start(&mut self) -> Result<(), RenderError> {
        self.render()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<SessionStatus, RenderError> {
        match interpret(event) {
            Command::Quit => Ok(SessionStatus::Exit),
            Command::Ignore => {
                log::debug!("ignoring input {:?}", event);
                Ok(SessionStatus::Continue)
            }
            Command::Apply(action) => {
                self.apply(action)?;
                Ok(SessionStatus::Continue)
            }
        }
    }

    pub fn apply(&mut self, action: ViewAction) -> Result<(), RenderError> {
        self.view = action.apply(self.view, self.width, self.height);
        self.render()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The most recent completed frame.
    #[must_use]
    pub fn frame(&self) -> &Raster {
        &self.front
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn render(&mut self) -> Result<(), RenderError> {
        let generation = self.generation + 1;
        let request = self.view.render_request(self.width, self.height);

        let start = Instant::now();
        if let Err(err) = self.renderer.render(&request, &mut self.back) {
            log::error!(
                "render {} failed on {}: {}",
                generation,
                self.renderer.name(),
                err
            );
            return Err(err);
        }
        let render_duration = start.elapsed();

        mem::swap(&mut self.front, &mut self.back);
        self.generation = generation;

        log::info!(
            "rendered frame {} in {:.2?} (iterations: {}, quality: {}, palette: {}, engine: {})",
            generation,
            render_duration,
            request.iteration_cap,
            request.quality,
            request.palette,
            self.renderer.name()
        );

        self.presenter.present(&FrameData {
            generation,
            raster: &self.front,
            view: self.view,
            render_duration,
        });

        Ok(())
    }
}
