use crate::config::SessionConfig;
use crate::controllers::interactive::data::input_event::InputEvent;
use crate::controllers::interactive::{InteractiveController, SessionStatus};
use crate::core::actions::render_frame::engines::build_renderer;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::InputTranslator;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub const WINDOW_TITLE: &str = "Mandelbrot Set";

/// Opens the explorer window and runs until it is closed.
pub fn run_gui(config: SessionConfig) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.width(), config.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let presenter = PixelsPresenter::new(window, config.width(), config.height())?;
    let renderer = build_renderer(config.engine())?;
    let mut controller = InteractiveController::new(&config, renderer, presenter);
    let mut translator = InputTranslator::default();

    controller.start()?;

    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if let WindowEvent::RedrawRequested = event {
            if let Err(err) = controller.presenter().render() {
                log::error!("failed to draw frame: {}", err);
                elwt.exit();
            }
            return;
        }

        let Some(input) = translator.translate(&event) else {
            return;
        };

        let input = match input {
            InputEvent::MouseClick { button, x, y } => {
                match controller.presenter().window_to_raster(x, y) {
                    Some((x, y)) => InputEvent::MouseClick { button, x, y },
                    None => return,
                }
            }
            other => other,
        };

        match controller.handle_event(input) {
            Ok(SessionStatus::Exit) => elwt.exit(),
            Ok(SessionStatus::Continue) => {}
            Err(err) => log::warn!("keeping previous frame: {}", err),
        }
    })?;

    Ok(())
}
