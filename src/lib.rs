mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, SessionConfig, SessionConfigError};
pub use crate::controllers::cli::render_once::RenderOnceController;
pub use crate::controllers::interactive::commands::{Command, ViewAction, interpret};
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::input_event::{InputEvent, KeyCode, MouseButton};
pub use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use crate::controllers::interactive::{InteractiveController, SessionStatus};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_frame::engines::{EngineKind, ParseEngineKindError, build_renderer};
pub use crate::core::actions::render_frame::errors::RenderError;
pub use crate::core::actions::render_frame::ports::frame_renderer::FrameRenderer;
pub use crate::core::actions::render_frame::rayon_pool::RayonPoolRenderer;
pub use crate::core::actions::render_frame::scoped_threads::ScopedThreadRenderer;
pub use crate::core::actions::render_frame::serial::SerialRenderer;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::fractals::mandelbrot::escape_time::escape_time;
pub use crate::core::fractals::mandelbrot::palettes::kinds::{PaletteKind, ParsePaletteKindError};
pub use crate::core::fractals::mandelbrot::text_render::TextRender;
pub use crate::core::fractals::mandelbrot::view_state::{Step, ViewState, ViewStateError};
pub use crate::core::util::partition_bands::{available_workers, partition_bands};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::{WINDOW_TITLE, errors::GuiError, run_gui};
