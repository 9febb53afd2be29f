use crate::core::data::complex::Complex;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::palettes::kinds::PaletteKind;
use crate::core::util::screen_to_plane::screen_to_plane;
use std::error::Error;
use std::fmt;

pub const DEFAULT_ZOOM: f64 = 0.005;
pub const DEFAULT_OFFSET: Complex = Complex::new(-0.5, 0.0);
pub const DEFAULT_ITERATION_CAP: u32 = 100;
pub const DEFAULT_QUALITY: u32 = 1;

/// Iterations added per step of the depth control.
pub const ITERATIONS_PER_STEP: u32 = 100;

pub const ZOOM_IN_FACTOR: f64 = 0.5;
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

/// A digit from 1 to 9 selecting a depth or quality step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step(u8);

impl Step {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(9);

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewStateError {
    NonPositiveZoom(f64),
    NonFiniteOffset(Complex),
    ZeroIterationCap,
    ZeroQuality,
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom(zoom) => {
                write!(f, "zoom must be a positive finite number, got {}", zoom)
            }
            Self::NonFiniteOffset(offset) => {
                write!(f, "centre must be finite, got ({}, {})", offset.real, offset.imag)
            }
            Self::ZeroIterationCap => write!(f, "iteration cap must be greater than zero"),
            Self::ZeroQuality => write!(f, "quality factor must be greater than zero"),
        }
    }
}

impl Error for ViewStateError {}

/// Session view of the plane.
///
/// `zoom` is plane units per pixel and `offset` is the plane point shown at the
/// centre of the raster. Values are only changed through the transitions
/// below, each of which returns a new state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    zoom: f64,
    offset: Complex,
    iteration_cap: u32,
    quality: u32,
    palette: PaletteKind,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: DEFAULT_OFFSET,
            iteration_cap: DEFAULT_ITERATION_CAP,
            quality: DEFAULT_QUALITY,
            palette: PaletteKind::default(),
        }
    }
}

impl ViewState {
    pub fn new(
        zoom: f64,
        offset: Complex,
        iteration_cap: u32,
        quality: u32,
        palette: PaletteKind,
    ) -> Result<Self, ViewStateError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewStateError::NonPositiveZoom(zoom));
        }
        if !offset.is_finite() {
            return Err(ViewStateError::NonFiniteOffset(offset));
        }
        if iteration_cap == 0 {
            return Err(ViewStateError::ZeroIterationCap);
        }
        if quality == 0 {
            return Err(ViewStateError::ZeroQuality);
        }

        Ok(Self {
            zoom,
            offset,
            iteration_cap,
            quality,
            palette,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    #[must_use]
    pub fn quality(&self) -> u32 {
        self.quality
    }

    #[must_use]
    pub fn palette(&self) -> PaletteKind {
        self.palette
    }

    #[must_use]
    pub fn plane_point(&self, x: f64, y: f64, width: u32, height: u32) -> Complex {
        screen_to_plane(x, y, width, height, self.zoom, self.offset)
    }

    /// Scales the zoom by `factor` while keeping the plane point under
    /// `(x, y)` at the same screen position.
    #[must_use]
    pub fn anchored_zoom(self, x: f64, y: f64, width: u32, height: u32, factor: f64) -> Self {
        assert!(
            factor.is_finite() && factor > 0.0,
            "zoom factor must be positive and finite, got {}",
            factor
        );

        let anchor = self.plane_point(x, y, width, height);
        let zoom = self.zoom * factor;
        let offset = anchor + (self.offset - anchor).scale(factor);

        // Past the range of f64 the view would stop being a valid state
        if !zoom.is_normal() || !offset.is_finite() {
            log::debug!("zoom limit reached at {:e}, keeping view", self.zoom);
            return self;
        }

        Self {
            zoom,
            offset,
            ..self
        }
    }

    #[must_use]
    pub fn with_iteration_step(self, step: Step) -> Self {
        Self {
            iteration_cap: step.get() * ITERATIONS_PER_STEP,
            ..self
        }
    }

    #[must_use]
    pub fn with_quality_step(self, step: Step) -> Self {
        Self {
            quality: step.get(),
            ..self
        }
    }

    #[must_use]
    pub fn with_next_palette(self) -> Self {
        Self {
            palette: self.palette.next(),
            ..self
        }
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    #[must_use]
    pub fn render_request(&self, width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            width,
            height,
            zoom: self.zoom,
            offset: self.offset,
            iteration_cap: self.iteration_cap,
            quality: self.quality,
            palette: self.palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;
    const TOLERANCE: f64 = 1e-12;

    fn step(value: u8) -> Step {
        Step::new(value).unwrap()
    }

    fn assert_close(a: Complex, b: Complex) {
        assert!(
            (a.real - b.real).abs() < TOLERANCE && (a.imag - b.imag).abs() < TOLERANCE,
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn mutated() -> ViewState {
        ViewState::default()
            .anchored_zoom(10.0, 590.0, WIDTH, HEIGHT, ZOOM_IN_FACTOR)
            .with_iteration_step(step(7))
            .with_quality_step(step(4))
            .with_next_palette()
            .with_next_palette()
    }

    #[test]
    fn test_defaults() {
        let view = ViewState::default();

        assert_eq!(view.zoom(), 0.005);
        assert_eq!(view.offset(), Complex::new(-0.5, 0.0));
        assert_eq!(view.iteration_cap(), 100);
        assert_eq!(view.quality(), 1);
        assert_eq!(view.palette(), PaletteKind::LinearLight);
    }

    #[test]
    fn test_step_range() {
        assert_eq!(Step::new(0), None);
        assert_eq!(Step::new(10), None);
        assert_eq!(Step::new(1).map(Step::get), Some(1));
        assert_eq!(Step::new(9).map(Step::get), Some(9));
    }

    #[test]
    fn test_iteration_steps() {
        let view = ViewState::default();

        assert_eq!(view.with_iteration_step(step(1)).iteration_cap(), 100);
        assert_eq!(view.with_iteration_step(step(9)).iteration_cap(), 900);
        assert_eq!(view.with_iteration_step(step(4)).quality(), 1);
    }

    #[test]
    fn test_quality_steps() {
        let view = ViewState::default().with_quality_step(step(6));

        assert_eq!(view.quality(), 6);
        assert_eq!(view.with_quality_step(step(1)).quality(), 1);
        assert_eq!(view.iteration_cap(), 100);
    }

    #[test]
    fn test_zoom_in_at_centre_keeps_offset() {
        let view = ViewState::default().anchored_zoom(400.0, 300.0, WIDTH, HEIGHT, ZOOM_IN_FACTOR);

        assert_eq!(view.zoom(), 0.0025);
        assert_close(view.offset(), DEFAULT_OFFSET);
    }

    #[test]
    fn test_anchor_stays_under_cursor() {
        let before = ViewState::default();
        for (x, y) in [(0.0, 0.0), (123.0, 456.0), (799.0, 599.0)] {
            for factor in [ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR] {
                let after = before.anchored_zoom(x, y, WIDTH, HEIGHT, factor);

                assert_close(
                    after.plane_point(x, y, WIDTH, HEIGHT),
                    before.plane_point(x, y, WIDTH, HEIGHT),
                );
            }
        }
    }

    #[test]
    fn test_zoom_in_then_out_restores_view() {
        let start = mutated();
        for (x, y) in [(0.0, 0.0), (250.0, 75.0), (799.0, 10.0)] {
            let round_trip = start
                .anchored_zoom(x, y, WIDTH, HEIGHT, ZOOM_IN_FACTOR)
                .anchored_zoom(x, y, WIDTH, HEIGHT, ZOOM_OUT_FACTOR);

            assert!((round_trip.zoom() - start.zoom()).abs() < TOLERANCE);
            assert_close(round_trip.offset(), start.offset());
            assert_eq!(round_trip.iteration_cap(), start.iteration_cap());
        }
    }

    #[test]
    fn test_repeated_zoom_in_stops_at_smallest_zoom() {
        let mut view = ViewState::default();
        for _ in 0..1200 {
            view = view.anchored_zoom(100.0, 100.0, WIDTH, HEIGHT, ZOOM_IN_FACTOR);

            assert!(view.zoom().is_normal() && view.zoom() > 0.0);
            assert!(view.offset().is_finite());
        }

        let zoomed_out = view.anchored_zoom(100.0, 100.0, WIDTH, HEIGHT, ZOOM_OUT_FACTOR);
        assert!(zoomed_out.zoom() > view.zoom());
    }

    #[test]
    fn test_repeated_zoom_out_stops_before_overflow() {
        for (x, y) in [(400.0, 300.0), (100.0, 100.0)] {
            let mut view = ViewState::default();
            for _ in 0..1200 {
                view = view.anchored_zoom(x, y, WIDTH, HEIGHT, ZOOM_OUT_FACTOR);

                assert!(view.zoom().is_finite() && view.zoom() > 0.0);
                assert!(view.offset().is_finite());
            }

            let zoomed_in = view.anchored_zoom(x, y, WIDTH, HEIGHT, ZOOM_IN_FACTOR);
            assert!(zoomed_in.zoom() < view.zoom());
        }
    }

    #[test]
    #[should_panic(expected = "zoom factor must be positive")]
    fn test_zero_factor_is_a_programming_error() {
        let _ = ViewState::default().anchored_zoom(0.0, 0.0, WIDTH, HEIGHT, 0.0);
    }

    #[test]
    fn test_cycle_palette_wraps() {
        let start = ViewState::default();
        let mut view = start;
        for _ in 0..PaletteKind::ALL.len() {
            view = view.with_next_palette();
            assert_eq!(view.zoom(), start.zoom());
        }

        assert_eq!(view.palette(), start.palette());
    }

    #[test]
    fn test_reset_restores_defaults() {
        assert_ne!(mutated(), ViewState::default());
        assert_eq!(mutated().reset(), ViewState::default());
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            ViewState::new(0.0, DEFAULT_OFFSET, 100, 1, PaletteKind::Warm),
            Err(ViewStateError::NonPositiveZoom(0.0))
        );
        assert_eq!(
            ViewState::new(0.01, DEFAULT_OFFSET, 0, 1, PaletteKind::Warm),
            Err(ViewStateError::ZeroIterationCap)
        );
        assert_eq!(
            ViewState::new(0.01, DEFAULT_OFFSET, 100, 0, PaletteKind::Warm),
            Err(ViewStateError::ZeroQuality)
        );
        assert!(matches!(
            ViewState::new(0.01, Complex::new(f64::NAN, 0.0), 100, 1, PaletteKind::Warm),
            Err(ViewStateError::NonFiniteOffset(_))
        ));
        assert!(ViewState::new(0.01, DEFAULT_OFFSET, 300, 2, PaletteKind::Cool).is_ok());
    }

    #[test]
    fn test_render_request_copies_every_field() {
        let view = mutated();
        let request = view.render_request(WIDTH, HEIGHT);

        assert_eq!(request.width, WIDTH);
        assert_eq!(request.height, HEIGHT);
        assert_eq!(request.zoom, view.zoom());
        assert_eq!(request.offset, view.offset());
        assert_eq!(request.iteration_cap, 700);
        assert_eq!(request.quality, 4);
        assert_eq!(request.palette, PaletteKind::Spectrum);
    }
}
