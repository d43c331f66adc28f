use crate::controllers::interactive::data::click_report::ClickReport;
use crate::controllers::interactive::data::frame_info::FrameInfo;
use crate::controllers::interactive::errors::SessionError;
use crate::controllers::interactive::ports::audio_output::AudioOutputPort;
use crate::controllers::interactive::ports::frame_presenter::FramePresenterPort;
use crate::controllers::interactive::render_phase::RenderPhase;
use crate::controllers::interactive::session_config::{SessionConfig, ZoomDirection};
use crate::core::actions::render_raster::render_raster::render_raster;
use crate::core::audio::synthesizer::Synthesizer;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::render_quality::RenderQuality;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::escape_time;
use crate::core::fractals::mandelbrot::iteration_budget::IterationBudget;
use crate::core::util::calculate_strip_count::calculate_strip_count;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use log::{debug, info};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Rendered(FrameInfo),
    /// A precise pass was requested but nothing changed since the last one.
    Skipped,
}

/// Owns the view, the raster and the redraw cycle of one explorer window.
///
/// Everything runs on the calling thread except the strip workers of a
/// render pass, which are joined before [`RenderSession::render`] returns.
pub struct RenderSession<P: FramePresenterPort, A: AudioOutputPort> {
    config: SessionConfig,
    viewport: Viewport,
    reference_width: f64,
    budget: IterationBudget,
    phase: RenderPhase,
    dirty: bool,
    raster: Raster,
    strip_count: u32,
    generation: u64,
    last_frame: Option<FrameInfo>,
    last_click: Option<ClickReport>,
    synthesizer: Synthesizer,
    presenter: P,
    audio: A,
}

impl<P: FramePresenterPort, A: AudioOutputPort> RenderSession<P, A> {
    pub fn new(config: SessionConfig, presenter: P, audio: A) -> Result<Self, SessionError> {
        let raster = Raster::new(config.width, config.height)?;
        let viewport = Viewport::default();
        let strip_count = calculate_strip_count(config.height);

        debug!(
            "session created: {}x{} raster, {} strips, {} strategy",
            config.width,
            config.height,
            strip_count,
            config.strategy.display_name()
        );

        Ok(Self {
            config,
            viewport,
            reference_width: viewport.width(),
            budget: IterationBudget::for_zoom(viewport.width(), viewport.width()),
            phase: RenderPhase::Idle,
            dirty: true,
            raster,
            strip_count,
            generation: 0,
            last_frame: None,
            last_click: None,
            synthesizer: Synthesizer::new(config.synthesis),
            presenter,
            audio,
        })
    }

    /// Shows a fast preview of the initial view and schedules the precise
    /// pass behind it.
    pub fn start(&mut self, now: Instant) -> Result<FrameInfo, SessionError> {
        self.view_changed(now)
    }

    /// Renders the current view at `quality` and presents it.
    ///
    /// A precise request is skipped when the view has not changed since the
    /// last precise pass. Fast requests always render.
    pub fn render(&mut self, quality: RenderQuality) -> Result<RenderOutcome, SessionError> {
        if quality == RenderQuality::Precise && !self.dirty {
            debug!("precise render skipped, view unchanged");
            return Ok(RenderOutcome::Skipped);
        }

        Ok(RenderOutcome::Rendered(self.render_pass(quality)?))
    }

    fn render_pass(&mut self, quality: RenderQuality) -> Result<FrameInfo, SessionError> {
        let viewport = self.viewport;
        let max_iterations = self.budget.for_quality(quality);

        let start = Instant::now();
        render_raster(
            self.config.strategy,
            &mut self.raster,
            viewport,
            max_iterations,
            self.strip_count,
        )?;
        let render_duration = start.elapsed();

        self.generation += 1;

        if quality == RenderQuality::Precise {
            self.dirty = false;
        }

        let frame = FrameInfo {
            generation: self.generation,
            quality,
            max_iterations,
            viewport,
            strips: self.strip_count,
            render_duration,
        };

        debug!(
            "frame {}: {:?} pass, {} iterations, {} strips in {:?}",
            frame.generation, quality, max_iterations, frame.strips, render_duration
        );

        self.presenter.present(&self.raster, &frame);
        self.last_frame = Some(frame.clone());

        Ok(frame)
    }

    /// Zooms about the plane point under pixel `(x, y)` and shows a fast
    /// preview of the new view.
    pub fn zoom_at(
        &mut self,
        x: i32,
        y: i32,
        direction: ZoomDirection,
        now: Instant,
    ) -> Result<FrameInfo, SessionError> {
        let center = self.plane_point(Point { x, y })?;
        let factor = self.config.zoom.factor(direction);

        self.viewport = self.viewport.zoomed_about(center, factor)?;
        self.budget = IterationBudget::for_zoom(self.reference_width, self.viewport.width());

        debug!(
            "zoom {:?} about ({}, {}), budget now {}",
            direction,
            center.real,
            center.imag,
            self.budget.full()
        );

        self.view_changed(now)
    }

    /// Shifts the view so the content follows a drag of `(dx, dy)` pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, now: Instant) -> Result<FrameInfo, SessionError> {
        let delta_real = -dx * self.viewport.width() / f64::from(self.raster.width());
        let delta_imag = -dy * self.viewport.height() / f64::from(self.raster.height());

        self.viewport = self.viewport.panned_by(delta_real, delta_imag)?;

        self.view_changed(now)
    }

    /// Runs the precise pass once the debounce since the last view change
    /// has elapsed. Returns the frame if one was rendered.
    pub fn tick(&mut self, now: Instant) -> Result<Option<FrameInfo>, SessionError> {
        if !self.phase.precise_due(now, self.config.debounce) {
            return Ok(None);
        }

        self.phase = self.phase.begin_precise();
        let outcome = self.render(RenderQuality::Precise);
        self.phase = self.phase.finish_precise();

        match outcome? {
            RenderOutcome::Rendered(frame) => Ok(Some(frame)),
            RenderOutcome::Skipped => Ok(None),
        }
    }

    /// Evaluates the point under pixel `(x, y)` at the full budget and
    /// replaces whatever is playing with its tone.
    pub fn click(&mut self, x: i32, y: i32) -> Result<ClickReport, SessionError> {
        let pixel = Point { x, y };
        let point = self.plane_point(pixel)?;
        let max_iterations = self.budget.full();
        let iterations = escape_time(point.real, point.imag, max_iterations);

        let buffer = self.synthesizer.synthesize(iterations, max_iterations, point);
        self.audio.clear_queued();
        self.audio.enqueue(buffer);

        info!(
            "Clicked at ({}, {}) with {} iterations.",
            point.real, point.imag, iterations
        );

        let report = ClickReport {
            pixel,
            point,
            iterations,
            max_iterations,
            frequency: self.synthesizer.primary_frequency(iterations, max_iterations),
        };
        self.last_click = Some(report);

        Ok(report)
    }

    /// Forces the next precise render to run even if the view is unchanged.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// When [`RenderSession::tick`] next has work to do, if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.phase.deadline(self.config.debounce)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    #[must_use]
    pub fn needs_update(&self) -> bool {
        self.phase.needs_update()
    }

    #[must_use]
    pub fn high_quality(&self) -> bool {
        self.phase.high_quality()
    }

    #[must_use]
    pub fn rendering_high_quality(&self) -> bool {
        self.phase.rendering_high_quality()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn strip_count(&self) -> u32 {
        self.strip_count
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameInfo> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_click(&self) -> Option<&ClickReport> {
        self.last_click.as_ref()
    }

    #[must_use]
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    fn plane_point(&self, pixel: Point) -> Result<Complex, SessionError> {
        Ok(pixel_to_complex_coords(
            pixel,
            self.raster.width(),
            self.raster.height(),
            self.viewport,
        )?)
    }

    fn view_changed(&mut self, now: Instant) -> Result<FrameInfo, SessionError> {
        self.dirty = true;
        self.phase = self.phase.view_changed(now);

        self.render_pass(RenderQuality::Fast)
    }
}
