// File: crates/chart-core/src/chart.rs
// Summary: WaveChart: derives the four scales from the observations and lays out the scene
// (wave line, period/direction markers, direction arrows, axes) for the vector and raster backends.

use std::path::Path;

use tracing::{debug, info};

use crate::axis::{Axis, DEFAULT_TICK_COUNT};
use crate::color::{interpolate_rainbow, Rgb};
use crate::config::RenderOptions;
use crate::dataset;
use crate::error::Result;
use crate::geometry::{arrow_end, Point, Rect};
use crate::observation::{Observation, Observations, DIRECTION_RANGE};
use crate::scale::{LinearScale, Scale, SequentialScale, SqrtScale, TimeScale};
use crate::theme::Theme;
use crate::tooltip::TooltipContent;
use crate::{raster, svg};

/// Output document kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Hosting page with the chart mounted at `#chart` and hover tooltips.
    Html,
    /// Standalone vector image with hover tooltips.
    Svg,
    /// Raster image; no tooltips.
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// The four visual encodings, computed once per render.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    /// date -> horizontal position
    pub x: TimeScale,
    /// wave height -> vertical position (inverted)
    pub y: LinearScale,
    /// wave period -> marker radius
    pub radius: SqrtScale,
    /// wave direction -> marker fill
    pub color: SequentialScale,
}

impl Scales {
    pub fn derive(observations: &Observations, opts: &RenderOptions) -> Self {
        let width = opts.content_width();
        let height = opts.content_height();

        let x = TimeScale::new(observations.first().date, observations.last().date, (0.0, width));

        let (_, max_height) = observations.extent(|o| o.wave_height);
        let y = LinearScale::new((0.0, max_height), (height, 0.0)).nice(DEFAULT_TICK_COUNT);

        let periods = observations.extent(|o| o.wave_period);
        let radius = SqrtScale::new(periods, opts.radius_range);

        let color = SequentialScale::new(DIRECTION_RANGE, interpolate_rainbow);

        debug!(
            x_domain = %format!("{}..{}", x.start, x.end),
            y_domain = ?y.domain,
            radius_domain = ?radius.domain,
            "derived scales"
        );
        Self { x, y, radius, color }
    }

    /// Plot-space position of an observation.
    pub fn position(&self, o: &Observation) -> Point {
        Point::new(self.x.apply(o.date), self.y.apply(o.wave_height))
    }
}

/// One circle per observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub fill: Rgb,
    pub tooltip: TooltipContent,
}

/// Line segment from an observation point along its wave direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub start: Point,
    pub end: Point,
}

/// Fully resolved scene. Coordinates of line, markers, arrows and axes are in plot space;
/// `content` places plot space on the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub content: Rect,
    pub theme: Theme,
    pub line_width: f64,
    pub draw_labels: bool,
    pub line: Vec<Point>,
    pub markers: Vec<Marker>,
    pub arrows: Vec<Arrow>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

pub struct WaveChart {
    observations: Observations,
}

impl WaveChart {
    pub fn new(observations: Observations) -> Self {
        Self { observations }
    }

    /// Chart over the compiled-in Barcelona week.
    pub fn barcelona_week() -> Result<Self> {
        Ok(Self::new(dataset::barcelona_week()?))
    }

    pub fn observations(&self) -> &Observations {
        &self.observations
    }

    pub fn scales(&self, opts: &RenderOptions) -> Scales {
        Scales::derive(&self.observations, opts)
    }

    /// Resolve every drawable element. Pure: same input, same layout.
    pub fn layout(&self, opts: &RenderOptions) -> ChartLayout {
        let scales = self.scales(opts);

        let line: Vec<Point> = self.observations.iter().map(|o| scales.position(o)).collect();

        let markers = self
            .observations
            .iter()
            .zip(&line)
            .map(|(o, &center)| Marker {
                center,
                radius: scales.radius.apply(o.wave_period),
                fill: scales.color.apply(o.wave_direction),
                tooltip: TooltipContent::for_observation(o),
            })
            .collect();

        let arrows = self
            .observations
            .iter()
            .zip(&line)
            .map(|(o, &start)| Arrow { start, end: arrow_end(start, o.wave_direction, opts.arrow_length) })
            .collect();

        ChartLayout {
            width: opts.width,
            height: opts.height,
            content: Rect::from_ltwh(
                opts.insets.left as f64,
                opts.insets.top as f64,
                opts.content_width(),
                opts.content_height(),
            ),
            theme: opts.theme,
            line_width: opts.line_width,
            draw_labels: opts.draw_labels,
            line,
            markers,
            arrows,
            x_axis: Axis::daily(&scales.x),
            y_axis: Axis::linear(&scales.y),
        }
    }

    /// Standalone SVG document.
    pub fn render_to_svg(&self, opts: &RenderOptions) -> String {
        svg::render_svg(&self.layout(opts))
    }

    /// HTML page hosting the chart at `#chart`.
    pub fn render_to_html(&self, opts: &RenderOptions) -> String {
        svg::render_html(&self.layout(opts))
    }

    /// PNG bytes rendered on a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        raster::render_png_bytes(&self.layout(opts))
    }

    /// Render in `format` and write to `path`, creating parent directories.
    pub fn render_to_file(
        &self,
        opts: &RenderOptions,
        format: OutputFormat,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        let bytes = match format {
            OutputFormat::Html => self.render_to_html(opts).into_bytes(),
            OutputFormat::Svg => self.render_to_svg(opts).into_bytes(),
            OutputFormat::Png => self.render_to_png_bytes(opts)?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), format = format.extension(), "wrote chart");
        Ok(())
    }
}
