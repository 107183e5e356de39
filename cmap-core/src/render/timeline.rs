use crate::render::config::TimelineConfig;
use crate::render::error::RenderError;
use crate::render::scale::TimeScale;
use crate::render::scene::{Layer, Scene, Shape};
use crate::scan::{ScanOutcome, TimestampMs, VbucketId};
use std::path::Path;
use svg::Document;
use svg::Node;
use svg::node::element::{Line, Rectangle};

const CRISP_EDGES: &str = "crispEdges";

pub struct TimelineRenderer {
    config: TimelineConfig,
}

impl Default for TimelineRenderer {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl TimelineRenderer {
    pub fn new(config: TimelineConfig) -> Self {
        Self { config }
    }

    /// Lay out every shape of the timeline.
    ///
    /// Fails before producing anything when the time range cannot be scaled.
    pub fn layout(&self, outcome: &ScanOutcome) -> Result<Scene, RenderError> {
        let scale = TimeScale::new(&outcome.range, self.config.width)?;

        let mut scene = Scene::new(self.config.document_width(), self.config.document_height());
        self.add_canvas(&mut scene);
        self.add_grid(&mut scene);

        for (vbucket, timestamps) in outcome.compactions.iter() {
            if vbucket.0 >= self.config.vbucket_rows {
                tracing::warn!(
                    %vbucket,
                    rows = self.config.vbucket_rows,
                    "vbucket outside the plotted rows; its marks fall below the canvas"
                );
            }
            for ts in timestamps {
                self.add_compaction(&mut scene, &scale, *ts, vbucket);
            }
        }

        for ts in &outcome.rebalances.starts {
            self.add_rebalance_marker(&mut scene, &scale, *ts, Layer::RebalanceStart);
        }
        for ts in &outcome.rebalances.ends {
            self.add_rebalance_marker(&mut scene, &scale, *ts, Layer::RebalanceEnd);
        }

        tracing::debug!(shapes = scene.len(), "timeline laid out");

        Ok(scene)
    }

    pub fn draw(&self, scene: &Scene) -> Document {
        let mut document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("version", "1.1")
            .set("width", scene.width)
            .set("height", scene.height)
            .set("viewBox", format!("0 0 {} {}", scene.width, scene.height));

        for shape in scene.shapes() {
            match *shape {
                Shape::Rect {
                    layer,
                    x,
                    y,
                    width,
                    height,
                } => {
                    let rect = Rectangle::new()
                        .set("x", x)
                        .set("y", y)
                        .set("width", width)
                        .set("height", height);
                    document.append(self.style(rect, layer));
                }
                Shape::Line {
                    layer,
                    x1,
                    y1,
                    x2,
                    y2,
                } => {
                    let line = Line::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2);
                    document.append(self.style(line, layer));
                }
            }
        }

        document
    }

    pub fn render(&self, outcome: &ScanOutcome) -> Result<Document, RenderError> {
        let scene = self.layout(outcome)?;
        Ok(self.draw(&scene))
    }

    pub fn save(&self, document: &Document, path: &Path) -> Result<(), RenderError> {
        svg::save(path, document).map_err(|e| RenderError::write(path, e))?;
        tracing::info!(path = %path.display(), "timeline written");
        Ok(())
    }

    //--------------------------------------------------------------------------
    // Layout
    //--------------------------------------------------------------------------

    fn add_canvas(&self, scene: &mut Scene) {
        let inset = self.config.inset();
        scene.push(Shape::Rect {
            layer: Layer::Canvas,
            x: inset,
            y: inset,
            width: self.config.width + 1.0,
            height: self.config.height,
        });
    }

    fn add_grid(&self, scene: &mut Scene) {
        if self.config.grid_size <= 0.0 {
            return;
        }

        let inset = self.config.inset();
        let mut x = inset;
        while x < self.config.width {
            scene.push(Shape::Line {
                layer: Layer::Grid,
                x1: x,
                y1: inset,
                x2: x,
                y2: self.config.height + inset,
            });
            x += self.config.grid_size;
        }
    }

    fn add_compaction(
        &self,
        scene: &mut Scene,
        scale: &TimeScale,
        ts: TimestampMs,
        vbucket: VbucketId,
    ) {
        let row = self.config.row_height();
        scene.push(Shape::Rect {
            layer: Layer::Compaction,
            x: self.config.padding + scale.scale(ts),
            y: self.config.inset() + row * f64::from(vbucket.0),
            width: row * self.config.mark_rows,
            height: row,
        });
    }

    fn add_rebalance_marker(
        &self,
        scene: &mut Scene,
        scale: &TimeScale,
        ts: TimestampMs,
        layer: Layer,
    ) {
        let x = self.config.padding + scale.scale(ts);
        let inset = self.config.inset();
        scene.push(Shape::Line {
            layer,
            x1: x,
            y1: inset,
            x2: x,
            y2: self.config.height + inset,
        });
    }

    //--------------------------------------------------------------------------
    // Styling
    //--------------------------------------------------------------------------

    fn style<T: Node>(&self, mut element: T, layer: Layer) -> T {
        let palette = &self.config.palette;
        match layer {
            Layer::Canvas => {
                element.assign("fill", palette.canvas_fill);
                element.assign("stroke", palette.canvas_stroke);
                element.assign("shape-rendering", CRISP_EDGES);
            }
            Layer::Grid => {
                element.assign("stroke", palette.grid_stroke);
                element.assign("stroke-dasharray", self.config.grid_dash);
                element.assign("shape-rendering", CRISP_EDGES);
            }
            Layer::Compaction => {
                element.assign("fill", palette.compaction);
                element.assign("stroke-width", 0);
            }
            Layer::RebalanceStart => {
                element.assign("stroke", palette.rebalance_start);
                element.assign("stroke-width", self.config.rebalance_stroke_width);
            }
            Layer::RebalanceEnd => {
                element.assign("stroke", palette.rebalance_end);
                element.assign("stroke-width", self.config.rebalance_stroke_width);
            }
        }
        element
    }
}
