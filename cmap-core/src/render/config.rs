/// Drawing-space width of the plot area.
pub const WIDTH: f64 = 1300.0;
pub const HEIGHT: f64 = 650.0;
pub const PADDING: f64 = 50.0;
pub const GRID_SIZE: f64 = 100.0;
pub const VBUCKET_ROWS: u32 = 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub canvas_fill: &'static str,
    pub canvas_stroke: &'static str,
    pub grid_stroke: &'static str,
    pub compaction: &'static str,
    pub rebalance_start: &'static str,
    pub rebalance_end: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            canvas_fill: "white",
            canvas_stroke: "black",
            grid_stroke: "black",
            compaction: "#F89406",
            rebalance_start: "#DE1B1B",
            rebalance_end: "#118C4E",
        }
    }
}

/// Geometry and colors of the timeline. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub grid_size: f64,
    pub grid_dash: &'static str,
    pub vbucket_rows: u32,
    /// Compaction mark width, in rows.
    pub mark_rows: f64,
    pub rebalance_stroke_width: f64,
    pub palette: Palette,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            grid_size: GRID_SIZE,
            grid_dash: "5,5",
            vbucket_rows: VBUCKET_ROWS,
            mark_rows: 4.0,
            rebalance_stroke_width: 2.0,
            palette: Palette::default(),
        }
    }
}

impl TimelineConfig {
    pub fn row_height(&self) -> f64 {
        self.height / f64::from(self.vbucket_rows)
    }

    /// Top edge of the plot area, and left edge of the canvas.
    pub fn inset(&self) -> f64 {
        self.padding / 2.0
    }

    pub fn document_width(&self) -> f64 {
        self.width + 2.0 * self.padding
    }

    pub fn document_height(&self) -> f64 {
        self.height + self.padding
    }
}
