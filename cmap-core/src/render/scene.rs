/// Stacking layer of a shape. Declared bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Canvas,
    Grid,
    Compaction,
    RebalanceStart,
    RebalanceEnd,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        layer: Layer,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Line {
        layer: Layer,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

impl Shape {
    pub fn layer(&self) -> Layer {
        match self {
            Shape::Rect { layer, .. } | Shape::Line { layer, .. } => *layer,
        }
    }

    /// Left edge for rects, start point for lines.
    pub fn x(&self) -> f64 {
        match self {
            Shape::Rect { x, .. } => *x,
            Shape::Line { x1, .. } => *x1,
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Shape::Rect { y, .. } => *y,
            Shape::Line { y1, .. } => *y1,
        }
    }
}

/// A laid-out timeline: document size plus shapes in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    shapes: Vec<Shape>,
}

impl Scene {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.layer() == layer)
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.layer(layer).count()
    }

    pub(crate) fn len(&self) -> usize {
        self.shapes.len()
    }
}
