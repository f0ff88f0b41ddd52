//! Geometry value objects - points and rectangles in OS pixel units

/// A point in integer pixel coordinates
///
/// The coordinate space depends on context: OS screen and client points
/// have a top-left origin, render-surface points have a bottom-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Mirror the Y axis within a surface of the given height
    ///
    /// Converts between top-left-origin and bottom-left-origin spaces.
    pub fn flip_y(&self, surface_height: i32) -> Self {
        Self {
            x: self.x,
            y: surface_height - self.y,
        }
    }
}

/// Width and height in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions, truncating toward zero
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            width: (self.width as f32 * factor) as i32,
            height: (self.height as f32 * factor) as i32,
        }
    }
}

/// A window rectangle defined by position and size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRect {
    /// Create a rectangle from position and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin covering `size`
    pub fn at_origin(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Rectangle of `percent` of `screen`, anchored to its bottom-right corner
    pub fn anchored_bottom_right(screen: Size, width_percent: f32, height_percent: f32) -> Self {
        let width = (screen.width as f32 * width_percent).round() as i32;
        let height = (screen.height as f32 * height_percent).round() as i32;
        Self::new(screen.width - width, screen.height - height, width, height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// DWM frame margins extended into the client area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameMargins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl FrameMargins {
    /// Margins of -1 extend the frame over the whole client area ("sheet of glass")
    pub const SHEET_OF_GLASS: FrameMargins = FrameMargins {
        left: -1,
        right: -1,
        top: -1,
        bottom: -1,
    };

    /// No frame extension
    pub const NONE: FrameMargins = FrameMargins {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };
}
