//! Window layout: the toolbar strip on top, the page below it.

/// A rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LogicalRect {
    pub fn to_wry(self) -> wry::Rect {
        wry::Rect {
            position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(self.x, self.y)),
            size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(self.width, self.height)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeLayout {
    pub toolbar: LogicalRect,
    pub page: LogicalRect,
}

impl ChromeLayout {
    /// Split a window of `width` x `height` logical pixels. The toolbar never
    /// exceeds the window; the page gets whatever is left.
    pub fn compute(width: f64, height: f64, toolbar_height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let bar = toolbar_height.clamp(0.0, height);
        Self {
            toolbar: LogicalRect {
                x: 0.0,
                y: 0.0,
                width,
                height: bar,
            },
            page: LogicalRect {
                x: 0.0,
                y: bar,
                width,
                height: height - bar,
            },
        }
    }
}
