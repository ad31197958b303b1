#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_client(client_x: i32, client_y: i32) -> Self {
        Self::new(f64::from(client_x), f64::from(client_y))
    }

    /// Far enough off-screen that a glow centered here draws nothing.
    pub fn offscreen(radius: f64) -> Self {
        Self::new(-radius, -radius)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position within the box as fractions in `0.0..=1.0` for
    /// points inside it. `None` for a collapsed box.
    pub fn normalize(&self, pointer: PointerPosition) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }

        Some((
            (pointer.x - self.left) / self.width,
            (pointer.y - self.top) / self.height,
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowDisc {
    pub left: f64,
    pub top: f64,
    pub diameter: f64,
}

impl GlowDisc {
    pub fn centered_on(pointer: PointerPosition, radius: f64) -> Self {
        Self {
            left: pointer.x - radius,
            top: pointer.y - radius,
            diameter: radius * 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "--glow-left: {:.2}px; --glow-top: {:.2}px; --glow-size: {:.2}px;",
            self.left, self.top, self.diameter
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    /// Degrees around the vertical axis; positive when the pointer is
    /// right of center.
    pub rotate_y: f64,
    /// Degrees around the horizontal axis; positive when the pointer is
    /// above center.
    pub rotate_x: f64,
    pub glow_x: f64,
    pub glow_y: f64,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Tilt {
    pub fn neutral() -> Self {
        Self {
            rotate_y: 0.0,
            rotate_x: 0.0,
            glow_x: 50.0,
            glow_y: 50.0,
        }
    }

    pub fn from_pointer(pointer: PointerPosition, bounds: Bounds, max_degrees: f64) -> Option<Self> {
        let (nx, ny) = bounds.normalize(pointer)?;

        Some(Self {
            rotate_y: (nx - 0.5) * 2.0 * max_degrees,
            rotate_x: (ny - 0.5) * -2.0 * max_degrees,
            glow_x: nx * 100.0,
            glow_y: ny * 100.0,
        })
    }

    pub fn transform(&self, scale: f64) -> String {
        format!(
            "perspective(800px) rotateY({:.3}deg) rotateX({:.3}deg) scale({scale})",
            self.rotate_y, self.rotate_x
        )
    }
}
