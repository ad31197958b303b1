#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    pub fn hidden_transform(self, offset_px: f64) -> String {
        match self {
            Self::Up => format!("translateY({offset_px}px)"),
            Self::Down => format!("translateY({}px)", -offset_px),
            Self::Left => format!("translateX({offset_px}px)"),
            Self::Right => format!("translateX({}px)", -offset_px),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection report. Returns `true` only for the report
    /// that flips the latch; the caller stops observing at that point.
    pub fn observe(&mut self, is_intersecting: bool, visible_ratio: f64) -> bool {
        if self.revealed || !is_intersecting || visible_ratio < self.threshold {
            return false;
        }

        self.revealed = true;
        true
    }
}

pub fn reveal_style(
    revealed: bool,
    direction: RevealDirection,
    offset_px: f64,
    duration_ms: u32,
    delay_secs: f64,
) -> String {
    let (opacity, transform) = if revealed {
        (1, "translate(0)".to_string())
    } else {
        (0, direction.hidden_transform(offset_px))
    };
    let duration = f64::from(duration_ms) / 1_000.0;

    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity {duration}s ease {delay_secs}s, transform {duration}s ease {delay_secs}s;"
    )
}
