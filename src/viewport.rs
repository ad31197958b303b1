#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    /// `None` means there is no window to measure, which degrades to wide.
    pub fn classify(width: Option<f64>, breakpoint: f64) -> Self {
        match width {
            Some(width) if width <= breakpoint => Self::Narrow,
            _ => Self::Wide,
        }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn breakpoint_width_counts_as_narrow() {
        assert_eq!(ViewportClass::classify(Some(768.0), 768.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::classify(Some(768.5), 768.0), ViewportClass::Wide);
    }

    #[test]
    fn missing_window_is_wide() {
        assert_eq!(ViewportClass::classify(None, 768.0), ViewportClass::Wide);
        assert!(!ViewportClass::default().is_narrow());
    }

    #[test]
    fn latest_resize_wins() {
        let widths = [1_280.0, 600.0, 1_024.0, 375.0];
        let last = widths
            .iter()
            .map(|width| ViewportClass::classify(Some(*width), 768.0))
            .last();

        assert_eq!(last, Some(ViewportClass::Narrow));
    }

    proptest! {
        #[test]
        fn narrow_iff_width_at_or_below_threshold(width in 0.0f64..4_000.0, threshold in 320.0f64..2_560.0) {
            let class = ViewportClass::classify(Some(width), threshold);
            prop_assert_eq!(class.is_narrow(), width <= threshold);
        }
    }
}
