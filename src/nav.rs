use crate::sections::Section;
use crate::viewport::ViewportClass;

/// Header state. The menu only exists on narrow viewports; on wide ones
/// `menu_open` is always false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn on_scroll(self, scroll_y: f64, threshold: f64) -> Self {
        Self {
            scrolled: scroll_y > threshold,
            ..self
        }
    }

    pub fn toggle_menu(self, viewport: ViewportClass) -> Self {
        Self {
            menu_open: viewport.is_narrow() && !self.menu_open,
            ..self
        }
    }

    /// Picking a section always leaves the menu closed. The caller owns
    /// the scroll-to side effect.
    pub fn select(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    pub fn on_viewport(self, viewport: ViewportClass) -> Self {
        Self {
            menu_open: self.menu_open && viewport.is_narrow(),
            ..self
        }
    }

    /// Solid background and blur once scrolled or while the menu covers
    /// the page.
    pub fn is_opaque(&self) -> bool {
        self.scrolled || self.menu_open
    }

    pub fn visible_links(&self, viewport: ViewportClass) -> &'static [Section] {
        if viewport.is_narrow() && !self.menu_open {
            &[]
        } else {
            &Section::ALL
        }
    }
}

/// Keys that press a focused custom button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_toggles_both_ways() {
        let state = NavState::default();

        let scrolled = state.on_scroll(51.0, 50.0);
        assert!(scrolled.scrolled);
        assert!(scrolled.is_opaque());

        let at_top = scrolled.on_scroll(50.0, 50.0);
        assert!(!at_top.scrolled);
        assert!(!at_top.is_opaque());
    }

    #[test]
    fn menu_toggles_only_on_narrow() {
        let state = NavState::default();

        assert!(!state.toggle_menu(ViewportClass::Wide).menu_open);

        let open = state.toggle_menu(ViewportClass::Narrow);
        assert!(open.menu_open);
        assert!(open.is_opaque());
        assert!(!open.toggle_menu(ViewportClass::Narrow).menu_open);
    }

    #[test]
    fn selecting_a_section_closes_the_menu() {
        let open = NavState::default()
            .on_scroll(300.0, 50.0)
            .toggle_menu(ViewportClass::Narrow);

        let after = open.select();

        assert!(!after.menu_open);
        assert!(after.scrolled);
    }

    #[test]
    fn widening_viewport_drops_the_menu() {
        let open = NavState::default().toggle_menu(ViewportClass::Narrow);

        assert!(!open.on_viewport(ViewportClass::Wide).menu_open);
        assert!(open.on_viewport(ViewportClass::Narrow).menu_open);
    }

    #[test]
    fn links_render_everywhere_except_closed_narrow_menu() {
        let closed = NavState::default();
        let open = closed.toggle_menu(ViewportClass::Narrow);

        assert_eq!(closed.visible_links(ViewportClass::Wide).len(), 7);
        assert!(closed.visible_links(ViewportClass::Narrow).is_empty());
        assert_eq!(open.visible_links(ViewportClass::Narrow), &Section::ALL);
    }

    #[test]
    fn enter_and_space_activate_focused_cards() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }
}
