//! Transient UI state of the page.
//!
//! Neither piece of state affects the content, only how it is presented. The renderer takes a [`ViewState`] explicitly,
//! prerendering uses the default one, and the client script mirrors the same transitions in the browser.

/// Whether the mobile navigation menu is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// State after pressing the menu button.
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after following a link of the mobile navigation, or clicking the logo.
    pub fn close(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Scale applied to an embedded widget rendered at a fixed base size so that it fits its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbedScale(f64);

impl EmbedScale {
    /// The widget's natural size.
    pub const BASE: EmbedScale = EmbedScale(1.0);

    /// Scale for a container observed at `container_width` pixels.
    ///
    /// A missing or zero width (e.g. the container isn't laid out yet) is treated as the base width.
    pub fn observe(container_width: Option<f64>, base_width: u32) -> Self {
        if base_width == 0 {
            return Self::BASE;
        }

        let base_width = f64::from(base_width);
        let width = container_width
            .filter(|width| width.is_finite() && *width > 0.0)
            .unwrap_or(base_width);

        EmbedScale(width / base_width)
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Height the container must have to show the whole scaled widget.
    pub fn scaled_height(self, base_height: u32) -> f64 {
        f64::from(base_height) * self.0
    }
}

impl Default for EmbedScale {
    fn default() -> Self {
        Self::BASE
    }
}

/// All view state of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewState {
    pub menu: MenuState,
    pub bandcamp_scale: EmbedScale,
}

impl ViewState {
    pub fn toggle_menu(self) -> Self {
        Self {
            menu: self.menu.toggle(),
            ..self
        }
    }

    pub fn close_menu(self) -> Self {
        Self {
            menu: self.menu.close(),
            ..self
        }
    }

    pub fn resize_bandcamp(self, container_width: Option<f64>, base_width: u32) -> Self {
        Self {
            bandcamp_scale: EmbedScale::observe(container_width, base_width),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!ViewState::default().menu.is_open());
    }

    #[test]
    fn test_menu_toggle_twice_is_identity() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_ne!(state.toggle(), state);
            assert_eq!(state.toggle().toggle(), state);
        }
    }

    #[test]
    fn test_menu_close() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }

    #[test]
    fn test_scale_at_base_width_is_one() {
        assert_eq!(EmbedScale::observe(Some(700.0), 700).ratio(), 1.0);
    }

    #[test]
    fn test_half_width_halves_scale() {
        let full = EmbedScale::observe(Some(700.0), 700);
        let half = EmbedScale::observe(Some(350.0), 700);

        assert_eq!(half.ratio(), full.ratio() / 2.0);
        assert_eq!(half.scaled_height(472), 236.0);
    }

    #[test]
    fn test_unknown_width_uses_base() {
        assert_eq!(EmbedScale::observe(None, 700), EmbedScale::BASE);
        assert_eq!(EmbedScale::observe(Some(0.0), 700), EmbedScale::BASE);
        assert_eq!(EmbedScale::observe(Some(f64::NAN), 700), EmbedScale::BASE);
        assert_eq!(EmbedScale::observe(Some(350.0), 0), EmbedScale::BASE);
    }

    #[test]
    fn test_view_state_transitions_are_independent() {
        let state = ViewState::default()
            .resize_bandcamp(Some(350.0), 700)
            .toggle_menu();

        assert!(state.menu.is_open());
        assert_eq!(state.bandcamp_scale.ratio(), 0.5);

        let closed = state.close_menu();
        assert!(!closed.menu.is_open());
        assert_eq!(closed.bandcamp_scale, state.bandcamp_scale);
    }
}
