//! Click ripple geometry.

use crate::style::{px, seconds, StylePatch};

/// Elements that spawn a ripple when clicked.
pub const TRIGGER_SELECTOR: &str = ".cta-button";

const DOT_SIZE: f64 = 20.0;
const EXPANDED_SIZE: f64 = 300.0;
const RIPPLE_COLOR: &str = "rgba(0, 0, 0, 0.3)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RippleStyle {
    /// Small fixed-size dot centred on the click point.
    Dot,
    /// Circle growing from the click point while fading out.
    Expanding,
}

/// Pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickPoint {
    pub client_x: f64,
    pub client_y: f64,
}

/// Bounding box of the clicked element in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub style: RippleStyle,
    /// Click position relative to the element's top-left corner.
    pub x: f64,
    pub y: f64,
    pub lifetime_ms: u32,
}

impl Ripple {
    pub fn at(style: RippleStyle, click: ClickPoint, rect: Rect, lifetime_ms: u32) -> Self {
        Self {
            style,
            x: click.client_x - rect.left,
            y: click.client_y - rect.top,
            lifetime_ms,
        }
    }

    /// Inline style of the ripple element when it is inserted.
    pub fn start_style(&self) -> StylePatch {
        let base = StylePatch::new()
            .set("position", "absolute")
            .set("border-radius", "50%")
            .set("background-color", RIPPLE_COLOR)
            .set("pointer-events", "none");

        match self.style {
            RippleStyle::Dot => base
                .set("width", px(DOT_SIZE))
                .set("height", px(DOT_SIZE))
                .set("left", px(self.x - DOT_SIZE / 2.0))
                .set("top", px(self.y - DOT_SIZE / 2.0))
                .set("transform", "scale(1)")
                .set("opacity", "1"),
            RippleStyle::Expanding => base
                .set("left", px(self.x))
                .set("top", px(self.y))
                .set("width", "0")
                .set("height", "0")
                .set("transform", "translate(-50%, -50%)")
                .set("opacity", "1"),
        }
    }

    /// Inline style the ripple transitions to over its lifetime.
    pub fn end_style(&self) -> StylePatch {
        let d = seconds(self.lifetime_ms);
        match self.style {
            RippleStyle::Dot => StylePatch::new()
                .set("transition", format!("transform {d} ease-out, opacity {d} ease-out"))
                .set("transform", "scale(2.5)")
                .set("opacity", "0"),
            RippleStyle::Expanding => StylePatch::new()
                .set(
                    "transition",
                    format!("width {d} ease-out, height {d} ease-out, opacity {d} ease-out"),
                )
                .set("width", px(EXPANDED_SIZE))
                .set("height", px(EXPANDED_SIZE))
                .set("opacity", "0"),
        }
    }

    /// Declarations the clicked element needs so the ripple is clipped to it.
    pub fn host_style(&self) -> StylePatch {
        match self.style {
            RippleStyle::Dot => StylePatch::new(),
            RippleStyle::Expanding => StylePatch::new()
                .set("position", "relative")
                .set("overflow", "hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Rect {
        Rect {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 40.0,
        }
    }

    #[test]
    fn test_position_is_relative_to_bounding_box() {
        let click = ClickPoint {
            client_x: 130.0,
            client_y: 70.0,
        };
        let ripple = Ripple::at(RippleStyle::Expanding, click, button(), 600);
        assert_eq!(ripple.x, 30.0);
        assert_eq!(ripple.y, 20.0);

        let start = ripple.start_style();
        assert_eq!(start.get("left"), Some("30px"));
        assert_eq!(start.get("top"), Some("20px"));
        assert_eq!(start.get("width"), Some("0"));
    }

    #[test]
    fn test_dot_is_centred_on_click() {
        let click = ClickPoint {
            client_x: 110.0,
            client_y: 60.0,
        };
        let ripple = Ripple::at(RippleStyle::Dot, click, button(), 600);
        let start = ripple.start_style();
        assert_eq!(start.get("left"), Some("0px"));
        assert_eq!(start.get("top"), Some("0px"));
        assert_eq!(start.get("width"), Some("20px"));
        assert!(ripple.host_style().is_empty());
    }

    #[test]
    fn test_expanding_grows_and_fades() {
        let click = ClickPoint {
            client_x: 100.0,
            client_y: 50.0,
        };
        let ripple = Ripple::at(RippleStyle::Expanding, click, button(), 600);
        let end = ripple.end_style();
        assert_eq!(end.get("width"), Some("300px"));
        assert_eq!(end.get("opacity"), Some("0"));
        assert!(end.get("transition").unwrap().contains("0.6s ease-out"));
        assert_eq!(ripple.host_style().get("overflow"), Some("hidden"));
    }

    #[test]
    fn test_click_outside_box_still_positions() {
        // Keyboard-triggered clicks report (0, 0); the ripple just lands off-box.
        let click = ClickPoint {
            client_x: 0.0,
            client_y: 0.0,
        };
        let ripple = Ripple::at(RippleStyle::Expanding, click, button(), 600);
        assert_eq!(ripple.start_style().get("left"), Some("-100px"));
    }
}
