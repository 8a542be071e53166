//! Hover presets.
//!
//! Each preset pairs a class selector with the inline declarations applied
//! when the pointer enters and leaves a matching element. Hover state itself
//! lives in the browser's pointer events, not here.

use crate::style::StylePatch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    Hovered,
    Resting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverEffect {
    pub selector: &'static str,
    pub enter: &'static [(&'static str, &'static str)],
    pub leave: &'static [(&'static str, &'static str)],
}

impl HoverEffect {
    pub fn patch(&self, state: PointerState) -> StylePatch {
        match state {
            PointerState::Hovered => StylePatch::from_pairs(self.enter),
            PointerState::Resting => StylePatch::from_pairs(self.leave),
        }
    }
}

const LIFT_REST: &[(&str, &str)] = &[
    ("transform", "translateY(0)"),
    ("box-shadow", "0 4px 8px rgba(0, 0, 0, 0.1)"),
];

const LIFT_8: &[(&str, &str)] = &[
    ("transform", "translateY(-8px)"),
    ("box-shadow", "0 8px 16px rgba(255, 215, 0, 0.3)"),
];

// Home page

pub const INFO_CARD: HoverEffect = HoverEffect {
    selector: ".info-card",
    enter: &[("background-color", "#FFD700"), ("color", "#000000")],
    leave: &[("background-color", "#FFFFFF"), ("color", "#000000")],
};

pub const HOME_NEWS_CARD: HoverEffect = HoverEffect {
    selector: ".news-card",
    enter: &[("opacity", "1")],
    leave: &[("opacity", "1")],
};

pub const SPONSOR_CARD: HoverEffect = HoverEffect {
    selector: ".sponsor-card",
    enter: &[("opacity", "1")],
    leave: &[("opacity", "1")],
};

// Roster page

pub const ROSTER_IMAGE: HoverEffect = HoverEffect {
    selector: ".roster-image",
    enter: &[
        ("transform", "scale(1.02)"),
        ("box-shadow", "0 8px 20px rgba(255, 215, 0, 0.3)"),
    ],
    leave: &[
        ("transform", "scale(1)"),
        ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.15)"),
    ],
};

// Games page

pub const GAME_CARD: HoverEffect = HoverEffect {
    selector: ".game-card",
    enter: LIFT_8,
    leave: LIFT_REST,
};

pub const RESULT_CARD: HoverEffect = HoverEffect {
    selector: ".result-card",
    enter: &[
        ("transform", "translateY(-5px)"),
        ("box-shadow", "0 8px 16px rgba(255, 215, 0, 0.2)"),
    ],
    leave: LIFT_REST,
};

pub const GAMES_NEWS_CARD: HoverEffect = HoverEffect {
    selector: ".news-card",
    enter: LIFT_8,
    leave: LIFT_REST,
};

// About page

pub const AUDIENCE_CARD: HoverEffect = HoverEffect {
    selector: ".audience-card",
    enter: &[("box-shadow", "0 8px 20px rgba(0, 0, 0, 0.3)")],
    leave: &[("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.1)")],
};

pub const BENEFIT_ITEM: HoverEffect = HoverEffect {
    selector: ".benefit-item",
    enter: &[("background-color", "rgba(255, 215, 0, 0.1)")],
    leave: &[("background-color", "var(--cor-fundo)")],
};

pub const ODS_CARD: HoverEffect = HoverEffect {
    selector: ".ods-card",
    enter: &[
        ("box-shadow", "0 8px 20px rgba(255, 215, 0, 0.3)"),
        ("background-color", "rgba(255, 215, 0, 0.05)"),
    ],
    leave: &[
        ("box-shadow", "0 2px 8px rgba(0, 0, 0, 0.1)"),
        ("background-color", "var(--cor-terciaria)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_card_swaps_background() {
        let hovered = INFO_CARD.patch(PointerState::Hovered);
        let resting = INFO_CARD.patch(PointerState::Resting);
        assert_eq!(hovered.get("background-color"), Some("#FFD700"));
        assert_eq!(resting.get("background-color"), Some("#FFFFFF"));
        assert_eq!(hovered.get("color"), resting.get("color"));
    }

    #[test]
    fn test_enter_and_leave_touch_same_properties() {
        let presets = [
            INFO_CARD,
            HOME_NEWS_CARD,
            SPONSOR_CARD,
            ROSTER_IMAGE,
            GAME_CARD,
            RESULT_CARD,
            GAMES_NEWS_CARD,
            AUDIENCE_CARD,
            BENEFIT_ITEM,
            ODS_CARD,
        ];
        for preset in presets {
            let enter: Vec<_> = preset.enter.iter().map(|(p, _)| *p).collect();
            let leave: Vec<_> = preset.leave.iter().map(|(p, _)| *p).collect();
            assert_eq!(enter, leave, "{} leaves a property behind", preset.selector);
        }
    }

    #[test]
    fn test_result_card_lifts_less_than_game_card() {
        let game = GAME_CARD.patch(PointerState::Hovered);
        let result = RESULT_CARD.patch(PointerState::Hovered);
        assert_eq!(game.get("transform"), Some("translateY(-8px)"));
        assert_eq!(result.get("transform"), Some("translateY(-5px)"));
    }
}
