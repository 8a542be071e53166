//! Page kinds and the behaviour each page wires up.

use std::fmt;

use crate::error::SiteError;
use crate::hover::{self, HoverEffect};
use crate::nav;
use crate::reveal::{RevealOptions, RevealStyle};
use crate::ripple::RippleStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Roster,
    Games,
    Recruitment,
    About,
}

/// Elements revealed on scroll and how.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealPlan {
    pub selector: &'static str,
    pub style: RevealStyle,
    pub options: RevealOptions,
}

/// Everything a page binds besides navigation highlighting, which every
/// page gets.
#[derive(Clone, Debug, PartialEq)]
pub struct PageFeatures {
    pub hover: &'static [HoverEffect],
    pub reveal: Option<RevealPlan>,
    pub ripple: Option<RippleStyle>,
    /// Placeholder news/result links announce themselves instead of navigating.
    pub news_links: bool,
    pub category_index: bool,
    pub recruitment_form: bool,
}

impl PageFeatures {
    fn none() -> Self {
        Self {
            hover: &[],
            reveal: None,
            ripple: None,
            news_links: false,
            category_index: false,
            recruitment_form: false,
        }
    }
}

const HOME_HOVER: &[HoverEffect] = &[hover::INFO_CARD, hover::HOME_NEWS_CARD, hover::SPONSOR_CARD];
const ROSTER_HOVER: &[HoverEffect] = &[hover::ROSTER_IMAGE];
const GAMES_HOVER: &[HoverEffect] = &[hover::GAME_CARD, hover::RESULT_CARD, hover::GAMES_NEWS_CARD];
const ABOUT_HOVER: &[HoverEffect] = &[hover::AUDIENCE_CARD, hover::BENEFIT_ITEM, hover::ODS_CARD];

const ABOUT_SECTIONS: &str = ".section-title, .project-content, .audience-grid, \
    .objective-content, .justification-content, .investment-grid, .benefits-list, \
    .ods-grid, .contact-grid";

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Home,
        PageKind::Roster,
        PageKind::Games,
        PageKind::Recruitment,
        PageKind::About,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            PageKind::Home => nav::DEFAULT_PAGE,
            PageKind::Roster => "elenco.html",
            PageKind::Games => "jogos.html",
            PageKind::Recruitment => "seletiva.html",
            PageKind::About => "sobre-projeto.html",
        }
    }

    /// Short name used by `data-page` and `init_page`.
    pub fn name(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Roster => "roster",
            PageKind::Games => "games",
            PageKind::Recruitment => "recruitment",
            PageKind::About => "about",
        }
    }

    /// Page served at `path`, by exact file name.
    pub fn from_path(path: &str) -> Option<PageKind> {
        let file = nav::current_file_name(path);
        Self::ALL.into_iter().find(|page| page.file_name() == file)
    }

    /// Accepts the short name or the file name, case-insensitively.
    pub fn from_name(name: &str) -> Result<PageKind, SiteError> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.name() == wanted || page.file_name() == wanted)
            .ok_or_else(|| SiteError::UnknownPage(name.to_string()))
    }

    pub fn features(&self) -> PageFeatures {
        match self {
            PageKind::Home => PageFeatures {
                hover: HOME_HOVER,
                reveal: Some(RevealPlan {
                    selector: ".info-card, .news-card, .sponsor-card, .section-title, .cta-section",
                    style: RevealStyle::Slide,
                    options: RevealOptions::margin("0px 0px -100px 0px"),
                }),
                ripple: Some(RippleStyle::Dot),
                ..PageFeatures::none()
            },
            PageKind::Roster => PageFeatures {
                hover: ROSTER_HOVER,
                reveal: Some(RevealPlan {
                    selector: ".category-container",
                    style: RevealStyle::FadeIn,
                    options: RevealOptions::threshold(0.1),
                }),
                ..PageFeatures::none()
            },
            PageKind::Games => PageFeatures {
                hover: GAMES_HOVER,
                reveal: Some(RevealPlan {
                    selector: ".game-card, .result-card, .news-card",
                    style: RevealStyle::FadeIn,
                    options: RevealOptions::threshold(0.1),
                }),
                news_links: true,
                category_index: true,
                ..PageFeatures::none()
            },
            PageKind::Recruitment => PageFeatures {
                recruitment_form: true,
                ..PageFeatures::none()
            },
            PageKind::About => PageFeatures {
                hover: ABOUT_HOVER,
                reveal: Some(RevealPlan {
                    selector: ABOUT_SECTIONS,
                    style: RevealStyle::Slide,
                    options: RevealOptions::default(),
                }),
                ripple: Some(RippleStyle::Expanding),
                ..PageFeatures::none()
            },
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(PageKind::from_path("/"), Some(PageKind::Home));
        assert_eq!(PageKind::from_path("/site/jogos.html"), Some(PageKind::Games));
        assert_eq!(PageKind::from_path("/contato.html"), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PageKind::from_name("Roster"), Ok(PageKind::Roster));
        assert_eq!(PageKind::from_name("seletiva.html"), Ok(PageKind::Recruitment));
        assert_eq!(
            PageKind::from_name("blog"),
            Err(SiteError::UnknownPage("blog".to_string()))
        );
        for page in PageKind::ALL {
            assert_eq!(PageKind::from_name(&page.to_string()), Ok(page));
        }
    }

    #[test]
    fn test_feature_table() {
        let home = PageKind::Home.features();
        assert_eq!(home.ripple, Some(RippleStyle::Dot));
        assert_eq!(
            home.reveal.unwrap().options.root_margin,
            Some("0px 0px -100px 0px")
        );

        let games = PageKind::Games.features();
        assert!(games.news_links && games.category_index);
        assert_eq!(games.reveal.unwrap().style, RevealStyle::FadeIn);

        let recruitment = PageKind::Recruitment.features();
        assert!(recruitment.recruitment_form);
        assert!(recruitment.hover.is_empty() && recruitment.reveal.is_none());

        let about = PageKind::About.features();
        assert_eq!(about.ripple, Some(RippleStyle::Expanding));
        assert_eq!(about.reveal.unwrap().options, RevealOptions::default());
    }

    #[test]
    fn test_only_recruitment_has_form() {
        let with_form: Vec<_> = PageKind::ALL
            .into_iter()
            .filter(|p| p.features().recruitment_form)
            .collect();
        assert_eq!(with_form, vec![PageKind::Recruitment]);
    }
}
