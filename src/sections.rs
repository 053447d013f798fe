/// Distance from the viewport top, in CSS pixels, of the line that decides
/// which section is currently being read.
pub const PROBE_OFFSET: f64 = 100.0;
/// Scroll distance after which the navigation bar switches to its compact style.
pub const NAV_SCROLLED_AFTER: f64 = 50.0;
/// Scroll distance after which the footer offers a "back to top" button.
pub const SCROLL_TOP_AFTER: f64 = 300.0;
/// Height of the fixed header subtracted from anchor targets.
pub const HEADER_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Page order; also the order in which nav items are rendered.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Viewport-relative vertical extent of a section, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, probe: f64) -> bool {
        self.top <= probe && self.bottom >= probe
    }
}

/// Picks the section under the probe line.
///
/// Adjacent sections share an edge, so two can match at the exact boundary;
/// the last one in iteration order wins.
pub fn active_section<I>(measured: I, probe: f64) -> Option<Section>
where
    I: IntoIterator<Item = (Section, SectionBounds)>,
{
    measured
        .into_iter()
        .filter(|(_, bounds)| bounds.straddles(probe))
        .map(|(section, _)| section)
        .last()
}

pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER
}

pub fn shows_scroll_to_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_AFTER
}

/// Document offset to scroll to so that a section lands below the fixed header.
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    (offset_top - HEADER_OFFSET).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lays sections out back to back, each `height` tall, scrolled by `scroll_y`.
    fn stacked(heights: &[f64], scroll_y: f64) -> Vec<(Section, SectionBounds)> {
        let mut top = -scroll_y;
        Section::ALL
            .into_iter()
            .zip(heights)
            .map(|(section, height)| {
                let bounds = SectionBounds {
                    top,
                    bottom: top + height,
                };
                top += height;
                (section, bounds)
            })
            .collect()
    }

    #[test]
    fn straddling_section_is_active_for_every_scroll_offset() {
        let heights = [700.0, 650.0, 900.0, 1200.0, 800.0];
        let total: f64 = heights.iter().sum();

        let mut scroll_y = 0.0;
        while scroll_y < total {
            let measured = stacked(&heights, scroll_y);
            let active = active_section(measured.clone(), PROBE_OFFSET);
            let straddling: Vec<Section> = measured
                .iter()
                .filter(|(_, b)| b.top <= PROBE_OFFSET && b.bottom >= PROBE_OFFSET)
                .map(|(s, _)| *s)
                .collect();

            assert_eq!(active, straddling.last().copied(), "scroll_y = {scroll_y}");
            scroll_y += 37.0;
        }
    }

    #[test]
    fn nothing_active_when_probe_is_outside_all_sections() {
        let measured = stacked(&[300.0, 300.0, 300.0, 300.0, 300.0], 0.0);
        assert_eq!(active_section(measured, -10.0), None);

        let measured = stacked(&[300.0, 300.0, 300.0, 300.0, 300.0], 2_000.0);
        assert_eq!(active_section(measured, PROBE_OFFSET), None);
    }

    #[test]
    fn shared_boundary_resolves_to_later_section() {
        // Hero ends exactly on the probe line where About begins.
        let measured = stacked(&[100.0, 500.0, 500.0, 500.0, 500.0], 0.0);

        assert_eq!(active_section(measured, PROBE_OFFSET), Some(Section::About));
    }

    #[test]
    fn example_walkthrough_highlights_expected_items() {
        let heights = [800.0, 600.0, 700.0, 900.0, 600.0];

        assert_eq!(active_section(stacked(&heights, 0.0), PROBE_OFFSET), Some(Section::Hero));
        assert_eq!(active_section(stacked(&heights, 800.0), PROBE_OFFSET), Some(Section::About));
        assert_eq!(active_section(stacked(&heights, 1_500.0), PROBE_OFFSET), Some(Section::Skills));
        assert_eq!(active_section(stacked(&heights, 2_900.0), PROBE_OFFSET), Some(Section::Contact));
    }

    #[test]
    fn ids_round_trip_through_lookup() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn scroll_thresholds_are_strict() {
        assert!(!nav_is_scrolled(50.0));
        assert!(nav_is_scrolled(50.5));
        assert!(!shows_scroll_to_top(300.0));
        assert!(shows_scroll_to_top(301.0));
    }

    #[test]
    fn anchor_target_clears_the_header() {
        assert_eq!(anchor_scroll_target(1_000.0), 920.0);
        assert_eq!(anchor_scroll_target(30.0), 0.0);
    }
}
