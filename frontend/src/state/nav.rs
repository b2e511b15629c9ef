//! Header overlay state and scroll-to-section navigation.

use crate::config;

/// Which mobile overlay is showing. Menu and search share one value so both
/// can never be open together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Default,
    MenuOpen,
    SearchOpen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationTarget {
    Top,
    TopStories,
    Regional,
    Opinion,
    Gallery,
}

impl NavigationTarget {
    pub const ALL: [NavigationTarget; 5] = [
        NavigationTarget::Top,
        NavigationTarget::TopStories,
        NavigationTarget::Regional,
        NavigationTarget::Opinion,
        NavigationTarget::Gallery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavigationTarget::Top => "Home",
            NavigationTarget::TopStories => "Top Stories",
            NavigationTarget::Regional => "Regional",
            NavigationTarget::Opinion => "Opinion",
            NavigationTarget::Gallery => "Gallery",
        }
    }

    pub fn anchor_id(self) -> &'static str {
        match self {
            NavigationTarget::Top => "top",
            NavigationTarget::TopStories => "top-stories",
            NavigationTarget::Regional => "regional",
            NavigationTarget::Opinion => "opinion",
            NavigationTarget::Gallery => "gallery",
        }
    }
}

/// Read access to the rendered page plus the animated scroll command.
pub trait Layout {
    /// Vertical offset of the section, or `None` while it is not mounted.
    fn offset_top(&self, target: NavigationTarget) -> Option<f64>;
    fn scroll_smooth_to(&self, top: f64);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationController {
    mode: UiMode,
}

impl NavigationController {
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn toggle_menu(&mut self) {
        self.mode = match self.mode {
            UiMode::MenuOpen => UiMode::Default,
            _ => UiMode::MenuOpen,
        };
        log::debug!("ui mode -> {:?}", self.mode);
    }

    pub fn toggle_search(&mut self) {
        self.mode = match self.mode {
            UiMode::SearchOpen => UiMode::Default,
            _ => UiMode::SearchOpen,
        };
        log::debug!("ui mode -> {:?}", self.mode);
    }

    /// Closes any overlay, then scrolls the section under the sticky header.
    /// Returns the scroll position requested, if the section could be measured.
    pub fn navigate_to(&mut self, target: NavigationTarget, layout: &dyn Layout) -> Option<f64> {
        self.mode = UiMode::Default;
        let Some(offset) = layout.offset_top(target) else {
            log::debug!("section {:?} not mounted yet, skipping scroll", target);
            return None;
        };
        let top = offset - config::HEADER_OFFSET_PX;
        layout.scroll_smooth_to(top);
        log::debug!("scrolling to {:?} at {}px", target, top);
        Some(top)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeLayout {
        offsets: HashMap<NavigationTarget, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl Layout for FakeLayout {
        fn offset_top(&self, target: NavigationTarget) -> Option<f64> {
            self.offsets.get(&target).copied()
        }

        fn scroll_smooth_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn same_toggle_twice_returns_to_default() {
        let mut nav = NavigationController::default();
        nav.toggle_menu();
        assert_eq!(nav.mode(), UiMode::MenuOpen);
        nav.toggle_menu();
        assert_eq!(nav.mode(), UiMode::Default);

        nav.toggle_search();
        assert_eq!(nav.mode(), UiMode::SearchOpen);
        nav.toggle_search();
        assert_eq!(nav.mode(), UiMode::Default);
    }

    #[test]
    fn opening_one_overlay_replaces_the_other() {
        let mut nav = NavigationController::default();
        nav.toggle_menu();
        nav.toggle_search();
        assert_eq!(nav.mode(), UiMode::SearchOpen);
        nav.toggle_menu();
        assert_eq!(nav.mode(), UiMode::MenuOpen);
    }

    #[test]
    fn toggle_sequences_keep_a_single_mode() {
        // 0 = menu, 1 = search; walk every sequence of length 6.
        for bits in 0u32..64 {
            let mut nav = NavigationController::default();
            let mut expected = UiMode::Default;
            for i in 0..6 {
                if (bits >> i) & 1 == 0 {
                    nav.toggle_menu();
                    expected = if expected == UiMode::MenuOpen { UiMode::Default } else { UiMode::MenuOpen };
                } else {
                    nav.toggle_search();
                    expected = if expected == UiMode::SearchOpen { UiMode::Default } else { UiMode::SearchOpen };
                }
                assert_eq!(nav.mode(), expected);
            }
        }
    }

    #[test]
    fn navigate_scrolls_below_the_header() {
        let mut layout = FakeLayout::default();
        layout.offsets.insert(NavigationTarget::Regional, 1_480.0);
        let mut nav = NavigationController::default();
        nav.toggle_menu();

        let top = nav.navigate_to(NavigationTarget::Regional, &layout);

        assert_eq!(top, Some(1_400.0));
        assert_eq!(*layout.scrolls.borrow(), vec![1_400.0]);
        assert_eq!(nav.mode(), UiMode::Default);
    }

    #[test]
    fn unmounted_section_still_closes_overlays() {
        let layout = FakeLayout::default();
        for start in [UiMode::Default, UiMode::MenuOpen, UiMode::SearchOpen] {
            let mut nav = NavigationController { mode: start };
            assert_eq!(nav.navigate_to(NavigationTarget::Gallery, &layout), None);
            assert_eq!(nav.mode(), UiMode::Default);
        }
        assert!(layout.scrolls.borrow().is_empty());
    }

    #[test]
    fn transitions_on_a_copy_leave_the_rendered_state_alone() {
        let rendered = NavigationController::default();
        let mut next = rendered;
        next.toggle_search();
        assert_eq!(rendered.mode(), UiMode::Default);
        assert_eq!(next.mode(), UiMode::SearchOpen);
    }

    #[test]
    fn anchor_ids_are_unique() {
        let mut ids: Vec<_> = NavigationTarget::ALL.iter().map(|t| t.anchor_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NavigationTarget::ALL.len());
    }
}
