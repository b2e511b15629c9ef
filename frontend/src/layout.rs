use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

use crate::state::nav::{Layout, NavigationTarget};

/// Node refs for every section the header can scroll to. Offsets are read
/// from these at click time, never cached.
#[derive(Clone, Default, PartialEq)]
pub struct SectionAnchors {
    pub top: NodeRef,
    pub top_stories: NodeRef,
    pub regional: NodeRef,
    pub opinion: NodeRef,
    pub gallery: NodeRef,
}

impl SectionAnchors {
    pub fn get(&self, target: NavigationTarget) -> &NodeRef {
        match target {
            NavigationTarget::Top => &self.top,
            NavigationTarget::TopStories => &self.top_stories,
            NavigationTarget::Regional => &self.regional,
            NavigationTarget::Opinion => &self.opinion,
            NavigationTarget::Gallery => &self.gallery,
        }
    }
}

impl Layout for SectionAnchors {
    fn offset_top(&self, target: NavigationTarget) -> Option<f64> {
        self.get(target)
            .cast::<HtmlElement>()
            .map(|element| f64::from(element.offset_top()))
    }

    fn scroll_smooth_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
