use std::time::{Duration, Instant};

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use uikit_types::TooltipPosition;

use crate::loading::{LoadingGate, SIMULATED_LOAD_DELAY};
use crate::ui::components::common::TextInputState;

/// Autoplay delay between carousel slides.
pub const CAROUSEL_AUTOPLAY: Duration = Duration::from_millis(3000);

pub const CAROUSEL_SLIDES: [&str; 3] = [
    "https://images.unsplash.com/photo-1682687220742-aba13b6e50ba",
    "https://images.unsplash.com/photo-1682687221038-404670f09ef1",
    "https://images.unsplash.com/photo-1682687220063-4742bd7fd538",
];

pub const SELECT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

pub const DEMO_TABS: [&str; 3] = ["Account", "Notifications", "Security"];

/// Pages of the component gallery, shown one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GallerySection {
    LoadingStates,
    Buttons,
    Feedback,
    Overlays,
    FormControls,
    Media,
}

impl GallerySection {
    pub const ALL: [GallerySection; 6] = [
        Self::LoadingStates,
        Self::Buttons,
        Self::Feedback,
        Self::Overlays,
        Self::FormControls,
        Self::Media,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::LoadingStates => "Loading States",
            Self::Buttons => "Buttons & Tooltips",
            Self::Feedback => "Alerts & Badges",
            Self::Overlays => "Modal & Tabs",
            Self::FormControls => "Form Controls",
            Self::Media => "Carousel & 3D",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|section| *section == self).unwrap_or_default()
    }
}

/// Focusable element of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryControl {
    SectionBar,
    PrimaryButton,
    SecondaryButton,
    OutlineButton,
    ToggleLoading,
    Tooltip(TooltipPosition),
    OpenModal,
    DemoTabs,
    Username,
    AccountEmail,
    EmailNotifications,
    PushNotifications,
    CurrentPassword,
    NewPassword,
    TextInput,
    PasswordInput,
    Select,
    Carousel,
    Scene,
}

impl GalleryControl {
    const ALL: [GalleryControl; 21] = [
        Self::SectionBar,
        Self::PrimaryButton,
        Self::SecondaryButton,
        Self::OutlineButton,
        Self::ToggleLoading,
        Self::Tooltip(TooltipPosition::Top),
        Self::Tooltip(TooltipPosition::Bottom),
        Self::Tooltip(TooltipPosition::Left),
        Self::OpenModal,
        Self::DemoTabs,
        Self::Username,
        Self::AccountEmail,
        Self::EmailNotifications,
        Self::PushNotifications,
        Self::CurrentPassword,
        Self::NewPassword,
        Self::TextInput,
        Self::PasswordInput,
        Self::Select,
        Self::Carousel,
        Self::Scene,
    ];

    /// Text controls accept typed characters.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::Username
                | Self::AccountEmail
                | Self::CurrentPassword
                | Self::NewPassword
                | Self::TextInput
                | Self::PasswordInput
        )
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::CurrentPassword | Self::NewPassword | Self::PasswordInput)
    }
}

/// Slide index with autoplay. Manual moves stop at the ends; autoplay
/// rewinds to the first slide after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    last_advance: Instant,
}

impl CarouselState {
    pub fn new(len: usize, now: Instant) -> Self {
        Self {
            index: 0,
            len,
            last_advance: now,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self, now: Instant) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
        self.last_advance = now;
    }

    pub fn prev(&mut self, now: Instant) {
        self.index = self.index.saturating_sub(1);
        self.last_advance = now;
    }

    /// Pagination dot click.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.index = index;
        }
        self.last_advance = now;
    }

    /// Returns `true` when autoplay moved the slide.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.len < 2 || now.saturating_duration_since(self.last_advance) < CAROUSEL_AUTOPLAY {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        self.last_advance = now;
        true
    }
}

/// Open flag and buttons of the example modal.
#[derive(Debug, Clone)]
pub struct ModalState {
    open: bool,
    pub container_focus: FocusFlag,
    pub cancel_focus: FocusFlag,
    pub confirm_focus: FocusFlag,
    pub last_area: Rect,
    pub cancel_area: Rect,
    pub confirm_area: Rect,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            open: false,
            container_focus: FocusFlag::named("gallery.modal"),
            cancel_focus: FocusFlag::named("gallery.modal.cancel"),
            confirm_focus: FocusFlag::named("gallery.modal.confirm"),
            last_area: Rect::default(),
            cancel_area: Rect::default(),
            confirm_area: Rect::default(),
        }
    }
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl HasFocus for ModalState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.cancel_focus);
        builder.leaf_widget(&self.confirm_focus);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

/// All local state owned by the component gallery.
#[derive(Debug, Clone)]
pub struct GalleryState {
    section: GallerySection,
    loading: LoadingGate,
    pub carousel: CarouselState,
    pub modal: ModalState,
    tab_index: usize,
    select_index: usize,
    email_notifications: bool,
    push_notifications: bool,
    /// Rotation of the 3D placeholder, in radians.
    scene_yaw: f64,
    inputs: Vec<(GalleryControl, TextInputState)>,
    pub container_focus: FocusFlag,
    pub controls: Vec<(GalleryControl, FocusFlag)>,
    /// Control under the mouse pointer, for tooltips.
    pub hovered: Option<GalleryControl>,
    pub last_area: Rect,
    pub section_areas: Vec<Rect>,
    pub control_areas: Vec<(GalleryControl, Rect)>,
    pub dot_areas: Vec<Rect>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl GalleryState {
    pub fn new(now: Instant) -> Self {
        let controls = GalleryControl::ALL
            .iter()
            .enumerate()
            .map(|(index, control)| (*control, FocusFlag::named(&format!("gallery.control.{index}"))))
            .collect();
        let inputs = GalleryControl::ALL
            .iter()
            .filter(|control| control.is_text())
            .map(|control| (*control, TextInputState::new()))
            .collect();
        Self {
            section: GallerySection::LoadingStates,
            loading: LoadingGate::new(now, SIMULATED_LOAD_DELAY),
            carousel: CarouselState::new(CAROUSEL_SLIDES.len(), now),
            modal: ModalState::default(),
            tab_index: 0,
            select_index: 0,
            email_notifications: false,
            push_notifications: false,
            scene_yaw: 0.6,
            inputs,
            container_focus: FocusFlag::named("gallery"),
            controls,
            hovered: None,
            last_area: Rect::default(),
            section_areas: Vec::new(),
            control_areas: Vec::new(),
            dot_areas: Vec::new(),
        }
    }

    /// Called when the gallery route mounts: restarts the simulated load and
    /// the carousel timer.
    pub fn enter(&mut self, now: Instant) {
        self.loading = LoadingGate::new(now, SIMULATED_LOAD_DELAY);
        self.carousel = CarouselState::new(CAROUSEL_SLIDES.len(), now);
        self.modal.close();
    }

    pub fn section(&self) -> GallerySection {
        self.section
    }

    pub fn set_section(&mut self, section: GallerySection) {
        self.section = section;
        self.hovered = None;
    }

    pub fn cycle_section(&mut self, forward: bool) {
        let len = GallerySection::ALL.len();
        let index = self.section.index();
        let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
        self.set_section(GallerySection::ALL[next]);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn toggle_loading(&mut self) {
        self.loading.toggle();
    }

    pub fn tab_index(&self) -> usize {
        self.tab_index
    }

    pub fn set_tab(&mut self, index: usize) {
        if index < DEMO_TABS.len() {
            self.tab_index = index;
        }
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let len = DEMO_TABS.len();
        self.tab_index = if forward { (self.tab_index + 1) % len } else { (self.tab_index + len - 1) % len };
    }

    pub fn select_index(&self) -> usize {
        self.select_index
    }

    pub fn cycle_select(&mut self, forward: bool) {
        let len = SELECT_OPTIONS.len();
        self.select_index = if forward { (self.select_index + 1) % len } else { (self.select_index + len - 1) % len };
    }

    pub fn notifications(&self) -> (bool, bool) {
        (self.email_notifications, self.push_notifications)
    }

    pub fn toggle_notification(&mut self, control: GalleryControl) {
        match control {
            GalleryControl::EmailNotifications => self.email_notifications = !self.email_notifications,
            GalleryControl::PushNotifications => self.push_notifications = !self.push_notifications,
            _ => {}
        }
    }

    pub fn scene_yaw(&self) -> f64 {
        self.scene_yaw
    }

    pub fn rotate_scene(&mut self, delta: f64) {
        self.scene_yaw = (self.scene_yaw + delta).rem_euclid(std::f64::consts::TAU);
    }

    pub fn input(&self, control: GalleryControl) -> Option<&TextInputState> {
        self.inputs.iter().find(|(c, _)| *c == control).map(|(_, input)| input)
    }

    pub fn input_mut(&mut self, control: GalleryControl) -> Option<&mut TextInputState> {
        self.inputs.iter_mut().find(|(c, _)| *c == control).map(|(_, input)| input)
    }

    /// Controls reachable on the current section, in tab order.
    pub fn visible_controls(&self) -> Vec<GalleryControl> {
        let mut visible = vec![GalleryControl::SectionBar];
        match self.section {
            GallerySection::LoadingStates => visible.push(GalleryControl::ToggleLoading),
            GallerySection::Buttons => visible.extend([
                GalleryControl::PrimaryButton,
                GalleryControl::SecondaryButton,
                GalleryControl::OutlineButton,
                GalleryControl::ToggleLoading,
                GalleryControl::Tooltip(TooltipPosition::Top),
                GalleryControl::Tooltip(TooltipPosition::Bottom),
                GalleryControl::Tooltip(TooltipPosition::Left),
            ]),
            GallerySection::Feedback => {}
            GallerySection::Overlays => {
                visible.extend([GalleryControl::OpenModal, GalleryControl::DemoTabs]);
                visible.extend(match self.tab_index {
                    0 => [GalleryControl::Username, GalleryControl::AccountEmail],
                    1 => [GalleryControl::EmailNotifications, GalleryControl::PushNotifications],
                    _ => [GalleryControl::CurrentPassword, GalleryControl::NewPassword],
                });
            }
            GallerySection::FormControls => visible.extend([
                GalleryControl::TextInput,
                GalleryControl::PasswordInput,
                GalleryControl::Select,
            ]),
            GallerySection::Media => visible.extend([GalleryControl::Carousel, GalleryControl::Scene]),
        }
        visible
    }

    pub fn flag_for(&self, control: GalleryControl) -> Option<&FocusFlag> {
        self.controls.iter().find(|(c, _)| *c == control).map(|(_, flag)| flag)
    }

    pub fn is_focused(&self, control: GalleryControl) -> bool {
        self.flag_for(control).is_some_and(FocusFlag::get)
    }

    pub fn focused_control(&self) -> Option<GalleryControl> {
        self.controls.iter().find(|(_, flag)| flag.get()).map(|(control, _)| *control)
    }

    /// Tooltip to draw: the hovered anchor, else the focused one.
    pub fn active_tooltip(&self) -> Option<TooltipPosition> {
        let pick = |control: Option<GalleryControl>| match control {
            Some(GalleryControl::Tooltip(position)) => Some(position),
            _ => None,
        };
        pick(self.hovered).or_else(|| pick(self.focused_control()))
    }

    /// Advances timers. Returns `true` when something visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let loaded = self.loading.tick(now);
        let slid = !self.modal.is_open() && self.carousel.tick(now);
        loaded || slid
    }

    /// Whether a timer is waiting to fire.
    pub fn is_animating(&self) -> bool {
        self.loading.is_pending() || self.section == GallerySection::Media
    }
}

impl HasFocus for GalleryState {
    fn build(&self, builder: &mut FocusBuilder) {
        if self.modal.is_open() {
            builder.widget(&self.modal);
            return;
        }
        let tag = builder.start(self);
        for control in self.visible_controls() {
            if let Some(flag) = self.flag_for(control) {
                builder.leaf_widget(flag);
            }
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_manual_moves_clamp_and_autoplay_rewinds() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(3, start);
        carousel.prev(start);
        assert_eq!(carousel.index(), 0);
        carousel.next(start);
        carousel.next(start);
        carousel.next(start);
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.tick(start + Duration::from_millis(2999)));
        assert!(carousel.tick(start + CAROUSEL_AUTOPLAY));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn manual_navigation_restarts_autoplay_delay() {
        let start = Instant::now();
        let mut carousel = CarouselState::new(3, start);
        carousel.go_to(2, start + Duration::from_secs(2));
        assert!(!carousel.tick(start + Duration::from_secs(4)));
        assert!(carousel.tick(start + Duration::from_secs(5)));
        assert_eq!(carousel.index(), 0);
        carousel.go_to(7, start);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn loading_completes_after_two_seconds() {
        let start = Instant::now();
        let mut gallery = GalleryState::new(start);
        assert!(gallery.is_loading());
        assert!(!gallery.tick(start + Duration::from_millis(1500)));
        assert!(gallery.tick(start + Duration::from_secs(2)));
        assert!(!gallery.is_loading());
    }

    #[test]
    fn visible_controls_follow_section_and_tab() {
        let mut gallery = GalleryState::default();
        gallery.set_section(GallerySection::Overlays);
        assert!(gallery.visible_controls().contains(&GalleryControl::Username));
        gallery.cycle_tab(true);
        let visible = gallery.visible_controls();
        assert!(visible.contains(&GalleryControl::PushNotifications));
        assert!(!visible.contains(&GalleryControl::Username));
        gallery.cycle_tab(false);
        gallery.cycle_tab(false);
        assert!(gallery.visible_controls().contains(&GalleryControl::NewPassword));
    }

    #[test]
    fn section_cycle_wraps() {
        let mut gallery = GalleryState::default();
        gallery.cycle_section(false);
        assert_eq!(gallery.section(), GallerySection::Media);
        gallery.cycle_section(true);
        assert_eq!(gallery.section(), GallerySection::LoadingStates);
    }

    #[test]
    fn hovered_tooltip_wins_over_focus() {
        let mut gallery = GalleryState::default();
        gallery.set_section(GallerySection::Buttons);
        if let Some(flag) = gallery.flag_for(GalleryControl::Tooltip(TooltipPosition::Left)) {
            flag.set(true);
        }
        assert_eq!(gallery.active_tooltip(), Some(TooltipPosition::Left));
        gallery.hovered = Some(GalleryControl::Tooltip(TooltipPosition::Top));
        assert_eq!(gallery.active_tooltip(), Some(TooltipPosition::Top));
    }

    #[test]
    fn select_and_text_inputs() {
        let mut gallery = GalleryState::default();
        gallery.cycle_select(false);
        assert_eq!(SELECT_OPTIONS[gallery.select_index()], "Option 3");
        if let Some(input) = gallery.input_mut(GalleryControl::TextInput) {
            input.insert_char('a');
        }
        assert_eq!(gallery.input(GalleryControl::TextInput).map(TextInputState::input), Some("a"));
        assert!(gallery.input(GalleryControl::Select).is_none());
    }
}
