use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// Focusable elements of the top navbar and the landing hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandingControl {
    Home,
    SignIn,
    SignUp,
    GoToDashboard,
    ThemeToggle,
    /// Avatar button; activating it signs out.
    UserButton,
    GetStarted,
}

impl LandingControl {
    const ALL: [LandingControl; 7] = [
        Self::Home,
        Self::SignIn,
        Self::SignUp,
        Self::GoToDashboard,
        Self::ThemeToggle,
        Self::UserButton,
        Self::GetStarted,
    ];

    /// Whether the control is rendered for the given session state.
    pub fn is_visible(self, signed_in: bool) -> bool {
        match self {
            Self::Home | Self::ThemeToggle => true,
            Self::SignIn | Self::SignUp | Self::GetStarted => !signed_in,
            Self::GoToDashboard | Self::UserButton => signed_in,
        }
    }
}

pub const FEATURES: [&str; 5] = [
    "Modern Dashboard Interface",
    "Real-time Updates",
    "Advanced Analytics",
    "Team Collaboration",
    "Custom Reporting",
];

#[derive(Debug, Clone)]
pub struct LandingState {
    signed_in: bool,
    pub container_focus: FocusFlag,
    pub controls: Vec<(LandingControl, FocusFlag)>,
    pub last_area: Rect,
    pub control_areas: Vec<(LandingControl, Rect)>,
}

impl Default for LandingState {
    fn default() -> Self {
        let controls = LandingControl::ALL
            .iter()
            .enumerate()
            .map(|(index, control)| (*control, FocusFlag::named(&format!("landing.control.{index}"))))
            .collect();
        Self {
            signed_in: false,
            container_focus: FocusFlag::named("landing"),
            controls,
            last_area: Rect::default(),
            control_areas: Vec::new(),
        }
    }
}

impl LandingState {
    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    /// Mirrors the session so the focus tree only holds visible controls.
    pub fn set_signed_in(&mut self, signed_in: bool) {
        self.signed_in = signed_in;
    }

    pub fn visible_controls(&self) -> impl Iterator<Item = LandingControl> + '_ {
        self.controls
            .iter()
            .map(|(control, _)| *control)
            .filter(|control| control.is_visible(self.signed_in))
    }

    pub fn flag_for(&self, control: LandingControl) -> Option<&FocusFlag> {
        self.controls.iter().find(|(c, _)| *c == control).map(|(_, flag)| flag)
    }

    pub fn is_focused(&self, control: LandingControl) -> bool {
        self.flag_for(control).is_some_and(FocusFlag::get)
    }

    pub fn focused_control(&self) -> Option<LandingControl> {
        self.controls.iter().find(|(_, flag)| flag.get()).map(|(control, _)| *control)
    }

    pub fn control_at(&self, column: u16, row: u16) -> Option<LandingControl> {
        self.control_areas
            .iter()
            .find(|(_, area)| crate::ui::utils::contains(*area, column, row))
            .map(|(control, _)| *control)
    }
}

impl HasFocus for LandingState {
    fn build(&self, builder: &mut FocusBuilder) {
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
