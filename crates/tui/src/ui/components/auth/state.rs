use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use uikit_types::{AuthFlow, Effect, OAuthStrategy, SignUpDetails};

use crate::ui::components::common::TextInputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    FirstName,
    LastName,
    Email,
    Password,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    pub fn placeholder(self, flow: AuthFlow) -> &'static str {
        match (self, flow) {
            (Self::FirstName, _) => "John",
            (Self::LastName, _) => "Doe",
            (Self::Email, AuthFlow::SignIn) => "Enter your email",
            (Self::Email, AuthFlow::SignUp) => "john@example.com",
            (Self::Password, AuthFlow::SignIn) => "Enter your password",
            (Self::Password, AuthFlow::SignUp) => "Create a strong password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Focusable elements of an auth page, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthControl {
    Field(AuthField),
    Submit,
    OAuth(OAuthStrategy),
    /// "Sign up" / "Sign in" link to the other form.
    SwitchFlow,
}

/// Form state shared by the sign-in and sign-up pages.
#[derive(Debug, Clone)]
pub struct AuthFormState {
    flow: AuthFlow,
    first_name: TextInputState,
    last_name: TextInputState,
    email: TextInputState,
    password: TextInputState,
    error: Option<String>,
    submitting: bool,
    pub container_focus: FocusFlag,
    /// One flag per control, in tab order.
    pub controls: Vec<(AuthControl, FocusFlag)>,
    pub last_area: Rect,
    /// Rendered area for each entry of `controls`.
    pub per_item_areas: Vec<Rect>,
}

impl AuthFormState {
    pub fn new(flow: AuthFlow) -> Self {
        let prefix = match flow {
            AuthFlow::SignIn => "sign_in",
            AuthFlow::SignUp => "sign_up",
        };
        let mut controls: Vec<AuthControl> = match flow {
            AuthFlow::SignIn => vec![AuthControl::Field(AuthField::Email), AuthControl::Field(AuthField::Password)],
            AuthFlow::SignUp => vec![
                AuthControl::Field(AuthField::FirstName),
                AuthControl::Field(AuthField::LastName),
                AuthControl::Field(AuthField::Email),
                AuthControl::Field(AuthField::Password),
            ],
        };
        controls.extend([
            AuthControl::Submit,
            AuthControl::OAuth(OAuthStrategy::Google),
            AuthControl::OAuth(OAuthStrategy::GitHub),
            AuthControl::SwitchFlow,
        ]);
        let controls = controls
            .into_iter()
            .enumerate()
            .map(|(index, control)| (control, FocusFlag::named(&format!("{prefix}.control.{index}"))))
            .collect();
        Self {
            flow,
            first_name: TextInputState::new(),
            last_name: TextInputState::new(),
            email: TextInputState::new(),
            password: TextInputState::new(),
            error: None,
            submitting: false,
            container_focus: FocusFlag::named(prefix),
            controls,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    pub fn flow(&self) -> AuthFlow {
        self.flow
    }

    pub fn title(&self) -> &'static str {
        match self.flow {
            AuthFlow::SignIn => "Welcome Back",
            AuthFlow::SignUp => "Create your account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.flow, self.submitting) {
            (AuthFlow::SignIn, false) => "Sign In",
            (AuthFlow::SignIn, true) => "Signing in...",
            (AuthFlow::SignUp, false) => "Create Account",
            (AuthFlow::SignUp, true) => "Creating account...",
        }
    }

    /// Prompt and link text shown under the form.
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self.flow {
            AuthFlow::SignIn => ("Don't have an account?", "Sign up"),
            AuthFlow::SignUp => ("Already have an account?", "Sign in"),
        }
    }

    pub fn switch_path(&self) -> &'static str {
        match self.flow {
            AuthFlow::SignIn => "/sign-up",
            AuthFlow::SignUp => "/sign-in",
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = AuthField> + '_ {
        self.controls.iter().filter_map(|(control, _)| match control {
            AuthControl::Field(field) => Some(*field),
            _ => None,
        })
    }

    pub fn input(&self, field: AuthField) -> &TextInputState {
        match field {
            AuthField::FirstName => &self.first_name,
            AuthField::LastName => &self.last_name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    pub fn input_mut(&mut self, field: AuthField) -> &mut TextInputState {
        match field {
            AuthField::FirstName => &mut self.first_name,
            AuthField::LastName => &mut self.last_name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn focused_control(&self) -> Option<AuthControl> {
        self.controls.iter().find(|(_, flag)| flag.get()).map(|(control, _)| *control)
    }

    pub fn focused_field(&self) -> Option<AuthField> {
        match self.focused_control()? {
            AuthControl::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn flag_for(&self, control: AuthControl) -> Option<&FocusFlag> {
        self.controls.iter().find(|(c, _)| *c == control).map(|(_, flag)| flag)
    }

    /// First empty field; every field on both forms is required.
    pub fn first_missing_field(&self) -> Option<AuthField> {
        self.fields().find(|field| self.input(*field).is_empty())
    }

    /// Starts a password submission.
    ///
    /// Returns `None` while a call is already in flight or when a required
    /// field is blank. Clears the previous error.
    pub fn submit(&mut self) -> Option<Effect> {
        if self.submitting || self.first_missing_field().is_some() {
            return None;
        }
        self.error = None;
        self.submitting = true;
        let email = self.email.input().trim().to_string();
        let password = self.password.input().to_string();
        Some(match self.flow {
            AuthFlow::SignIn => Effect::SignIn { email, password },
            AuthFlow::SignUp => Effect::SignUp(SignUpDetails {
                first_name: self.first_name.input().trim().to_string(),
                last_name: self.last_name.input().trim().to_string(),
                email,
                password,
            }),
        })
    }

    /// Starts a third-party sign-in. OAuth leaves the submit button alone.
    pub fn start_oauth(&mut self, strategy: OAuthStrategy) -> Effect {
        self.error = None;
        Effect::OAuth {
            flow: self.flow,
            strategy,
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.submitting = false;
    }

    /// Clears inputs and status after a successful call.
    pub fn reset(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.password.clear();
        self.error = None;
        self.submitting = false;
    }
}

impl HasFocus for AuthFormState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for (_, flag) in &self.controls {
            builder.leaf_widget(flag);
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

    fn filled_sign_in() -> AuthFormState {
        let mut form = AuthFormState::new(AuthFlow::SignIn);
        form.input_mut(AuthField::Email).set_input(" john@example.com ");
        form.input_mut(AuthField::Password).set_input("password123");
        form
    }

    #[test]
    fn sign_in_submits_trimmed_email_once() {
        let mut form = filled_sign_in();
        assert_eq!(
            form.submit(),
            Some(Effect::SignIn {
                email: "john@example.com".into(),
                password: "password123".into()
            })
        );
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Signing in...");
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn blank_required_field_blocks_submit() {
        let mut form = AuthFormState::new(AuthFlow::SignUp);
        form.input_mut(AuthField::Email).set_input("a@b.co");
        assert_eq!(form.first_missing_field(), Some(AuthField::FirstName));
        assert_eq!(form.submit(), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn failure_shows_message_and_reenables_submit() {
        let mut form = filled_sign_in();
        form.submit();
        form.fail(AuthFlow::SignIn.failure_message());
        assert_eq!(form.error(), Some("Invalid email or password"));
        assert_eq!(form.submit_label(), "Sign In");
        assert!(form.submit().is_some());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn sign_up_has_four_fields_and_links_to_sign_in() {
        let form = AuthFormState::new(AuthFlow::SignUp);
        assert_eq!(form.fields().count(), 4);
        assert_eq!(form.controls.len(), 8);
        assert_eq!(form.switch_path(), "/sign-in");
        assert_eq!(form.submit_label(), "Create Account");
    }

    #[test]
    fn reset_clears_inputs() {
        let mut form = filled_sign_in();
        form.fail("x");
        form.reset();
        assert!(form.input(AuthField::Email).input().is_empty());
        assert_eq!(form.error(), None);
    }
}
