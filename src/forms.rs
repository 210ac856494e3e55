use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

/// Login / sign-up card. Fields are collected but never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mode: AuthMode,
    pub show_password: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub remember_me: bool,
    pub accepted_terms: bool,
}

impl LoginForm {
    pub fn is_sign_up(&self) -> bool {
        self.mode == AuthMode::SignUp
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::FirstName => self.first_name = value,
            LoginField::LastName => self.last_name = value,
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
            LoginField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Your Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Sign in to continue your learning journey",
            AuthMode::SignUp => "Start your learning journey today",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    /// Prompt and link label of the mode switch below the form.
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self.mode {
            AuthMode::SignIn => ("Don't have an account?", "Sign up"),
            AuthMode::SignUp => ("Already have an account?", "Sign in"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryType {
    #[default]
    General,
    Courses,
    Support,
    Partnership,
    Feedback,
}

impl InquiryType {
    pub const ALL: &'static [InquiryType] = &[
        InquiryType::General,
        InquiryType::Courses,
        InquiryType::Support,
        InquiryType::Partnership,
        InquiryType::Feedback,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Courses => "courses",
            InquiryType::Support => "support",
            InquiryType::Partnership => "partnership",
            InquiryType::Feedback => "feedback",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Courses => "Course Questions",
            InquiryType::Support => "Technical Support",
            InquiryType::Partnership => "Partnership Opportunities",
            InquiryType::Feedback => "Feedback & Suggestions",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry: Option<InquiryType>,
    pub subject: String,
    pub message: String,
    pub sent: bool,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        self.sent = false;
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn select_inquiry(&mut self, inquiry: InquiryType) {
        self.sent = false;
        self.inquiry = Some(inquiry);
    }

    /// Logs the inquiry and clears the form. Nothing leaves the application.
    pub fn send(&mut self) {
        info!(
            inquiry = self.inquiry.map(|i| i.key()).unwrap_or("unspecified"),
            subject = %self.subject,
            "contact message submitted"
        );
        *self = Self { sent: true, ..Self::default() };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSettings {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub course_updates: bool,
    pub email_reminders: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            course_updates: true,
            email_reminders: true,
        }
    }
}

impl ProfileSettings {
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switch_changes_labels_only() {
        let mut form = LoginForm::default();
        form.set(LoginField::Email, "you@example.com".to_string());
        assert_eq!(form.submit_label(), "Sign In");
        assert_eq!(form.switch_prompt().1, "Sign up");

        form.toggle_mode();
        assert!(form.is_sign_up());
        assert_eq!(form.title(), "Create Your Account");
        assert_eq!(form.submit_label(), "Create Account");
        assert_eq!(form.email, "you@example.com");

        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignIn);
        assert_eq!(form.subtitle(), "Sign in to continue your learning journey");
    }

    #[test]
    fn password_visibility_toggles() {
        let mut form = LoginForm::default();
        assert!(!form.show_password);
        form.toggle_password_visibility();
        assert!(form.show_password);
        form.toggle_password_visibility();
        assert!(!form.show_password);
    }

    #[test]
    fn sending_contact_form_clears_it() {
        let mut form = ContactForm::default();
        form.set(ContactField::Subject, "Refund".to_string());
        form.select_inquiry(InquiryType::Support);
        form.send();
        assert!(form.sent);
        assert!(form.subject.is_empty());
        assert_eq!(form.inquiry, None);

        form.set(ContactField::FirstName, "Ann".to_string());
        assert!(!form.sent);
    }

    #[test]
    fn inquiry_labels() {
        assert_eq!(InquiryType::Partnership.to_string(), "Partnership Opportunities");
        assert_eq!(InquiryType::Feedback.key(), "feedback");
    }

    #[test]
    fn profile_defaults_have_notifications_on() {
        let mut profile = ProfileSettings::default();
        assert!(profile.course_updates && profile.email_reminders);
        profile.set(ProfileField::Email, "jd@example.com".to_string());
        assert_eq!(profile.email, "jd@example.com");
    }
}
