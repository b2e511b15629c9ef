use crate::notify::Notice;
use crate::state::inquiry::is_email;

/// The newsletter sign-up box. Subscribing is simulated and settles at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    error: Option<String>,
}

impl NewsletterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.error = None;
    }

    pub fn subscribe(&mut self) -> Option<Notice> {
        let email = self.email.trim();
        if email.is_empty() {
            return None;
        }
        if !is_email(email) {
            self.error = Some("Please enter a valid email address.".to_string());
            return None;
        }
        let notice = Notice::info(format!("Thank you for subscribing with: {}", email));
        self.email.clear();
        Some(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_does_nothing() {
        let mut form = NewsletterForm::default();
        form.set_email("  ".to_string());
        assert_eq!(form.subscribe(), None);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn malformed_email_shows_an_error_and_keeps_input() {
        let mut form = NewsletterForm::default();
        form.set_email("reader@".to_string());
        assert_eq!(form.subscribe(), None);
        assert!(form.error().is_some());
        assert_eq!(form.email(), "reader@");

        form.set_email("reader@news.np".to_string());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn valid_email_thanks_and_clears() {
        let mut form = NewsletterForm::default();
        form.set_email("reader@news.np".to_string());
        let notice = form.subscribe().expect("notice");
        assert_eq!(notice.title, "Thank you for subscribing with: reader@news.np");
        assert_eq!(form.email(), "");
    }

    #[test]
    fn subscribing_a_copy_keeps_the_rendered_form() {
        let mut rendered = NewsletterForm::default();
        rendered.set_email("reader@news.np".to_string());
        let mut next = rendered.clone();
        assert!(next.subscribe().is_some());
        assert_eq!(rendered.email(), "reader@news.np");
        assert_eq!(next.email(), "");
    }
}
