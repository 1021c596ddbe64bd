use crate::client::LoginRequest;
use crate::models::{Customer, CustomerDraft};
use crate::validation::{self, FormError, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PASSWORD_LEN};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub joined: String,
}

impl CustomerForm {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            joined: customer.joined.clone(),
        }
    }

    pub fn validate(&self) -> Result<CustomerDraft, FormError> {
        Ok(CustomerDraft {
            name: validation::required_text(&self.name, "name", MAX_NAME_LEN)?,
            email: validation::email(&self.email, "email")?,
            joined: validation::required_text(&self.joined, "joined", MAX_NAME_LEN)?,
        })
    }
}

/// Reply to a contact message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplyForm {
    pub reply: String,
}

impl ReplyForm {
    pub fn new(reply: impl Into<String>) -> Self {
        Self { reply: reply.into() }
    }

    pub fn validate(&self) -> Result<String, FormError> {
        validation::required_text(&self.reply, "reply", MAX_NOTE_LEN)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Password is sent as typed; only emptiness and length are checked.
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = validation::required_text(&self.email, "email", validation::MAX_EMAIL_LEN)?;
        if self.password.is_empty() {
            return Err(FormError::Required { field: "password" });
        }
        if self.password.chars().count() > MAX_PASSWORD_LEN {
            return Err(FormError::TooLong {
                field: "password",
                len: self.password.chars().count(),
                max: MAX_PASSWORD_LEN,
            });
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_email_needs_at() {
        let form = CustomerForm {
            name: "Karim".into(),
            email: "karim.example.com".into(),
            joined: "2024-01-05".into(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidEmail { field: "email" }));
    }

    #[test]
    fn test_blank_reply_rejected() {
        assert_eq!(
            ReplyForm::new("  \n").validate(),
            Err(FormError::Required { field: "reply" })
        );
        assert_eq!(ReplyForm::new(" Thanks! ").validate().unwrap(), "Thanks!");
    }

    #[test]
    fn test_login_keeps_password_verbatim() {
        let request = LoginForm::new(" admin@shop.test ", " pass ").validate().unwrap();
        assert_eq!(request.email, "admin@shop.test");
        assert_eq!(request.password, " pass ");
        assert_eq!(
            LoginForm::new("admin@shop.test", "").validate().unwrap_err(),
            FormError::Required { field: "password" }
        );
    }
}
