//! The signup form schema.
//!
//! [`SignupInput`] carries the raw field strings exactly as typed. [`validate`] checks every
//! rule independently and either hands back the [`SignupPayload`] that is sent to the backend
//! or a [`FieldErrors`] map with one message per offending field.

use std::{collections::BTreeMap, fmt};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

pub mod flow;

/// Israeli mobile numbers: `05` followed by eight ASCII digits.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^05[0-9]{8}$").unwrap());

/// Addresses with a dotted domain and an alphabetic TLD of two or more letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// Banner text for a failed sign-up that carries no message of its own.
pub const SIGNUP_FAILED: &str = "שגיאה בהרשמה. אנא נסה שוב מאוחר יותר.";

#[derive(Clone, Default, PartialEq, Eq, Validate, derive_more::Debug)]
pub struct SignupInput {
    #[validate(custom(
        function = "username_length",
        message = "שם משתמש חייב להכיל לפחות 2 תווים"
    ))]
    pub username: String,
    #[validate(
        email(message = "כתובת אימייל לא תקינה"),
        custom(function = "email_shape", message = "כתובת אימייל לא תקינה")
    )]
    pub email: String,
    #[validate(regex(path = *PHONE_PATTERN, message = "מספר טלפון לא תקין"))]
    pub phone: String,
    #[validate(custom(
        function = "password_length",
        message = "סיסמה חייבת להכיל לפחות 6 תווים"
    ))]
    #[debug(skip)]
    pub password: String,
    #[validate(must_match(other = "password", message = "הסיסמאות אינן תואמות"))]
    #[debug(skip)]
    pub confirm_password: String,
}

/// Lengths are counted in UTF-16 code units, the way browsers count them.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn username_length(value: &str) -> Result<(), ValidationError> {
    if utf16_len(value) < 2 {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn password_length(value: &str) -> Result<(), ValidationError> {
    if utf16_len(value) < 6 {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn email_shape(value: &str) -> Result<(), ValidationError> {
    if value.starts_with('.') || value.contains("..") || !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}

impl SignupInput {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// What the sign-up collaborator receives. The confirmation field never makes it here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub username: String,
    pub email: String,
    pub phone: String,
    #[debug(skip)]
    pub password: String,
}

impl From<SignupInput> for SignupPayload {
    fn from(input: SignupInput) -> Self {
        let SignupInput {
            username,
            email,
            phone,
            password,
            confirm_password: _,
        } = input;
        Self {
            username,
            email,
            phone,
            password,
        }
    }
}

/// The form's inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Username,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Name used on the wire and in form markup.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    fn from_struct_field(name: &str) -> Option<Self> {
        match name {
            "username" => Some(Field::Username),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "password" => Some(Field::Password),
            "confirm_password" => Some(Field::ConfirmPassword),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-indexed validation messages. Fields without a violation are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = BTreeMap::new();
        for (name, errors) in errors.field_errors() {
            let Some(field) = Field::from_struct_field(&name) else {
                continue;
            };
            let message = errors
                .iter()
                .find_map(|err| err.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("invalid {field}"));
            out.insert(field, message);
        }
        FieldErrors(out)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {msg}")?;
            first = false;
        }
        Ok(())
    }
}

/// Runs the schema against `input`.
pub fn validate(input: &SignupInput) -> Result<SignupPayload, FieldErrors> {
    match input.validate() {
        Ok(()) => Ok(SignupPayload::from(input.clone())),
        Err(errors) => Err(errors.into()),
    }
}
