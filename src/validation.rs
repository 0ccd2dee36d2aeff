//! Field checks for the registration form.
//!
//! Every check is pure: it takes the raw submitted text and hands back either the cleaned-up
//! value or a [`FieldError`] whose `Display` is the message shown next to the field.

use crate::data::student::{NewStudent, RegistrationForm, YearOfStudy};
use email_address::EmailAddress;
use snafu::Snafu;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum FieldError {
    #[snafu(display("{label} is required."))]
    RequiredFieldMissing { label: &'static str },
    #[snafu(display("Please enter a valid email."))]
    InvalidEmailFormat,
    #[snafu(display("Please enter a valid URL."))]
    InvalidUrlFormat,
    #[snafu(display("{label} is required."))]
    NoSelectionMade { label: &'static str },
    #[snafu(display("A student with the email {email} is already registered."))]
    DuplicateEmail { email: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Programme,
    Year,
    Interests,
    Photo,
}

impl Field {
    /// Matches the form input's `name`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Programme => "programme",
            Self::Year => "year",
            Self::Interests => "interests",
            Self::Photo => "photo",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Programme => "Programme",
            Self::Year => "Year of study",
            Self::Interests => "Interests",
            Self::Photo => "Photo URL",
        }
    }
}

/// Per-field errors from one submission. Fields that passed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// The message for `field`, or an empty string when it passed.
    pub fn message(&self, field: Field) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn validate_required<'a>(value: &'a str, label: &'static str) -> Result<&'a str, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::RequiredFieldMissing { label })
    } else {
        Ok(value)
    }
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the domain with
/// text on both sides of it. Nothing stricter than that, so `a..b@x.com` is fine.
pub fn validate_email(value: &str) -> Result<EmailAddress, FieldError> {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidEmailFormat);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(FieldError::InvalidEmailFormat);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(FieldError::InvalidEmailFormat);
    }
    if !domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    {
        return Err(FieldError::InvalidEmailFormat);
    }

    Ok(EmailAddress::new_unchecked(value.to_owned()))
}

/// The photo is optional, so blank input is `Ok(None)`.
pub fn validate_url(value: &str) -> Result<Option<Url>, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(Some(url)),
        _ => Err(FieldError::InvalidUrlFormat),
    }
}

pub fn validate_selection<'a>(
    value: Option<&'a str>,
    label: &'static str,
) -> Result<&'a str, FieldError> {
    match value.map(str::trim) {
        Some(chosen) if !chosen.is_empty() => Ok(chosen),
        _ => Err(FieldError::NoSelectionMade { label }),
    }
}

pub fn parse_interests(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn collect<T>(errors: &mut FieldErrors, field: Field, result: Result<T, FieldError>) -> Option<T> {
    result.map_err(|error| errors.insert(field, error)).ok()
}

/// Runs every field check, collecting all failures rather than stopping at the first.
pub fn validate_registration(form: &RegistrationForm) -> Result<NewStudent, FieldErrors> {
    let mut errors = FieldErrors::new();

    let first_name = collect(
        &mut errors,
        Field::FirstName,
        validate_required(&form.first_name, Field::FirstName.label()).map(ToOwned::to_owned),
    );
    let last_name = collect(
        &mut errors,
        Field::LastName,
        validate_required(&form.last_name, Field::LastName.label()).map(ToOwned::to_owned),
    );
    let email = collect(&mut errors, Field::Email, validate_email(&form.email));
    let programme = collect(
        &mut errors,
        Field::Programme,
        validate_required(&form.programme, Field::Programme.label()).map(ToOwned::to_owned),
    );
    let year = collect(
        &mut errors,
        Field::Year,
        validate_selection(form.year.as_deref(), Field::Year.label()).and_then(|chosen| {
            YearOfStudy::from_value(chosen).ok_or(FieldError::NoSelectionMade {
                label: Field::Year.label(),
            })
        }),
    );
    let photo_url = collect(&mut errors, Field::Photo, validate_url(&form.photo));

    let (Some(first_name), Some(last_name), Some(email), Some(programme), Some(year), Some(photo_url)) =
        (first_name, last_name, email, programme, year, photo_url)
    else {
        return Err(errors);
    };

    Ok(NewStudent {
        first_name,
        last_name,
        email,
        programme,
        year,
        interests: parse_interests(&form.interests),
        photo_url,
    })
}
