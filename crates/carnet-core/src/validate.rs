//! Shape checks for contact form fields.
//!
//! All predicates are pure. The patterns reproduce the behaviour the contact
//! list has always had, including two known leniencies:
//!
//! - names are prefix-matched, so `"John123!!"` is accepted;
//! - email character classes are lowercase-only, so `"A@b.com"` is rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::{contact::Contact, error::ValidationError};

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Z]\p{L}*").expect("Invalid name regex")
});

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([0-2][0-9]|3[01])/(0[0-9]|1[0-2])/[0-9]{4}$")
    .expect("Invalid date regex")
});

// TODO: the local part and domain only admit lowercase ASCII; decide whether
// mixed-case addresses should be accepted and lowercased before storage.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"\A[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\z",
  )
  .expect("Invalid email regex")
});

static HAS_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(.*?[0-9])+.*$").expect("Invalid digit regex")
});

static HAS_UPPER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(.*?[A-Z])+.*$").expect("Invalid uppercase regex")
});

static HAS_LOWER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(.*?[a-z])+.*$").expect("Invalid lowercase regex")
});

const MIN_PASSWORD_LEN: usize = 8;

/// An uppercase ASCII letter followed by any run of letters. Trailing
/// non-letters are not checked.
pub fn is_valid_name(name: &str) -> bool { NAME_REGEX.is_match(name) }

/// `DD/MM/YYYY` with day `00`-`31` and month `00`-`12`. Not calendar-aware.
pub fn is_valid_date(date: &str) -> bool { DATE_REGEX.is_match(date) }

pub fn is_valid_email(email: &str) -> bool { EMAIL_REGEX.is_match(email) }

/// True when every value is true; vacuously true for an empty slice.
pub fn all_true(values: &[bool]) -> bool { values.iter().all(|v| *v) }

/// At least one digit, one uppercase and one lowercase letter, and at least
/// eight characters.
pub fn is_strong_password(password: &str) -> bool {
  all_true(&[
    HAS_DIGIT_REGEX.is_match(password),
    HAS_UPPER_REGEX.is_match(password),
    HAS_LOWER_REGEX.is_match(password),
    password.chars().count() >= MIN_PASSWORD_LEN,
  ])
}

/// Check the validated form fields in order, stopping at the first failure.
///
/// `phone` and `gender` pass through unchecked.
pub fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
  if !is_valid_name(&contact.name) {
    return Err(ValidationError::InvalidName);
  }
  if !is_valid_name(&contact.firstname) {
    return Err(ValidationError::InvalidFirstname);
  }
  if !is_valid_date(&contact.birthdate) {
    return Err(ValidationError::InvalidBirthdate);
  }
  if !is_valid_email(&contact.email) {
    return Err(ValidationError::InvalidEmail);
  }
  Ok(())
}
