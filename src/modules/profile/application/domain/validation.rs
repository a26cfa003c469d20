//! Validation schema for the profile form.
//!
//! Every field has exactly one entry in [`FIELD_RULES`]. All entries run on each
//! validation pass, so a draft with several bad fields reports all of them at
//! once. Inside a single field the first failing check wins and supplies the
//! message.

use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use crate::profile::application::domain::{
    entities::{ProfileDraft, ProfileField, ProfileRecord, Visibility},
    policies::avatar_policy::AvatarPolicy,
};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const JOB_TITLE_MAX_LEN: usize = 100;
pub const PHONE_MIN_LEN: usize = 10;
pub const PHONE_MAX_LEN: usize = 15;
pub const EMAIL_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const PITCH_MAX_LEN: usize = 500;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Zа-яА-Я\s]+$").expect("name pattern compiles"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+[0-9]{10,15}$").expect("phone pattern compiles"))
}

// Plain local part, dotted domain, alphabetic TLD of two or more letters.
// No quoted local parts, no IP literals.
fn email_shape_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
            .expect("email pattern compiles")
    })
}

fn is_plain_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
        && email_shape_pattern().is_match(value)
        && !value.starts_with('.')
        && !value.contains("..")
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Field-scoped messages from one validation pass. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ProfileField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ProfileField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.0.keys().copied()
    }

    pub fn as_map(&self) -> &BTreeMap<ProfileField, String> {
        &self.0
    }
}

impl From<BTreeMap<ProfileField, String>> for ValidationErrors {
    fn from(map: BTreeMap<ProfileField, String>) -> Self {
        Self(map)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(ProfileField::as_str).collect();
        write!(f, "Invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

//
// ──────────────────────────────────────────────────────────
// Per-field rules
// ──────────────────────────────────────────────────────────
//

type FieldRule = fn(&ProfileDraft, &AvatarPolicy) -> Result<(), String>;

/// Field identifier → rule. Order only affects iteration, not the outcome.
pub const FIELD_RULES: [(ProfileField, FieldRule); 9] = [
    (ProfileField::Name, check_name),
    (ProfileField::Surname, check_surname),
    (ProfileField::JobTitle, check_job_title),
    (ProfileField::Phone, check_phone),
    (ProfileField::Email, check_email),
    (ProfileField::Address, check_address),
    (ProfileField::Pitch, check_pitch),
    (ProfileField::Visibility, check_visibility),
    (ProfileField::Avatar, check_avatar),
];

/// Length in UTF-16 code units, the way browsers count `maxlength`.
fn char_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn check_max(field: ProfileField, value: &str, max: usize) -> Result<(), String> {
    if char_len(value) > max {
        return Err(format!(
            "{} must not exceed {} characters",
            field.label(),
            max
        ));
    }
    Ok(())
}

fn check_person_name(field: ProfileField, value: &str) -> Result<(), String> {
    let len = char_len(value);
    if len < NAME_MIN_LEN {
        return Err(format!(
            "{} must be at least {} characters long",
            field.label(),
            NAME_MIN_LEN
        ));
    }
    check_max(field, value, NAME_MAX_LEN)?;
    if !name_pattern().is_match(value) {
        return Err(format!(
            "{} must contain only letters and spaces",
            field.label()
        ));
    }
    Ok(())
}

fn check_name(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    check_person_name(ProfileField::Name, &draft.name)
}

fn check_surname(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    check_person_name(ProfileField::Surname, &draft.surname)
}

fn check_job_title(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    check_max(ProfileField::JobTitle, &draft.job_title, JOB_TITLE_MAX_LEN)
}

// The pattern and the length bounds are checked independently; both must hold.
fn check_phone(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    let phone = draft.phone.as_str();
    if !phone_pattern().is_match(phone) {
        return Err("Phone must be in the format +<country code><number>".to_string());
    }
    if char_len(phone) < PHONE_MIN_LEN {
        return Err(format!(
            "Phone must be at least {} characters long",
            PHONE_MIN_LEN
        ));
    }
    check_max(ProfileField::Phone, phone, PHONE_MAX_LEN)
}

fn check_email(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    if !is_plain_email(&draft.email) {
        return Err("Email must be a valid email address".to_string());
    }
    check_max(ProfileField::Email, &draft.email, EMAIL_MAX_LEN)
}

fn check_address(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    check_max(ProfileField::Address, &draft.address, ADDRESS_MAX_LEN)
}

fn check_pitch(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    check_max(ProfileField::Pitch, &draft.pitch, PITCH_MAX_LEN)
}

fn check_visibility(draft: &ProfileDraft, _: &AvatarPolicy) -> Result<(), String> {
    draft
        .visibility
        .parse::<Visibility>()
        .map(|_| ())
        .map_err(|_| "Visibility must be either Private or Public".to_string())
}

// Only a freshly selected file is checked. A preview restored from storage has no file.
fn check_avatar(draft: &ProfileDraft, policy: &AvatarPolicy) -> Result<(), String> {
    match &draft.avatar_file {
        Some(file) if !policy.accepts(file) => {
            Err("Avatar must be a .jpg, .jpeg, or .png file and not exceed 5 MB".to_string())
        }
        _ => Ok(()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Schema
// ──────────────────────────────────────────────────────────
//

fn optional_text(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileSchema {
    avatar_policy: AvatarPolicy,
}

impl ProfileSchema {
    pub fn new(avatar_policy: AvatarPolicy) -> Self {
        Self { avatar_policy }
    }

    /// Run every rule and build the record, or return all field errors together.
    pub fn validate(&self, draft: &ProfileDraft) -> Result<ProfileRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, rule) in FIELD_RULES.iter() {
            if let Err(message) = rule(draft, &self.avatar_policy) {
                errors.insert(*field, message);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let visibility = draft
            .visibility
            .parse::<Visibility>()
            .unwrap_or_default();

        Ok(ProfileRecord {
            name: draft.name.clone(),
            surname: draft.surname.clone(),
            job_title: optional_text(&draft.job_title),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            address: optional_text(&draft.address),
            pitch: optional_text(&draft.pitch),
            visibility,
            avatar: draft.avatar_preview.clone(),
        })
    }
}
