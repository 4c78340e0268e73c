//! Strongly-typed value types for validated domain primitives.
//!
//! Newtype wrappers for the two string formats the application cares
//! about: subscriber phone numbers and course codes. Both validate on
//! construction and on serde deserialization, and pass through sqlx as
//! plain TEXT columns.

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::PgTypeInfo,
};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The phone number is missing or malformed.
    InvalidPhoneNumber(String),
    /// The course code is malformed.
    InvalidCourseCode(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhoneNumber(msg) => write!(f, "Invalid phone number: {}", msg),
            Self::InvalidCourseCode(msg) => write!(f, "Invalid course code: {}", msg),
        }
    }
}

// ============================================================================
// PhoneNumber
// ============================================================================

/// A validated subscriber phone number.
///
/// User accounts are keyed by phone number rather than username or email.
/// The accepted format is `+92-XXXXXXXXX-D`: the `+92` country code, nine
/// subscriber digits, and a single trailing check digit, with literal
/// dashes between the groups.
///
/// # Example
///
/// ```
/// use campus_models::PhoneNumber;
///
/// let phone: PhoneNumber = "+92-300123456-7".parse().unwrap();
/// assert_eq!(phone.subscriber_number(), "300123456");
///
/// assert!("".parse::<PhoneNumber>().is_err());
/// assert!("0300-1234567".parse::<PhoneNumber>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "+92-300123456-7")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const COUNTRY_PREFIX: &'static str = "+92-";
    const SUBSCRIBER_DIGITS: usize = 9;

    /// Create a new `PhoneNumber` from a string, validating it.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValueTypeError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Create a `PhoneNumber` without validation.
    ///
    /// Intended for values loaded from a trusted source (the database),
    /// where validation already happened on the way in.
    #[inline]
    pub fn new_unchecked(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Get the phone number as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner String.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The nine-digit subscriber part between the dashes.
    pub fn subscriber_number(&self) -> &str {
        &self.0[Self::COUNTRY_PREFIX.len()..Self::COUNTRY_PREFIX.len() + Self::SUBSCRIBER_DIGITS]
    }

    /// The single trailing check digit.
    pub fn check_digit(&self) -> char {
        // validated format guarantees a trailing digit
        self.0.chars().next_back().unwrap_or('0')
    }

    /// Validate a phone number string against `+92-XXXXXXXXX-D`.
    fn validate(phone: &str) -> Result<(), ValueTypeError> {
        if phone.is_empty() {
            return Err(ValueTypeError::InvalidPhoneNumber(
                "phone number must be set".into(),
            ));
        }

        let rest = phone.strip_prefix(Self::COUNTRY_PREFIX).ok_or_else(|| {
            ValueTypeError::InvalidPhoneNumber(format!(
                "'{}' must start with the {} country code",
                phone,
                Self::COUNTRY_PREFIX.trim_end_matches('-')
            ))
        })?;

        let mut parts = rest.splitn(2, '-');
        let subscriber = parts.next().unwrap_or("");
        let check = parts.next();

        let subscriber_ok = subscriber.len() == Self::SUBSCRIBER_DIGITS
            && subscriber.chars().all(|c| c.is_ascii_digit());
        let check_ok =
            matches!(check, Some(d) if d.len() == 1 && d.chars().all(|c| c.is_ascii_digit()));

        if !subscriber_ok || !check_ok {
            return Err(ValueTypeError::InvalidPhoneNumber(format!(
                "'{}' does not match the +92-XXXXXXXXX-D format",
                phone
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = ValueTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for PhoneNumber {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> String {
        phone.0
    }
}

impl Type<sqlx::Postgres> for PhoneNumber {
    fn type_info() -> PgTypeInfo {
        <String as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for PhoneNumber {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for PhoneNumber {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as Decode<'r, sqlx::Postgres>>::decode(value)?;
        // Trust database values - validated on the way in
        Ok(Self::new_unchecked(s))
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// CourseCode
// ============================================================================

/// A validated course code.
///
/// Course codes follow the `[A-Z]{3}[0-9]{3}` catalog convention: a
/// three-letter uppercase subject prefix followed by a three-digit course
/// number, e.g. `CSC101` or `MTH305`.
///
/// # Example
///
/// ```
/// use campus_models::CourseCode;
///
/// let code: CourseCode = "ABC123".parse().unwrap();
/// assert_eq!(code.subject(), "ABC");
/// assert_eq!(code.number(), "123");
///
/// assert!("abc123".parse::<CourseCode>().is_err());
/// assert!("AB123".parse::<CourseCode>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "CSC101")]
pub struct CourseCode(String);

impl CourseCode {
    const SUBJECT_LEN: usize = 3;
    const NUMBER_LEN: usize = 3;

    /// Create a new `CourseCode` from a string, validating it.
    pub fn new(code: impl Into<String>) -> Result<Self, ValueTypeError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Create a `CourseCode` without validation.
    ///
    /// Intended for values loaded from a trusted source (the database),
    /// where validation already happened on the way in.
    #[inline]
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the course code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner String.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The three-letter subject prefix.
    pub fn subject(&self) -> &str {
        &self.0[..Self::SUBJECT_LEN]
    }

    /// The three-digit course number.
    pub fn number(&self) -> &str {
        &self.0[Self::SUBJECT_LEN..]
    }

    /// Validate a course code string against `[A-Z]{3}[0-9]{3}`.
    fn validate(code: &str) -> Result<(), ValueTypeError> {
        let expected_len = Self::SUBJECT_LEN + Self::NUMBER_LEN;

        let shape_ok = code.len() == expected_len
            && code[..Self::SUBJECT_LEN]
                .chars()
                .all(|c| c.is_ascii_uppercase())
            && code[Self::SUBJECT_LEN..]
                .chars()
                .all(|c| c.is_ascii_digit());

        if !shape_ok {
            return Err(ValueTypeError::InvalidCourseCode(format!(
                "'{}' must be three uppercase letters followed by three digits, e.g. 'ABC123'",
                code
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CourseCode({})", self.0)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseCode {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CourseCode {
    type Error = ValueTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for CourseCode {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> String {
        code.0
    }
}

impl Type<sqlx::Postgres> for CourseCode {
    fn type_info() -> PgTypeInfo {
        <String as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for CourseCode {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for CourseCode {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as Decode<'r, sqlx::Postgres>>::decode(value)?;
        // Trust database values - validated on the way in
        Ok(Self::new_unchecked(s))
    }
}

impl<'de> Deserialize<'de> for CourseCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_valid() {
        let phone = PhoneNumber::new("+92-300123456-7").unwrap();
        assert_eq!(phone.as_str(), "+92-300123456-7");
        assert_eq!(phone.subscriber_number(), "300123456");
        assert_eq!(phone.check_digit(), '7');
    }

    #[test]
    fn test_phone_number_empty_rejected() {
        let err = PhoneNumber::new("").unwrap_err();
        assert!(matches!(err, ValueTypeError::InvalidPhoneNumber(_)));
        assert!(err.to_string().contains("must be set"));
    }

    #[test]
    fn test_phone_number_wrong_country_code() {
        assert!(PhoneNumber::new("+1-300123456-7").is_err());
        assert!(PhoneNumber::new("92-300123456-7").is_err());
    }

    #[test]
    fn test_phone_number_wrong_subscriber_length() {
        assert!(PhoneNumber::new("+92-30012345-7").is_err());
        assert!(PhoneNumber::new("+92-3001234567-7").is_err());
    }

    #[test]
    fn test_phone_number_missing_check_digit() {
        assert!(PhoneNumber::new("+92-300123456").is_err());
        assert!(PhoneNumber::new("+92-300123456-").is_err());
        assert!(PhoneNumber::new("+92-300123456-77").is_err());
    }

    #[test]
    fn test_phone_number_non_digit_characters() {
        assert!(PhoneNumber::new("+92-30012345a-7").is_err());
        assert!(PhoneNumber::new("+92-300123456-x").is_err());
    }

    #[test]
    fn test_phone_number_deserialize_validates() {
        let ok: Result<PhoneNumber, _> = serde_json::from_str(r#""+92-300123456-7""#);
        assert!(ok.is_ok());

        let bad: Result<PhoneNumber, _> = serde_json::from_str(r#""0300-1234567""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_phone_number_from_str() {
        let phone: PhoneNumber = "+92-311999888-0".parse().unwrap();
        assert_eq!(phone.to_string(), "+92-311999888-0");
    }

    #[test]
    fn test_course_code_valid() {
        let code = CourseCode::new("ABC123").unwrap();
        assert_eq!(code.subject(), "ABC");
        assert_eq!(code.number(), "123");
    }

    #[test]
    fn test_course_code_lowercase_rejected() {
        assert!(CourseCode::new("abc123").is_err());
        assert!(CourseCode::new("Abc123").is_err());
    }

    #[test]
    fn test_course_code_wrong_lengths() {
        assert!(CourseCode::new("AB123").is_err());
        assert!(CourseCode::new("ABCD123").is_err());
        assert!(CourseCode::new("ABC12").is_err());
        assert!(CourseCode::new("ABC1234").is_err());
        assert!(CourseCode::new("").is_err());
    }

    #[test]
    fn test_course_code_digits_in_prefix() {
        assert!(CourseCode::new("A1C123").is_err());
        assert!(CourseCode::new("123ABC").is_err());
    }

    #[test]
    fn test_course_code_deserialize_validates() {
        let ok: Result<CourseCode, _> = serde_json::from_str(r#""MTH305""#);
        assert!(ok.is_ok());

        let bad: Result<CourseCode, _> = serde_json::from_str(r#""mth305""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_course_code_serialize_plain_string() {
        let code = CourseCode::new("CSC101").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""CSC101""#);
    }
}
