//! Shared domain enums
//!
//! All enums are stored as lowercase string slugs in Postgres, with manual
//! sqlx Type/Encode/Decode impls so repositories can bind them directly.

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Emirate
// ---------------------------------------------------------------------------

/// The seven emirates of the UAE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Emirate {
    Dubai,
    AbuDhabi,
    Sharjah,
    Ajman,
    Fujairah,
    RasAlKhaimah,
    UmmAlQuwain,
}

impl Emirate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emirate::Dubai => "dubai",
            Emirate::AbuDhabi => "abu-dhabi",
            Emirate::Sharjah => "sharjah",
            Emirate::Ajman => "ajman",
            Emirate::Fujairah => "fujairah",
            Emirate::RasAlKhaimah => "ras-al-khaimah",
            Emirate::UmmAlQuwain => "umm-al-quwain",
        }
    }
}

impl std::fmt::Display for Emirate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Emirate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dubai" => Ok(Emirate::Dubai),
            "abu-dhabi" | "abu dhabi" => Ok(Emirate::AbuDhabi),
            "sharjah" => Ok(Emirate::Sharjah),
            "ajman" => Ok(Emirate::Ajman),
            "fujairah" => Ok(Emirate::Fujairah),
            "ras-al-khaimah" | "ras al khaimah" => Ok(Emirate::RasAlKhaimah),
            "umm-al-quwain" | "umm al quwain" => Ok(Emirate::UmmAlQuwain),
            _ => Err(format!("Invalid emirate: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for Emirate {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Emirate {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for Emirate {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// SubmissionStatus
// ---------------------------------------------------------------------------

/// Workflow status of a travel submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Processing => "processing",
            SubmissionStatus::Completed => "completed",
            SubmissionStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal statuses admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Completed | SubmissionStatus::Cancelled)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(SubmissionStatus::Pending),
            "processing" => Ok(SubmissionStatus::Processing),
            "completed" => Ok(SubmissionStatus::Completed),
            "cancelled" => Ok(SubmissionStatus::Cancelled),
            _ => Err(format!("Invalid submission status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for SubmissionStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for SubmissionStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for SubmissionStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Workflow status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal statuses admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Whether a transition from self to `next` is allowed.
    ///
    /// pending -> confirmed | cancelled
    /// confirmed -> completed | cancelled
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        if *self == next {
            return false;
        }
        match self {
            BookingStatus::Pending => {
                matches!(next, BookingStatus::Confirmed | BookingStatus::Cancelled)
            }
            BookingStatus::Confirmed => {
                matches!(next, BookingStatus::Completed | BookingStatus::Cancelled)
            }
            BookingStatus::Completed | BookingStatus::Cancelled => false,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for BookingStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for BookingStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BookingStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Staff account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Agent,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Agent => "agent",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(StaffRole::Admin),
            "agent" => Ok(StaffRole::Agent),
            _ => Err(format!("Invalid staff role: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for StaffRole {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for StaffRole {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for StaffRole {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emirate_slug_round_trip() {
        for e in [
            Emirate::Dubai,
            Emirate::AbuDhabi,
            Emirate::Sharjah,
            Emirate::Ajman,
            Emirate::Fujairah,
            Emirate::RasAlKhaimah,
            Emirate::UmmAlQuwain,
        ] {
            assert_eq!(e.as_str().parse::<Emirate>().unwrap(), e);
        }
    }

    #[test]
    fn emirate_accepts_spaced_names() {
        assert_eq!("Abu Dhabi".parse::<Emirate>().unwrap(), Emirate::AbuDhabi);
        assert_eq!("ras al khaimah".parse::<Emirate>().unwrap(), Emirate::RasAlKhaimah);
        assert!("london".parse::<Emirate>().is_err());
    }

    #[test]
    fn booking_status_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn submission_status_terminal() {
        assert!(!SubmissionStatus::Pending.is_terminal());
        assert!(!SubmissionStatus::Processing.is_terminal());
        assert!(SubmissionStatus::Completed.is_terminal());
        assert!(SubmissionStatus::Cancelled.is_terminal());
    }

    #[test]
    fn status_serde_uses_lowercase() {
        let s = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(s, "\"confirmed\"");
        let back: SubmissionStatus = serde_json::from_str("\"processing\"").unwrap();
        assert_eq!(back, SubmissionStatus::Processing);
    }
}
