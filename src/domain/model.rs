use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferingId(pub u32);

impl fmt::Display for OfferingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OfferingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Currency amount in whole units. Arithmetic saturates instead of wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(pub u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn times(self, quantity: u32) -> Amount {
        Amount(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Amount::saturating_add)
    }
}

/// A purchasable program in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub id: OfferingId,
    pub title: String,
    #[serde(rename = "price")]
    pub unit_price: Amount,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub sessions: Option<u32>,
}

impl Offering {
    pub fn new(id: impl Into<OfferingId>, title: impl Into<String>, unit_price: u64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            unit_price: Amount(unit_price),
            category: String::new(),
            description: String::new(),
            duration: None,
            level: None,
            sessions: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// One distinct offering's accumulated quantity. `quantity` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueLine {
    pub offering_id: OfferingId,
    pub quantity: u32,
}

/// What a renderer receives for each line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderLine {
    pub offering_id: OfferingId,
    pub title: String,
    pub unit_price: Amount,
    pub quantity: u32,
}

impl RenderLine {
    pub fn subtotal(&self) -> Amount {
        self.unit_price.times(self.quantity)
    }
}

/// Outcome of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjusted {
    Updated(QueueLine),
    Removed(OfferingId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// User-facing notification, rendered by the UI as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Added { offering_id: OfferingId, title: String },
    CheckoutSubmitted,
    ContactSent,
    ValidationFailed { errors: Vec<String> },
    SubmissionFailed { reason: String },
    LoggedIn,
    SignedUp,
    LoggedOut,
    AuthFailed { reason: String },
    ComingSoon { feature: String },
}

impl Event {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Event::Added { .. }
            | Event::CheckoutSubmitted
            | Event::ContactSent
            | Event::LoggedIn
            | Event::SignedUp
            | Event::LoggedOut => NoticeLevel::Success,
            Event::ValidationFailed { .. }
            | Event::SubmissionFailed { .. }
            | Event::AuthFailed { .. } => NoticeLevel::Error,
            Event::ComingSoon { .. } => NoticeLevel::Info,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Event::Added { .. } => "Program Added!",
            Event::CheckoutSubmitted => "Application Submitted!",
            Event::ContactSent => "Message Sent!",
            Event::ValidationFailed { .. } => "Validation Error",
            Event::SubmissionFailed { .. } => "Submission Failed",
            Event::LoggedIn | Event::SignedUp => "Welcome!",
            Event::LoggedOut => "Logged Out",
            Event::AuthFailed { .. } => "Authentication Failed",
            Event::ComingSoon { .. } => "Coming Soon",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Event::Added { title, .. } => format!("{} has been added to your plan.", title),
            Event::CheckoutSubmitted => {
                "We'll contact you within 24 hours to complete your membership.".to_string()
            }
            Event::ContactSent => {
                "Thank you for your message. We'll get back to you soon.".to_string()
            }
            Event::ValidationFailed { errors } => errors.join(", "),
            Event::SubmissionFailed { reason } => reason.clone(),
            Event::LoggedIn => "Welcome back! Login successful.".to_string(),
            Event::SignedUp => "Account created successfully! Welcome to AO Gym.".to_string(),
            Event::LoggedOut => "You have been logged out successfully.".to_string(),
            Event::AuthFailed { reason } => reason.clone(),
            Event::ComingSoon { feature } => format!("{} coming soon!", feature),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub workouts: u32,
    pub hours: u32,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub time: String,
}

/// Persisted member profile. Field names follow the stored JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub membership_type: String,
    pub membership_status: String,
    pub join_date: NaiveDate,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub recent_activity: Vec<Activity>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome back, {}!", self.first_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub plan_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Confirmation returned by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub reference: String,
    pub total: Amount,
    pub line_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_times_and_sum() {
        assert_eq!(Amount(45).times(2), Amount(90));
        let total: Amount = vec![Amount(90), Amount(40)].into_iter().sum();
        assert_eq!(total, Amount(130));
        assert_eq!(Amount(u64::MAX).times(2), Amount(u64::MAX));
        assert_eq!(Amount(45).to_string(), "$45");
    }

    #[test]
    fn test_user_json_uses_camel_case() {
        let json = r#"{
            "id": "user_1",
            "email": "a@b.co",
            "firstName": "Ahmed",
            "lastName": "Osman",
            "phone": "+1 (555) 123-4567",
            "membershipType": "Premium",
            "membershipStatus": "Active",
            "joinDate": "2024-01-15",
            "expiryDate": "2025-01-15",
            "stats": {"workouts": 47, "hours": 94, "calories": 12500},
            "recentActivity": [{"type": "workout", "title": "Strength Training", "time": "2 hours ago"}]
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.initials(), "AO");
        assert_eq!(user.full_name(), "Ahmed Osman");
        assert_eq!(user.welcome_message(), "Welcome back, Ahmed!");
        assert_eq!(user.recent_activity[0].kind, "workout");

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("membershipType").is_some());
        assert_eq!(value["joinDate"], "2024-01-15");
    }

    #[test]
    fn test_event_texts() {
        let added = Event::Added {
            offering_id: OfferingId(1),
            title: "Strength".to_string(),
        };
        assert_eq!(added.level(), NoticeLevel::Success);
        assert_eq!(added.message(), "Strength has been added to your plan.");

        let soon = Event::ComingSoon {
            feature: "Workout history feature".to_string(),
        };
        assert_eq!(soon.level(), NoticeLevel::Info);
        assert_eq!(soon.message(), "Workout history feature coming soon!");
    }
}
