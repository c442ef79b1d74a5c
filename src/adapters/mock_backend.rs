use crate::core::{
    Activity, Amount, AuthService, ContactForm, LoginForm, MembershipForm, Receipt, RenderLine,
    SignupForm, Submitter, User, UserStats,
};
use crate::utils::error::{GymError, Result};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Stand-in for the membership backend. Applications and contact messages
/// each wait their own latency, then succeed.
#[derive(Debug, Default)]
pub struct MockSubmitter {
    checkout_latency: Duration,
    contact_latency: Duration,
    failure: Option<String>,
    submitted: AtomicU64,
}

impl MockSubmitter {
    pub fn new(checkout_latency: Duration, contact_latency: Duration) -> Self {
        Self {
            checkout_latency,
            contact_latency,
            ..Self::default()
        }
    }

    /// Every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    async fn simulate(&self, latency: Duration) -> Result<()> {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        match &self.failure {
            Some(message) => Err(GymError::SubmissionError {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Submitter for MockSubmitter {
    async fn submit(
        &self,
        form: &MembershipForm,
        lines: &[RenderLine],
        total: Amount,
    ) -> Result<Receipt> {
        tracing::debug!(
            "Mock submit for {} <{}> on plan '{}'",
            form.full_name,
            form.email,
            form.plan_type
        );
        self.simulate(self.checkout_latency).await?;

        let seq = self.submitted.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Receipt {
            reference: format!("AOG-{}-{:04}", Utc::now().format("%Y%m%d"), seq),
            total,
            line_count: lines.len(),
        })
    }

    async fn send_contact(&self, form: &ContactForm) -> Result<()> {
        tracing::debug!("Mock contact message from {} <{}>", form.name, form.email);
        self.simulate(self.contact_latency).await
    }
}

/// Mock login/signup that fabricates member profiles.
#[derive(Debug, Default)]
pub struct MockAuthService {
    login_latency: Duration,
    signup_latency: Duration,
    failure: Option<String>,
}

impl MockAuthService {
    pub fn new(login_latency: Duration, signup_latency: Duration) -> Self {
        Self {
            login_latency,
            signup_latency,
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    async fn simulate(&self, latency: Duration) -> Result<()> {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        match &self.failure {
            Some(message) => Err(GymError::AuthError {
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn new_user_id() -> String {
    format!("user_{}", Utc::now().timestamp_millis())
}

fn activity(kind: &str, title: &str, time: &str) -> Activity {
    Activity {
        kind: kind.to_string(),
        title: title.to_string(),
        time: time.to_string(),
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, form: &LoginForm) -> Result<User> {
        self.simulate(self.login_latency).await?;

        // 固定的示範會員資料
        Ok(User {
            id: new_user_id(),
            email: form.email.clone(),
            first_name: "Ahmed".to_string(),
            last_name: "Osman".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            membership_type: "Premium".to_string(),
            membership_status: "Active".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
            stats: UserStats {
                workouts: 47,
                hours: 94,
                calories: 12500,
            },
            recent_activity: vec![
                activity("workout", "Strength Training", "2 hours ago"),
                activity("booking", "Personal Training Session", "1 day ago"),
                activity("achievement", "Monthly Goal Achieved", "3 days ago"),
            ],
        })
    }

    async fn signup(&self, form: &SignupForm) -> Result<User> {
        self.simulate(self.signup_latency).await?;

        let today = Utc::now().date_naive();
        Ok(User {
            id: new_user_id(),
            email: form.email.clone(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            phone: form.phone.clone(),
            membership_type: "Basic".to_string(),
            membership_status: "Active".to_string(),
            join_date: today,
            expiry_date: today.checked_add_days(Days::new(365)).unwrap_or(today),
            stats: UserStats::default(),
            recent_activity: vec![activity("signup", "Welcome to AO Gym!", "Just now")],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn contact_form() -> ContactForm {
        ContactForm {
            name: "Omar".to_string(),
            email: "omar@aogym.com".to_string(),
            message: "Do you offer family plans?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_contact_waits_contact_latency() {
        let submitter = MockSubmitter::new(Duration::ZERO, Duration::from_millis(40));

        let started = Instant::now();
        submitter.send_contact(&contact_form()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_receipts_are_numbered_per_submitter() {
        let submitter = MockSubmitter::new(Duration::ZERO, Duration::from_millis(40));
        let form = MembershipForm::default();

        let first = submitter.submit(&form, &[], Amount(45)).await.unwrap();
        let second = submitter.submit(&form, &[], Amount::ZERO).await.unwrap();

        assert!(first.reference.ends_with("-0001"));
        assert!(second.reference.ends_with("-0002"));
        assert_eq!(first.total, Amount(45));
        assert_eq!(second.line_count, 0);
    }

    #[tokio::test]
    async fn test_failing_submitter_rejects_contact() {
        let submitter = MockSubmitter::failing("backend unavailable");
        let err = submitter.send_contact(&contact_form()).await.unwrap_err();
        assert!(matches!(err, GymError::SubmissionError { .. }));
    }
}
