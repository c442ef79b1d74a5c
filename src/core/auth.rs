use crate::core::session::SessionStore;
use crate::core::{AuthService, Event, KeyValueStore, LoginForm, Notifier, SignupForm, User};
use crate::utils::error::Result;
use crate::utils::validation::{into_result, validate_login_form, validate_signup_form};
use std::str::FromStr;

/// Dashboard buttons that are not wired to anything yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    EditProfile,
    BookSession,
    ManagePlan,
    ViewHistory,
    Other(String),
}

impl DashboardAction {
    pub fn feature_name(&self) -> &str {
        match self {
            DashboardAction::EditProfile => "Profile editing feature",
            DashboardAction::BookSession => "Session booking feature",
            DashboardAction::ManagePlan => "Plan management feature",
            DashboardAction::ViewHistory => "Workout history feature",
            DashboardAction::Other(_) => "Feature",
        }
    }
}

impl FromStr for DashboardAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "edit-profile" => DashboardAction::EditProfile,
            "book-session" => DashboardAction::BookSession,
            "manage-plan" => DashboardAction::ManagePlan,
            "view-history" => DashboardAction::ViewHistory,
            other => DashboardAction::Other(other.to_string()),
        })
    }
}

/// Login, signup and logout on top of a persisted [`SessionStore`].
pub struct AuthFlow<A: AuthService, S: KeyValueStore, N: Notifier> {
    service: A,
    session: SessionStore<S>,
    notifier: N,
}

impl<A: AuthService, S: KeyValueStore, N: Notifier> AuthFlow<A, S, N> {
    pub fn new(service: A, session: SessionStore<S>, notifier: N) -> Self {
        if let Some(user) = session.current_user() {
            tracing::info!("Restored session for {}", user.email);
        }
        Self {
            service,
            session,
            notifier,
        }
    }

    pub async fn login(&mut self, form: &LoginForm) -> Result<User> {
        self.check(validate_login_form(form))?;

        let result = self.service.login(form).await;
        self.complete(result, Event::LoggedIn)
    }

    pub async fn signup(&mut self, form: &SignupForm) -> Result<User> {
        self.check(validate_signup_form(form))?;

        let result = self.service.signup(form).await;
        self.complete(result, Event::SignedUp)
    }

    pub fn logout(&mut self) {
        self.session.clear();
        tracing::info!("User logged out");
        self.notifier.notify(&Event::LoggedOut);
    }

    pub fn dashboard_action(&mut self, action: &DashboardAction) {
        self.notifier.notify(&Event::ComingSoon {
            feature: action.feature_name().to_string(),
        });
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    // 只顯示第一個錯誤
    fn check(&mut self, errors: Vec<String>) -> Result<()> {
        if let Some(first) = errors.first() {
            self.notifier.notify(&Event::AuthFailed {
                reason: first.clone(),
            });
        }
        into_result(errors)
    }

    fn complete(&mut self, result: Result<User>, success: Event) -> Result<User> {
        let user = match result {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Authentication request failed: {}", e);
                self.notifier.notify(&Event::AuthFailed {
                    reason: e.user_friendly_message(),
                });
                return Err(e);
            }
        };

        // 儲存失敗時仍然讓使用者登入，只是下次需重新登入
        if let Err(e) = self.session.save(&user) {
            tracing::warn!("Session for {} not persisted: {}", user.email, e);
        }

        tracing::info!("Signed in as {}", user.email);
        self.notifier.notify(&success);
        Ok(user)
    }
}
