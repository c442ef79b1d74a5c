use crate::domain::model::{
    Amount, ContactForm, Event, LoginForm, MembershipForm, Offering, OfferingId, Receipt,
    RenderLine, SignupForm, User,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only lookup of offerings. The queue never mutates it.
pub trait Catalog {
    fn resolve(&self, id: OfferingId) -> Option<&Offering>;
}

impl<T: Catalog + ?Sized> Catalog for &T {
    fn resolve(&self, id: OfferingId) -> Option<&Offering> {
        (**self).resolve(id)
    }
}

/// Redraws the plan after every successful mutation.
///
/// Implementations must not call back into the queue from these methods.
pub trait Renderer {
    fn render(&mut self, lines: &[RenderLine], total: Amount);

    /// Fired after the render that left the queue empty.
    fn queue_emptied(&mut self) {}
}

/// Fire-and-forget user messaging.
pub trait Notifier {
    fn notify(&mut self, event: &Event);
}

/// Synchronous string store, shaped like browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(
        &self,
        form: &MembershipForm,
        lines: &[RenderLine],
        total: Amount,
    ) -> Result<Receipt>;

    async fn send_contact(&self, form: &ContactForm) -> Result<()>;
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, form: &LoginForm) -> Result<User>;
    async fn signup(&self, form: &SignupForm) -> Result<User>;
}
