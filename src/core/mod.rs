pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod plan_queue;
pub mod session;

pub use crate::domain::model::{
    Activity, Adjusted, Amount, ContactForm, Event, LoginForm, MembershipForm, NoticeLevel,
    Offering, OfferingId, QueueLine, Receipt, RenderLine, SignupForm, User, UserStats,
};
pub use crate::domain::ports::{
    AuthService, Catalog, KeyValueStore, Notifier, Renderer, Submitter,
};
pub use crate::utils::error::Result;
