use crate::core::plan_queue::PlanQueue;
use crate::core::{
    Catalog, ContactForm, Event, MembershipForm, Notifier, Receipt, Renderer, Submitter,
};
use crate::utils::error::Result;
use crate::utils::validation::{into_result, validate_contact_form, validate_membership_form};

/// Membership application and contact form submission.
///
/// The queue is cleared only after the submitter reports success.
pub struct CheckoutFlow<S: Submitter, N: Notifier> {
    submitter: S,
    notifier: N,
}

impl<S: Submitter, N: Notifier> CheckoutFlow<S, N> {
    pub fn new(submitter: S, notifier: N) -> Self {
        Self {
            submitter,
            notifier,
        }
    }

    pub async fn submit<C, R, QN>(
        &mut self,
        form: &MembershipForm,
        queue: &mut PlanQueue<C, R, QN>,
    ) -> Result<Receipt>
    where
        C: Catalog,
        R: Renderer,
        QN: Notifier,
    {
        self.check(validate_membership_form(form))?;

        let lines = queue.render_lines();
        let total = queue.total();
        tracing::info!(
            "Submitting membership application ({} program(s), total {})",
            lines.len(),
            total
        );

        match self.submitter.submit(form, &lines, total).await {
            Ok(receipt) => {
                queue.clear();
                tracing::info!("Application submitted: {}", receipt.reference);
                self.notifier.notify(&Event::CheckoutSubmitted);
                Ok(receipt)
            }
            Err(e) => {
                tracing::error!("Application submission failed: {}", e);
                self.notifier.notify(&Event::SubmissionFailed {
                    reason: e.user_friendly_message(),
                });
                Err(e)
            }
        }
    }

    pub async fn send_contact(&mut self, form: &ContactForm) -> Result<()> {
        self.check(validate_contact_form(form))?;

        match self.submitter.send_contact(form).await {
            Ok(()) => {
                self.notifier.notify(&Event::ContactSent);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Contact message failed: {}", e);
                self.notifier.notify(&Event::SubmissionFailed {
                    reason: e.user_friendly_message(),
                });
                Err(e)
            }
        }
    }

    fn check(&mut self, errors: Vec<String>) -> Result<()> {
        if !errors.is_empty() {
            tracing::info!("Form rejected: {}", errors.join(", "));
            self.notifier.notify(&Event::ValidationFailed {
                errors: errors.clone(),
            });
        }
        into_result(errors)
    }
}
