//! Adoption request lifecycle manager.
//!
//! Owns the life of an adoption request from submission through a terminal
//! decision. Status mutations are committed durably before any
//! notification fan-out begins; fan-out is best-effort and never reverts
//! or fails a committed transition.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use sanctuary_core::error::AppError;
use sanctuary_core::events::{AdoptionEvent, DomainEvent, EventBus, EventPayload};
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_database::repositories::adoption::AdoptionRepository;
use sanctuary_database::repositories::puppy::PuppyRepository;
use sanctuary_database::repositories::user::UserRepository;
use sanctuary_entity::adoption::{AdoptionRequest, ApplicationData, NewAdoptionRequest, RequestStatus};
use sanctuary_entity::puppy::Puppy;

use crate::context::RequestContext;
use crate::notification::{EmailDispatcher, NotificationService, PushDispatcher};

/// Resource type recorded on notifications that reference a request.
const REQUEST_RESOURCE: &str = "adoption_request";

/// Manages the adoption request lifecycle: submission, decision, removal.
#[derive(Debug, Clone)]
pub struct AdoptionService {
    /// Adoption request repository.
    adoption_repo: Arc<AdoptionRepository>,
    /// Puppy catalog repository.
    puppy_repo: Arc<PuppyRepository>,
    /// User repository, for resolving admin recipients.
    user_repo: Arc<UserRepository>,
    /// In-app notification service.
    notifications: Arc<NotificationService>,
    /// Transactional email dispatcher.
    email: Arc<EmailDispatcher>,
    /// Web push dispatcher.
    push: Arc<PushDispatcher>,
    /// Domain event bus.
    events: EventBus,
}

impl AdoptionService {
    /// Creates a new adoption service.
    pub fn new(
        adoption_repo: Arc<AdoptionRepository>,
        puppy_repo: Arc<PuppyRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
        email: Arc<EmailDispatcher>,
        push: Arc<PushDispatcher>,
        events: EventBus,
    ) -> Self {
        Self {
            adoption_repo,
            puppy_repo,
            user_repo,
            notifications,
            email,
            push,
            events,
        }
    }

    /// Submits a new adoption request.
    ///
    /// The questionnaire is validated in full before any storage write.
    /// The puppy's deposit is snapshotted onto the request at this moment
    /// and never changes afterwards. Competing applications against a
    /// `pending` puppy are allowed; an `adopted` puppy rejects new
    /// applications.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        puppy_id: Uuid,
        application: ApplicationData,
    ) -> AppResult<AdoptionRequest> {
        application.ensure_complete()?;

        let puppy = self
            .puppy_repo
            .find_by_id(puppy_id)
            .await?
            .ok_or_else(|| AppError::not_found("Puppy not found"))?;

        if !puppy.status.accepts_applications() {
            return Err(AppError::validation(format!(
                "{} has already been adopted and is no longer accepting applications",
                puppy.name
            )));
        }

        let request = self
            .adoption_repo
            .insert(&NewAdoptionRequest {
                puppy_id,
                applicant_id: ctx.user_id,
                application_data: application,
                deposit_amount: puppy.deposit_amount,
            })
            .await?;

        info!(
            request_id = %request.id,
            puppy_id = %puppy_id,
            applicant_id = %ctx.user_id,
            deposit_amount = request.deposit_amount,
            "Adoption request submitted"
        );

        self.events.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Adoption(AdoptionEvent::RequestCreated {
                request_id: request.id,
                puppy_id,
                applicant_id: ctx.user_id,
                deposit_amount: request.deposit_amount,
            }),
        ));

        self.fan_out_submission(&request, &puppy).await;

        Ok(request)
    }

    /// Decides a pending request: `approved` or `rejected`.
    ///
    /// Admin only. Approval flips the request and marks the puppy adopted
    /// in one transaction, auto-rejecting every sibling pending request
    /// for the same puppy. The atomic `status = pending` guard means a
    /// concurrent race admits exactly one winner; the loser observes a
    /// state conflict.
    pub async fn transition(
        &self,
        ctx: &RequestContext,
        request_id: Uuid,
        new_status: &str,
    ) -> AppResult<AdoptionRequest> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        let target: RequestStatus = new_status.parse()?;
        if target == RequestStatus::Pending {
            return Err(AppError::validation(
                "Status must be either 'approved' or 'rejected'",
            ));
        }

        let (request, auto_rejected) = if target == RequestStatus::Approved {
            match self.adoption_repo.approve(request_id).await? {
                Some(outcome) => (outcome.approved, outcome.auto_rejected),
                None => return Err(self.not_transitionable(request_id).await),
            }
        } else {
            match self.adoption_repo.reject(request_id).await? {
                Some(request) => (request, Vec::new()),
                None => return Err(self.not_transitionable(request_id).await),
            }
        };

        info!(
            request_id = %request.id,
            admin_id = %ctx.user_id,
            status = %request.status,
            auto_rejected = auto_rejected.len(),
            "Adoption request decided"
        );

        self.publish_transition(ctx, &request);
        for sibling in &auto_rejected {
            self.publish_transition(ctx, sibling);
        }

        self.fan_out_decision(&request, &auto_rejected).await;

        Ok(request)
    }

    /// Removes a request. Admin only.
    ///
    /// Hard delete with no cascade: notifications referencing the request
    /// remain. Removing a request that does not exist succeeds.
    pub async fn remove(&self, ctx: &RequestContext, request_id: Uuid) -> AppResult<()> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        let rows = self.adoption_repo.delete(request_id).await?;
        if rows > 0 {
            info!(request_id = %request_id, admin_id = %ctx.user_id, "Adoption request deleted");
            self.events.publish(DomainEvent::new(
                Some(ctx.user_id),
                EventPayload::Adoption(AdoptionEvent::RequestDeleted { request_id }),
            ));
        } else {
            debug!(request_id = %request_id, "Delete of a missing request, nothing to do");
        }

        Ok(())
    }

    /// Gets a request by ID. Applicants see their own; admins see all.
    pub async fn get(&self, ctx: &RequestContext, request_id: Uuid) -> AppResult<AdoptionRequest> {
        let request = self
            .adoption_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Adoption request not found"))?;

        if request.applicant_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::authorization(
                "You can only view your own adoption requests",
            ));
        }

        Ok(request)
    }

    /// Lists the current user's own requests.
    pub async fn list_mine(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> AppResult<PageResponse<AdoptionRequest>> {
        self.adoption_repo.find_by_applicant(ctx.user_id, &page).await
    }

    /// Lists all requests, optionally filtered by status. Admin only.
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
        status: Option<RequestStatus>,
    ) -> AppResult<PageResponse<AdoptionRequest>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Administrator access required"));
        }

        self.adoption_repo.find_all(&page, status).await
    }

    /// Distinguishes a missing request from an already-decided one after
    /// a guarded update matched zero rows.
    async fn not_transitionable(&self, request_id: Uuid) -> AppError {
        match self.adoption_repo.find_by_id(request_id).await {
            Ok(Some(request)) => {
                AppError::invalid_state(format!("Request has already been {}", request.status))
            }
            Ok(None) => AppError::not_found("Adoption request not found"),
            Err(e) => e,
        }
    }

    fn publish_transition(&self, ctx: &RequestContext, request: &AdoptionRequest) {
        self.events.publish(DomainEvent::new(
            Some(ctx.user_id),
            EventPayload::Adoption(AdoptionEvent::RequestTransitioned {
                request_id: request.id,
                puppy_id: request.puppy_id,
                applicant_id: request.applicant_id,
                from: RequestStatus::Pending.to_string(),
                to: request.status.to_string(),
            }),
        ));
    }

    /// Submission side effects: admin alert email, applicant confirmation
    /// email, in-app notification and push for each admin. All
    /// best-effort; failures are logged and never fail the submission.
    async fn fan_out_submission(&self, request: &AdoptionRequest, puppy: &Puppy) {
        let applicant_name = format!(
            "{} {}",
            request.application_data.first_name, request.application_data.last_name
        );
        let applicant_email = request.application_data.email.clone();

        {
            let email = Arc::clone(&self.email);
            let subject = format!("Application Received: {}", puppy.name);
            let html = confirmation_email_html(&applicant_name, &puppy.name, request.deposit_amount);
            let to = applicant_email.clone();
            tokio::spawn(async move {
                if let Err(e) = email.send_to_user(&to, &subject, &html).await {
                    warn!(error = %e, "Failed to send application confirmation email");
                }
            });
        }

        {
            let email = Arc::clone(&self.email);
            let subject = format!("New Adoption Request: {}", puppy.name);
            let html = admin_alert_email_html(
                &applicant_name,
                &applicant_email,
                &puppy.name,
                request.deposit_amount,
                self.email.site_url(),
            );
            tokio::spawn(async move {
                if let Err(e) = email.send_admin_alert(&subject, &html, None).await {
                    warn!(error = %e, "Failed to send admin alert email");
                }
            });
        }

        let admins = match self.user_repo.find_admins().await {
            Ok(admins) => admins,
            Err(e) => {
                warn!(error = %e, "Failed to resolve admin recipients");
                return;
            }
        };

        let message = format!(
            "New adoption request for {} from {}",
            puppy.name, applicant_name
        );
        for admin in &admins {
            if let Err(e) = self
                .notifications
                .enqueue_in_app(admin.id, &message, Some(REQUEST_RESOURCE), Some(request.id))
                .await
            {
                warn!(error = %e, admin_id = %admin.id, "Failed to enqueue admin notification");
            }
        }

        let push = Arc::clone(&self.push);
        let admin_ids: Vec<Uuid> = admins.iter().map(|a| a.id).collect();
        tokio::spawn(async move {
            push.send_to_users(&admin_ids, "Adoption Update", &message, "/admin/requests")
                .await;
        });
    }

    /// Decision side effects: in-app notification and push for the
    /// applicant, and for every auto-rejected sibling applicant. All
    /// best-effort; the committed transition is never reverted.
    async fn fan_out_decision(&self, request: &AdoptionRequest, auto_rejected: &[AdoptionRequest]) {
        let puppy_name = match self.puppy_repo.find_by_id(request.puppy_id).await {
            Ok(Some(puppy)) => puppy.name,
            Ok(None) => "your chosen puppy".to_string(),
            Err(e) => {
                warn!(error = %e, "Failed to load puppy for decision notifications");
                "your chosen puppy".to_string()
            }
        };

        self.notify_applicant(request, &puppy_name).await;
        for sibling in auto_rejected {
            self.notify_applicant(sibling, &puppy_name).await;
        }
    }

    async fn notify_applicant(&self, request: &AdoptionRequest, puppy_name: &str) {
        let message = match request.status {
            RequestStatus::Approved => format!(
                "Congratulations! Your adoption application for {puppy_name} has been \
                 approved. Please contact support to proceed with the refundable deposit."
            ),
            _ => format!(
                "We're sorry, but your adoption application for {puppy_name} could not \
                 be approved at this time."
            ),
        };

        if let Err(e) = self
            .notifications
            .enqueue_in_app(
                request.applicant_id,
                &message,
                Some(REQUEST_RESOURCE),
                Some(request.id),
            )
            .await
        {
            warn!(
                error = %e,
                applicant_id = %request.applicant_id,
                "Failed to enqueue decision notification"
            );
        }

        let push = Arc::clone(&self.push);
        let applicant_id = request.applicant_id;
        tokio::spawn(async move {
            push.send_to_user(applicant_id, "Adoption Update", &message, "/dashboard")
                .await;
        });
    }
}

fn confirmation_email_html(applicant_name: &str, puppy_name: &str, deposit_amount: i64) -> String {
    format!(
        "<div style=\"font-family: sans-serif; padding: 20px; border: 1px solid #eee; \
         border-radius: 10px; max-width: 600px;\">\
         <h2 style=\"color: #4a3728;\">Thank you, {applicant_name}!</h2>\
         <p>We've received your application to adopt <strong>{puppy_name}</strong>.</p>\
         <p>Our team will review your application shortly. In the meantime, please \
         contact support to proceed with the refundable deposit of \
         <strong>${deposit_amount}</strong>.</p>\
         <p>Stay tuned for updates!</p>\
         <br />\
         <p>Best regards,<br />The Ellie's Sanctuary Team</p>\
         </div>"
    )
}

fn admin_alert_email_html(
    applicant_name: &str,
    applicant_email: &str,
    puppy_name: &str,
    deposit_amount: i64,
    site_url: &str,
) -> String {
    format!(
        "<div style=\"font-family: sans-serif; padding: 20px; border: 1px solid #eee; \
         border-radius: 10px;\">\
         <h2 style=\"color: #4a3728;\">New Adoption Request</h2>\
         <p><strong>Applicant:</strong> {applicant_name} ({applicant_email})</p>\
         <p><strong>Puppy:</strong> {puppy_name}</p>\
         <p><strong>Deposit:</strong> ${deposit_amount}</p>\
         <p><a href=\"{site_url}/admin/requests\" style=\"background: #a89078; \
         color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px;\">\
         View Request in Admin Portal</a></p>\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_email_mentions_puppy_and_deposit() {
        let html = confirmation_email_html("Jane Doe", "Biscuit", 500);
        assert!(html.contains("Biscuit"));
        assert!(html.contains("$500"));
        assert!(html.contains("Thank you, Jane Doe!"));
    }

    #[test]
    fn test_admin_alert_links_to_admin_portal() {
        let html = admin_alert_email_html(
            "Jane Doe",
            "jane@example.com",
            "Biscuit",
            500,
            "https://elliesbichonsanctuary.com",
        );
        assert!(html.contains("https://elliesbichonsanctuary.com/admin/requests"));
        assert!(html.contains("jane@example.com"));
    }
}
