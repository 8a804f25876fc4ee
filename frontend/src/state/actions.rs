//! The page's mutating actions, each funnelled through one shared
//! [`ActionGuard`].

use std::{future::Future, rc::Rc, time::Duration};

use leptos::*;
use thiserror::Error;

use crate::{
    api::{ActionResponse, ApiClient, ApiError, AttendanceUpdate, LeaveDecision},
    config::RELOAD_DELAY_MS,
    state::{
        action_guard::ActionGuard,
        notifications::{Notifier, Severity},
    },
    utils::{format::hours_display, reload::PageReloader},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    CheckIn,
    CheckOut,
    UpdateAttendance,
    ApproveLeave,
    RejectLeave,
}

impl GuardedAction {
    pub fn label(&self) -> &'static str {
        match self {
            GuardedAction::CheckIn => "check-in",
            GuardedAction::CheckOut => "check-out",
            GuardedAction::UpdateAttendance => "attendance update",
            GuardedAction::ApproveLeave => "leave approval",
            GuardedAction::RejectLeave => "leave rejection",
        }
    }

    pub fn transport_error_message(&self) -> &'static str {
        match self {
            GuardedAction::CheckIn => "Error during check-in. Please try again.",
            GuardedAction::CheckOut => "Error during check-out. Please try again.",
            GuardedAction::UpdateAttendance => "Error updating attendance. Please try again.",
            GuardedAction::ApproveLeave => "Error approving leave request. Please try again.",
            GuardedAction::RejectLeave => "Error rejecting leave request. Please try again.",
        }
    }

    pub fn success_severity(&self) -> Severity {
        match self {
            GuardedAction::RejectLeave => Severity::Info,
            _ => Severity::Success,
        }
    }

    /// The admin form stays on screen after an update.
    pub fn reloads_on_success(&self) -> bool {
        !matches!(self, GuardedAction::UpdateAttendance)
    }

    fn success_message(&self, response: &ActionResponse) -> Result<String, ActionFailure> {
        let missing = |field: &str| ActionFailure::Transport {
            cause: format!("successful {} response lacks `{}`", self.label(), field),
        };
        match self {
            GuardedAction::CheckIn => {
                let time = response.time.as_deref().ok_or_else(|| missing("time"))?;
                Ok(format!("Checked in successfully at {}", time))
            }
            GuardedAction::CheckOut => {
                let time = response.time.as_deref().ok_or_else(|| missing("time"))?;
                let hours = response.hours_worked.ok_or_else(|| missing("hours_worked"))?;
                Ok(format!(
                    "Checked out successfully at {}. Hours worked: {}",
                    time,
                    hours_display(hours)
                ))
            }
            GuardedAction::UpdateAttendance => Ok("Attendance updated successfully".to_string()),
            GuardedAction::ApproveLeave => Ok("Leave request approved successfully".to_string()),
            GuardedAction::RejectLeave => Ok("Leave request rejected".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionFailure {
    /// The server answered but refused the operation.
    #[error("server rejected the action: {message}")]
    Rejected { message: String },
    /// No usable answer came back.
    #[error("request did not complete: {cause}")]
    Transport { cause: String },
}

impl ActionFailure {
    /// Text shown to the user for this failure of `action`.
    pub fn notification_text(&self, action: GuardedAction) -> String {
        match self {
            ActionFailure::Rejected { message } => message.clone(),
            ActionFailure::Transport { .. } => action.transport_error_message().to_string(),
        }
    }
}

impl From<ApiError> for ActionFailure {
    fn from(error: ApiError) -> Self {
        ActionFailure::Transport {
            cause: format!("{} ({})", error.error, error.code),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Another action held the guard; nothing was sent.
    Skipped,
    Succeeded { message: String },
    Failed(ActionFailure),
}

/// Settles a raw endpoint result into the message to show, or the failure.
pub fn settle(
    action: GuardedAction,
    result: Result<ActionResponse, ApiError>,
) -> Result<String, ActionFailure> {
    let response = result?;
    if !response.success {
        let message = response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| action.transport_error_message().to_string());
        return Err(ActionFailure::Rejected { message });
    }
    action.success_message(&response)
}

#[derive(Clone)]
pub struct ActionController {
    api: ApiClient,
    guard: ActionGuard,
    notifier: Rc<dyn Notifier>,
    reloader: Rc<dyn PageReloader>,
    reload_delay: Duration,
}

impl ActionController {
    pub fn new(api: ApiClient, notifier: Rc<dyn Notifier>, reloader: Rc<dyn PageReloader>) -> Self {
        Self {
            api,
            guard: ActionGuard::new(),
            notifier,
            reloader,
            reload_delay: Duration::from_millis(u64::from(RELOAD_DELAY_MS)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    pub async fn check_in(&self) -> ActionOutcome {
        self.run(GuardedAction::CheckIn, || self.api.check_in()).await
    }

    pub async fn check_out(&self) -> ActionOutcome {
        self.run(GuardedAction::CheckOut, || self.api.check_out()).await
    }

    pub async fn update_attendance(&self, update: AttendanceUpdate) -> ActionOutcome {
        self.run(GuardedAction::UpdateAttendance, || async move {
            self.api.update_attendance(&update).await
        })
        .await
    }

    pub async fn approve_leave(&self, request_id: i64, comment: Option<String>) -> ActionOutcome {
        let decision = LeaveDecision::new(comment.unwrap_or_default());
        self.run(GuardedAction::ApproveLeave, || async move {
            self.api.approve_leave(request_id, &decision).await
        })
        .await
    }

    pub async fn reject_leave(&self, request_id: i64, comment: String) -> ActionOutcome {
        let decision = LeaveDecision::new(comment);
        self.run(GuardedAction::RejectLeave, || async move {
            self.api.reject_leave(request_id, &decision).await
        })
        .await
    }

    async fn run<F, Fut>(&self, action: GuardedAction, call: F) -> ActionOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ActionResponse, ApiError>>,
    {
        let outcome = self
            .guard
            .attempt(|| async move {
                let result = call().await;
                self.report(action, settle(action, result))
            })
            .await;

        outcome.unwrap_or_else(|| {
            log::debug!("Ignoring {}: another action is in flight", action.label());
            ActionOutcome::Skipped
        })
    }

    fn report(&self, action: GuardedAction, settled: Result<String, ActionFailure>) -> ActionOutcome {
        match settled {
            Ok(message) => {
                self.notifier.notify(message.clone(), action.success_severity());
                if action.reloads_on_success() {
                    self.reloader.schedule_reload(self.reload_delay);
                }
                ActionOutcome::Succeeded { message }
            }
            Err(failure) => {
                log::warn!("{} failed: {}", action.label(), failure);
                self.notifier.notify(failure.notification_text(action), Severity::Error);
                ActionOutcome::Failed(failure)
            }
        }
    }
}

pub fn provide_action_controller(controller: ActionController) {
    provide_context(controller);
}

pub fn use_action_controller() -> ActionController {
    expect_context::<ActionController>()
}

/// Fires `run` from an event handler without blocking it. Clicks that land
/// while an action is pending are dropped here, before anything is spawned.
pub fn dispatch<F, Fut>(controller: &ActionController, run: F)
where
    F: FnOnce(ActionController) -> Fut,
    Fut: Future<Output = ActionOutcome> + 'static,
{
    if controller.is_busy() {
        log::debug!("Click ignored: an action is already in flight");
        return;
    }
    let fut = run(controller.clone());
    spawn_local(async move {
        let _ = fut.await;
    });
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::{
        api::AttendanceStatus,
        test_support::{
            fakes::{RecordingNotifier, RecordingReloader},
            ssr::with_runtime,
        },
    };
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    struct Harness {
        controller: ActionController,
        notifier: Rc<RecordingNotifier>,
        reloader: Rc<RecordingReloader>,
    }

    fn harness(server: &MockServer) -> Harness {
        let notifier = Rc::new(RecordingNotifier::default());
        let reloader = Rc::new(RecordingReloader::default());
        let controller = ActionController::new(
            ApiClient::new_with_base_url(server.base_url()),
            notifier.clone(),
            reloader.clone(),
        );
        Harness {
            controller,
            notifier,
            reloader,
        }
    }

    #[tokio::test]
    async fn check_in_success_notifies_and_schedules_reload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/employee/check_in");
                then.status(200)
                    .json_body(json!({ "success": true, "time": "09:02 AM", "message": "ok" }));
            })
            .await;
        let h = harness(&server);

        let outcome = h.controller.check_in().await;

        assert_eq!(
            outcome,
            ActionOutcome::Succeeded {
                message: "Checked in successfully at 09:02 AM".into()
            }
        );
        assert_eq!(
            h.notifier.messages(),
            vec![(
                "Checked in successfully at 09:02 AM".to_string(),
                Severity::Success
            )]
        );
        assert_eq!(h.reloader.delays(), vec![Duration::from_millis(1500)]);
        assert!(!h.controller.is_busy());
    }

    #[tokio::test]
    async fn check_out_success_reports_hours_worked() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/employee/check_out");
                then.status(200).json_body(json!({
                    "success": true,
                    "time": "05:00 PM",
                    "hours_worked": 8,
                    "message": "ok"
                }));
            })
            .await;
        let h = harness(&server);

        h.controller.check_out().await;

        assert_eq!(
            h.notifier.messages()[0].0,
            "Checked out successfully at 05:00 PM. Hours worked: 8"
        );
        assert_eq!(h.reloader.delays().len(), 1);
    }

    #[tokio::test]
    async fn logical_failure_shows_server_message_without_reload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/employee/check_in");
                then.status(200)
                    .json_body(json!({ "success": false, "message": "Already checked in" }));
            })
            .await;
        let h = harness(&server);

        let outcome = h.controller.check_in().await;

        assert_eq!(
            outcome,
            ActionOutcome::Failed(ActionFailure::Rejected {
                message: "Already checked in".into()
            })
        );
        assert_eq!(
            h.notifier.messages(),
            vec![("Already checked in".to_string(), Severity::Error)]
        );
        assert!(h.reloader.delays().is_empty());
        assert!(!h.controller.is_busy());
    }

    #[tokio::test]
    async fn reject_transport_failure_uses_generic_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/leave_request/5/reject");
                then.status(500);
            })
            .await;
        let h = harness(&server);

        let outcome = h.controller.reject_leave(5, "No cover".into()).await;

        assert!(matches!(
            outcome,
            ActionOutcome::Failed(ActionFailure::Transport { .. })
        ));
        assert_eq!(
            h.notifier.messages(),
            vec![(
                "Error rejecting leave request. Please try again.".to_string(),
                Severity::Error
            )]
        );
        assert!(h.reloader.delays().is_empty());
        assert!(!h.controller.is_busy());
    }

    #[tokio::test]
    async fn rapid_repeated_triggers_send_one_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/employee/check_in");
                then.status(200)
                    .delay(std::time::Duration::from_millis(100))
                    .json_body(json!({ "success": true, "time": "09:00 AM" }));
            })
            .await;
        let h = harness(&server);

        let (a, b, c) = futures::join!(
            h.controller.check_in(),
            h.controller.check_in(),
            h.controller.check_out()
        );

        assert!(matches!(a, ActionOutcome::Succeeded { .. }));
        assert_eq!(b, ActionOutcome::Skipped);
        assert_eq!(c, ActionOutcome::Skipped);
        mock.assert_hits_async(1).await;
        assert_eq!(h.notifier.messages().len(), 1);

        let again = h.controller.check_in().await;
        assert!(matches!(again, ActionOutcome::Succeeded { .. }));
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn attendance_update_does_not_reload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/update_attendance")
                    .x_www_form_urlencoded_tuple("status", "absent");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;
        let h = harness(&server);

        let outcome = h
            .controller
            .update_attendance(AttendanceUpdate {
                employee_id: 3,
                date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
                status: AttendanceStatus::Absent,
                remarks: String::new(),
            })
            .await;

        assert_eq!(
            outcome,
            ActionOutcome::Succeeded {
                message: "Attendance updated successfully".into()
            }
        );
        assert!(h.reloader.delays().is_empty());
    }

    #[tokio::test]
    async fn approve_without_comment_sends_empty_comment() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/leave_request/11/approve")
                    .x_www_form_urlencoded_tuple("admin_comment", "");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;
        let h = harness(&server);

        h.controller.approve_leave(11, None).await;

        mock.assert_async().await;
        assert_eq!(
            h.notifier.messages(),
            vec![(
                "Leave request approved successfully".to_string(),
                Severity::Success
            )]
        );
    }

    #[test]
    fn reject_success_is_informational() {
        let settled = settle(
            GuardedAction::RejectLeave,
            Ok(ActionResponse {
                success: true,
                ..Default::default()
            }),
        );
        assert_eq!(settled, Ok("Leave request rejected".to_string()));
        assert_eq!(GuardedAction::RejectLeave.success_severity(), Severity::Info);
    }

    #[test]
    fn rejection_without_message_falls_back_to_generic_text() {
        let settled = settle(
            GuardedAction::CheckOut,
            Ok(ActionResponse {
                success: false,
                ..Default::default()
            }),
        );
        assert_eq!(
            settled,
            Err(ActionFailure::Rejected {
                message: "Error during check-out. Please try again.".into()
            })
        );
    }

    #[test]
    fn success_missing_time_counts_as_transport_failure() {
        let settled = settle(
            GuardedAction::CheckIn,
            Ok(ActionResponse {
                success: true,
                ..Default::default()
            }),
        );
        let failure = settled.unwrap_err();
        assert!(matches!(failure, ActionFailure::Transport { .. }));
        assert_eq!(
            failure.notification_text(GuardedAction::CheckIn),
            "Error during check-in. Please try again."
        );
    }

    #[test]
    fn every_action_has_its_own_transport_message() {
        let cases = [
            (GuardedAction::CheckIn, "Error during check-in. Please try again."),
            (GuardedAction::CheckOut, "Error during check-out. Please try again."),
            (
                GuardedAction::UpdateAttendance,
                "Error updating attendance. Please try again.",
            ),
            (
                GuardedAction::ApproveLeave,
                "Error approving leave request. Please try again.",
            ),
            (
                GuardedAction::RejectLeave,
                "Error rejecting leave request. Please try again.",
            ),
        ];
        for (action, expected) in cases {
            let failure = settle(action, Err(ApiError::request_failed("connection refused")))
                .unwrap_err();
            assert!(matches!(failure, ActionFailure::Transport { .. }));
            assert_eq!(failure.notification_text(action), expected, "{:?}", action);
        }
    }

    #[tokio::test]
    async fn attendance_update_server_error_shows_generic_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/update_attendance");
                then.status(500);
            })
            .await;
        let h = harness(&server);

        let outcome = h
            .controller
            .update_attendance(AttendanceUpdate {
                employee_id: 9,
                date: NaiveDate::from_ymd_opt(2025, 2, 4).unwrap(),
                status: AttendanceStatus::Present,
                remarks: String::new(),
            })
            .await;

        assert!(matches!(
            outcome,
            ActionOutcome::Failed(ActionFailure::Transport { .. })
        ));
        assert_eq!(
            h.notifier.messages(),
            vec![(
                "Error updating attendance. Please try again.".to_string(),
                Severity::Error
            )]
        );
        assert!(h.reloader.delays().is_empty());
        assert!(!h.controller.is_busy());
    }

    #[tokio::test]
    async fn approve_rejected_by_server_shows_its_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/leave_request/7/approve");
                then.status(200)
                    .json_body(json!({ "success": false, "message": "Leave request already processed" }));
            })
            .await;
        let h = harness(&server);

        let outcome = h.controller.approve_leave(7, Some("ok".into())).await;

        assert_eq!(
            outcome,
            ActionOutcome::Failed(ActionFailure::Rejected {
                message: "Leave request already processed".into()
            })
        );
        assert_eq!(
            h.notifier.messages(),
            vec![(
                "Leave request already processed".to_string(),
                Severity::Error
            )]
        );
        assert!(h.reloader.delays().is_empty());
        assert!(!h.controller.is_busy());
    }

    #[test]
    fn dispatch_drops_clicks_while_busy() {
        with_runtime(|| {
            let controller = ActionController::new(
                ApiClient::new_with_base_url("http://127.0.0.1:9"),
                Rc::new(RecordingNotifier::default()),
                Rc::new(RecordingReloader::default()),
            );
            let _held = controller.guard.try_acquire();
            let invoked = Rc::new(std::cell::Cell::new(false));
            let seen = invoked.clone();

            dispatch(&controller, move |_| {
                seen.set(true);
                async { ActionOutcome::Skipped }
            });

            assert!(!invoked.get());
        });
    }
}
