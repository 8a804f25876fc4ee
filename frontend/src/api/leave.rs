use super::{
    client::ApiClient,
    types::{ActionResponse, ApiError, LeaveDecision},
};

impl ApiClient {
    pub async fn approve_leave(
        &self,
        request_id: i64,
        decision: &LeaveDecision,
    ) -> Result<ActionResponse, ApiError> {
        self.post_form(&format!("/admin/leave_request/{}/approve", request_id), decision)
            .await
    }

    pub async fn reject_leave(
        &self,
        request_id: i64,
        decision: &LeaveDecision,
    ) -> Result<ActionResponse, ApiError> {
        self.post_form(&format!("/admin/leave_request/{}/reject", request_id), decision)
            .await
    }
}
