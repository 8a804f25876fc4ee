use super::{
    client::ApiClient,
    types::{ActionResponse, ApiError, AttendanceUpdate},
};

impl ApiClient {
    pub async fn check_in(&self) -> Result<ActionResponse, ApiError> {
        self.post_empty("/employee/check_in").await
    }

    pub async fn check_out(&self) -> Result<ActionResponse, ApiError> {
        self.post_empty("/employee/check_out").await
    }

    pub async fn update_attendance(
        &self,
        update: &AttendanceUpdate,
    ) -> Result<ActionResponse, ApiError> {
        self.post_form("/admin/update_attendance", update).await
    }
}
