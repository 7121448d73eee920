pub mod delete;
pub mod get;
pub mod save;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::assignments::requests::{
    CreateAssignmentRequest, SubmitAssignmentRequest, UpdateAssignmentRequest,
};
use crate::storage::RecordStore;

pub struct AssignmentService {
    store: Option<RecordStore>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { store: None }
    }

    pub(crate) fn get_store(&self, request: &HttpRequest) -> RecordStore {
        if let Some(store) = &self.store {
            store.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<RecordStore>>()
                .expect("RecordStore not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取全部作业
    pub async fn list_assignments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::list_assignments(self, request).await
    }

    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, request, assignment_id).await
    }

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        assignment_data: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        save::create_assignment(self, request, assignment_data).await
    }

    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: String,
        assignment_data: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        save::update_assignment(self, request, assignment_id, assignment_data).await
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, assignment_id).await
    }

    // 作业下的全部提交
    pub async fn list_assignment_submissions(
        &self,
        request: &HttpRequest,
        assignment_id: String,
    ) -> ActixResult<HttpResponse> {
        get::list_assignment_submissions(self, request, assignment_id).await
    }

    // 学生提交作业
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: String,
        submission_data: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, request, assignment_id, submission_data).await
    }
}
