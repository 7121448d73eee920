pub mod delete;
pub mod get;
pub mod list;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::requests::SaveSubjectRequest;
use crate::storage::RecordStore;

pub struct SubjectService {
    store: Option<RecordStore>,
}

impl SubjectService {
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

    // 获取课程列表
    pub async fn list_subjects(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_subjects(self, request).await
    }

    pub async fn get_subject(
        &self,
        request: &HttpRequest,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_subject(self, request, subject_id).await
    }

    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        subject_data: SaveSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        save::create_subject(self, request, subject_data).await
    }

    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: String,
        subject_data: SaveSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        save::update_subject(self, request, subject_id, subject_data).await
    }

    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, request, subject_id).await
    }

    // 课程下的作业
    pub async fn list_subject_assignments(
        &self,
        request: &HttpRequest,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        list::list_subject_assignments(self, request, subject_id).await
    }

    // 课程下的资料
    pub async fn list_subject_materials(
        &self,
        request: &HttpRequest,
        subject_id: String,
    ) -> ActixResult<HttpResponse> {
        list::list_subject_materials(self, request, subject_id).await
    }
}
