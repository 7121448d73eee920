pub mod delete;
pub mod get;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::materials::requests::{CreateMaterialRequest, UpdateMaterialRequest};
use crate::storage::RecordStore;

pub struct MaterialService {
    store: Option<RecordStore>,
}

impl MaterialService {
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

    // 获取全部资料
    pub async fn list_materials(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::list_materials(self, request).await
    }

    pub async fn get_material(
        &self,
        request: &HttpRequest,
        material_id: String,
    ) -> ActixResult<HttpResponse> {
        get::get_material(self, request, material_id).await
    }

    pub async fn create_material(
        &self,
        request: &HttpRequest,
        material_data: CreateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        save::create_material(self, request, material_data).await
    }

    pub async fn update_material(
        &self,
        request: &HttpRequest,
        material_id: String,
        material_data: UpdateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        save::update_material(self, request, material_id, material_data).await
    }

    pub async fn delete_material(
        &self,
        request: &HttpRequest,
        material_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_material(self, request, material_id).await
    }
}
