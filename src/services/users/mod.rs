pub mod delete;
pub mod get;
pub mod list;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::requests::SaveUserRequest;
use crate::storage::RecordStore;

pub struct UserService {
    store: Option<RecordStore>,
}

impl UserService {
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

    // 获取用户列表
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_users(self, request).await
    }

    // 根据ID获取用户
    pub async fn get_user(&self, request: &HttpRequest, user_id: String) -> ActixResult<HttpResponse> {
        get::get_user(self, request, user_id).await
    }

    // 创建用户
    pub async fn create_user(
        &self,
        request: &HttpRequest,
        user_data: SaveUserRequest,
    ) -> ActixResult<HttpResponse> {
        save::create_user(self, request, user_data).await
    }

    // 更新用户
    pub async fn update_user(
        &self,
        request: &HttpRequest,
        user_id: String,
        user_data: SaveUserRequest,
    ) -> ActixResult<HttpResponse> {
        save::update_user(self, request, user_id, user_data).await
    }

    // 删除用户
    pub async fn delete_user(
        &self,
        request: &HttpRequest,
        user_id: String,
    ) -> ActixResult<HttpResponse> {
        delete::delete_user(self, request, user_id).await
    }
}
