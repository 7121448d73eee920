pub mod assignments;

pub mod grading;

pub mod materials;

pub mod subjects;

pub mod submissions;

pub mod system;

pub mod users;

pub use assignments::configure_assignments_routes;
pub use grading::configure_grading_routes;
pub use materials::configure_materials_routes;
pub use subjects::configure_subjects_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部路由
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_user_routes)
        .configure(configure_subjects_routes)
        .configure(configure_assignments_routes)
        .configure(configure_materials_routes)
        .configure(configure_submissions_routes)
        .configure(configure_grading_routes)
        .configure(configure_system_routes);
}

#[cfg(test)]
mod tests;
