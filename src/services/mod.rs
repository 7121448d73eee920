pub mod assignments;
pub mod grading;
pub mod materials;
pub mod subjects;
pub mod submissions;
pub mod system;
pub mod users;

pub use assignments::AssignmentService;
pub use grading::GradingService;
pub use materials::MaterialService;
pub use subjects::SubjectService;
pub use submissions::SubmissionService;
pub use system::SystemService;
pub use users::UserService;
