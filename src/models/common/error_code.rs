use serde::Serialize;

/// 业务错误码
///
/// 按资源分段：1xxx 通用，2xxx 用户，3xxx 课程，4xxx 作业，5xxx 资料，
/// 6xxx 提交与申诉，7xxx AI 评分。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    IdMismatch = 1002,
    NotFound = 1004,
    InternalServerError = 1500,

    UserNotFound = 2001,
    UserEmailInvalid = 2002,

    SubjectNotFound = 3001,

    AssignmentNotFound = 4001,
    AssignmentDateInvalid = 4002,

    MaterialNotFound = 5001,

    SubmissionNotFound = 6001,
    AppealNotAllowed = 6002,
    AppealNotFound = 6003,

    GradingRequestInvalid = 7001,
    GradingFailed = 7002,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
