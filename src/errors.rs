//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gradiator_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum GradiatorError {
            $($variant(String),)*
        }

        impl GradiatorError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradiatorError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradiatorError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradiatorError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradiatorError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradiatorError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gradiator_errors! {
    StorageConfig("E001", "Storage Configuration Error"),
    StoragePluginNotFound("E002", "Storage Plugin Not Found"),
    FileOperation("E003", "File Operation Error"),
    Serialization("E004", "Serialization Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    InvalidState("E007", "Invalid State Transition"),
    DateParse("E008", "Date Parse Error"),
    Grading("E009", "Grading Service Error"),
}

impl GradiatorError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GradiatorError::NotFound(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, GradiatorError::InvalidState(_))
    }
}

impl fmt::Display for GradiatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradiatorError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for GradiatorError {
    fn from(err: std::io::Error) -> Self {
        GradiatorError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GradiatorError {
    fn from(err: serde_json::Error) -> Self {
        GradiatorError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for GradiatorError {
    fn from(err: chrono::ParseError) -> Self {
        GradiatorError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for GradiatorError {
    fn from(err: reqwest::Error) -> Self {
        GradiatorError::Grading(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GradiatorError>;
