//! Gradiator - 作业管理与 AI 评分后端服务
//!
//! 基于 Actix Web 构建，管理用户、课程、作业、资料，以及提交、评分、申诉流程。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层与 AI 评分客户端
//! - `storage`: 数据存储层（JSON 文件 / 内存）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
