//! GradeSystem - 课程成绩评定引擎
//!
//! 提交生命周期、评分标准校验与分类加权成绩汇总的核心库。
//! 页面渲染、认证授权与消息通知等外围功能由宿主应用提供，
//! 引擎假定调用方已完成鉴权，只负责数据规则本身。
//!
//! # 架构
//! - `config`: 配置管理（分类权重表）
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（内存后端）

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
