//! 通用类型定义

/// 顶点 ID（稠密下标，取值 [0, 顶点数)）
pub type VertexId = usize;

/// 边权重
pub type Weight = i64;
