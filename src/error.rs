//! 错误类型定义

use crate::types::{VertexId, Weight};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点索引越界: {vertex} (顶点数 {count})")]
    InvalidVertex { vertex: VertexId, count: usize },

    #[error("顶点不存在: {0}")]
    VertexNotExists(VertexId),

    #[error("无效的边权重: {0} (权重必须为正数)")]
    InvalidWeight(Weight),

    #[error("权重之和超出表示范围")]
    WeightOverflow,

    #[error("图不连通, 最小生成树不存在: 已接受 {accepted} 条边, 需要 {required} 条")]
    DisconnectedGraph { accepted: usize, required: usize },

    #[error("配置错误: {0}")]
    InvalidConfig(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = Error::InvalidVertex { vertex: 10, count: 3 };
        assert_eq!(e.to_string(), "顶点索引越界: 10 (顶点数 3)");
        assert_eq!(Error::VertexNotExists(2).to_string(), "顶点不存在: 2");

        let e = Error::DisconnectedGraph {
            accepted: 1,
            required: 3,
        };
        assert!(e.to_string().contains("需要 3 条"));
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let e: Error = err.into();
        assert!(matches!(e, Error::SerializationError(_)));
    }
}
