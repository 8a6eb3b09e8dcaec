//! 边定义
//!
//! 带权边是一个不可变的值三元组 (src, dst, weight)

use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 源顶点
    src: VertexId,
    /// 目标顶点
    dst: VertexId,
    /// 权重
    weight: Weight,
}

impl Edge {
    /// 创建新边
    pub fn new(src: VertexId, dst: VertexId, weight: Weight) -> Self {
        Self { src, dst, weight }
    }

    /// 获取源顶点
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否为自环
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }

    /// 反向边（无向图中的镜像条目）
    pub fn reversed(&self) -> Self {
        Self::new(self.dst, self.src, self.weight)
    }

    /// 排序键: 先按权重，再按 (src, dst)
    pub(crate) fn sort_key(&self) -> (Weight, VertexId, VertexId) {
        (self.weight, self.src, self.dst)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.src, self.dst, self.weight)
    }
}
