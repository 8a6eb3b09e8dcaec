//! 图能力接口
//!
//! 两种存储后端（邻接表 / 邻接矩阵）共同实现的抽象，
//! 所有算法只通过这里的游标协议访问边，与具体表示无关。

use super::adj_list::AdjListGraph;
use super::edge::Edge;
use super::generator;
use super::matrix::MatrixGraph;
use crate::config::RandomGraphConfig;
use crate::error::{Error, Result};
use crate::types::{VertexId, Weight};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// 图能力接口
///
/// 每条无向边 (u, v), u != v 在内部存储为 u→v 与 v→u 两个有向条目，
/// 二者总是同时增删；自环只存一个条目。
///
/// 边游标协议:
/// - `first_edge(v)` 返回 v 指向最小目标顶点的边
/// - `next_edge(prev)` 返回 `prev.src()` 指向严格大于 `prev.dst()` 的最小目标顶点的边
pub trait Graph {
    /// 顶点数（含矩阵后端中被标记为不存在的槽位）
    fn vertices_number(&self) -> usize;

    /// 无向边条数
    fn edges_number(&self) -> usize;

    /// 顶点 v 的第一条边
    fn first_edge(&self, v: VertexId) -> Option<Edge>;

    /// 游标的下一条边
    fn next_edge(&self, prev: &Edge) -> Option<Edge>;

    /// 新建或更新边（对称写入）
    fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()>;

    /// 删除边（对称删除），边不存在时不做任何修改
    fn del_edge(&mut self, from: VertexId, to: VertexId) -> Result<()>;

    /// 判断 (src, dst) 是否有边，忽略 `edge` 自带的权重
    fn is_edge(&self, edge: &Edge) -> bool;

    /// 追加一个没有任何边的顶点，返回其 ID
    fn add_vertex(&mut self) -> VertexId;

    /// 清空所有边，顶点保持不变
    fn clear_all_edges(&mut self);

    /// 顶点入度（有向条目计数，自环计 1）
    fn indegree(&self, v: VertexId) -> Option<usize>;

    /// 获取 (from, to) 的边权重
    fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight>;

    /// 用默认配置随机生成一个连通图
    fn generate_random_graph(&mut self, rng: &mut dyn RngCore) -> Result<()> {
        generator::populate_with(self, rng, &RandomGraphConfig::default())
    }

    /// 顶点是否“存活”（参与遍历与生成树）
    fn is_vertex_live(&self, v: VertexId) -> bool {
        v < self.vertices_number()
    }

    /// 存活顶点数
    fn live_vertices_number(&self) -> usize {
        self.vertices_number()
    }

    /// 校验顶点下标
    fn check_vertex(&self, v: VertexId) -> Result<()> {
        let count = self.vertices_number();
        if v < count {
            Ok(())
        } else {
            Err(Error::InvalidVertex { vertex: v, count })
        }
    }

    /// 所有无向边，每条只出现一次（src <= dst），按 (src, dst) 升序
    fn all_edges(&self) -> Vec<Edge> {
        let mut result = Vec::with_capacity(self.edges_number());
        for v in 0..self.vertices_number() {
            let mut cursor = self.first_edge(v);
            while let Some(e) = cursor {
                if e.src() <= e.dst() {
                    result.push(e);
                }
                cursor = self.next_edge(&e);
            }
        }
        result
    }
}

/// 边游标迭代器
///
/// 等价于 `e = first_edge(v); while let Some(e) { ...; e = next_edge(e) }`
pub struct EdgeCursor<'a, G: Graph + ?Sized> {
    graph: &'a G,
    next: Option<Edge>,
}

impl<'a, G: Graph + ?Sized> EdgeCursor<'a, G> {
    pub fn new(graph: &'a G, v: VertexId) -> Self {
        Self {
            graph,
            next: graph.first_edge(v),
        }
    }
}

impl<G: Graph + ?Sized> Iterator for EdgeCursor<'_, G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let current = self.next.take()?;
        self.next = self.graph.next_edge(&current);
        Some(current)
    }
}

/// 遍历顶点 v 的所有出边
pub fn edges<G: Graph + ?Sized>(graph: &G, v: VertexId) -> EdgeCursor<'_, G> {
    EdgeCursor::new(graph, v)
}

/// 存储后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphKind {
    /// 邻接表
    AdjList,
    /// 邻接矩阵
    Matrix,
}

/// 按后端类型创建图
pub fn new_graph(kind: GraphKind, vertices: usize) -> Box<dyn Graph> {
    match kind {
        GraphKind::AdjList => Box::new(AdjListGraph::new(vertices)),
        GraphKind::Matrix => Box::new(MatrixGraph::new(vertices)),
    }
}
