//! 广度优先遍历
//!
//! 顶点在出队时才算正式访问（记录 `Visit`），
//! 发现未访问邻居并入队时记录 `VisitEdge`。

use super::traversal::{check_start, seed_order, TraversalKind, TraversalResult};
use crate::error::Result;
use crate::graph::{edges, Graph};
use crate::types::VertexId;
use std::collections::VecDeque;
use tracing::debug;

/// 广度优先遍历器
pub struct Bfs<'a, G: Graph + ?Sized> {
    graph: &'a G,
}

impl<'a, G: Graph + ?Sized> Bfs<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// 从 `start` 出发，再按下标升序覆盖其余连通分量
    pub fn traverse_from(&self, start: VertexId) -> Result<TraversalResult> {
        check_start(self.graph, start)?;
        let mut visited = vec![false; self.graph.vertices_number()];
        let mut result = TraversalResult::new(TraversalKind::Bfs);

        for v in seed_order(self.graph, start) {
            if !visited[v] {
                self.search(v, &mut visited, &mut result);
            }
        }

        debug!(start, visited = result.order.len(), "bfs finished");
        Ok(result)
    }

    /// 只遍历 `start` 所在的连通分量
    pub fn traverse_component(&self, start: VertexId) -> Result<TraversalResult> {
        check_start(self.graph, start)?;
        let mut visited = vec![false; self.graph.vertices_number()];
        let mut result = TraversalResult::new(TraversalKind::Bfs);
        self.search(start, &mut visited, &mut result);
        Ok(result)
    }

    /// 从第一个存活顶点开始遍历整张图
    pub fn traverse_graph(&self) -> TraversalResult {
        let first = (0..self.graph.vertices_number()).find(|&v| self.graph.is_vertex_live(v));
        match first {
            Some(v) => self
                .traverse_from(v)
                .unwrap_or_else(|_| TraversalResult::new(TraversalKind::Bfs)),
            None => TraversalResult::new(TraversalKind::Bfs),
        }
    }

    fn search(&self, v: VertexId, visited: &mut [bool], result: &mut TraversalResult) {
        let mut queue = VecDeque::new();
        visited[v] = true;
        queue.push_back(v);

        while let Some(u) = queue.pop_front() {
            result.visit(u);
            for e in edges(self.graph, u) {
                let w = e.dst();
                if !visited[w] && self.graph.is_vertex_live(w) {
                    visited[w] = true;
                    result.visit_edge(e);
                    queue.push_back(w);
                }
            }
        }
    }
}
