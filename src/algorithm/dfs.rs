//! 深度优先遍历
//!
//! 显式栈实现，事件顺序与递归写法完全一致：
//! 进入顶点时 `Visit(v)`，下探前 `VisitEdge(e)`，
//! 每次子顶点返回后 `Backtrack(v)`（按子顶点计，而非按顶点计）。

use super::traversal::{check_start, seed_order, TraversalKind, TraversalResult};
use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::types::VertexId;
use tracing::debug;

/// 栈帧：当前顶点及其下一条待检查的边
struct Frame {
    vertex: VertexId,
    next: Option<Edge>,
}

/// 深度优先遍历器
pub struct Dfs<'a, G: Graph + ?Sized> {
    graph: &'a G,
}

impl<'a, G: Graph + ?Sized> Dfs<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// 从 `start` 出发，再按下标升序覆盖其余连通分量
    pub fn traverse_from(&self, start: VertexId) -> Result<TraversalResult> {
        check_start(self.graph, start)?;
        let mut visited = vec![false; self.graph.vertices_number()];
        let mut result = TraversalResult::new(TraversalKind::Dfs);

        for v in seed_order(self.graph, start) {
            if !visited[v] {
                self.search(v, &mut visited, &mut result);
            }
        }

        debug!(start, visited = result.order.len(), "dfs finished");
        Ok(result)
    }

    /// 只遍历 `start` 所在的连通分量
    pub fn traverse_component(&self, start: VertexId) -> Result<TraversalResult> {
        check_start(self.graph, start)?;
        let mut visited = vec![false; self.graph.vertices_number()];
        let mut result = TraversalResult::new(TraversalKind::Dfs);
        self.search(start, &mut visited, &mut result);
        Ok(result)
    }

    /// 从第一个存活顶点开始遍历整张图
    pub fn traverse_graph(&self) -> TraversalResult {
        let first = (0..self.graph.vertices_number()).find(|&v| self.graph.is_vertex_live(v));
        match first {
            Some(v) => self
                .traverse_from(v)
                .unwrap_or_else(|_| TraversalResult::new(TraversalKind::Dfs)),
            None => TraversalResult::new(TraversalKind::Dfs),
        }
    }

    fn enter(
        &self,
        v: VertexId,
        visited: &mut [bool],
        stack: &mut Vec<Frame>,
        result: &mut TraversalResult,
    ) {
        visited[v] = true;
        result.visit(v);
        stack.push(Frame {
            vertex: v,
            next: self.graph.first_edge(v),
        });
    }

    fn search(&self, root: VertexId, visited: &mut [bool], result: &mut TraversalResult) {
        let mut stack = Vec::new();
        self.enter(root, visited, &mut stack, result);

        while let Some(frame) = stack.last_mut() {
            match frame.next {
                Some(e) => {
                    frame.next = self.graph.next_edge(&e);
                    if !visited[e.dst()] && self.graph.is_vertex_live(e.dst()) {
                        result.visit_edge(e);
                        self.enter(e.dst(), visited, &mut stack, result);
                    }
                }
                None => {
                    stack.pop();
                    if let Some(parent) = stack.last() {
                        result.backtrack(parent.vertex);
                    }
                }
            }
        }
    }
}
