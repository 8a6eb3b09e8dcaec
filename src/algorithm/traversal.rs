//! 遍历结果与事件日志
//!
//! BFS / DFS 共用的输出类型。事件日志按发生顺序记录，可由渲染层逐步回放。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 遍历事件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraversalStep {
    /// 正式访问顶点
    Visit { vertex: VertexId },
    /// 经过一条边发现新顶点
    VisitEdge { edge: Edge },
    /// 从子顶点回溯到该顶点（仅 DFS）
    Backtrack { vertex: VertexId },
}

impl fmt::Display for TraversalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalStep::Visit { vertex } => write!(f, "访问 {}", vertex),
            TraversalStep::VisitEdge { edge } => write!(f, "经过边 {}", edge),
            TraversalStep::Backtrack { vertex } => write!(f, "回溯到 {}", vertex),
        }
    }
}

/// 遍历算法种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

impl TraversalKind {
    pub fn name(&self) -> &'static str {
        match self {
            TraversalKind::Bfs => "BFS",
            TraversalKind::Dfs => "DFS",
        }
    }
}

/// 遍历结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    /// 算法种类
    pub kind: TraversalKind,
    /// 访问顺序
    pub order: Vec<VertexId>,
    /// 事件日志
    pub steps: Vec<TraversalStep>,
}

impl TraversalResult {
    pub(crate) fn new(kind: TraversalKind) -> Self {
        Self {
            kind,
            order: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn visit(&mut self, vertex: VertexId) {
        self.order.push(vertex);
        self.steps.push(TraversalStep::Visit { vertex });
    }

    pub(crate) fn visit_edge(&mut self, edge: Edge) {
        self.steps.push(TraversalStep::VisitEdge { edge });
    }

    pub(crate) fn backtrack(&mut self, vertex: VertexId) {
        self.steps.push(TraversalStep::Backtrack { vertex });
    }

    /// 访问顺序描述，如 `BFS遍历顺序: 0 → 1 → 2`
    pub fn describe(&self) -> String {
        let order: Vec<String> = self.order.iter().map(|v| v.to_string()).collect();
        format!("{}遍历顺序: {}", self.kind.name(), order.join(" → "))
    }

    /// 导出为 JSON，供渲染层回放
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// 端点必须在范围内且存活
pub(crate) fn check_start<G: Graph + ?Sized>(graph: &G, start: VertexId) -> Result<()> {
    graph.check_vertex(start)?;
    if !graph.is_vertex_live(start) {
        return Err(Error::VertexNotExists(start));
    }
    Ok(())
}

/// 起点优先，然后按下标升序的其余存活顶点
pub(crate) fn seed_order<G: Graph + ?Sized>(
    graph: &G,
    start: VertexId,
) -> impl Iterator<Item = VertexId> + '_ {
    let rest = (0..graph.vertices_number()).filter(move |&v| v != start && graph.is_vertex_live(v));
    std::iter::once(start).chain(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MatrixGraph;

    #[test]
    fn test_describe() {
        let mut r = TraversalResult::new(TraversalKind::Bfs);
        r.visit(0);
        r.visit_edge(Edge::new(0, 1, 5));
        r.visit(1);
        assert_eq!(r.describe(), "BFS遍历顺序: 0 → 1");
        assert_eq!(r.steps.len(), 3);
    }

    #[test]
    fn test_step_json() {
        let step = TraversalStep::Visit { vertex: 3 };
        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"type":"visit","vertex":3}"#);

        let back: TraversalStep = serde_json::from_str(r#"{"type":"backtrack","vertex":1}"#).unwrap();
        assert_eq!(back, TraversalStep::Backtrack { vertex: 1 });
    }

    #[test]
    fn test_seed_order_skips_dead_vertices() {
        let mut g = MatrixGraph::new(5);
        g.set_vertex_exists(1, false).unwrap();
        let order: Vec<_> = seed_order(&g, 3).collect();
        assert_eq!(order, vec![3, 0, 2, 4]);

        assert_eq!(check_start(&g, 1), Err(Error::VertexNotExists(1)));
        assert_eq!(
            check_start(&g, 5),
            Err(Error::InvalidVertex { vertex: 5, count: 5 })
        );
        assert!(check_start(&g, 4).is_ok());
    }
}
