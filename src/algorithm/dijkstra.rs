//! Dijkstra 单源最短路径（单目标）
//!
//! 最小堆按暂定距离出队，过期条目直接跳过；
//! 目标顶点出队（而非被发现）时立即结束。边权重恒为正，提前结束是安全的。
//! 超出 `Weight` 表示范围的路径长度视为无穷大。

use super::traversal::check_start;
use crate::error::Result;
use crate::graph::{edges, Graph};
use crate::types::{VertexId, Weight};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use tracing::debug;

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// 从起点到终点的顶点序列，不可达时为空
    pub vertices: Vec<VertexId>,
    /// 最短距离，`None` 表示无穷大（不可达）
    pub distance: Option<Weight>,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// 计算过程中的一步
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DijkstraStep {
    /// 初始化起点
    Init { start: VertexId },
    /// 顶点出队并处理
    Pop { vertex: VertexId, distance: Weight },
    /// 出队的过期条目
    SkipStale { vertex: VertexId, distance: Weight },
    /// 松弛邻居
    Relax {
        vertex: VertexId,
        via: VertexId,
        distance: Weight,
    },
    /// 目标顶点出队，提前结束
    Reached { vertex: VertexId, distance: Weight },
    /// 目标不可达
    Unreachable { vertex: VertexId },
}

impl fmt::Display for DijkstraStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DijkstraStep::Init { start } => {
                write!(f, "初始化: 起点 {} 距离设为 0，其他无穷大", start)
            }
            DijkstraStep::Pop { vertex, distance } => {
                write!(f, "访问顶点 {} (距离: {})", vertex, distance)
            }
            DijkstraStep::SkipStale { vertex, distance } => {
                write!(f, "跳过过期条目 {} (距离: {})", vertex, distance)
            }
            DijkstraStep::Relax {
                vertex,
                via,
                distance,
            } => write!(
                f,
                "  -> 更新邻居 {} : 新距离 {} (通过 {})",
                vertex, distance, via
            ),
            DijkstraStep::Reached { vertex, distance } => {
                write!(f, "已到达目标点 {}，当前最短距离: {}", vertex, distance)
            }
            DijkstraStep::Unreachable { vertex } => write!(f, "无法到达终点 {}", vertex),
        }
    }
}

/// Dijkstra 最短路径
pub struct Dijkstra<'a, G: Graph + ?Sized> {
    graph: &'a G,
    /// 暂定距离，`None` 为无穷大
    dist: Vec<Option<Weight>>,
    /// 前驱
    prev: Vec<Option<VertexId>>,
    /// 计算过程
    steps: Vec<DijkstraStep>,
}

impl<'a, G: Graph + ?Sized> Dijkstra<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            dist: Vec::new(),
            prev: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// 计算 start 到 end 的最短路径
    pub fn shortest_path(&mut self, start: VertexId, end: VertexId) -> Result<ShortestPath> {
        check_start(self.graph, start)?;
        check_start(self.graph, end)?;

        let n = self.graph.vertices_number();
        self.dist = vec![None; n];
        self.prev = vec![None; n];
        self.steps.clear();

        let mut done = vec![false; n];
        let mut heap = BinaryHeap::new();
        self.dist[start] = Some(0);
        heap.push(Reverse((0, start)));
        self.steps.push(DijkstraStep::Init { start });

        while let Some(Reverse((d, u))) = heap.pop() {
            if self.dist[u].map_or(true, |best| d > best) {
                self.steps.push(DijkstraStep::SkipStale {
                    vertex: u,
                    distance: d,
                });
                continue;
            }
            if u == end {
                self.steps.push(DijkstraStep::Reached {
                    vertex: u,
                    distance: d,
                });
                break;
            }

            done[u] = true;
            self.steps.push(DijkstraStep::Pop {
                vertex: u,
                distance: d,
            });

            for e in edges(self.graph, u) {
                let v = e.dst();
                if done[v] || !self.graph.is_vertex_live(v) {
                    continue;
                }
                let Some(candidate) = d.checked_add(e.weight()) else {
                    continue;
                };
                if self.dist[v].map_or(true, |cur| candidate < cur) {
                    self.dist[v] = Some(candidate);
                    self.prev[v] = Some(u);
                    heap.push(Reverse((candidate, v)));
                    self.steps.push(DijkstraStep::Relax {
                        vertex: v,
                        via: u,
                        distance: candidate,
                    });
                }
            }
        }

        let distance = self.dist[end];
        let vertices = match distance {
            Some(_) => self.reconstruct_path(end),
            None => {
                self.steps.push(DijkstraStep::Unreachable { vertex: end });
                Vec::new()
            }
        };

        debug!(start, end, ?distance, hops = vertices.len(), "dijkstra finished");
        Ok(ShortestPath { vertices, distance })
    }

    /// 最短路径的顶点列表，不可达时为空
    pub fn find_shortest_path(&mut self, start: VertexId, end: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.shortest_path(start, end)?.vertices)
    }

    /// 上一次计算得到的到 `end` 的距离，`None` 表示无穷大或尚未计算
    pub fn get_shortest_distance(&self, end: VertexId) -> Option<Weight> {
        self.dist.get(end).copied().flatten()
    }

    /// 结构化的计算过程
    pub fn steps(&self) -> &[DijkstraStep] {
        &self.steps
    }

    /// 文本形式的计算过程
    pub fn get_process_log(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }

    fn reconstruct_path(&self, end: VertexId) -> Vec<VertexId> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(p) = self.prev[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        path
    }
}
