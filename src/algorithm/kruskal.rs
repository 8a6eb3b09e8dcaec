//! Kruskal 最小生成树
//!
//! 每条无向边只取一次（src < dst），按 (权重, src, dst) 升序贪心选择，
//! 图不连通时显式失败，不返回残缺结果。

use super::union_find::UnionFind;
use crate::error::{Error, Result};
use crate::graph::{edges, Edge, Graph};
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// 生成树
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 按选入顺序排列的树边
    pub edges: Vec<Edge>,
    /// 总权重
    pub total_weight: Weight,
}

/// Kruskal 算法
pub struct Kruskal<'a, G: Graph + ?Sized> {
    graph: &'a G,
}

impl<'a, G: Graph + ?Sized> Kruskal<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// 候选边：两端均存活、src < dst，按 (权重, src, dst) 排序
    fn candidate_edges(&self) -> Vec<Edge> {
        let g = self.graph;
        let mut candidates: Vec<Edge> = (0..g.vertices_number())
            .filter(|&v| g.is_vertex_live(v))
            .flat_map(|v| edges(g, v))
            .filter(|e| e.src() < e.dst() && g.is_vertex_live(e.dst()))
            .collect();
        candidates.sort_by_key(Edge::sort_key);
        candidates
    }

    /// 选出生成树的边，图不连通时失败
    fn select_edges(&self) -> Result<Vec<Edge>> {
        let required = self.graph.live_vertices_number().saturating_sub(1);
        let mut uf = UnionFind::new(self.graph.vertices_number());
        let mut selected = Vec::with_capacity(required);

        for e in self.candidate_edges() {
            if selected.len() == required {
                break;
            }
            if uf.union(e.src(), e.dst()) {
                selected.push(e);
            }
        }

        if selected.len() != required {
            warn!(
                accepted = selected.len(),
                required, "graph is disconnected, no spanning tree"
            );
            return Err(Error::DisconnectedGraph {
                accepted: selected.len(),
                required,
            });
        }
        Ok(selected)
    }

    /// 计算最小生成树，总权重超出 `Weight` 范围时返回 `WeightOverflow`
    pub fn spanning_tree(&self) -> Result<SpanningTree> {
        let selected = self.select_edges()?;
        let total_weight = selected
            .iter()
            .try_fold(0 as Weight, |acc, e| acc.checked_add(e.weight()))
            .ok_or(Error::WeightOverflow)?;

        debug!(edges = selected.len(), total_weight, "spanning tree generated");
        Ok(SpanningTree {
            edges: selected,
            total_weight,
        })
    }

    /// 生成最小生成树的边集，图不连通时返回 `None`
    pub fn generate_mst(&self) -> Option<Vec<Edge>> {
        self.select_edges().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{new_graph, AdjListGraph, GraphKind, MatrixGraph};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn triangle(kind: GraphKind) -> Box<dyn Graph> {
        let mut g = new_graph(kind, 3);
        g.set_edge(0, 1, 5).unwrap();
        g.set_edge(0, 2, 3).unwrap();
        g.set_edge(1, 2, 7).unwrap();
        g
    }

    /// 枚举所有 n-1 条边的子集，返回最小生成树权重
    fn brute_force_mst(n: usize, all: &[Edge]) -> Option<Weight> {
        let m = all.len();
        let mut best: Option<Weight> = None;
        for mask in 0u32..(1 << m) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let mut uf = UnionFind::new(n);
            let mut total = 0;
            let mut acyclic = true;
            for (i, e) in all.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    acyclic &= uf.union(e.src(), e.dst());
                    total += e.weight();
                }
            }
            if acyclic && uf.count() == 1 {
                best = Some(best.map_or(total, |b| b.min(total)));
            }
        }
        best
    }

    #[test]
    fn test_kruskal_triangle() {
        for kind in [GraphKind::AdjList, GraphKind::Matrix] {
            let g = triangle(kind);
            let tree = Kruskal::new(g.as_ref()).spanning_tree().unwrap();
            assert_eq!(tree.edges, vec![Edge::new(0, 2, 3), Edge::new(0, 1, 5)]);
            assert_eq!(tree.total_weight, 8);
        }
    }

    #[test]
    fn test_kruskal_disconnected() {
        let mut g = triangle(GraphKind::AdjList);
        g.add_vertex();

        let k = Kruskal::new(g.as_ref());
        assert!(k.generate_mst().is_none());
        assert_eq!(
            k.spanning_tree(),
            Err(Error::DisconnectedGraph {
                accepted: 2,
                required: 3
            })
        );
    }

    #[test]
    fn test_kruskal_tie_break() {
        // 所有边权重相同，按 (src, dst) 决定
        let mut g = AdjListGraph::new(4);
        g.set_edge(2, 3, 1).unwrap();
        g.set_edge(0, 3, 1).unwrap();
        g.set_edge(0, 1, 1).unwrap();
        g.set_edge(1, 2, 1).unwrap();

        let mst = Kruskal::new(&g).generate_mst().unwrap();
        assert_eq!(
            mst,
            vec![Edge::new(0, 1, 1), Edge::new(0, 3, 1), Edge::new(1, 2, 1)]
        );
    }

    #[test]
    fn test_kruskal_trivial_graphs() {
        let g = AdjListGraph::new(0);
        assert_eq!(Kruskal::new(&g).generate_mst(), Some(vec![]));
        let g = AdjListGraph::new(1);
        assert_eq!(Kruskal::new(&g).generate_mst(), Some(vec![]));
    }

    #[test]
    fn test_kruskal_ignores_self_loops() {
        let mut g = AdjListGraph::new(2);
        g.set_edge(0, 0, 1).unwrap();
        g.set_edge(1, 1, 1).unwrap();
        assert!(Kruskal::new(&g).generate_mst().is_none());
        g.set_edge(0, 1, 9).unwrap();
        assert_eq!(Kruskal::new(&g).generate_mst(), Some(vec![Edge::new(0, 1, 9)]));
    }

    #[test]
    fn test_kruskal_skips_dead_vertices() {
        let mut g = MatrixGraph::new(4);
        g.set_edge(0, 1, 2).unwrap();
        g.set_edge(1, 2, 2).unwrap();
        g.set_vertex_exists(3, false).unwrap();

        let tree = Kruskal::new(&g).spanning_tree().unwrap();
        assert_eq!(tree.edges.len(), 2);
        assert_eq!(tree.total_weight, 4);
    }

    #[test]
    fn test_kruskal_total_weight_overflow() {
        let mut g = AdjListGraph::new(3);
        g.set_edge(0, 1, Weight::MAX).unwrap();
        g.set_edge(1, 2, Weight::MAX).unwrap();

        let k = Kruskal::new(&g);
        assert_eq!(k.spanning_tree(), Err(Error::WeightOverflow));
        assert_eq!(
            k.generate_mst(),
            Some(vec![Edge::new(0, 1, Weight::MAX), Edge::new(1, 2, Weight::MAX)])
        );
    }

    #[test]
    fn test_kruskal_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..40 {
            let n = rng.gen_range(2..=6);
            let mut g = AdjListGraph::new(n);
            let edge_count = rng.gen_range(0..=n * (n - 1) / 2);
            for _ in 0..edge_count {
                let (a, b) = (rng.gen_range(0..n), rng.gen_range(0..n));
                if a != b {
                    g.set_edge(a, b, rng.gen_range(1..=10)).unwrap();
                }
            }

            let all = g.all_edges();
            let expected = brute_force_mst(n, &all);
            match Kruskal::new(&g).spanning_tree() {
                Ok(tree) => {
                    assert_eq!(tree.edges.len(), n - 1);
                    assert_eq!(Some(tree.total_weight), expected);
                }
                Err(Error::DisconnectedGraph { .. }) => assert_eq!(expected, None),
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
    }
}
