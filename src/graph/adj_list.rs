//! 邻接表图
//!
//! 每个顶点维护一个按目标顶点 ID 升序排列的出边序列。
//! 有序性是结构不变量：边游标协议依赖它按升序枚举邻居。

use super::edge::Edge;
use super::graph::Graph;
use crate::error::{Error, Result};
use crate::types::{VertexId, Weight};
use smallvec::SmallVec;
use std::fmt;
use tracing::debug;

/// 邻接表中的一个条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Neighbor {
    /// 目标顶点
    to: VertexId,
    /// 权重
    weight: Weight,
}

/// 单个顶点的出边序列，多数顶点度数很小，直接内联存储
type NeighborList = SmallVec<[Neighbor; 4]>;

/// 邻接表图
#[derive(Debug, Clone, Default)]
pub struct AdjListGraph {
    /// 每个顶点的有序出边
    lists: Vec<NeighborList>,
    /// 入度
    indegree: Vec<usize>,
    /// 无向边条数
    edge_count: usize,
}

impl AdjListGraph {
    /// 创建含 `vertices` 个孤立顶点的图
    pub fn new(vertices: usize) -> Self {
        Self {
            lists: vec![NeighborList::new(); vertices],
            indegree: vec![0; vertices],
            edge_count: 0,
        }
    }

    /// 顶点 v 的度数（出边条目数）
    pub fn degree(&self, v: VertexId) -> Option<usize> {
        self.lists.get(v).map(|l| l.len())
    }

    /// 有序插入单个有向条目，返回是否为新插入
    fn insert_entry(&mut self, from: VertexId, to: VertexId, weight: Weight) -> bool {
        let list = &mut self.lists[from];
        match list.binary_search_by_key(&to, |n| n.to) {
            Ok(pos) => {
                list[pos].weight = weight;
                false
            }
            Err(pos) => {
                list.insert(pos, Neighbor { to, weight });
                self.indegree[to] += 1;
                true
            }
        }
    }

    /// 删除单个有向条目，返回是否确实删除
    fn remove_entry(&mut self, from: VertexId, to: VertexId) -> bool {
        let list = &mut self.lists[from];
        match list.binary_search_by_key(&to, |n| n.to) {
            Ok(pos) => {
                list.remove(pos);
                self.indegree[to] -= 1;
                true
            }
            Err(_) => false,
        }
    }

    fn edge_at(&self, from: VertexId, pos: usize) -> Option<Edge> {
        self.lists
            .get(from)?
            .get(pos)
            .map(|n| Edge::new(from, n.to, n.weight))
    }
}

impl Graph for AdjListGraph {
    fn vertices_number(&self) -> usize {
        self.lists.len()
    }

    fn edges_number(&self) -> usize {
        self.edge_count
    }

    fn first_edge(&self, v: VertexId) -> Option<Edge> {
        self.edge_at(v, 0)
    }

    fn next_edge(&self, prev: &Edge) -> Option<Edge> {
        let list = self.lists.get(prev.src())?;
        let pos = list.partition_point(|n| n.to <= prev.dst());
        self.edge_at(prev.src(), pos)
    }

    fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight <= 0 {
            return Err(Error::InvalidWeight(weight));
        }

        let inserted = self.insert_entry(from, to, weight);
        if from != to {
            self.insert_entry(to, from, weight);
        }
        if inserted {
            self.edge_count += 1;
        }
        debug!(from, to, weight, inserted, "adj_list set_edge");
        Ok(())
    }

    fn del_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let removed = self.remove_entry(from, to);
        if from != to {
            self.remove_entry(to, from);
        }
        if removed {
            self.edge_count -= 1;
        }
        debug!(from, to, removed, "adj_list del_edge");
        Ok(())
    }

    fn is_edge(&self, edge: &Edge) -> bool {
        self.weight(edge.src(), edge.dst()).is_some()
    }

    fn add_vertex(&mut self) -> VertexId {
        let id = self.lists.len();
        self.lists.push(NeighborList::new());
        self.indegree.push(0);
        debug!(vertex = id, "adj_list add_vertex");
        id
    }

    fn clear_all_edges(&mut self) {
        self.lists.iter_mut().for_each(|l| l.clear());
        self.indegree.iter_mut().for_each(|d| *d = 0);
        self.edge_count = 0;
    }

    fn indegree(&self, v: VertexId) -> Option<usize> {
        self.indegree.get(v).copied()
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        let list = self.lists.get(from)?;
        list.binary_search_by_key(&to, |n| n.to)
            .ok()
            .map(|pos| list[pos].weight)
    }
}

impl fmt::Display for AdjListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lists.is_empty() {
            return writeln!(f, "图为空");
        }
        for (v, list) in self.lists.iter().enumerate() {
            write!(f, "{}:", v)?;
            for n in list {
                write!(f, " -> {}({})", n.to, n.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_insert() {
        let mut g = AdjListGraph::new(5);
        g.set_edge(0, 4, 1).unwrap();
        g.set_edge(0, 2, 2).unwrap();
        g.set_edge(0, 3, 3).unwrap();
        g.set_edge(0, 1, 4).unwrap();

        let dsts: Vec<_> = g.lists[0].iter().map(|n| n.to).collect();
        assert_eq!(dsts, vec![1, 2, 3, 4]);
        assert_eq!(g.edges_number(), 4);
        assert_eq!(g.degree(0), Some(4));
    }

    #[test]
    fn test_update_in_place() {
        let mut g = AdjListGraph::new(3);
        g.set_edge(0, 1, 5).unwrap();
        g.set_edge(1, 0, 8).unwrap();

        assert_eq!(g.edges_number(), 1);
        assert_eq!(g.weight(0, 1), Some(8));
        assert_eq!(g.weight(1, 0), Some(8));
        assert_eq!(g.indegree(0), Some(1));
        assert_eq!(g.indegree(1), Some(1));
    }

    #[test]
    fn test_self_loop_single_entry() {
        let mut g = AdjListGraph::new(2);
        g.set_edge(1, 1, 6).unwrap();

        assert_eq!(g.degree(1), Some(1));
        assert_eq!(g.indegree(1), Some(1));
        assert_eq!(g.edges_number(), 1);

        g.del_edge(1, 1).unwrap();
        assert_eq!(g.degree(1), Some(0));
        assert_eq!(g.edges_number(), 0);
    }

    #[test]
    fn test_del_missing_edge_noop() {
        let mut g = AdjListGraph::new(3);
        g.set_edge(0, 1, 5).unwrap();
        g.del_edge(0, 2).unwrap();
        assert_eq!(g.edges_number(), 1);
        assert_eq!(g.indegree(2), Some(0));
    }

    #[test]
    fn test_next_edge_cursor() {
        let mut g = AdjListGraph::new(6);
        g.set_edge(2, 5, 1).unwrap();
        g.set_edge(2, 0, 2).unwrap();
        g.set_edge(2, 3, 3).unwrap();

        let e = g.first_edge(2).unwrap();
        assert_eq!(e, Edge::new(2, 0, 2));
        let e = g.next_edge(&e).unwrap();
        assert_eq!(e, Edge::new(2, 3, 3));
        let e = g.next_edge(&e).unwrap();
        assert_eq!(e, Edge::new(2, 5, 1));
        assert!(g.next_edge(&e).is_none());
        assert!(g.first_edge(4).is_none());
    }

    #[test]
    fn test_clear_all_edges() {
        let mut g = AdjListGraph::new(3);
        g.set_edge(0, 1, 5).unwrap();
        g.set_edge(1, 2, 5).unwrap();
        g.clear_all_edges();

        assert_eq!(g.edges_number(), 0);
        assert_eq!(g.vertices_number(), 3);
        assert!((0..3).all(|v| g.first_edge(v).is_none() && g.indegree(v) == Some(0)));
    }

    #[test]
    fn test_display() {
        let mut g = AdjListGraph::new(3);
        g.set_edge(0, 1, 5).unwrap();
        g.set_edge(0, 2, 3).unwrap();
        assert_eq!(g.to_string(), "0: -> 1(5) -> 2(3)\n1: -> 0(5)\n2: -> 0(3)\n");
        assert_eq!(AdjListGraph::new(0).to_string(), "图为空\n");
    }
}
