//! 邻接矩阵图
//!
//! 行优先存储的稠密权重矩阵，权重 0 表示“无边”。
//! 顶点是否存在由独立的掩码记录，删除顶点时无需重新编号。

use super::edge::Edge;
use super::graph::Graph;
use crate::error::{Error, Result};
use crate::types::{VertexId, Weight};
use std::fmt;
use tracing::{debug, warn};

/// 矩阵中表示“无边”的哨兵值
const NO_EDGE: Weight = 0;

/// 邻接矩阵图
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    /// capacity * capacity 的权重矩阵
    matrix: Vec<Weight>,
    /// 矩阵容量（行数）
    capacity: usize,
    /// 逻辑顶点数
    vertices: usize,
    /// 顶点存在掩码，长度等于容量
    exists: Vec<bool>,
    /// 入度
    indegree: Vec<usize>,
    /// 无向边条数
    edge_count: usize,
}

impl MatrixGraph {
    /// 创建含 `vertices` 个孤立顶点的图，初始顶点全部存在
    pub fn new(vertices: usize) -> Self {
        Self {
            matrix: vec![NO_EDGE; vertices * vertices],
            capacity: vertices,
            vertices,
            exists: vec![true; vertices],
            indegree: vec![0; vertices],
            edge_count: 0,
        }
    }

    /// 矩阵容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 标记顶点存在状态
    pub fn set_vertex_exists(&mut self, v: VertexId, exists: bool) -> Result<()> {
        self.check_vertex(v)?;
        self.exists[v] = exists;
        debug!(vertex = v, exists, "matrix set_vertex_exists");
        Ok(())
    }

    /// 检查顶点是否存在
    pub fn is_vertex_exists(&self, v: VertexId) -> bool {
        v < self.vertices && self.exists[v]
    }

    /// 当前存在的顶点数量
    pub fn existing_vertices_count(&self) -> usize {
        self.exists[..self.vertices].iter().filter(|&&e| e).count()
    }

    #[inline]
    fn cell(&self, from: VertexId, to: VertexId) -> Weight {
        self.matrix[from * self.capacity + to]
    }

    #[inline]
    fn cell_mut(&mut self, from: VertexId, to: VertexId) -> &mut Weight {
        &mut self.matrix[from * self.capacity + to]
    }

    /// 写入单个有向条目，返回 0 ↔ 非 0 的状态是否翻转
    fn write_entry(&mut self, from: VertexId, to: VertexId, weight: Weight) -> bool {
        let cell = self.cell_mut(from, to);
        let was_absent = *cell == NO_EDGE;
        let now_absent = weight == NO_EDGE;
        *cell = weight;

        match (was_absent, now_absent) {
            (true, false) => {
                self.indegree[to] += 1;
                true
            }
            (false, true) => {
                self.indegree[to] -= 1;
                true
            }
            _ => false,
        }
    }

    /// 容量翻倍（容量为 0 时扩到 1）
    fn expand(&mut self) {
        let new_capacity = (self.capacity * 2).max(1);
        let mut matrix = vec![NO_EDGE; new_capacity * new_capacity];
        for row in 0..self.capacity {
            let old = &self.matrix[row * self.capacity..(row + 1) * self.capacity];
            matrix[row * new_capacity..row * new_capacity + self.capacity].copy_from_slice(old);
        }
        self.matrix = matrix;
        self.exists.resize(new_capacity, false);
        debug!(
            old_capacity = self.capacity,
            new_capacity, "matrix expanded"
        );
        self.capacity = new_capacity;
    }

    /// 从 `start` 开始扫描第一条边
    fn scan_from(&self, from: VertexId, start: VertexId) -> Option<Edge> {
        if from >= self.vertices {
            return None;
        }
        (start..self.vertices).find_map(|to| {
            let w = self.cell(from, to);
            (w != NO_EDGE).then(|| Edge::new(from, to, w))
        })
    }
}

impl Graph for MatrixGraph {
    fn vertices_number(&self) -> usize {
        self.vertices
    }

    fn edges_number(&self) -> usize {
        self.edge_count
    }

    fn first_edge(&self, v: VertexId) -> Option<Edge> {
        self.scan_from(v, 0)
    }

    fn next_edge(&self, prev: &Edge) -> Option<Edge> {
        self.scan_from(prev.src(), prev.dst() + 1)
    }

    fn set_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight <= 0 {
            return Err(Error::InvalidWeight(weight));
        }

        let inserted = self.write_entry(from, to, weight);
        if from != to {
            self.write_entry(to, from, weight);
        }
        if inserted {
            self.edge_count += 1;
        }
        debug!(from, to, weight, inserted, "matrix set_edge");
        Ok(())
    }

    fn del_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let removed = self.write_entry(from, to, NO_EDGE);
        if from != to {
            self.write_entry(to, from, NO_EDGE);
        }
        if removed {
            self.edge_count -= 1;
        }
        debug!(from, to, removed, "matrix del_edge");
        Ok(())
    }

    fn is_edge(&self, edge: &Edge) -> bool {
        self.weight(edge.src(), edge.dst()).is_some()
    }

    fn add_vertex(&mut self) -> VertexId {
        if self.vertices >= self.capacity {
            self.expand();
        }
        let id = self.vertices;
        self.vertices += 1;
        self.exists[id] = true;
        self.indegree.push(0);
        debug!(vertex = id, capacity = self.capacity, "matrix add_vertex");
        id
    }

    fn clear_all_edges(&mut self) {
        self.matrix.iter_mut().for_each(|w| *w = NO_EDGE);
        self.indegree.iter_mut().for_each(|d| *d = 0);
        self.edge_count = 0;
    }

    fn indegree(&self, v: VertexId) -> Option<usize> {
        self.indegree.get(v).copied()
    }

    fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        if from >= self.vertices || to >= self.vertices {
            return None;
        }
        let w = self.cell(from, to);
        (w != NO_EDGE).then_some(w)
    }

    fn is_vertex_live(&self, v: VertexId) -> bool {
        self.is_vertex_exists(v)
    }

    fn live_vertices_number(&self) -> usize {
        self.existing_vertices_count()
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let existing: Vec<VertexId> = (0..self.vertices)
            .filter(|&v| self.exists[v])
            .collect();
        if existing.is_empty() {
            return write!(f, "图为空");
        }

        write!(f, "   ")?;
        for v in &existing {
            write!(f, "{:>3}", v)?;
        }
        writeln!(f)?;

        write!(f, "   {}", "---".repeat(existing.len()))?;
        writeln!(f)?;

        for &row in &existing {
            write!(f, "{:>2}|", row)?;
            for &col in &existing {
                write!(f, "{:>3}", self.cell(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::new(0)
    }
}

/// 构造时校验顶点，供外部按已知边批量建图
impl TryFrom<(usize, &[Edge])> for MatrixGraph {
    type Error = Error;

    fn try_from((vertices, edges): (usize, &[Edge])) -> Result<Self> {
        let mut g = Self::new(vertices);
        for e in edges {
            if let Err(err) = g.set_edge(e.src(), e.dst(), e.weight()) {
                warn!(edge = %e, error = %err, "rejected edge while building matrix graph");
                return Err(err);
            }
        }
        Ok(g)
    }
}
