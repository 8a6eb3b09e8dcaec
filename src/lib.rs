//! GraphLab - 内存图引擎
//!
//! 两种可互换的存储表示，统一的边游标协议，以及构建于其上的算法：
//! - 邻接表 / 邻接矩阵后端
//! - BFS / DFS 遍历（附带可回放的事件日志）
//! - Dijkstra 最短路径
//! - Kruskal 最小生成树（并查集）

pub mod algorithm;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod printer;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    Bfs, Dfs, Dijkstra, DijkstraStep, Kruskal, ShortestPath, SpanningTree, TraversalResult,
    TraversalStep, UnionFind,
};
pub use config::RandomGraphConfig;
pub use error::{Error, Result};
pub use graph::{new_graph, AdjListGraph, Edge, Graph, GraphKind, MatrixGraph};
pub use printer::Printer;
pub use types::{VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
