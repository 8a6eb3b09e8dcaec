//! 图算法模块
//!
//! 包含 BFS / DFS 遍历、Dijkstra 最短路径和 Kruskal 最小生成树

mod bfs;
mod dfs;
mod dijkstra;
mod kruskal;
mod traversal;
mod union_find;

pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, DijkstraStep, ShortestPath};
pub use kruskal::{Kruskal, SpanningTree};
pub use traversal::{TraversalKind, TraversalResult, TraversalStep};
pub use union_find::UnionFind;
