//! 图核心模块
//!
//! 定义边、图能力接口以及邻接表 / 邻接矩阵两种存储后端

mod adj_list;
mod edge;
mod generator;
mod graph;
mod matrix;

pub use adj_list::AdjListGraph;
pub use edge::Edge;
pub use generator::{populate_with, RandomGraphGenerator};
pub use graph::{edges, new_graph, EdgeCursor, Graph, GraphKind};
pub use matrix::MatrixGraph;
