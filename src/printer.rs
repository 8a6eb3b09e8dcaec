//! 结果打印器
//!
//! 把遍历、最短路径、生成树等结果渲染为文本

use crate::algorithm::{ShortestPath, SpanningTree, TraversalResult};
use crate::graph::Graph;
use crate::types::VertexId;
use prettytable::{format, row, Table};

/// 结果打印器
#[derive(Debug, Default, Clone, Copy)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 遍历结果: 访问顺序 + 逐步事件
    pub fn print_traversal(&self, result: &TraversalResult) -> String {
        let mut output = result.describe();
        output.push('\n');
        for (i, step) in result.steps.iter().enumerate() {
            output.push_str(&format!("{:>3}. {}\n", i + 1, step));
        }
        output
    }

    /// 最短路径结果，附带计算过程
    pub fn print_shortest_path(
        &self,
        start: VertexId,
        end: VertexId,
        path: &ShortestPath,
        log: &[String],
    ) -> String {
        let mut output = String::from("=== Dijkstra 计算过程 ===\n");
        for line in log {
            output.push_str(line);
            output.push('\n');
        }

        match path.distance {
            Some(distance) => {
                let hops: Vec<String> = path.vertices.iter().map(|v| v.to_string()).collect();
                output.push_str("\n=== 最短路径结果 ===\n");
                output.push_str(&format!("路径: {}\n", hops.join(" -> ")));
                output.push_str(&format!("总权重: {}\n", distance));
            }
            None => {
                output.push_str(&format!("\n结果: 无法从 {} 到达 {}\n", start, end));
            }
        }
        output
    }

    /// 最小生成树结果，`None` 表示生成失败
    pub fn print_mst(&self, tree: Option<&SpanningTree>) -> String {
        let Some(tree) = tree else {
            return "无法生成MST\n".to_string();
        };

        let mut output = String::from("=== MST 边 ===\n");
        for e in &tree.edges {
            output.push_str(&format!("{}-{} ({})\n", e.src(), e.dst(), e.weight()));
        }
        output.push_str(&format!("总权重: {}\n", tree.total_weight));
        output
    }

    /// 图统计表格
    pub fn print_stats<G: Graph + ?Sized>(&self, graph: &G) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertices_number().to_string()]);
        table.add_row(row!["Live Vertex Count", graph.live_vertices_number().to_string()]);
        table.add_row(row!["Edge Count", graph.edges_number().to_string()]);
        table.to_string()
    }
}
