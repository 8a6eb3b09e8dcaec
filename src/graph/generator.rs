//! 随机连通图生成
//!
//! 先生成随机生成树保证连通，再随机追加额外边

use super::graph::Graph;
use crate::config::RandomGraphConfig;
use crate::error::Result;
use crate::types::VertexId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// 随机图生成器
pub struct RandomGraphGenerator {
    config: RandomGraphConfig,
    rng: StdRng,
}

impl RandomGraphGenerator {
    /// 创建生成器（配置非法时返回错误）
    pub fn new(config: RandomGraphConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// 清空并重新随机生成 `graph` 的边
    pub fn populate<G: Graph + ?Sized>(&mut self, graph: &mut G) -> Result<()> {
        populate_with(graph, &mut self.rng, &self.config)
    }
}

/// 用给定随机源生成随机连通图
///
/// 只在存活顶点之间连边：第 i 个存活顶点 (i >= 1) 连接到随机的前序存活顶点，
/// 然后追加 [n * min, n * max) 条额外边（n 为存活顶点数），
/// 额外边中 from == to 的组合直接跳过。
pub fn populate_with<G, R>(graph: &mut G, rng: &mut R, config: &RandomGraphConfig) -> Result<()>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    config.validate()?;
    graph.clear_all_edges();

    let live: Vec<VertexId> = (0..graph.vertices_number())
        .filter(|&v| graph.is_vertex_live(v))
        .collect();
    let n = live.len();
    if n <= 1 {
        return Ok(());
    }

    // 生成树
    for i in 1..n {
        let from = live[rng.gen_range(0..i)];
        let weight = rng.gen_range(config.min_weight..=config.max_weight);
        graph.set_edge(from, live[i], weight)?;
    }

    // 额外边
    let (low, high) = config.extra_edges_range(n)?;
    let extra = rng.gen_range(low..high);
    let mut skipped = 0usize;
    for _ in 0..extra {
        let from = live[rng.gen_range(0..n)];
        let to = live[rng.gen_range(0..n)];
        if from == to {
            skipped += 1;
            continue;
        }
        let weight = rng.gen_range(config.min_weight..=config.max_weight);
        graph.set_edge(from, to, weight)?;
    }

    debug!(
        vertices = n,
        edges = graph.edges_number(),
        extra,
        skipped,
        "random graph generated"
    );
    Ok(())
}
