//! 配置
//!
//! 随机图生成参数，可由 JSON 加载

use crate::error::{Error, Result};
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 额外边系数上限
pub const MAX_EXTRA_EDGES_FACTOR: usize = 64;

/// 随机图生成配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraphConfig {
    /// 随机种子，为空时使用系统熵
    pub seed: Option<u64>,
    /// 最小边权重（含）
    pub min_weight: Weight,
    /// 最大边权重（含）
    pub max_weight: Weight,
    /// 额外边数下限 = n * 该系数
    pub extra_edges_min_factor: usize,
    /// 额外边数上限 = n * 该系数（不含）
    pub extra_edges_max_factor: usize,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_weight: 1,
            max_weight: 10,
            extra_edges_min_factor: 1,
            extra_edges_max_factor: 3,
        }
    }
}

impl RandomGraphConfig {
    /// 固定种子的配置
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// 从 JSON 字符串加载并校验
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验参数
    pub fn validate(&self) -> Result<()> {
        if self.min_weight <= 0 {
            return Err(Error::InvalidConfig(format!(
                "min_weight 必须为正数, 实际为 {}",
                self.min_weight
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(Error::InvalidConfig(format!(
                "min_weight ({}) 大于 max_weight ({})",
                self.min_weight, self.max_weight
            )));
        }
        if self.extra_edges_max_factor > MAX_EXTRA_EDGES_FACTOR {
            return Err(Error::InvalidConfig(format!(
                "extra_edges_max_factor ({}) 超过上限 {}",
                self.extra_edges_max_factor, MAX_EXTRA_EDGES_FACTOR
            )));
        }
        if self.extra_edges_min_factor >= self.extra_edges_max_factor {
            return Err(Error::InvalidConfig(format!(
                "额外边系数区间为空: [{}, {})",
                self.extra_edges_min_factor, self.extra_edges_max_factor
            )));
        }
        Ok(())
    }

    /// n 个顶点时额外边数的取值区间 `[low, high)`
    pub fn extra_edges_range(&self, n: usize) -> Result<(usize, usize)> {
        let overflow = || Error::InvalidConfig(format!("额外边数溢出: 顶点数 {}", n));
        let low = n
            .checked_mul(self.extra_edges_min_factor)
            .ok_or_else(overflow)?;
        let high = n
            .checked_mul(self.extra_edges_max_factor)
            .ok_or_else(overflow)?;
        Ok((low, high))
    }
}
