/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Adam / AdaMax 的超参数配置
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ComparisonOperator, OptimError};

/// Adam / AdaMax 优化器配置
///
/// 纯值类型：构造优化器时复制一份，单次优化过程中不会被修改。
/// JSON 中缺失的字段取 [`Default`] 中的值。
///
/// # 示例
/// ```ignore
/// let config = AdamConfig::default()
///     .step_size(0.01)
///     .shuffle(false)
///     .max_iterations(10_000);
/// let mut adam = Adam::new(&function, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdamConfig {
    /// 学习率
    pub step_size: f64,
    /// 一阶矩衰减率，取值[0, 1)
    pub beta1: f64,
    /// 二阶矩（AdaMax 下为无穷范数）衰减率，取值[0, 1)
    pub beta2: f64,
    /// 数值稳定项
    pub eps: f64,
    /// 最大迭代次数（步数上限），0 表示不设上限
    pub max_iterations: usize,
    /// 相邻两轮（pass）目标函数值之差低于此值即视为收敛
    pub tolerance: f64,
    /// 每轮开始时是否随机打乱样本访问顺序
    pub shuffle: bool,
    /// 是否使用 AdaMax（无穷范数）替代 Adam（二阶矩）
    pub ada_max: bool,
    /// 打乱顺序用的随机种子；为`None`时从系统熵源取种
    pub seed: Option<u64>,
}

impl Default for AdamConfig {
    fn default() -> Self {
        Self {
            step_size: 0.001,
            beta1: 0.9,
            beta2: 0.999,
            eps: 1e-8,
            max_iterations: 100_000,
            tolerance: 1e-5,
            shuffle: true,
            ada_max: false,
            seed: None,
        }
    }
}

impl AdamConfig {
    /// AdaMax 的默认配置（学习率取 0.002）
    pub fn ada_max_default() -> Self {
        Self {
            step_size: 0.002,
            ada_max: true,
            ..Self::default()
        }
    }

    /// 设置学习率
    pub fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    /// 设置一阶矩衰减率
    pub fn beta1(mut self, beta1: f64) -> Self {
        self.beta1 = beta1;
        self
    }

    /// 设置二阶矩（或无穷范数）衰减率
    pub fn beta2(mut self, beta2: f64) -> Self {
        self.beta2 = beta2;
        self
    }

    /// 设置数值稳定项
    pub fn eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// 设置最大迭代次数
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// 设置收敛阈值
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// 设置是否打乱样本访问顺序
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// 设置是否使用 AdaMax
    pub fn ada_max(mut self, ada_max: bool) -> Self {
        self.ada_max = ada_max;
        self
    }

    /// 设置随机种子（用于 shuffle）
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 检查超参数是否在合理范围内
    ///
    /// 优化器构造时不会调用此方法：越界的超参数只会导致数值上未定义的行为，
    /// 需要提前拦截的调用方可自行调用。
    pub fn validate(&self) -> Result<(), OptimError> {
        use ComparisonOperator::{GreaterOrEqual, GreaterThan, LessThan};

        let checks = [
            ("step_size", self.step_size, GreaterThan, 0.0),
            ("beta1", self.beta1, GreaterOrEqual, 0.0),
            ("beta1", self.beta1, LessThan, 1.0),
            ("beta2", self.beta2, GreaterOrEqual, 0.0),
            ("beta2", self.beta2, LessThan, 1.0),
            ("eps", self.eps, GreaterThan, 0.0),
            ("tolerance", self.tolerance, GreaterOrEqual, 0.0),
        ];

        for (value_name, value, operator, threshold) in checks {
            if !operator.holds(value, threshold) {
                return Err(OptimError::ValueMustSatisfyComparison {
                    value_name,
                    operator,
                    threshold,
                    value,
                });
            }
        }

        let values = [
            ("step_size", self.step_size),
            ("beta1", self.beta1),
            ("beta2", self.beta2),
            ("eps", self.eps),
            ("tolerance", self.tolerance),
        ];
        // NaN 与 -∞ 已在上面的比较中被拦截，这里只剩 +∞
        if let Some(&(value_name, value)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(OptimError::ValueMustBeFinite { value_name, value });
        }
        Ok(())
    }

    /// 从 JSON 字符串解析配置
    pub fn from_json(json: &str) -> Result<Self, OptimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化为（格式化的）JSON 字符串
    pub fn to_json(&self) -> Result<String, OptimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 文件读取配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OptimError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
