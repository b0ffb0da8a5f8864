use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 优化器配置层的错误。
/// 注：优化过程本身从不返回错误，发散、迭代耗尽等情况都以目标函数值的形式返回。
#[derive(Error, Debug)]
pub enum OptimError {
    // 数值范围校验用
    #[error("{value_name}须{operator}{threshold}，实际为{value}")]
    ValueMustSatisfyComparison {
        value_name: &'static str,
        operator: ComparisonOperator,
        threshold: f64,
        value: f64,
    },

    #[error("{value_name}须为有限值，实际为{value}")]
    ValueMustBeFinite { value_name: &'static str, value: f64 },

    #[error("配置解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}
