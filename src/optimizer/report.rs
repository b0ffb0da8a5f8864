/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 优化结束时的结果汇报
 */

use std::fmt::{self, Display};

/// 优化过程的终止原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// 相邻两轮目标函数值之差低于阈值
    Converged,
    /// 目标函数值变为 NaN 或无穷
    Diverged,
    /// 达到最大迭代次数
    Exhausted,
}

impl Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Termination::Converged => "收敛",
            Termination::Diverged => "发散",
            Termination::Exhausted => "迭代耗尽",
        };
        write!(f, "{}", name)
    }
}

/// [`Adam::optimize_with_report`](super::Adam::optimize_with_report)的返回值
///
/// 在“只返回目标函数值”的基础上附带终止原因和已执行的更新步数，
/// `objective`与[`Adam::optimize`](super::Adam::optimize)的返回值完全一致。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizeReport {
    /// 最终目标函数值（发散时为 NaN 或无穷）
    pub objective: f64,
    pub termination: Termination,
    /// 实际执行的参数更新步数
    pub iterations: usize,
}

impl OptimizeReport {
    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
