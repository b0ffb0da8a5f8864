/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Adam / AdaMax 优化器：对可分解目标函数逐样本做随机一阶优化
 */

use ndarray::Array2;

use super::moments::MomentEstimates;
use super::shuffle::VisitationOrder;
use super::{AdamConfig, LogMonitor, Monitor, OptimizeReport, Termination};
use crate::objective::DecomposableFunction;

/// Adam 优化器（`ada_max`开启时为 AdaMax）
///
/// Adam: Adaptive Moment Estimation
/// - m = β1 * m + (1 - β1) * g
/// - v = β2 * v + (1 - β2) * g²
/// - θ = θ - α * √(1 - β2^t) / (1 - β1^t) * m / (√v + ε)
///
/// AdaMax 用无穷范数 u 替代 v：
/// - u = max(β2 * u, |g|)
/// - θ = θ - α / (1 - β1^t) * m / (u + ε)
///
/// 每轮（pass）按顺序或随机顺序访问全部 N 个样本，轮与轮之间做收敛判断。
/// 发散与迭代耗尽都不视为错误，而是正常返回目标函数值，由调用方自行判断。
///
/// # 使用示例
/// ```ignore
/// let mut adam = Adam::new(&function, AdamConfig::default().step_size(0.01));
/// let objective = adam.optimize(&mut iterate);
/// if !objective.is_finite() {
///     // 发散
/// }
/// ```
pub struct Adam<'a, F: DecomposableFunction + ?Sized> {
    /// 目标函数（仅借用）
    function: &'a F,
    config: AdamConfig,
    monitor: Box<dyn Monitor + 'a>,
}

impl<'a, F: DecomposableFunction + ?Sized> Adam<'a, F> {
    /// 创建新的优化器；不对超参数做任何校验
    pub fn new(function: &'a F, config: AdamConfig) -> Self {
        Self {
            function,
            config,
            monitor: Box::new(LogMonitor),
        }
    }

    /// 使用 Adam 默认参数创建优化器
    pub fn new_default(function: &'a F) -> Self {
        Self::new(function, AdamConfig::default())
    }

    /// 使用 AdaMax 默认参数创建优化器
    pub fn ada_max(function: &'a F) -> Self {
        Self::new(function, AdamConfig::ada_max_default())
    }

    /// 替换诊断输出的观察者（默认为[`LogMonitor`]）
    pub fn with_monitor<M: Monitor + 'a>(mut self, monitor: M) -> Self {
        self.monitor = Box::new(monitor);
        self
    }

    pub fn config(&self) -> &AdamConfig {
        &self.config
    }

    pub fn function(&self) -> &'a F {
        self.function
    }

    /// 原地优化`iterate`，返回最终目标函数值
    ///
    /// 返回值为 NaN 或无穷时表示发散；是否因迭代耗尽而结束需借助
    /// [`optimize_with_report`](Self::optimize_with_report)区分。
    pub fn optimize(&mut self, iterate: &mut Array2<f64>) -> f64 {
        self.optimize_with_report(iterate).objective
    }

    /// 原地优化`iterate`，返回目标函数值、终止原因和更新步数
    ///
    /// # Panics
    /// 目标函数的求和项数量为 0 时
    pub fn optimize_with_report(&mut self, iterate: &mut Array2<f64>) -> OptimizeReport {
        let config = self.config;
        let num_functions = self.function.num_functions();
        assert!(num_functions > 0, "Adam: 目标函数至少需要 1 个求和项");

        let mut visitation_order = config
            .shuffle
            .then(|| VisitationOrder::new(num_functions, config.seed));

        let mut current_function = 0;
        let mut overall_objective = self.function.evaluate_all(iterate);
        let mut last_objective = f64::MAX;

        let mut gradient = Array2::<f64>::zeros(iterate.raw_dim());
        let mut moments = MomentEstimates::new(iterate.raw_dim(), config.ada_max);

        // max_iterations 为 0 时 i 永远不会等于它，即不设上限
        let mut i = 1;
        while i != config.max_iterations {
            // 新一轮开始
            if current_function % num_functions == 0 {
                self.monitor.on_pass(i, overall_objective);

                if !overall_objective.is_finite() {
                    return self.finish(overall_objective, Termination::Diverged, i - 1);
                }

                if (last_objective - overall_objective).abs() < config.tolerance {
                    return self.finish(overall_objective, Termination::Converged, i - 1);
                }

                last_objective = overall_objective;
                overall_objective = 0.0;
                current_function = 0;

                if let Some(order) = visitation_order.as_mut() {
                    order.reshuffle();
                }
            }

            let index = visitation_order
                .as_ref()
                .map_or(current_function, |order| order.get(current_function));

            self.function.gradient(iterate, index, &mut gradient);
            moments.accumulate(&gradient, config.beta1, config.beta2);
            moments.apply(iterate, i, &config);

            overall_objective += self.function.evaluate(iterate, index);

            i += 1;
            current_function += 1;
        }

        // 迭代耗尽：重新计算完整的目标函数值，而非本轮尚未走完的部分和
        let objective = self.function.evaluate_all(iterate);
        self.finish(objective, Termination::Exhausted, i - 1)
    }

    fn finish(
        &mut self,
        objective: f64,
        termination: Termination,
        iterations: usize,
    ) -> OptimizeReport {
        let report = OptimizeReport {
            objective,
            termination,
            iterations,
        };
        self.monitor.on_terminate(&report, &self.config);
        report
    }
}
