/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 优化过程的诊断输出（注入式，默认走 log 门面）
 */

use log::{info, warn};

use super::{AdamConfig, OptimizeReport, Termination};

/// 优化过程的观察者
///
/// 两个回调都有空的默认实现，只关心其中之一时无需全部实现。
pub trait Monitor {
    /// 每轮（pass）开始、做收敛判断之前调用；`objective`为上一轮的目标函数值之和
    fn on_pass(&mut self, _iteration: usize, _objective: f64) {}

    /// 优化结束时调用
    fn on_terminate(&mut self, _report: &OptimizeReport, _config: &AdamConfig) {}
}

impl<M: Monitor + ?Sized> Monitor for &mut M {
    fn on_pass(&mut self, iteration: usize, objective: f64) {
        (**self).on_pass(iteration, objective);
    }

    fn on_terminate(&mut self, report: &OptimizeReport, config: &AdamConfig) {
        (**self).on_terminate(report, config);
    }
}

/// 默认观察者：经由`log`输出，发散用`warn`，其余用`info`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMonitor;

impl Monitor for LogMonitor {
    fn on_pass(&mut self, iteration: usize, objective: f64) {
        info!("Adam: 第{iteration}步, 目标函数值 {objective}");
    }

    fn on_terminate(&mut self, report: &OptimizeReport, config: &AdamConfig) {
        match report.termination {
            Termination::Diverged => warn!(
                "Adam: 目标函数值变为 {}，优化失败，请尝试更小的学习率",
                report.objective
            ),
            Termination::Converged => info!(
                "Adam: 目标函数值变化已低于阈值 {}，结束优化",
                config.tolerance
            ),
            Termination::Exhausted => info!(
                "Adam: 已达最大迭代次数({})，结束优化",
                config.max_iterations
            ),
        }
    }
}

/// 丢弃所有诊断信息
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentMonitor;

impl Monitor for SilentMonitor {}
