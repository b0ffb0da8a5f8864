/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - adam: Adam 主循环（收敛/发散/迭代耗尽、访问顺序）
 * - adamax: AdaMax 变体
 * - moments: 矩估计与参数更新
 * - shuffle: 样本访问顺序
 * - config: 超参数配置
 * - monitor: 诊断输出
 *
 * 下面是各测试共用的目标函数与观察者
 */


use std::cell::RefCell;

use ndarray::Array2;

use crate::objective::DecomposableFunction;
use crate::optimizer::{AdamConfig, Monitor, OptimizeReport};

/// f(x) = Σ_k ‖x - c_k‖²，每个中心 c_k 为一个求和项
pub(super) struct Quadratic {
    pub(super) centers: Vec<f64>,
}

impl Quadratic {
    /// 单项的 f(x) = ‖x‖²
    pub(super) fn bowl() -> Self {
        Self { centers: vec![0.0] }
    }
}

impl DecomposableFunction for Quadratic {
    fn num_functions(&self) -> usize {
        self.centers.len()
    }

    fn evaluate(&self, iterate: &Array2<f64>, index: usize) -> f64 {
        let c = self.centers[index];
        iterate.mapv(|x| (x - c) * (x - c)).sum()
    }

    fn gradient(&self, iterate: &Array2<f64>, index: usize, gradient: &mut Array2<f64>) {
        let c = self.centers[index];
        gradient.assign(&iterate.mapv(|x| 2.0 * (x - c)));
    }
}

/// 梯度恒为零、取值恒为`value`的目标函数
pub(super) struct Flat {
    pub(super) n: usize,
    pub(super) value: f64,
}

impl DecomposableFunction for Flat {
    fn num_functions(&self) -> usize {
        self.n
    }

    fn evaluate(&self, _iterate: &Array2<f64>, _index: usize) -> f64 {
        self.value
    }

    fn gradient(&self, _iterate: &Array2<f64>, _index: usize, gradient: &mut Array2<f64>) {
        gradient.fill(0.0);
    }
}

/// 记录每次求梯度时的样本索引；取值恒为 1，梯度恒为 1
pub(super) struct Recording {
    pub(super) n: usize,
    pub(super) visited: RefCell<Vec<usize>>,
}

impl Recording {
    pub(super) fn new(n: usize) -> Self {
        Self {
            n,
            visited: RefCell::new(Vec::new()),
        }
    }
}

impl DecomposableFunction for Recording {
    fn num_functions(&self) -> usize {
        self.n
    }

    fn evaluate(&self, _iterate: &Array2<f64>, _index: usize) -> f64 {
        1.0
    }

    fn gradient(&self, _iterate: &Array2<f64>, index: usize, gradient: &mut Array2<f64>) {
        self.visited.borrow_mut().push(index);
        gradient.fill(1.0);
    }
}

/// 记录所有回调的观察者
#[derive(Default)]
pub(super) struct RecordingMonitor {
    pub(super) passes: Vec<(usize, f64)>,
    pub(super) reports: Vec<OptimizeReport>,
}

impl Monitor for RecordingMonitor {
    fn on_pass(&mut self, iteration: usize, objective: f64) {
        self.passes.push((iteration, objective));
    }

    fn on_terminate(&mut self, report: &OptimizeReport, _config: &AdamConfig) {
        self.reports.push(*report);
    }
}

/// 只跑固定步数、不做收敛判断、不打乱顺序的配置
pub(super) fn fixed_steps(step_size: f64, steps: usize) -> AdamConfig {
    AdamConfig::default()
        .step_size(step_size)
        .tolerance(0.0)
        .shuffle(false)
        .max_iterations(steps + 1)
}
