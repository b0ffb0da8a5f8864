/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 线性回归集成测试：逐样本的平方误差之和
 *
 * 学习 y = 2x + 1，参数矩阵为 [[w, b]]
 */

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use only_optim::optimizer::SilentMonitor;
use only_optim::{Adam, AdamConfig, DecomposableFunction, OptimizeReport};

struct LinearRegression {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearRegression {
    fn new() -> Self {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        Self { xs, ys }
    }

    fn residual(&self, iterate: &Array2<f64>, index: usize) -> f64 {
        iterate[[0, 0]] * self.xs[index] + iterate[[0, 1]] - self.ys[index]
    }
}

impl DecomposableFunction for LinearRegression {
    fn num_functions(&self) -> usize {
        self.xs.len()
    }

    fn evaluate(&self, iterate: &Array2<f64>, index: usize) -> f64 {
        self.residual(iterate, index).powi(2)
    }

    fn gradient(&self, iterate: &Array2<f64>, index: usize, gradient: &mut Array2<f64>) {
        let r = self.residual(iterate, index);
        gradient[[0, 0]] = 2.0 * r * self.xs[index];
        gradient[[0, 1]] = 2.0 * r;
    }
}

fn fit(config: AdamConfig) -> (Array2<f64>, OptimizeReport) {
    let function = LinearRegression::new();
    let mut iterate = Array2::zeros((1, 2));
    let report = Adam::new(&function, config)
        .with_monitor(SilentMonitor)
        .optimize_with_report(&mut iterate);
    (iterate, report)
}

fn base_config() -> AdamConfig {
    AdamConfig::default()
        .step_size(0.01)
        .tolerance(1e-9)
        .max_iterations(200_000)
}

#[test]
fn test_linear_regression_in_order() {
    for ada_max in [false, true] {
        let (iterate, report) = fit(base_config().shuffle(false).ada_max(ada_max));

        assert!(report.is_converged(), "ada_max={ada_max}: {report:?}");
        assert!(report.objective < 1e-5);
        assert_abs_diff_eq!(iterate[[0, 0]], 2.0, epsilon = 1e-2);
        assert_abs_diff_eq!(iterate[[0, 1]], 1.0, epsilon = 1e-2);
    }
}

#[test]
fn test_linear_regression_shuffled() {
    for ada_max in [false, true] {
        for seed in [1, 7, 42] {
            let (iterate, report) = fit(base_config().ada_max(ada_max).seed(seed));

            assert!(report.is_converged(), "seed={seed}: {report:?}");
            assert!(report.objective < 1e-5);
            assert_abs_diff_eq!(iterate[[0, 0]], 2.0, epsilon = 1e-2);
            assert_abs_diff_eq!(iterate[[0, 1]], 1.0, epsilon = 1e-2);
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = base_config().max_iterations(300).seed(11);
    let (first, first_report) = fit(config);
    let (second, second_report) = fit(config);

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

#[test]
fn test_config_loaded_from_json_drives_the_run() {
    let config = AdamConfig::from_json(
        r#"{"step_size": 0.01, "tolerance": 1e-9, "max_iterations": 200000, "shuffle": false}"#,
    )
    .unwrap();
    config.validate().unwrap();

    let (iterate, report) = fit(config);
    assert!(report.is_converged());
    assert_abs_diff_eq!(iterate[[0, 0]], 2.0, epsilon = 1e-2);
}
