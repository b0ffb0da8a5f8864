/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 可分解目标函数：f(x) = Σ f_i(x)，i ∈ [0, N)
 */

use ndarray::Array2;

/// 可分解（按样本或按批次求和）的目标函数
///
/// 优化器只通过本 trait 访问目标函数：按索引求值、按索引求梯度。
/// 实现方须保证 [`evaluate`](Self::evaluate) 与 [`gradient`](Self::gradient)
/// 不修改参数矩阵，且梯度写入的矩阵形状与参数矩阵一致。
///
/// # 示例
/// ```ignore
/// struct Bowl;
///
/// impl DecomposableFunction for Bowl {
///     fn num_functions(&self) -> usize {
///         1
///     }
///     fn evaluate(&self, iterate: &Array2<f64>, _index: usize) -> f64 {
///         iterate.mapv(|x| x * x).sum()
///     }
///     fn gradient(&self, iterate: &Array2<f64>, _index: usize, gradient: &mut Array2<f64>) {
///         gradient.assign(&(iterate * 2.0));
///     }
/// }
/// ```
pub trait DecomposableFunction {
    /// 求和项的数量 N（须 ≥ 1）
    fn num_functions(&self) -> usize;

    /// 第`index`项在`iterate`处的取值
    fn evaluate(&self, iterate: &Array2<f64>, index: usize) -> f64;

    /// 将第`index`项在`iterate`处的梯度写入`gradient`
    fn gradient(&self, iterate: &Array2<f64>, index: usize, gradient: &mut Array2<f64>);

    /// 全部 N 项之和
    fn evaluate_all(&self, iterate: &Array2<f64>) -> f64 {
        (0..self.num_functions())
            .map(|i| self.evaluate(iterate, i))
            .sum()
    }
}

impl<F: DecomposableFunction + ?Sized> DecomposableFunction for &F {
    fn num_functions(&self) -> usize {
        (**self).num_functions()
    }

    fn evaluate(&self, iterate: &Array2<f64>, index: usize) -> f64 {
        (**self).evaluate(iterate, index)
    }

    fn gradient(&self, iterate: &Array2<f64>, index: usize, gradient: &mut Array2<f64>) {
        (**self).gradient(iterate, index, gradient);
    }

    fn evaluate_all(&self, iterate: &Array2<f64>) -> f64 {
        (**self).evaluate_all(iterate)
    }
}
