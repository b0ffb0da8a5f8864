/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Adam / AdaMax 的矩估计与参数更新
 */

use ndarray::{Array2, Ix2, Zip};

use super::AdamConfig;

/// 更新步长的缩放项：Adam 维护二阶矩 v，AdaMax 维护无穷范数 u，二者互斥
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScaleEstimate {
    /// 梯度平方的指数移动平均（Adam）
    SecondMoment(Array2<f64>),
    /// 梯度绝对值的指数加权最大值（AdaMax）
    InfinityNorm(Array2<f64>),
}

/// 单次优化过程中的全部矩估计
#[derive(Debug, Clone)]
pub(crate) struct MomentEstimates {
    /// 一阶矩估计 m
    first: Array2<f64>,
    scale: ScaleEstimate,
}

impl MomentEstimates {
    /// 创建全零的矩估计，形状与参数矩阵一致
    pub(crate) fn new(dim: Ix2, ada_max: bool) -> Self {
        let scale = if ada_max {
            ScaleEstimate::InfinityNorm(Array2::zeros(dim))
        } else {
            ScaleEstimate::SecondMoment(Array2::zeros(dim))
        };
        Self {
            first: Array2::zeros(dim),
            scale,
        }
    }

    #[cfg(test)]
    pub(crate) fn first(&self) -> &Array2<f64> {
        &self.first
    }

    #[cfg(test)]
    pub(crate) fn scale(&self) -> &ScaleEstimate {
        &self.scale
    }

    /// 用本步梯度更新矩估计
    pub(crate) fn accumulate(&mut self, gradient: &Array2<f64>, beta1: f64, beta2: f64) {
        // m = β1 * m + (1 - β1) * g
        self.first *= beta1;
        self.first.scaled_add(1.0 - beta1, gradient);

        match &mut self.scale {
            // u = max(β2 * u, |g|)
            ScaleEstimate::InfinityNorm(u) => {
                Zip::from(u)
                    .and(gradient)
                    .for_each(|u, &g| *u = (beta2 * *u).max(g.abs()));
            }
            // v = β2 * v + (1 - β2) * g²
            ScaleEstimate::SecondMoment(v) => {
                *v *= beta2;
                Zip::from(v)
                    .and(gradient)
                    .for_each(|v, &g| *v += (1.0 - beta2) * (g * g));
            }
        }
    }

    /// 按偏差修正后的矩估计原地更新参数，`t`为全局步数（从 1 开始，不随轮次重置）
    pub(crate) fn apply(&self, iterate: &mut Array2<f64>, t: usize, config: &AdamConfig) {
        let bias_correction1 = 1.0 - config.beta1.powf(t as f64);
        let bias_correction2 = 1.0 - config.beta2.powf(t as f64);
        let eps = config.eps;

        match &self.scale {
            ScaleEstimate::InfinityNorm(u) => {
                if bias_correction1 == 0.0 {
                    return;
                }
                let step = config.step_size / bias_correction1;
                Zip::from(iterate)
                    .and(&self.first)
                    .and(u)
                    .for_each(|x, &m, &u| *x -= step * m / (u + eps));
            }
            ScaleEstimate::SecondMoment(v) => {
                // m / (√v + ε) 是 m / (√v + √bias_correction2 * ε) 的近似
                let step = config.step_size * bias_correction2.sqrt() / bias_correction1;
                Zip::from(iterate)
                    .and(&self.first)
                    .and(v)
                    .for_each(|x, &m, &v| *x -= step * m / (v.sqrt() + eps));
            }
        }
    }
}
