/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 样本访问顺序：[0, N) 的随机排列，每轮重新打乱
 */

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// 每轮（pass）的样本访问顺序
///
/// # 示例
/// ```ignore
/// let mut order = VisitationOrder::new(4, Some(42));
/// let first = order.get(0);
/// order.reshuffle(); // 开始新一轮
/// ```
#[derive(Debug, Clone)]
pub struct VisitationOrder {
    indices: Vec<usize>,
    rng: StdRng,
}

impl VisitationOrder {
    /// 创建[0, n)的随机排列；`seed`为`None`时从系统熵源取种
    pub fn new(n: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut order = Self {
            indices: (0..n).collect(),
            rng,
        };
        order.reshuffle();
        order
    }

    /// 重新打乱顺序
    pub fn reshuffle(&mut self) {
        self.indices.shuffle(&mut self.rng);
    }

    /// 本轮第`position`个要访问的样本索引
    pub fn get(&self, position: usize) -> usize {
        self.indices[position]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
