//! # Only Optim
//!
//! `only_optim`用纯rust实现[Adam](https://arxiv.org/abs/1412.6980)及其变体 AdaMax，
//! 用于最小化可分解为 N 个求和项（按样本或按批次）的目标函数。
//!
//! ```ignore
//! use only_optim::objective::DecomposableFunction;
//! use only_optim::optimizer::{Adam, AdamConfig};
//!
//! let config = AdamConfig::default().step_size(0.01).seed(42);
//! let report = Adam::new(&function, config).optimize_with_report(&mut iterate);
//! println!("{} 于第{}步: {}", report.termination, report.iterations, report.objective);
//! ```

pub mod errors;
pub mod objective;
pub mod optimizer;

pub use errors::OptimError;
pub use objective::DecomposableFunction;
pub use optimizer::{Adam, AdamConfig, OptimizeReport, Termination};
