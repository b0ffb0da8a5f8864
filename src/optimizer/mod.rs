/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 优化器模块：面向可分解目标函数的 Adam / AdaMax
 */

mod adam;
mod config;
mod moments;
mod monitor;
mod report;
mod shuffle;

pub use adam::Adam;
pub use config::AdamConfig;
pub use monitor::{LogMonitor, Monitor, SilentMonitor};
pub use report::{OptimizeReport, Termination};
pub use shuffle::VisitationOrder;

#[cfg(test)]
mod tests;
