#![no_std]

pub mod config;
pub mod klog;
pub mod numfmt;

#[cfg(test)]
extern crate std;

pub use config::{ClockMode, ConfigError, WriterConfig, config_from_cmdline};
pub use klog::{
    KlogBackend, KlogLevel, klog_get_level, klog_init, klog_register_backend, klog_set_level,
    klog_unregister_backend,
};
pub use numfmt::{DecimalBuf, StackFmt, format_float};
