//! A catalogue of classic object-oriented design patterns, one module per
//! pattern. Each module is self-contained and paired with a demo binary of
//! the same name under `src/bin/`.
//!
//! The patterns never compose with each other; every module applies its
//! pattern to a small stand-alone domain (an HTTP request builder, an email
//! sender, a cached product catalogue).

pub mod adapter;
pub mod builder;
pub mod decorator;
pub mod facade;
pub mod factory;
pub mod prototype;
pub mod proxy;
pub mod singleton;
