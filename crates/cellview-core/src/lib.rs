pub mod config;
pub mod consts;
pub mod dataset;
pub mod error;
pub mod event;
pub mod index;
pub mod rank;
pub mod roi;
pub mod selection;
pub mod session;
pub mod view;
