//! HTTP surface: server, routing, form binding, and views.

pub mod app;
