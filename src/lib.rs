// Library exports for spanforest
pub mod components;
pub mod forest;
pub mod graph;
pub mod graph_io;
pub mod union_find;
pub mod validate;
pub mod wilson;
