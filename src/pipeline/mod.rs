// Analysis pipeline: the three operations and the run-everything default.

pub mod tasks;
