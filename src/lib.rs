// Month Planner Library
// Event store, month grid renderer and a toolkit-agnostic UI adapter

pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
