#[macro_use]
extern crate approx;

mod end_to_end;
mod random_grid;
