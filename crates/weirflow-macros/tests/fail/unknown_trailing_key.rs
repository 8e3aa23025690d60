use weirflow_macros::Components;

#[derive(Components)]
#[components(series_name = "Table", not_a_real_key = "x")]
pub struct Reading {
    pub head: f64,
}

fn main() {}
