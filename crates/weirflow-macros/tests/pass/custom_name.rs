use weirflow_macros::Components;

#[derive(Debug, Clone, Copy, Components)]
#[components(series_name = "StageTable")]
pub struct Stage {
    pub level: f64,
}

fn main() {
    let mut table = StageTable::with_capacity(1);
    table.push(&Stage { level: 2.0 });
    assert_eq!(table.level, vec![2.0]);
    assert_eq!(Stage::field_names(), &["level"]);
}
