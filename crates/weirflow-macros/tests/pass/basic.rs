use weirflow_macros::Components;

#[derive(Debug, Clone, Copy, PartialEq, Components)]
pub struct Reading {
    pub head: f64,
    pub discharge: f64,
}

fn main() {
    let mut series = ReadingSeries::with_capacity(4);
    assert!(series.is_empty());
    series.push(&Reading { head: 0.5, discharge: 0.7 });
    series.push(&Reading { head: 1.0, discharge: 4.1 });
    assert_eq!(series.len(), 2);
    assert_eq!(series.row(1), Some(Reading { head: 1.0, discharge: 4.1 }));
    assert_eq!(series.row(2), None);
    assert_eq!(series.column("discharge"), Some(&[0.7, 4.1][..]));
    assert_eq!(series.column("stage"), None);
    assert_eq!(Reading::field_names(), &["head", "discharge"]);
}
