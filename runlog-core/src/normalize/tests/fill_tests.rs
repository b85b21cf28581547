use crate::normalize::forward_fill;
use crate::table::Value;
use pretty_assertions::assert_eq;

#[test]
fn fills_each_column_from_its_last_value() {
    // Arrange
    let mut rows = vec![
        vec![Value::Int(1), Value::Int(10), Value::Missing],
        vec![Value::Int(2), Value::Missing, Value::from("a")],
        vec![Value::Int(3), Value::Missing, Value::Missing],
        vec![Value::Int(4), Value::Int(40), Value::Missing],
    ];

    // Act
    forward_fill(&mut rows);

    // Assert
    assert_eq!(
        rows,
        vec![
            vec![Value::Int(1), Value::Int(10), Value::Missing],
            vec![Value::Int(2), Value::Int(10), Value::from("a")],
            vec![Value::Int(3), Value::Int(10), Value::from("a")],
            vec![Value::Int(4), Value::Int(40), Value::from("a")],
        ]
    );
}

#[test]
fn leading_gaps_stay_missing() {
    let mut rows = vec![
        vec![Value::Missing],
        vec![Value::Missing],
        vec![Value::Float(0.5)],
    ];

    forward_fill(&mut rows);

    assert_eq!(
        rows,
        vec![
            vec![Value::Missing],
            vec![Value::Missing],
            vec![Value::Float(0.5)],
        ]
    );
}

#[test]
fn empty_input_is_a_no_op() {
    let mut rows: Vec<Vec<Value>> = Vec::new();

    forward_fill(&mut rows);

    assert!(rows.is_empty());
}
