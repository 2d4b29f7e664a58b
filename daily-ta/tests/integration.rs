use daily_ta::{
    CrossSignal, PriceTable, TaError, add_moving_average, add_multi_day_change,
    add_pct_from_sma, add_price_sma_cross, add_sma_cross_sma,
    column::ColumnName,
    config::{IndicatorConfig, apply_all},
    pct_change,
    table::Column,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn close_table(close: &[Decimal]) -> PriceTable {
    let mut table = PriceTable::new();
    table.insert_prices("close", close.iter().copied()).unwrap();
    table
}

fn rounded(values: &[Option<Decimal>], dp: u32) -> Vec<Decimal> {
    values
        .iter()
        .map(|value| value.unwrap_or(Decimal::ZERO).round_dp(dp))
        .collect()
}

#[test]
fn test_moving_average_and_day_change_end_to_end() {
    let mut table = close_table(&[dec!(10), dec!(11), dec!(9), dec!(12), dec!(13)]);

    add_moving_average(3, &mut table, false).unwrap();
    add_multi_day_change(2, &mut table, false).unwrap();

    assert_eq!(
        rounded(table.indicator("3 MA").unwrap(), 3),
        vec![dec!(0), dec!(0), dec!(10.0), dec!(10.667), dec!(11.333)]
    );
    assert_eq!(
        rounded(table.indicator("2 DAY CHANGE").unwrap(), 4),
        vec![dec!(-10.0), dec!(9.0909), dec!(44.4444), dec!(0), dec!(0)]
    );
}

#[test]
fn test_pct_change() {
    assert_eq!(pct_change(dec!(100), dec!(110)).unwrap(), dec!(10.0));
    assert_eq!(pct_change(dec!(50), dec!(25)).unwrap(), dec!(-50.0));
    assert!(matches!(
        pct_change(dec!(0), dec!(25)),
        Err(TaError::DivisionByZero)
    ));
}

#[test]
fn test_moving_average_matches_window_mean() {
    let close = (1..=30)
        .map(|day| Decimal::from((day * 7) % 11 + 20))
        .collect::<Vec<_>>();

    for length in [1, 2, 5, 10, 30, 31] {
        let mut table = close_table(&close);
        add_moving_average(length, &mut table, false).unwrap();

        let averages = table.indicator(&ColumnName::moving_average(length)).unwrap();
        assert_eq!(averages.len(), close.len());

        for (index, average) in averages.iter().enumerate() {
            if index + 1 < length {
                assert_eq!(*average, None, "length {length} index {index}");
            } else {
                let window = &close[index + 1 - length..=index];
                let expected = window.iter().sum::<Decimal>() / Decimal::from(length);
                assert_eq!(*average, Some(expected), "length {length} index {index}");
            }
        }
    }
}

#[test]
fn test_deviation_is_undefined_wherever_average_is() {
    let mut table = close_table(&[dec!(20), dec!(22), dec!(21), dec!(25), dec!(24), dec!(19)]);

    add_pct_from_sma(4, &mut table, false).unwrap();

    let prices = table.prices("close").unwrap();
    let averages = table.indicator("4 MA").unwrap();
    let differences = table.indicator("Diff from 4 SMA").unwrap();

    for index in 0..prices.len() {
        match averages[index] {
            None => assert_eq!(differences[index], None),
            Some(average) => assert_eq!(
                differences[index],
                Some(pct_change(average, prices[index]).unwrap())
            ),
        }
    }
}

#[test]
fn test_crossover_signals_are_undefined_up_to_threshold() {
    let close = [
        dec!(10), dec!(9), dec!(8), dec!(9), dec!(11), dec!(12), dec!(10), dec!(8), dec!(9),
        dec!(12), dec!(13), dec!(11),
    ];
    let mut table = close_table(&close);

    add_price_sma_cross(3, &mut table, false).unwrap();
    add_sma_cross_sma(2, 4, &mut table, false).unwrap();

    for (name, threshold) in [("PA crossed 3 SMA", 3), ("2 SMA crossed 4 SMA", 4)] {
        let signals = table.signals(name).unwrap();
        assert_eq!(signals.len(), close.len());
        for (index, signal) in signals.iter().enumerate() {
            if index <= threshold {
                assert_eq!(*signal, CrossSignal::Undefined, "{name} index {index}");
            } else {
                assert_ne!(*signal, CrossSignal::Undefined, "{name} index {index}");
            }
        }
        assert!(signals.contains(&CrossSignal::Above), "{name}");
        assert!(signals.contains(&CrossSignal::Below), "{name}");
    }
}

#[test]
fn test_records_to_serialised_rows() {
    let json = r#"[
        {"date": "2024-03-01T00:00:00.000Z", "close": 10, "adjClose": 5},
        {"date": "2024-03-04T00:00:00.000Z", "close": 12, "adjClose": 6},
        {"date": "2024-03-05T00:00:00.000Z", "close": 9, "adjClose": 4.5}
    ]"#;
    let mut table = PriceTable::from_json(json).unwrap();

    let configs = serde_json::from_str::<Vec<IndicatorConfig>>(
        r#"[
            {"kind": "moving_average", "length": 2, "adjusted": true},
            {"kind": "multi_day_change", "days": 1}
        ]"#,
    )
    .unwrap();
    apply_all(&configs, &mut table).unwrap();

    let actual = serde_json::to_value(&table).unwrap();
    let expected = serde_json::json!([
        {
            "date": "2024-03-01T00:00:00Z",
            "close": 10.0, "adjClose": 5.0, "2 MA": 0.0, "1 DAY CHANGE": 20.0
        },
        {
            "date": "2024-03-04T00:00:00Z",
            "close": 12.0, "adjClose": 6.0, "2 MA": 5.5, "1 DAY CHANGE": -25.0
        },
        {
            "date": "2024-03-05T00:00:00Z",
            "close": 9.0, "adjClose": 4.5, "2 MA": 5.25, "1 DAY CHANGE": 0.0
        }
    ]);
    assert_eq!(actual, expected);
}

type Computer = fn(&mut PriceTable) -> Result<(), TaError>;

#[test]
fn test_repeated_calls_replace_columns() {
    struct TestCase {
        name: &'static str,
        compute: Computer,
    }

    let cases = vec![
        // TC0
        TestCase {
            name: "3 MA",
            compute: |table| add_moving_average(3, table, false),
        },
        // TC1
        TestCase {
            name: "2 DAY CHANGE",
            compute: |table| add_multi_day_change(2, table, false),
        },
        // TC2
        TestCase {
            name: "Diff from 3 SMA",
            compute: |table| add_pct_from_sma(3, table, false),
        },
        // TC3
        TestCase {
            name: "PA crossed 3 SMA",
            compute: |table| add_price_sma_cross(3, table, false),
        },
        // TC4
        TestCase {
            name: "2 SMA crossed 3 SMA",
            compute: |table| add_sma_cross_sma(2, 3, table, false),
        },
    ];

    for (index, test) in cases.into_iter().enumerate() {
        let mut table = close_table(&[dec!(10), dec!(11), dec!(9), dec!(12), dec!(13), dec!(8)]);

        (test.compute)(&mut table).unwrap();
        let first = table.clone();
        (test.compute)(&mut table).unwrap();

        assert!(table.contains(test.name), "TC{index} failed");
        assert_eq!(table, first, "TC{index} failed");
    }
}

#[test]
fn test_missing_adjusted_price_column() {
    struct TestCase {
        compute: Computer,
    }

    let cases = vec![
        // TC0
        TestCase {
            compute: |table| add_pct_from_sma(2, table, true),
        },
        // TC1
        TestCase {
            compute: |table| add_price_sma_cross(2, table, true),
        },
        // TC2
        TestCase {
            compute: |table| add_sma_cross_sma(2, 3, table, true),
        },
    ];

    for (index, test) in cases.into_iter().enumerate() {
        let mut table = close_table(&[dec!(10), dec!(11), dec!(9), dec!(12)]);

        let actual = (test.compute)(&mut table);

        assert!(
            matches!(&actual, Err(TaError::MissingColumn(name)) if name.as_str() == "adjClose"),
            "TC{index} failed: {actual:?}"
        );
        assert_eq!(table.column_names().count(), 1, "TC{index} failed");
    }
}

#[test]
fn test_moving_average_name_holding_signals() {
    struct TestCase {
        compute: Computer,
    }

    let cases = vec![
        // TC0
        TestCase {
            compute: |table| add_pct_from_sma(2, table, false),
        },
        // TC1
        TestCase {
            compute: |table| add_price_sma_cross(2, table, false),
        },
        // TC2
        TestCase {
            compute: |table| add_sma_cross_sma(2, 3, table, false),
        },
    ];

    for (index, test) in cases.into_iter().enumerate() {
        let mut table = close_table(&[dec!(10), dec!(11), dec!(9), dec!(12)]);
        table
            .insert(
                ColumnName::moving_average(2),
                Column::Signal(vec![CrossSignal::Undefined; 4]),
            )
            .unwrap();

        let actual = (test.compute)(&mut table);

        assert!(
            matches!(
                &actual,
                Err(TaError::ColumnKind { name, expected: "indicator", actual: "signal" })
                    if name.as_str() == "2 MA"
            ),
            "TC{index} failed: {actual:?}"
        );
    }
}
