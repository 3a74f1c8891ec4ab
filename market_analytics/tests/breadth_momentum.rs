use market_analytics::{
    breadth::{BreadthMomentumAggregator, build_momentum_rows, percentile_rank},
    models::breadth::{BreadthInputs, DateValue},
};

mod common;
use common::{advance_decline, assert_close, counts, date};

fn inputs() -> BreadthInputs {
    BreadthInputs {
        advance_decline_line: advance_decline(&[(1500, 1300); 12]),
        up_four_percent_line: counts(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120]),
        down_four_percent_line: counts(&[5; 12]),
        one_month_up: counts(&[4; 12]),
        one_month_down: counts(&[2; 12]),
        three_month_up: counts(&[9; 12]),
        three_month_down: counts(&[3; 12]),
    }
}

#[test]
fn rows_start_after_ten_earlier_dates() {
    let rows = build_momentum_rows(&inputs());
    let dates: Vec<&str> = rows.iter().map(|r| r.date_str()).collect();
    assert_eq!(dates, vec!["2024-01-11", "2024-01-12"]);
    for r in &rows {
        assert_eq!(r.mt_momentum_row.date_str, r.st_momentum_row.date_str);
        assert_eq!(r.lt_momentum_row.date_str, r.st_momentum_row.date_str);
    }
}

#[test]
fn short_term_ratios_and_daily_momo() {
    let rows = build_momentum_rows(&inputs());
    let st = &rows[1].st_momentum_row;

    assert_eq!(st.up, 120);
    assert_eq!(st.down, Some(5));
    assert_close(st.ratios.day_ratio, 24.0);
    // last five ups: 80 + 90 + 100 + 110 + 120 over 5 * 5
    assert_close(st.ratios.five_day_ratio, 500.0 / 25.0);
    // last ten ups: 30..=120 over 10 * 5
    assert_close(st.ratios.ten_day_ratio, 750.0 / 50.0);
    assert_eq!(st.adl_sum, Some(2800));
    assert_close(st.daily_momo, 100.0 * 120.0 / 2800.0);
}

#[test]
fn medium_and_long_term_use_the_same_ratio_pattern() {
    let rows = build_momentum_rows(&inputs());
    let mt = &rows[0].mt_momentum_row;
    assert_eq!((mt.up, mt.down), (Some(4), Some(2)));
    assert_close(mt.ratios.day_ratio, 2.0);
    assert_close(mt.ratios.five_day_ratio, 2.0);
    assert_close(mt.ratios.ten_day_ratio, 2.0);

    let lt = &rows[0].lt_momentum_row;
    assert_close(lt.ratios.day_ratio, 3.0);
    assert_close(lt.ratios.ten_day_ratio, 3.0);
}

#[test]
fn zero_down_day_ratio_equals_up_count() {
    let mut inp = inputs();
    inp.down_four_percent_line = counts(&[0; 12]);
    let rows = build_momentum_rows(&inp);
    let st = &rows[1].st_momentum_row;

    assert_eq!(st.down, Some(0));
    assert_eq!(st.ratios.day_ratio, 120.0);
    assert!(st.ratios.ten_day_ratio.is_finite());
}

#[test]
fn missing_dates_are_none_but_ratio_as_zero() {
    let mut inp = inputs();
    // drop the last down reading and the last advance/decline day
    inp.down_four_percent_line.pop();
    inp.advance_decline_line.pop();
    inp.three_month_up.clear();

    let rows = build_momentum_rows(&inp);
    let st = &rows[1].st_momentum_row;
    assert_eq!(st.down, None);
    assert_close(st.ratios.day_ratio, 120.0);
    // 10 window dates, 9 with a down reading of 5
    assert_close(st.ratios.ten_day_ratio, 750.0 / 45.0);
    assert_eq!(st.adl_sum, None);
    assert_eq!(st.daily_momo, 0.0);

    let lt = &rows[1].lt_momentum_row;
    assert_eq!(lt.up, None);
    assert_eq!(lt.ratios.day_ratio, 0.0);
}

#[test]
fn zero_adl_sum_reports_zero_momo() {
    let mut inp = inputs();
    inp.advance_decline_line = advance_decline(&[(0, 0); 12]);
    let rows = build_momentum_rows(&inp);
    assert_eq!(rows[0].st_momentum_row.adl_sum, Some(0));
    assert_eq!(rows[0].st_momentum_row.daily_momo, 0.0);
}

#[test]
fn single_date_lookup_agrees_with_full_history() {
    let inp = inputs();
    let agg = BreadthMomentumAggregator::new(&inp);
    let all = agg.rows();
    assert_eq!(agg.row_for(&date(10)).as_ref(), all.first());
    assert_eq!(agg.row_for(&date(11)).as_ref(), all.get(1));
    assert!(agg.row_for(&date(9)).is_none());
}

#[test]
fn inputs_deserialize_from_dashboard_json() {
    let json = r#"{
        "advanceDeclineLine": [{"dateStr": "2024-01-01", "advances": 3, "declines": 1}],
        "upFourPercentLine": [{"dateStr": "2024-01-01", "count": 7}],
        "downFourPercentLine": []
    }"#;
    let inp: BreadthInputs = serde_json::from_str(json).unwrap();
    assert_eq!(inp.advance_decline_line[0].total(), 4);
    assert_eq!(inp.up_four_percent_line[0].count, 7);
    assert!(inp.one_month_up.is_empty());

    let row_json = serde_json::to_value(build_momentum_rows(&inputs())[0].clone()).unwrap();
    assert!(row_json["stMomentumRow"]["fiveDayRatio"].is_number());
    assert!(row_json["ltMomentumRow"]["dateStr"].is_string());
}

#[test]
fn percentile_rank_of_breadth_series() {
    let series: Vec<DateValue> = [-10.0, -5.0, 0.0, 5.0, 10.0]
        .iter()
        .enumerate()
        .map(|(i, &value)| DateValue {
            date_str: date(i),
            value,
        })
        .collect();

    assert_eq!(percentile_rank(&series, &date(4)), Some(100.0));
    assert_eq!(percentile_rank(&series, &date(0)), Some(-100.0));
    assert_eq!(percentile_rank(&series, &date(2)), Some(0.0));
}
