use std::collections::HashSet;

use budgetbook_core::assistant::{describe_proposals, ChatReply};
use budgetbook_core::history::merge;
use budgetbook_core::ledger::{partition, Totals};
use budgetbook_core::models::CostHistoryEntry;
use budgetbook_core::picker::MonthGrid;
use budgetbook_core::split::BudgetSplit;
use budgetbook_core::validation::CostDraft;
use budgetbook_core::{
    ApiClient, ApiError, Budget, Cost, CostType, Currency, NewCost, Period, ValidationError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use url::Url;

fn cost(id: i64, name: &str, amount: Decimal, cost_type: CostType) -> Cost {
    Cost {
        id,
        name: name.to_string(),
        amount,
        description: None,
        cost_type,
        is_checked: false,
        created_at: "2025-07-01 12:00:00".to_string(),
    }
}

fn period(year: i32, month: u32) -> Period {
    Period::new(year, month).unwrap()
}

#[test]
fn test_slider_sum_never_exceeds_hundred() {
    let mut split = BudgetSplit::default();
    // Deterministic pseudo-random walk over both sliders, including
    // out-of-range inputs.
    let mut seed: u32 = 17;
    for step in 0..5_000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let value = ((seed >> 16) % 256) as u8;
        let cost_type = if step % 2 == 0 { CostType::Fixed } else { CostType::Variable };
        split.set(cost_type, value);

        assert!(
            u16::from(split.fixed()) + u16::from(split.variable()) <= 100,
            "Sum exceeded 100 after setting {:?} to {}: {:?}",
            cost_type,
            value,
            split
        );
        assert_eq!(split.get(cost_type), value.min(100), "Moved slider must keep its value");
    }
}

#[test]
fn test_picker_never_offers_future_or_pre_minimum_months() {
    let min_year = 2025;
    let markers = HashSet::new();
    for today_year in 2025..=2028 {
        for today_month in 1..=12 {
            let today = period(today_year, today_month);
            for shown_year in 2020..=2030 {
                let grid = MonthGrid::build(shown_year, today, today, &markers, min_year);
                for cell in &grid.cells {
                    assert!(cell.period <= today, "{} rendered while today is {}", cell.period, today);
                    assert!(cell.period.year >= min_year);
                }
                if shown_year == today_year {
                    assert_eq!(grid.cells.len(), today_month as usize);
                    assert!(grid.cells.last().unwrap().is_selected);
                }
            }
        }
    }
}

#[test]
fn test_totals_match_displayed_items() {
    let costs = vec![
        cost(1, "Rent", dec!(1200), CostType::Fixed),
        cost(2, "Coffee", dec!(3.75), CostType::Variable),
        cost(3, "Internet", dec!(45.99), CostType::Fixed),
        cost(4, "Groceries", dec!(89.10), CostType::Variable),
    ];
    let totals = Totals::from_costs(&costs);
    let (fixed, variable) = partition(&costs);

    let fixed_sum: Decimal = fixed.iter().map(|c| c.amount).sum();
    let variable_sum: Decimal = variable.iter().map(|c| c.amount).sum();
    assert_eq!(totals.fixed, fixed_sum);
    assert_eq!(totals.variable, variable_sum);
    assert_eq!(totals.grand, dec!(1338.84));
    assert_eq!(totals.checked, Decimal::ZERO);
}

#[tokio::test]
async fn test_invalid_draft_is_rejected_without_network_call() {
    // Port 9 (discard) on loopback: any real request would fail with a
    // transport error rather than a validation error.
    let client = ApiClient::new(Url::parse("http://127.0.0.1:9").unwrap());
    let july = period(2025, 7);

    let mut draft = CostDraft::new(CostType::Fixed);
    draft.amount = "10".to_string();
    let err = client.submit_draft(&draft, july).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::EmptyName)));

    draft.name = "Rent".to_string();
    draft.amount = "  ".to_string();
    let err = client.submit_draft(&draft, july).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::EmptyAmount)));
}

#[test]
fn test_history_merges_feeds_newest_first() {
    let budgets = vec![Budget {
        year: 2025,
        month: 6,
        salary: dec!(3000),
        savings_goal: Some(dec!(500)),
        fixed_percent: 50,
        variable_percent: 30,
    }];
    let costs = vec![
        CostHistoryEntry {
            year: 2025,
            month: 6,
            fixed_total: dec!(1500),
            variable_total: dec!(700),
        },
        CostHistoryEntry {
            year: 2025,
            month: 7,
            fixed_total: dec!(1500),
            variable_total: dec!(100),
        },
    ];

    let rows = merge(&budgets, &costs);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period, period(2025, 7));
    assert_eq!(rows[0].salary, None);
    assert_eq!(rows[0].savings, None);
    assert_eq!(rows[1].total, dec!(2200));
    assert_eq!(rows[1].savings, Some(dec!(800)));
}

#[test]
fn test_empty_reply_with_proposals_asks_for_confirmation() {
    let json = r#"{
        "reply": "",
        "pending_actions": {
            "tool_name": "create_expenses",
            "tool_args": [
                {"name": "Netflix", "amount": 15.49, "type": "fixed"},
                {"name": "Coffee", "amount": 4, "type": "variable", "description": "with Sam"}
            ]
        }
    }"#;
    let reply: ChatReply = serde_json::from_str(json).unwrap();
    assert_eq!(reply.proposals().len(), 2);

    let text = reply.display_text(Currency::USD);
    assert!(text.starts_with("I'm ready to log the following expenses for you:"));
    assert!(text.contains("- Netflix: $15.49 (Fixed)"));
    assert!(text.contains("- Coffee: $4.00 (Variable) (Note: with Sam)"));
    assert!(text.ends_with("Is this correct?"));
}

#[test]
fn test_plain_reply_is_shown_verbatim() {
    let reply: ChatReply = serde_json::from_str(r#"{"reply": "You spent $40 on coffee."}"#).unwrap();
    assert!(reply.proposals().is_empty());
    assert_eq!(reply.display_text(Currency::EUR), "You spent $40 on coffee.");
}

#[test]
fn test_proposal_summary_lists_each_expense() {
    let expenses = vec![NewCost {
        name: "Gas".to_string(),
        amount: dec!(60),
        cost_type: CostType::Variable,
        description: None,
    }];
    let text = describe_proposals(&expenses, Currency::GBP);
    assert_eq!(
        text,
        "I'm ready to log the following expenses for you:\n- Gas: £60.00 (Variable)\nIs this correct?"
    );
}
