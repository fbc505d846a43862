use analytics::AnalyticsReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

/// Renders the headline figures of a report for the terminal.
pub fn summary_table(report: &AnalyticsReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    let rows: Vec<(&str, String)> = vec![
        ("Trades", report.total_trades.to_string()),
        (
            "Wins / Losses / Breakeven",
            format!(
                "{} / {} / {}",
                report.winning_trades, report.losing_trades, report.breakeven_trades
            ),
        ),
        ("Win Rate", format!("{:.2}%", report.win_rate)),
        ("Expectancy", format!("${:.2}", report.expectancy)),
        ("Profit Factor", format!("{:.2}", report.profit_factor)),
        (
            "Streaks (win / loss)",
            format!("{} / {}", report.max_win_streak, report.max_loss_streak),
        ),
        ("Kelly Criterion", format!("{:.1}%", report.kelly_criterion)),
        ("Sharpe Ratio", format!("{:.2}", report.sharpe_ratio)),
        (
            "Max Drawdown",
            format!("${:.2} ({:.2}%)", report.max_drawdown, report.max_drawdown_percent),
        ),
        ("Total Return", format!("{:.2}%", report.returns.total_return_percent)),
        ("Avg R-Multiple", format!("{:.2}R", report.r_multiple_distribution.avg_r_multiple)),
        ("Portfolio Value", format!("${:.2}", report.account.portfolio_value)),
    ];

    for (metric, value) in rows {
        table.add_row(vec![Cell::new(metric), Cell::new(value)]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::{AccountConfig, TradeRecord};

    #[test]
    fn table_lists_headline_metrics() {
        let trades = [TradeRecord { pnl_usd: 25.0, ..TradeRecord::default() }];
        let report = AnalyticsEngine::new().calculate(&trades, &AccountConfig::new(100.0));
        let rendered = summary_table(&report).to_string();

        assert!(rendered.contains("Profit Factor"));
        assert!(rendered.contains("999.99"));
        assert!(rendered.contains("$125.00"));
    }
}
