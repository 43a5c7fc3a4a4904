use super::rows::Report;


/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render_table(report: &Report) -> String {
    if report.rows.is_empty() {
        return format!(
            "No combination found with total payout below ticket cost ({} {}).\n",
            group_thousands(report.total_ticket_price),
            report.currency
        );
    }

    let cells: Vec<[String; 8]> = report
        .rows
        .iter()
        .map(|r| {
            [
                r.rank.to_string(),
                r.combo.clone(),
                group_thousands(r.total_payout),
                r.threes.to_string(),
                r.fours.to_string(),
                r.fives.to_string(),
                r.sixes.to_string(),
                r.sevens.to_string(),
            ]
        })
        .collect();

    let payout_header = report.payout_header();
    let headers = ["#", "Combo", payout_header.as_str(), "3s", "4s", "5s", "6s", "7s"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:>width$}", h, width = w))
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:>width$}", c, width = w))
            .collect();
        out.push_str(&line.join("  "));
        out.push('\n');
    }

    let best = &report.rows[0];
    out.push_str(&format!(
        "\nBest combo {} has total payout {} {}, below total ticket cost ({} {}).\n",
        best.combo,
        group_thousands(best.total_payout),
        report.currency,
        group_thousands(report.total_ticket_price),
        report.currency
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::rows::ResultRow;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_empty_report_message() {
        let report = Report {
            currency: "PKR".to_string(),
            total_ticket_price: 4000,
            restarts_run: 300,
            accepted: 0,
            rows: vec![],
        };
        assert!(render_table(&report).contains("No combination found"));
        assert!(render_table(&report).contains("4,000 PKR"));
    }

    #[test]
    fn test_table_lists_rows_and_best() {
        let report = Report {
            currency: "PKR".to_string(),
            total_ticket_price: 40000,
            restarts_run: 10,
            accepted: 1,
            rows: vec![ResultRow {
                rank: 1,
                combo: "1,2,3,4,5,6,7".to_string(),
                total_payout: 1515,
                threes: 1,
                fours: 2,
                fives: 0,
                sixes: 0,
                sevens: 0,
            }],
        };
        let text = render_table(&report);
        assert!(text.contains("Total Payout (PKR)"));
        assert!(text.contains("1,515"));
        assert!(text.contains("Best combo 1,2,3,4,5,6,7"));
    }
}
