// output formatting - pretty tables or raw json

use crate::core::Listing;

pub struct Output;

impl Output {
    // nice table format for humans
    pub fn pretty(title: &str, listing: &Listing) {
        println!("{title}\n");

        if listing.rows.is_empty() {
            println!("no results");
            return;
        }

        // figure out column widths
        let mut widths: Vec<usize> = listing.columns.iter().map(|c| c.len()).collect();

        for row in &listing.rows {
            for (i, val) in row.iter().enumerate() {
                let len = format_value(val).len();
                if len > widths[i] {
                    widths[i] = len;
                }
            }
        }

        // cap at 40 so things don't get crazy
        for w in &mut widths {
            if *w > 40 {
                *w = 40;
            }
        }

        // header
        let header: Vec<String> = listing
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:width$}", c, width = widths[i]))
            .collect();
        println!("{}", header.join(" | "));

        // separator
        let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        println!("{}", sep.join("-+-"));

        // rows
        for row in &listing.rows {
            let formatted: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let s = format_value(v);
                    let s = if s.len() > 40 {
                        format!("{}...", &s[..37])
                    } else {
                        s
                    };
                    format!("{:width$}", s, width = widths[i])
                })
                .collect();
            println!("{}", formatted.join(" | "));
        }

        println!("\n{} result(s)", listing.row_count);
    }

    // raw json for scripts
    pub fn raw(listing: &Listing) {
        println!("{}", serde_json::to_string(listing).unwrap_or_default());
    }
}

fn format_value(val: &serde_json::Value) -> String {
    match val {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => val.to_string(),
    }
}
