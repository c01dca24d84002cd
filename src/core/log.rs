use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

/// Width of the "operation (target)" column.
const OP_COLUMN_MAX: usize = 60;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI escape pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "submit" => Colour::Cyan,
        "approve" => Colour::Green,
        "reject" => Colour::Red,
        "onboard" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" | "vacuum" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_target = |e: &LogEntry| {
            if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            }
        };

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_COLUMN_MAX);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let color = color_for_operation(&e.operation);

            let visible = op_target(e);
            let truncated = if visible.chars().count() > OP_COLUMN_MAX {
                let mut s: String = visible.chars().take(OP_COLUMN_MAX - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is colored
            let colored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
