use chrono::{DateTime, Utc};
use colored::Colorize;
use quotez::api::{CmdMessage, MessageLevel, SyncReport};
use quotez::config::{QuotezConfig, CONFIG_KEYS};
use quotez::model::{Quote, ALL_CATEGORIES};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const CATEGORY_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_quote(quote: &Quote) {
    println!("\"{}\"", quote.text.bold());
    if let Some(author) = &quote.author {
        println!("  -- {}", author.italic());
    }
    println!("{}", format!("Category: {}", quote.category).dimmed());
}

pub(super) fn print_quote_list(quotes: &[Quote]) {
    for (i, quote) in quotes.iter().enumerate() {
        let idx = format!("{:>3}. ", i + 1);
        let category = truncate_to_width(&quote.category, CATEGORY_WIDTH);
        let category_pad = CATEGORY_WIDTH.saturating_sub(category.width());

        let available = LINE_WIDTH.saturating_sub(idx.width() + CATEGORY_WIDTH + 2);
        let text = match &quote.author {
            Some(author) => format!("{} -- {}", quote.text, author),
            None => quote.text.clone(),
        };
        let text = truncate_to_width(&text.replace('\n', " "), available);

        println!(
            "{}{}{}  {}",
            idx.dimmed(),
            category.yellow(),
            " ".repeat(category_pad),
            text
        );
    }
}

pub(super) fn print_categories(categories: &[String], selected: &str) {
    let all = std::iter::once(ALL_CATEGORIES.to_string()).chain(categories.iter().cloned());
    for name in all {
        if name == selected {
            println!("* {}", name.green());
        } else {
            println!("  {}", name);
        }
    }
}

pub(super) fn print_sync_report(report: &SyncReport) {
    let when = format_time_ago(report.finished_at);
    if report.succeeded() {
        println!(
            "{} {}",
            format!(
                "fetched {}, {} -> {} quotes",
                report.fetched, report.before, report.after
            )
            .dimmed(),
            when.dimmed()
        );
    } else {
        println!("{}", format!("last attempt {}", when).dimmed());
    }
}

pub(super) fn print_config(config: &QuotezConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
