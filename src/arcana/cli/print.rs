use arcana::api::{CmdMessage, MessageLevel};
use arcana::commands::Spread;
use arcana::config::ArcanaConfig;
use arcana::index::DisplayReading;
use arcana::model::LayoutTemplate;
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_spread(spread: &Spread) {
    println!("{} {}", "Layout:".dimmed(), spread.layout_name.bold());
    for entry in &spread.entries {
        println!();
        let label = match &entry.position {
            Some(position) => format!("{}: {}", position, entry.card.name),
            None => entry.card.name.clone(),
        };
        let orientation = format!("({})", entry.orientation_label());
        let orientation = if entry.orientation.is_reversed() {
            orientation.red()
        } else {
            orientation.green()
        };
        println!("{} {}", label.yellow().bold(), orientation);
        if !entry.available {
            println!("{}", entry.body_text.dimmed());
            continue;
        }
        println!("{}", entry.body_text);
        println!("{} {}", "Advice:".bold(), entry.advice_text);
        if !entry.card.url.is_empty() {
            println!("{}", entry.card.url.dimmed());
        }
    }
    println!();
}

pub(crate) fn print_history(readings: &[DisplayReading]) {
    for dr in readings {
        let idx_str = format!("{:>4}. ", dr.index.get());
        let date = dr.record.timestamp.format(DATE_FORMAT).to_string();
        let layout = format!("{:<10}", dr.record.layout_name);
        let prefix_width = idx_str.width() + date.width() + 2 + layout.width() + 1;

        let available = LINE_WIDTH.saturating_sub(prefix_width + TIME_WIDTH);
        let question = if dr.record.question.is_empty() {
            "(no question)".to_string()
        } else {
            dr.record.question.replace('\n', " ")
        };
        let question = truncate_to_width(&question, available);
        let padding = available.saturating_sub(question.width());

        println!(
            "{}{}  {} {}{}{}",
            idx_str.yellow(),
            date.dimmed(),
            layout,
            question,
            " ".repeat(padding),
            format_time_ago(dr.record.timestamp).dimmed()
        );
    }
}

pub(crate) fn print_full_readings(readings: &[DisplayReading]) {
    for (i, dr) in readings.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let record = &dr.record;
        println!(
            "{} {}",
            dr.index.to_string().yellow(),
            record.question.bold()
        );
        println!("--------------------------------");
        println!("{} {}", "Date:".dimmed(), record.timestamp.format(DATE_FORMAT));
        println!("{} {}", "Category:".dimmed(), record.category);
        println!("{} {}", "Layout:".dimmed(), record.layout_name);
        for entry in &record.card_entries {
            println!();
            let label = match &entry.position {
                Some(position) => format!("{}: {}", position, entry.name),
                None => entry.name.clone(),
            };
            println!("{} ({})", label.bold(), entry.orientation);
            println!("{}", entry.interpretation_text);
        }
        if !record.personal_note.is_empty() {
            println!();
            println!("{} {}", "Note:".bold(), record.personal_note);
        }
    }
}

pub(crate) fn print_layouts(layouts: &[LayoutTemplate]) {
    let name_width = layouts.iter().map(|l| l.name.width()).max().unwrap_or(0);
    for layout in layouts {
        let name = format!("{:<width$}", layout.name, width = name_width);
        println!("{}  {}", name.bold(), layout.positions.join(", ").dimmed());
    }
}

pub(crate) fn print_config(config: &ArcanaConfig) {
    for key in ArcanaConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
    for layout in &config.layouts {
        println!("layout {} = {}", layout.name, layout.positions.join(", "));
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
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
