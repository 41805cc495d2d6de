//! Console rendering helpers for the plain output format.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use trendscope_engine::{PageView, Summary, Tier};
use trendscope_types::format::{format_count, format_engagement, format_publish_time};
use trendscope_types::{labels, TrendRecord};

pub const NO_DATA_MESSAGE: &str =
    "No trends data. Run the backend pipeline or try `trendscope refresh`.";

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

pub fn bold(text: &str) -> String {
    if use_color() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dim(text: &str) -> String {
    if use_color() {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub fn red(text: &str) -> String {
    if use_color() {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

pub fn magenta(text: &str) -> String {
    if use_color() {
        text.magenta().to_string()
    } else {
        text.to_string()
    }
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

/// Char-safe truncation with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

pub fn print_summary(summary: &Summary) {
    println!(
        "{}  {}   {}  {}   {}  {}",
        dim("Total views:"),
        bold(&format_count(summary.total_views)),
        dim("Videos:"),
        bold(&summary.videos.to_string()),
        dim("Viral (top 25%):"),
        bold(&summary.viral.to_string()),
    );
}

pub fn print_page(view: &PageView) {
    match view {
        PageView::Empty => println!("No records match the current filters."),
        PageView::Page {
            items,
            number,
            total_pages,
            label,
            ..
        } => {
            let title_width = terminal_width().saturating_sub(60).clamp(24, 60);
            println!(
                "{:<width$}  {:>8} {:>8} {:>8}  {:<16} {:>8}  {}",
                bold("Title"),
                bold("Views"),
                bold("Likes"),
                bold("Comments"),
                bold("Published"),
                bold("Eng%"),
                bold("Viral"),
                width = title_width
            );
            for record in items {
                println!("{}", trend_row(record, title_width));
            }
            println!(
                "{}",
                dim(&format!("{} (page {}/{})", label, number, total_pages))
            );
        }
    }
}

fn trend_row(record: &TrendRecord, title_width: usize) -> String {
    let viral = if record.is_viral() {
        magenta("Viral")
    } else {
        String::new()
    };
    format!(
        "{:<width$}  {:>8} {:>8} {:>8}  {:<16} {:>8}  {}",
        truncate(record.display_title(), title_width),
        format_count(record.views_or_zero()),
        format_count(record.likes_or_zero()),
        format_count(record.comments_or_zero()),
        format_publish_time(record.publish_time.as_deref()),
        format_engagement(record.engagement_score),
        viral,
        width = title_width
    )
}

pub fn print_detail(record: &TrendRecord, tier: Tier) {
    println!("{}", bold(record.display_title()));
    println!(
        "  {} {}",
        dim("Views:"),
        format_count(record.views_or_zero())
    );
    println!(
        "  {} {}",
        dim("Likes:"),
        format_count(record.likes_or_zero())
    );
    println!(
        "  {} {}",
        dim("Comments:"),
        format_count(record.comments_or_zero())
    );
    println!(
        "  {} {}",
        dim("Published:"),
        format_publish_time(record.publish_time.as_deref())
    );
    println!(
        "  {} {}",
        dim("Country:"),
        labels::country_name(record.region.as_deref())
    );
    println!(
        "  {} {}",
        dim("Language:"),
        labels::language_name(record.language.as_deref())
    );
    println!(
        "  {} {}",
        dim("Category:"),
        labels::category_name(record.category_id.as_deref())
    );
    println!(
        "  {} {} ({} tier)",
        dim("Engagement:"),
        format_engagement(record.engagement_score),
        tier.label()
    );
    if record.is_viral() {
        println!("  {}", magenta("Viral (top 25%)"));
    }
    match record.watch_url() {
        Some(url) => println!("  {} {}", dim("Watch:"), url),
        None => println!("  {}", dim("Watch: (no video id)")),
    }
}
