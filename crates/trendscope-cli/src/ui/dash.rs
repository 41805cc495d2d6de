//! Interactive dashboard.
//!
//! The event loop owns a [`DashState`] and re-runs the full
//! filter/sort/paginate pipeline on every draw. Fetches run on a worker
//! thread and report back over a channel; only one request is in flight at
//! a time (the refresh key is ignored while one is pending — a cooperative
//! guard, not a lock).

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use trendscope_api::ApiClient;
use trendscope_engine::{Criteria, PageView, SortKey, Thresholds, TierFilter, ViralFilter};
use trendscope_runtime::{DashState, Phase};
use trendscope_types::format::{format_count, format_engagement, format_publish_time};
use trendscope_types::{labels, TrendRecord};

const PAGE_SIZES: [usize; 5] = [5, 10, 20, 50, 100];

type FetchResult = std::result::Result<Vec<TrendRecord>, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Load,
    Refresh,
}

struct Pending {
    kind: FetchKind,
    rx: Receiver<FetchResult>,
}

/// Restores the terminal even when the event loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

pub fn run(client: ApiClient, criteria: Criteria, page_size: i64) -> Result<()> {
    let mut state = DashState::new();
    state.set_criteria(criteria);
    state.set_page_size(page_size);

    let mut app = DashApp::new(client, state);
    app.start_fetch(FetchKind::Load);

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    while !app.quit {
        app.poll_fetch();
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }
    }

    Ok(())
}

struct DashApp {
    state: DashState,
    client: Arc<ApiClient>,
    pending: Option<Pending>,
    /// Selection index within the current page.
    selected: usize,
    quit: bool,
}

impl DashApp {
    fn new(client: ApiClient, state: DashState) -> Self {
        Self {
            state,
            client: Arc::new(client),
            pending: None,
            selected: 0,
            quit: false,
        }
    }

    fn start_fetch(&mut self, kind: FetchKind) {
        if self.pending.is_some() {
            return;
        }
        match kind {
            FetchKind::Load => self.state.begin_load(),
            FetchKind::Refresh => self.state.begin_refresh(),
        }

        let (tx, rx) = mpsc::channel();
        let client = Arc::clone(&self.client);
        thread::spawn(move || {
            let result = match kind {
                FetchKind::Load => client.fetch_trends(),
                FetchKind::Refresh => client.refresh_trends(),
            }
            .map_err(|e| e.to_string());
            let _ = tx.send(result);
        });

        self.pending = Some(Pending { kind, rx });
    }

    fn poll_fetch(&mut self) {
        let Some(pending) = &self.pending else { return };
        let outcome = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err("fetch worker disconnected".to_string()),
        };

        match pending.kind {
            FetchKind::Load => self.state.finish_load(outcome),
            FetchKind::Refresh => self.state.finish_refresh(outcome),
        }
        self.pending = None;
        self.selected = 0;
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => {
                if self.state.detail.is_some() {
                    self.state.close_detail();
                } else {
                    self.quit = true;
                }
            }
            KeyCode::Char('r') => {
                if self.pending.is_none() {
                    // A failed initial load retries the plain fetch; a
                    // populated (or empty) dashboard asks the backend to
                    // re-run its pipeline.
                    let kind = match self.state.phase {
                        Phase::Failed(_) => FetchKind::Load,
                        _ => FetchKind::Refresh,
                    };
                    self.start_fetch(kind);
                }
            }
            KeyCode::Enter => {
                let items = self.page_items();
                if let Some(record) = items.get(self.selected_index(&items)) {
                    self.state.open_detail(record.clone());
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.page_items().len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.state.next_page();
                self.selected = 0;
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.state.prev_page();
                self.selected = 0;
            }
            KeyCode::Char('v') => self.change_criteria(|c| {
                c.viral = match c.viral {
                    ViralFilter::All => ViralFilter::ViralOnly,
                    ViralFilter::ViralOnly => ViralFilter::NotViral,
                    ViralFilter::NotViral => ViralFilter::All,
                }
            }),
            KeyCode::Char('t') => self.change_criteria(|c| {
                c.tier = match c.tier {
                    TierFilter::All => TierFilter::Low,
                    TierFilter::Low => TierFilter::Mid,
                    TierFilter::Mid => TierFilter::High,
                    TierFilter::High => TierFilter::All,
                }
            }),
            KeyCode::Char('s') => self.change_criteria(|c| {
                c.sort = match c.sort {
                    SortKey::Views => SortKey::Likes,
                    SortKey::Likes => SortKey::CommentCount,
                    SortKey::CommentCount => SortKey::PublishTime,
                    SortKey::PublishTime => SortKey::EngagementScore,
                    SortKey::EngagementScore => SortKey::Title,
                    SortKey::Title => SortKey::Views,
                }
            }),
            KeyCode::Char('c') => {
                let choices = self.state.facets().regions;
                self.change_criteria(|c| c.country = cycle_code(&c.country, &choices));
            }
            KeyCode::Char('l') => {
                let choices = self.state.facets().languages;
                self.change_criteria(|c| c.language = cycle_code(&c.language, &choices));
            }
            KeyCode::Char('g') => {
                let choices = self.state.facets().categories;
                self.change_criteria(|c| c.category = cycle_code(&c.category, &choices));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.step_page_size(1),
            KeyCode::Char('-') => self.step_page_size(-1),
            _ => {}
        }
    }

    fn change_criteria(&mut self, f: impl FnOnce(&mut Criteria)) {
        self.state.update_criteria(f);
        self.selected = 0;
    }

    fn step_page_size(&mut self, direction: i64) {
        let current = self.state.page_size;
        let position = PAGE_SIZES.iter().position(|&s| s >= current);
        let index = match (position, direction) {
            (Some(i), d) if d > 0 => (i + 1).min(PAGE_SIZES.len() - 1),
            (Some(i), _) => i.saturating_sub(1),
            (None, _) => PAGE_SIZES.len() - 1,
        };
        self.state.set_page_size(PAGE_SIZES[index] as i64);
        self.selected = 0;
    }

    fn page_items(&self) -> Vec<TrendRecord> {
        self.state.snapshot().page.items().to_vec()
    }

    fn selected_index(&self, items: &[TrendRecord]) -> usize {
        self.selected.min(items.len().saturating_sub(1))
    }

    fn draw(&self, frame: &mut Frame) {
        let snapshot = self.state.snapshot();
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(frame.area());

        self.draw_header(frame, chunks[0], &snapshot.summary);
        self.draw_filters(frame, chunks[1]);
        self.draw_body(frame, chunks[2], &snapshot.page);
        self.draw_footer(frame, chunks[3], &snapshot.page);

        if let Some(record) = &self.state.detail {
            self.draw_detail(frame, record);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, summary: &trendscope_engine::Summary) {
        let block = Block::default()
            .title("trendscope")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let stats = Line::from(vec![
            Span::styled("Total views: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                format_count(summary.total_views),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Videos: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                summary.videos.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                "Viral (top 25%): ",
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::styled(
                summary.viral.to_string(),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(stats), inner);
    }

    fn draw_filters(&self, frame: &mut Frame, area: Rect) {
        let criteria = &self.state.criteria;
        let mut parts = vec![
            format!(
                "Country: {}",
                criteria
                    .country
                    .as_deref()
                    .map(|c| labels::country_name(Some(c)))
                    .unwrap_or_else(|| "All".to_string())
            ),
            format!(
                "Language: {}",
                criteria
                    .language
                    .as_deref()
                    .map(|l| labels::language_name(Some(l)))
                    .unwrap_or_else(|| "All".to_string())
            ),
            format!(
                "Category: {}",
                criteria
                    .category
                    .as_deref()
                    .map(|g| labels::category_name(Some(g)))
                    .unwrap_or_else(|| "All".to_string())
            ),
            format!("Viral: {}", viral_label(criteria.viral)),
            format!("Tier: {}", tier_label(criteria.tier)),
            format!("Sort: {}", sort_label(criteria.sort)),
            format!("Page size: {}", self.state.page_size),
        ];
        if self.state.refreshing {
            parts.push("refreshing…".to_string());
        } else if self.pending.is_some() {
            parts.push("loading…".to_string());
        }

        let line = Line::from(Span::styled(
            parts.join(" · "),
            Style::default().add_modifier(Modifier::DIM),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_body(&self, frame: &mut Frame, area: Rect, page: &PageView) {
        match &self.state.phase {
            Phase::Loading => {
                let message = Paragraph::new("Loading trends…")
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::DIM));
                frame.render_widget(message, area);
            }
            Phase::Failed(message) => {
                let lines = vec![
                    Line::from(Span::styled(
                        format!("Error: {}", message),
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(Span::styled(
                        "Press r to retry.",
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                ];
                frame.render_widget(
                    Paragraph::new(lines)
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true }),
                    area,
                );
            }
            Phase::NoData => {
                let message = Paragraph::new(
                    "No trends data. Run the backend pipeline or press r to refresh.",
                )
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::DIM));
                frame.render_widget(message, area);
            }
            Phase::Ready => self.draw_table(frame, area, page),
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect, page: &PageView) {
        let items = page.items();
        if items.is_empty() {
            let message = Paragraph::new("No records match the current filters.")
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(message, area);
            return;
        }

        let selected = self.selected_index(items);
        let header = Row::new(vec![
            "Title", "Views", "Likes", "Comments", "Published", "Eng%", "Viral",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = items
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let viral = if record.is_viral() { "Viral" } else { "" };
                let mut style = Style::default();
                if record.is_viral() {
                    style = style.fg(Color::Magenta);
                }
                if i == selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Row::new(vec![
                    Cell::from(record.display_title().to_string()),
                    Cell::from(format_count(record.views_or_zero())),
                    Cell::from(format_count(record.likes_or_zero())),
                    Cell::from(format_count(record.comments_or_zero())),
                    Cell::from(format_publish_time(record.publish_time.as_deref())),
                    Cell::from(format_engagement(record.engagement_score)),
                    Cell::from(viral),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(8),
                Constraint::Length(16),
                Constraint::Length(8),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(table, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, page: &PageView) {
        let label = match page {
            PageView::Empty => String::new(),
            PageView::Page {
                label,
                number,
                total_pages,
                ..
            } => format!("{} (page {}/{})", label, number, total_pages),
        };

        let second = match &self.state.banner {
            Some(banner) => Line::from(Span::styled(
                format!("Refresh failed: {}", banner),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(
                "q quit · r refresh · ←/→ page · ↑/↓ select · enter detail · v viral · \
                 t tier · s sort · c country · l language · g category · +/- page size",
                Style::default().add_modifier(Modifier::DIM),
            )),
        };

        let lines = vec![Line::from(label), second];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_detail(&self, frame: &mut Frame, record: &TrendRecord) {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);

        // Tier badge is relative to the full loaded set.
        let scores: Vec<f64> = self
            .state
            .records()
            .iter()
            .map(|r| r.engagement_or_zero())
            .collect();
        let tier = Thresholds::compute(&scores).classify(record.engagement_or_zero());

        let dim = Style::default().add_modifier(Modifier::DIM);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Views: ", dim),
                Span::raw(format_count(record.views_or_zero())),
            ]),
            Line::from(vec![
                Span::styled("Likes: ", dim),
                Span::raw(format_count(record.likes_or_zero())),
            ]),
            Line::from(vec![
                Span::styled("Comments: ", dim),
                Span::raw(format_count(record.comments_or_zero())),
            ]),
            Line::from(vec![
                Span::styled("Published: ", dim),
                Span::raw(format_publish_time(record.publish_time.as_deref())),
            ]),
            Line::from(vec![
                Span::styled("Country: ", dim),
                Span::raw(labels::country_name(record.region.as_deref())),
            ]),
            Line::from(vec![
                Span::styled("Language: ", dim),
                Span::raw(labels::language_name(record.language.as_deref())),
            ]),
            Line::from(vec![
                Span::styled("Category: ", dim),
                Span::raw(labels::category_name(record.category_id.as_deref())),
            ]),
            Line::from(vec![
                Span::styled("Engagement: ", dim),
                Span::raw(format!(
                    "{} ({} tier)",
                    format_engagement(record.engagement_score),
                    tier.label()
                )),
            ]),
        ];
        if record.is_viral() {
            lines.push(Line::from(Span::styled(
                "Viral (top 25%)",
                Style::default().fg(Color::Magenta),
            )));
        }
        lines.push(match record.watch_url() {
            Some(url) => Line::from(vec![Span::styled("Watch: ", dim), Span::raw(url)]),
            None => Line::from(Span::styled("Watch: (no video id)", dim)),
        });

        let block = Block::default()
            .title(record.display_title().to_string())
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}

fn cycle_code(current: &Option<String>, choices: &[String]) -> Option<String> {
    match current {
        None => choices.first().cloned(),
        Some(code) => match choices.iter().position(|c| c == code) {
            Some(i) if i + 1 < choices.len() => Some(choices[i + 1].clone()),
            _ => None,
        },
    }
}

fn viral_label(filter: ViralFilter) -> &'static str {
    match filter {
        ViralFilter::All => "all",
        ViralFilter::ViralOnly => "viral",
        ViralFilter::NotViral => "not viral",
    }
}

fn tier_label(filter: TierFilter) -> &'static str {
    match filter {
        TierFilter::All => "all",
        TierFilter::Low => "low",
        TierFilter::Mid => "mid",
        TierFilter::High => "high",
    }
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Title => "title ↑",
        SortKey::Views => "views ↓",
        SortKey::Likes => "likes ↓",
        SortKey::CommentCount => "comments ↓",
        SortKey::PublishTime => "published ↓",
        SortKey::EngagementScore => "engagement ↓",
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_walks_choices_and_wraps_to_all() {
        let choices = vec!["IN".to_string(), "US".to_string()];
        assert_eq!(cycle_code(&None, &choices), Some("IN".to_string()));
        assert_eq!(
            cycle_code(&Some("IN".to_string()), &choices),
            Some("US".to_string())
        );
        assert_eq!(cycle_code(&Some("US".to_string()), &choices), None);
        // A stale selection (not in the choices) also falls back to all.
        assert_eq!(cycle_code(&Some("ZZ".to_string()), &choices), None);
        assert_eq!(cycle_code(&None, &[]), None);
    }
}
