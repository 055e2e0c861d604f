use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_help(area: Rect, f: &mut Frame) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Magenta));
    let p = Paragraph::new(vec![
        Line::from("Dashboard:"),
        Line::from(vec![
            Span::raw("  "),
            key("q"),
            Span::raw(" / "),
            key("Ctrl-C"),
            Span::raw("  Quit"),
        ]),
        Line::from(vec![Span::raw("  "), key("/"), Span::raw("           Edit search (Enter/Esc to finish)")]),
        Line::from(vec![Span::raw("  "), key("s"), Span::raw("           Cycle stage filter")]),
        Line::from(vec![Span::raw("  "), key("o"), Span::raw("           Cycle source filter")]),
        Line::from(vec![Span::raw("  "), key("c"), Span::raw("           Clear filters")]),
        Line::from(vec![Span::raw("  "), key("1-6"), Span::raw("         Sort by column (again to flip direction)")]),
        Line::from(vec![Span::raw("  "), key("←/→"), Span::raw(" or "), key("h/l"), Span::raw("  Previous/next page")]),
        Line::from(vec![Span::raw("  "), key("↑/↓"), Span::raw(" or "), key("j/k"), Span::raw("  Select row")]),
        Line::from(vec![Span::raw("  "), key("Enter"), Span::raw("       Open selected applicant")]),
        Line::from(vec![Span::raw("  "), key("r"), Span::raw("           Refresh from server")]),
        Line::from(vec![Span::raw("  "), key("n"), Span::raw("           New applicant form")]),
        Line::from(vec![Span::raw("  "), key("e"), Span::raw("           Export current page as HTML")]),
        Line::from(vec![Span::raw("  "), key("y"), Span::raw("           Copy selected detail URL")]),
        Line::from(vec![Span::raw("  "), key("x"), Span::raw("           Dismiss error banner")]),
        Line::from(vec![Span::raw("  "), key("tab"), Span::raw("         Switch tabs")]),
        Line::from(""),
        Line::from("Forms:"),
        Line::from(vec![Span::raw("  "), key("↑/↓"), Span::raw("         Move between fields (leaving a field validates it)")]),
        Line::from(vec![Span::raw("  "), key("←/→"), Span::raw("         Change a selector value")]),
        Line::from(vec![Span::raw("  "), key("Ctrl-S"), Span::raw("      Submit")]),
        Line::from(vec![Span::raw("  "), key("Esc"), Span::raw("         Back to dashboard")]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, area);
}
