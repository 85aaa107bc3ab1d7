use console::style;

use super::controller::ViewState;
use super::model::CATEGORIES;
use super::view::Page;
use crate::util::sanitize::sanitize_for_terminal;

/// What selecting a line of the screen does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Nothing,
    Open(String),
    Category(&'static str),
    ViewAll,
    Search,
    Retry,
}

/// A page laid out as selectable terminal lines.
#[derive(Debug, Default)]
pub struct Screen {
    pub labels: Vec<String>,
    pub actions: Vec<Action>,
    pub images: Vec<Option<String>>,
    pub header_indices: Vec<usize>,
    // Lines from here on are section navigation.
    pub nav_start: usize,
}

impl Screen {
    fn heading(&mut self, text: &str) {
        self.header_indices.push(self.labels.len());
        self.line(format!("== {} ==", text.to_uppercase()), Action::Nothing);
    }

    fn line(&mut self, label: String, action: Action) {
        self.labels.push(label);
        self.actions.push(action);
        self.images.push(None);
    }

    fn story(&mut self, label: String, url: &str, image: &str) {
        self.line(label, link(url));
        if let Some(last) = self.images.last_mut() {
            *last = Some(image.to_string());
        }
    }
}

pub fn screen(page: &Page, state: &ViewState) -> Screen {
    let mut s = Screen::default();
    match state {
        ViewState::Loading => {
            s.line("Loading latest news...".into(), Action::Nothing);
        }
        ViewState::Error(msg) => {
            s.heading("Something went wrong");
            s.line(format!("  {}", style(sanitize_for_terminal(msg)).red()), Action::Nothing);
            s.line("  Try Again".into(), Action::Retry);
        }
        ViewState::Content => content(&mut s, page),
    }
    s.nav_start = s.labels.len();
    navigation(&mut s);
    s
}

fn content(s: &mut Screen, page: &Page) {
    if let Some(f) = &page.featured {
        s.heading("Featured");
        s.story(
            format!(
                "  [{}] {}",
                style(sanitize_for_terminal(&f.category.to_uppercase())).cyan(),
                style(sanitize_for_terminal(&f.title)).bold()
            ),
            &f.url,
            &f.image,
        );
        s.line(format!("      {}", sanitize_for_terminal(&f.description)), Action::Nothing);
    }

    if page.sidebar.iter().any(Option::is_some) {
        s.heading("Top Stories");
        for item in page.sidebar.iter().flatten() {
            s.story(
                format!(
                    "  - {}  {}",
                    sanitize_for_terminal(&item.title),
                    style(sanitize_for_terminal(&item.meta)).dim()
                ),
                &item.url,
                &item.image,
            );
        }
    }

    if !page.latest.is_empty() {
        s.heading(&page.section_title);
        for card in &page.latest {
            s.story(
                format!(
                    "  [{}] {}  {}",
                    style(sanitize_for_terminal(&card.category)).cyan(),
                    sanitize_for_terminal(&card.title),
                    style(format!(
                        "{} | {}",
                        sanitize_for_terminal(&card.byline),
                        card.time_ago
                    ))
                    .dim()
                ),
                &card.url,
                &card.image,
            );
        }
    }
}

fn navigation(s: &mut Screen) {
    s.heading("Sections");
    for c in CATEGORIES.iter() {
        s.line(format!("  {}", c.name), Action::Category(c.id));
    }
    s.line("  View all".into(), Action::ViewAll);
    s.line("  Search...".into(), Action::Search);
}

// "#" is the placeholder for stories without a link.
fn link(url: &str) -> Action {
    if url.is_empty() || url == "#" {
        Action::Nothing
    } else {
        Action::Open(url.to_string())
    }
}

/// Plain-text rendition for non-interactive output, with each story's
/// link and image on the lines below it.
pub fn plain_text(page: &Page, state: &ViewState) -> String {
    let s = screen(page, state);
    let mut out = String::new();
    for i in 0..s.nav_start {
        if s.actions[i] == Action::Retry {
            continue;
        }
        out.push_str(&console::strip_ansi_codes(&s.labels[i]));
        out.push('\n');
        if let Action::Open(url) = &s.actions[i] {
            out.push_str(&format!("      {}\n", url));
        }
        if let Some(image) = &s.images[i] {
            out.push_str(&format!("      image: {}\n", image));
        }
    }
    out
}
