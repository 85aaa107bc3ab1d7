mod cache;
mod controller;
mod error;
mod fallback;
mod fetch;
mod model;
mod render;
mod view;

use crate::config::RuntimeConfig;
use crate::open_url::open_url;
use crate::ui::{MenuChoice, prompt_index, prompt_text, show_status};
use anyhow::Result;
use tracing::warn;

use controller::Controller;
use fetch::Fetcher;
pub use model::{Query, category_id_for};

/// Loads the first page and prints it without any interaction.
pub async fn print_once(cfg: &RuntimeConfig, start: Query) -> Result<()> {
    let mut ctl = Controller::new(cfg, Fetcher::new(cfg)?);
    load(&mut ctl, start).await;
    if let Some(h) = cfg.header.as_deref() {
        println!("{}", h);
    }
    print!("{}", render::plain_text(ctl.page(), ctl.state()));
    Ok(())
}

pub async fn run(cfg: &RuntimeConfig, start: Query) -> Result<()> {
    let mut ctl = Controller::new(cfg, Fetcher::new(cfg)?);
    show_status(cfg.header.as_deref(), "Loading latest news...");
    load(&mut ctl, start).await;

    drive(cfg, &mut ctl, |screen| {
        prompt_index(
            "News (q = quit). Select a story to open it, or a section to browse.",
            &screen.labels,
            None,
            cfg.header.as_deref(),
            Some(&screen.header_indices),
        )
    })
    .await
}

/// Page loop. Terminal errors from `choose` end it; a selection that names
/// no line just redraws.
async fn drive<F>(cfg: &RuntimeConfig, ctl: &mut Controller, mut choose: F) -> Result<()>
where
    F: FnMut(&render::Screen) -> Result<MenuChoice>,
{
    loop {
        let screen = render::screen(ctl.page(), ctl.state());
        let i = match choose(&screen)? {
            MenuChoice::Index(i) => i,
            MenuChoice::Back | MenuChoice::Quit => break,
            MenuChoice::Invalid => continue,
        };

        let Some(action) = screen.actions.get(i).cloned() else { continue };
        match action {
            render::Action::Nothing => {}
            render::Action::Open(url) => {
                if let Err(e) = open_url(&url, cfg.open_command.as_deref()) {
                    warn!(error = %e, "could not open article");
                }
            }
            render::Action::Category(id) => {
                show_status(cfg.header.as_deref(), "Loading latest news...");
                ctl.load_category(id).await;
            }
            render::Action::ViewAll => {
                show_status(cfg.header.as_deref(), "Loading latest news...");
                ctl.load_category("general").await;
            }
            render::Action::Search => {
                let term = prompt_text("Search news")?;
                if !term.trim().is_empty() {
                    show_status(cfg.header.as_deref(), "Loading latest news...");
                }
                ctl.search(&term).await;
            }
            render::Action::Retry => {
                show_status(cfg.header.as_deref(), "Loading latest news...");
                ctl.retry().await;
            }
        }
    }
    Ok(())
}

async fn load(ctl: &mut Controller, start: Query) {
    match start {
        Query::Category(id) => ctl.load_category(&id).await,
        Query::Search(term) => ctl.search(&term).await,
    };
}
