use anyhow::Result;
use console::{Key, Term};
use dialoguer::Input;

#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Back,
    Quit,
    Index(usize),
    // Typed input that names no line; the caller redraws.
    Invalid,
}

pub fn show_status(header: Option<&str>, message: &str) {
    let term = Term::stdout();
    let _ = term.clear_screen();
    if let Some(h) = header {
        println!("{}", h);
    }
    println!("{}", message);
}

pub fn prompt_text(prompt: &str) -> Result<String> {
    let s: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(s)
}

pub fn prompt_index(
    prompt: &str,
    labels: &[String],
    default: Option<usize>,
    header: Option<&str>,
    header_indices: Option<&[usize]>,
) -> Result<MenuChoice> {
    let term = Term::stdout();
    let _ = term.clear_screen();
    if let Some(h) = header {
        println!("{}", h);
    }
    println!("{}", prompt);
    for (i, it) in labels.iter().enumerate() {
        println!("{}: {}", i + 1, it);
    }
    println!("Type a number + Enter, or use arrow keys + Enter. 'b' = back, 'q' = quit. Tab = next section");

    // First key decides input mode: arrow-navigation vs text input
    let key = term.read_key()?;
    match key {
        Key::ArrowUp | Key::ArrowDown | Key::Home | Key::End | Key::PageUp | Key::PageDown => {
            arrow_select(prompt, labels, default, header, header_indices)
        }
        Key::Char('q') | Key::Char('Q') => Ok(MenuChoice::Quit),
        Key::Char('b') | Key::Char('B') => Ok(MenuChoice::Back),
        Key::Enter => Ok(default.map_or(MenuChoice::Invalid, MenuChoice::Index)),
        Key::Char(c) => {
            let mut builder = Input::new();
            builder = builder.with_prompt("Selection").allow_empty(true);
            if !c.is_control() {
                builder = builder.with_initial_text(c.to_string());
            }
            let s: String = builder.interact_text()?;
            Ok(parse_selection(&s, labels.len(), default))
        }
        _ => {
            let s: String = Input::new()
                .with_prompt("Selection")
                .allow_empty(true)
                .interact_text()?;
            Ok(parse_selection(&s, labels.len(), default))
        }
    }
}

fn parse_selection(input: &str, count: usize, default: Option<usize>) -> MenuChoice {
    let s = input.trim();
    if s.is_empty() {
        return default.map_or(MenuChoice::Invalid, MenuChoice::Index);
    }
    if s.eq_ignore_ascii_case("q") {
        return MenuChoice::Quit;
    }
    if s.eq_ignore_ascii_case("b") {
        return MenuChoice::Back;
    }
    match s.parse::<usize>() {
        Ok(idx) if idx >= 1 && idx <= count => MenuChoice::Index(idx - 1),
        _ => MenuChoice::Invalid,
    }
}

fn arrow_select(
    prompt: &str,
    items: &[String],
    default: Option<usize>,
    header: Option<&str>,
    header_indices: Option<&[usize]>,
) -> Result<MenuChoice> {
    let term = Term::stdout();
    let mut sel = default.unwrap_or(0).min(items.len().saturating_sub(1));
    let mut top: usize = 0;
    loop {
        term.clear_screen()?;
        if let Some(h) = header {
            println!("{}", h);
        }
        println!("{}", prompt);

        let (rows_u16, _cols_u16) = term.size();
        let rows: usize = rows_u16 as usize;
        let reserved: usize = 2 + if header.is_some() { 1 } else { 0 }; // header + prompt + help
        let max_visible = rows.saturating_sub(reserved).max(3).min(items.len());

        // keep selection in viewport
        if sel < top {
            top = sel;
        }
        if sel >= top + max_visible {
            top = sel + 1 - max_visible;
        }

        let end = (top + max_visible).min(items.len());
        for (i, item) in items.iter().enumerate().take(end).skip(top) {
            let marker = if i == sel { ">" } else { " " };
            println!("{} {}: {}", marker, i + 1, item);
        }
        println!("Use arrows + Enter. 'b' = back, 'q' = quit. Tab = next section");

        match term.read_key()? {
            Key::ArrowUp => sel = sel.saturating_sub(1),
            Key::ArrowDown => {
                if sel + 1 < items.len() {
                    sel += 1;
                }
            }
            Key::Home => sel = 0,
            Key::End => sel = items.len().saturating_sub(1),
            Key::PageUp => {
                let step: usize = max_visible.saturating_sub(1).max(1);
                sel = sel.saturating_sub(step);
            }
            Key::PageDown => {
                let step: usize = max_visible.saturating_sub(1).max(1);
                sel = (sel + step).min(items.len().saturating_sub(1));
            }
            Key::Tab => {
                if let Some(hidx) = header_indices {
                    sel = next_section(hidx, sel).min(items.len().saturating_sub(1));
                }
            }
            Key::Enter => return Ok(MenuChoice::Index(sel)),
            Key::Char('q') | Key::Char('Q') => return Ok(MenuChoice::Quit),
            Key::Char('b') | Key::Char('B') | Key::Escape => return Ok(MenuChoice::Back),
            _ => {}
        }
    }
}

// First header after `sel`, wrapping to the first one.
fn next_section(headers: &[usize], sel: usize) -> usize {
    headers
        .iter()
        .copied()
        .find(|&h| h > sel)
        .or_else(|| headers.first().copied())
        .unwrap_or(sel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_one_based() {
        assert_eq!(parse_selection("3", 5, None), MenuChoice::Index(2));
        assert_eq!(parse_selection(" 1 ", 5, None), MenuChoice::Index(0));
    }

    #[test]
    fn letters_navigate() {
        assert_eq!(parse_selection("Q", 5, None), MenuChoice::Quit);
        assert_eq!(parse_selection("b", 5, None), MenuChoice::Back);
    }

    #[test]
    fn empty_uses_default() {
        assert_eq!(parse_selection("", 5, Some(4)), MenuChoice::Index(4));
        assert_eq!(parse_selection("", 5, None), MenuChoice::Invalid);
    }

    #[test]
    fn rejects_out_of_range_and_junk() {
        assert_eq!(parse_selection("0", 5, None), MenuChoice::Invalid);
        assert_eq!(parse_selection("6", 5, None), MenuChoice::Invalid);
        assert_eq!(parse_selection("two", 5, None), MenuChoice::Invalid);
    }

    #[test]
    fn tab_jumps_to_next_section() {
        let headers = [0, 4, 9];
        assert_eq!(next_section(&headers, 0), 4);
        assert_eq!(next_section(&headers, 5), 9);
        assert_eq!(next_section(&headers, 9), 0);
        assert_eq!(next_section(&[], 3), 3);
    }
}
