use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use crossterm::cursor;
use crossterm::queue;
use crossterm::style::{Print, Stylize};
use crate::math::base::NumberBase;
use crate::state::State;
use std::io::{self, Write, stdout};
use std::time::Duration;

const HELP: &str = "up/down/tab: field  ctrl+y: copy  :b :o :d :x :clear :q  esc: quit";

pub fn crossterm_main() -> io::Result<()> {
    let mut state = State::default();

    terminal::enable_raw_mode()?;
    let result = run(&mut state);
    // always hand the terminal back, even when drawing failed
    let restored = queue!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)
        .and_then(|_| stdout().flush())
        .and_then(|_| terminal::disable_raw_mode());
    result.and(restored)
}

fn run(state: &mut State) -> io::Result<()> {
    queue!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
    draw(state)?;

    while !state.exiting {
        if !event::poll(Duration::from_millis(1000))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            handle_key(state, key);
            draw(state)?;
        }
    }
    Ok(())
}

fn handle_key(state: &mut State, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {state.exiting = true},
        KeyCode::Char('y') if ctrl => {state.copy_focused()},
        KeyCode::Char(char) if !ctrl => 'char_case: {
            if char == ':' && state.command.is_none() {
                state.enter_command_entry("".to_owned());
                break 'char_case;
            }
            state.type_string(char.to_string().as_str())
        },
        KeyCode::Backspace => {
            state.delete_one();
        },
        KeyCode::Enter => {
            if state.command.is_some() {
                state.execute_command()
            }
        },
        KeyCode::Up | KeyCode::BackTab => {
            if state.command.is_none() {state.focus_prev()}
        },
        KeyCode::Down | KeyCode::Tab => {
            if state.command.is_none() {state.focus_next()}
        },
        KeyCode::Esc => {
            if state.command.is_some() {
                state.enter_field_entry()
            } else {
                state.exiting = true
            }
        },
        _ => {}
    }
}

fn draw(state: &State) -> io::Result<()> {
    let mut out = stdout();
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    for (row, base) in NumberBase::ALL.into_iter().enumerate() {
        let marker = if base == state.focus { ">" } else { " " };
        let line = format!("{marker} {:<12}{}", base.label(), state.display(base));
        queue!(out, cursor::MoveTo(0, row as u16))?;
        if base == state.focus {
            queue!(out, Print(line.bold()))?;
        } else {
            queue!(out, Print(line))?;
        }
    }
    let footer = state.command_line().unwrap_or_else(|| HELP.to_owned());
    queue!(out, cursor::MoveTo(0, NumberBase::ALL.len() as u16 + 1), Print(footer))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(state: &mut State, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn keys_drive_the_focused_field() {
        let mut s = State::with_config(Config::default());
        press(&mut s, KeyCode::Down);
        assert_eq!(s.focus, NumberBase::Hexadecimal);
        for c in "ff".chars() {
            press(&mut s, KeyCode::Char(c));
        }
        assert_eq!(s.display(NumberBase::Decimal), "255");
        press(&mut s, KeyCode::Backspace);
        assert_eq!(s.display(NumberBase::Decimal), "15");
    }

    #[test]
    fn other_ctrl_chords_do_not_type() {
        let mut s = State::with_config(Config::default());
        s.focus = NumberBase::Hexadecimal;
        handle_key(&mut s, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(s.converter.is_empty());
        press(&mut s, KeyCode::Char('a'));
        assert_eq!(s.display(NumberBase::Decimal), "10");
    }

    #[test]
    fn command_mode_keys() {
        let mut s = State::with_config(Config::default());
        for c in ":b".chars() {
            press(&mut s, KeyCode::Char(c));
        }
        press(&mut s, KeyCode::Enter);
        assert_eq!(s.focus, NumberBase::Binary);
        press(&mut s, KeyCode::Char(':'));
        press(&mut s, KeyCode::Esc);
        assert!(s.command.is_none());
        assert!(!s.exiting);
        press(&mut s, KeyCode::Esc);
        assert!(s.exiting);
    }
}
