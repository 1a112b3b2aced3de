use crate::converter::{Converter, Edit};
use crate::math::base::NumberBase;
use crate::config::Config;
use arboard::Clipboard;
use log::warn;

// contains state that is shared across frontends
pub struct State {
    pub converter: Converter,
    pub focus: NumberBase,
    pub command: Option<String>,
    pub config: Config,
    pub exiting: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(Config::load())
    }
}

impl State {
    pub fn with_config(config: Config) -> Self {
        Self {
            converter: Converter::default(),
            focus: config.start_base,
            command: None,
            config,
            exiting: false,
        }
    }
    pub fn display(&self, base: NumberBase) -> String {
        self.converter.text(base)
    }
    pub fn command_line(&self) -> Option<String> {
        self.command.as_ref().map(|c| format!(":{c}"))
    }
    pub fn enter_command_entry(&mut self, command: String) {
        self.command = Some(command);
    }
    pub fn enter_field_entry(&mut self) {
        self.command = None;
    }
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }
    /// Append typed text to the focused field, or to the command line.
    pub fn type_string(&mut self, text: &str) {
        let text = text.replace('\n', "");
        if let Some(command) = self.command.as_mut() {
            *command += text.as_str();
            return;
        }
        if let Some(rest) = text.strip_prefix(':') {
            self.enter_command_entry(rest.to_owned());
            return;
        }
        for char in text.chars() {
            let mut field = self.display(self.focus);
            field.push(char);
            // a rejected keystroke is simply not applied
            self.converter.set_from(self.focus, &field);
        }
    }
    pub fn delete_one(&mut self) -> Edit {
        if let Some(c) = self.command.as_mut() {
            if c.pop().is_none() {
                self.command = None;
            }
            return Edit::Unchanged;
        }
        let mut field = self.display(self.focus);
        field.pop();
        self.converter.set_from(self.focus, &field)
    }
    pub fn copy_focused(&self) {
        copy_to_clipboard(&self.display(self.focus));
    }
    pub fn execute_command(&mut self) {
        let command = self.command.clone().unwrap_or_default();
        match command.trim() {
            "q" | "quit" | "exit" => {self.exiting = true},
            "c" | "clear" => {self.converter.clear()},
            "y" | "copy" => {self.copy_focused()},
            "" => {},
            other => {
                match other.parse::<NumberBase>() {
                    Ok(base) => {self.focus = base},
                    Err(e) => {warn!("{e}")},
                }
            },
        }
        self.enter_field_entry();
    }
}

/// Fire and forget; the clipboard may be unavailable (headless, no display server).
pub fn copy_to_clipboard(text: &str) -> bool {
    let result = Clipboard::new().and_then(|mut cbrd| cbrd.set_text(text.to_owned()));
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("error while copying: {e}");
            false
        },
    }
}
