use std::string::String;
use term::terminfo;

/// Fallback when the terminfo database is missing or lacks `clear`.
pub const ANSI_CLEAR: &str = "\u{1b}[H\u{1b}[2J";

#[derive(Debug)]
pub struct TermInfo {
    pub info: terminfo::TermInfo,
}

impl TermInfo {
    pub fn from_env() -> Self {
        TermInfo { info: terminfo::TermInfo::from_env().unwrap_or_else(|_| {
            terminfo::TermInfo { names: Default::default(),
                                 bools: Default::default(),
                                 numbers: Default::default(),
                                 strings: Default::default(), }
        }), }
    }

    pub fn get_string(&self, command: &str) -> Option<String> {
        self.info
            .strings
            .get(command)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    pub fn clear_command(&self) -> String {
        match self.get_string("clear") {
            Some(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("terminfo has no clear capability, using ANSI sequence");
                String::from(ANSI_CLEAR)
            },
        }
    }
}
