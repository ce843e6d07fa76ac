// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI-flavored fixture data in the domain of the motivating example:
//! clicks and keystrokes on named targets.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub target: String,
}

impl Click {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Display for Click {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Click[target={}]", self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub target: String,
    pub text: String,
}

impl KeyPress {
    #[must_use]
    pub fn new(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
        }
    }
}

impl Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPress[target={}, text={}]", self.target, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Click(Click),
    KeyPress(KeyPress),
}

impl Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Click(click) => click.fmt(f),
            Input::KeyPress(keypress) => keypress.fmt(f),
        }
    }
}

pub fn click(target: &str) -> Input {
    Input::Click(Click::new(target))
}

pub fn click_login() -> Input {
    click("#login")
}

pub fn keypress(target: &str, text: &str) -> Input {
    Input::KeyPress(KeyPress::new(target, text))
}

pub fn keypress_login(text: &str) -> Input {
    keypress("#login", text)
}
