use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyError {
  #[error("hotkey is empty")]
  Empty,
  #[error("unknown hotkey modifier '{0}'")]
  UnknownModifier(String),
  #[error("hotkey '{0}' must end in exactly one key")]
  MissingKey(String)
}

/// Snapshot of a keyboard event, independent of the DOM type.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct KeyChord {
  pub key:   String,
  pub ctrl:  bool,
  pub meta:  bool,
  pub alt:   bool,
  pub shift: bool
}

/// A shortcut such as `mod+J`.
///
/// `mod` accepts either Ctrl or Meta (Cmd), so the same binding works on
/// every platform. Alt and Shift must match the binding exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
  key:   String,
  ctrl:  bool,
  meta:  bool,
  modk:  bool,
  alt:   bool,
  shift: bool
}

impl Hotkey {
  pub fn parse(
    raw: &str
  ) -> Result<Self, HotkeyError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(HotkeyError::Empty);
    }

    let mut parts: Vec<&str> = trimmed
      .split('+')
      .map(str::trim)
      .collect();
    let key = parts
      .pop()
      .filter(|key| !key.is_empty())
      .ok_or_else(|| {
        HotkeyError::MissingKey(
          trimmed.to_string()
        )
      })?;

    let mut hotkey = Self {
      key:   key.to_ascii_lowercase(),
      ctrl:  false,
      meta:  false,
      modk:  false,
      alt:   false,
      shift: false
    };

    for part in parts {
      match part
        .to_ascii_lowercase()
        .as_str()
      {
        | "mod" => hotkey.modk = true,
        | "ctrl" | "control" => {
          hotkey.ctrl = true
        }
        | "meta" | "cmd" => {
          hotkey.meta = true
        }
        | "alt" | "option" => {
          hotkey.alt = true
        }
        | "shift" => hotkey.shift = true,
        | other => {
          return Err(
            HotkeyError::UnknownModifier(
              other.to_string()
            )
          );
        }
      }
    }

    Ok(hotkey)
  }

  pub fn matches(
    &self,
    chord: &KeyChord
  ) -> bool {
    if !chord
      .key
      .eq_ignore_ascii_case(&self.key)
    {
      return false;
    }
    if self.modk {
      if !(chord.ctrl || chord.meta) {
        return false;
      }
    } else if chord.ctrl != self.ctrl
      || chord.meta != self.meta
    {
      return false;
    }
    if self.modk
      && ((self.ctrl && !chord.ctrl)
        || (self.meta && !chord.meta))
    {
      return false;
    }
    chord.alt == self.alt
      && chord.shift == self.shift
  }
}

/// Elements whose key presses belong to the user's typing, not to global
/// shortcuts.
pub fn is_text_entry_tag(
  tag_name: &str
) -> bool {
  ["INPUT", "TEXTAREA", "SELECT"]
    .iter()
    .any(|tag| {
      tag.eq_ignore_ascii_case(tag_name)
    })
}

impl fmt::Display for Hotkey {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    let key = self.key.to_ascii_uppercase();
    let mut parts = Vec::new();
    if self.modk {
      parts.push("mod");
    }
    if self.ctrl {
      parts.push("ctrl");
    }
    if self.meta {
      parts.push("meta");
    }
    if self.alt {
      parts.push("alt");
    }
    if self.shift {
      parts.push("shift");
    }
    parts.push(key.as_str());
    f.write_str(&parts.join("+"))
  }
}
