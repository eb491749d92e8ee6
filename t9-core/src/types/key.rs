//! Key identities for the keypad
//!
//! Digit keys use ids 0-9. Helper keys have fixed ids above that range.

use std::fmt;

/// Monotonic event time in milliseconds, supplied by the caller
pub type Timestamp = u64;

/// Raw key identifier as delivered by the event source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyId(pub u8);

impl KeyId {
    pub const BACKSPACE: Self = Self(10);
    pub const SPACE: Self = Self(11);
    pub const CONFIRM: Self = Self(12);
    pub const CANCEL: Self = Self(13);
    pub const TOGGLE_ALPHA: Self = Self(14);
    pub const TOGGLE_NUMERIC: Self = Self(15);

    /// Id of a digit key, `None` above 9
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self(d))
    }

    pub fn is_digit(&self) -> bool {
        self.0 <= 9
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {}", self.0)
    }
}

/// Keys that edit, signal or switch modes instead of typing characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperKey {
    Backspace,
    Space,
    Confirm,
    Cancel,
    ToggleAlpha,
    ToggleNumeric,
}

impl HelperKey {
    pub const ALL: [HelperKey; 6] = [
        HelperKey::Backspace,
        HelperKey::Space,
        HelperKey::Confirm,
        HelperKey::Cancel,
        HelperKey::ToggleAlpha,
        HelperKey::ToggleNumeric,
    ];

    pub fn id(self) -> KeyId {
        match self {
            HelperKey::Backspace => KeyId::BACKSPACE,
            HelperKey::Space => KeyId::SPACE,
            HelperKey::Confirm => KeyId::CONFIRM,
            HelperKey::Cancel => KeyId::CANCEL,
            HelperKey::ToggleAlpha => KeyId::TOGGLE_ALPHA,
            HelperKey::ToggleNumeric => KeyId::TOGGLE_NUMERIC,
        }
    }

    pub fn from_id(id: KeyId) -> Option<Self> {
        Self::ALL.into_iter().find(|helper| helper.id() == id)
    }

    /// Name used for the key in event scripts
    pub fn name(self) -> &'static str {
        match self {
            HelperKey::Backspace => "BACKSPACE",
            HelperKey::Space => "SPACE",
            HelperKey::Confirm => "OK",
            HelperKey::Cancel => "CLOSE",
            HelperKey::ToggleAlpha => "ABC",
            HelperKey::ToggleNumeric => "NUM",
        }
    }

    /// Parse a helper key name as written by [`HelperKey::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|helper| helper.name() == name)
    }
}

/// Role of a key id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(KeyId),
    Helper(HelperKey),
}

impl Key {
    /// Classify a raw id. Ids that are neither digits nor helpers yield `None`.
    pub fn classify(id: KeyId) -> Option<Key> {
        if id.is_digit() {
            Some(Key::Digit(id))
        } else {
            HelperKey::from_id(id).map(Key::Helper)
        }
    }
}
