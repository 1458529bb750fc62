//! The classification model shared by every polymorphic accessor.
//!
//! Two small enumerations answer, per property value, "can I hand you a
//! concrete value right now, and if not, why": [`Presence`] is the cheap
//! pre-check that needs no resolver, [`Resolution`] is the outcome of actually
//! trying. Both serialise as snake_case strings (e.g. `"raw_presence"`).

use serde::{Deserialize, Serialize};

/// Outcome of attempting to obtain a concrete value for a property that may
/// hold either a direct literal or a polymorphic embedded node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// No attempt has produced a usable value. Also reported when the
    /// property has no value at the requested position.
    #[default]
    Unresolved,
    /// A concrete value was obtained; for dispatched values, a registered
    /// callback handled it.
    Resolved,
    /// The value must be inspected manually: it is an opaque reference, a
    /// kind the convenience layer does not model, or nothing registered
    /// matched it.
    RawResolutionNeeded,
}

impl Resolution {
    pub fn is_resolved(self) -> bool {
        self == Resolution::Resolved
    }
}

/// Formats the resolution as its snake_case wire string.
impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Unresolved => write!(f, "unresolved"),
            Resolution::Resolved => write!(f, "resolved"),
            Resolution::RawResolutionNeeded => write!(f, "raw_resolution_needed"),
        }
    }
}

/// Parses a [`Resolution`] from its snake_case wire string.
impl std::str::FromStr for Resolution {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unresolved" => Ok(Resolution::Unresolved),
            "resolved" => Ok(Resolution::Resolved),
            "raw_resolution_needed" => Ok(Resolution::RawResolutionNeeded),
            _ => Err(format!(
                "unknown resolution {:?}; expected one of: \
                 unresolved, resolved, raw_resolution_needed",
                s
            )),
        }
    }
}

/// A side-effect-free check of whether a property holds a value at a given
/// position, and whether the typed accessor path understands it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// No value at the position.
    #[default]
    NoPresence,
    /// A value exists and the typed accessors can handle it.
    ConvenientPresence,
    /// A value exists but only raw handling applies.
    RawPresence,
}

impl Presence {
    pub fn is_present(self) -> bool {
        self != Presence::NoPresence
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Presence::NoPresence => write!(f, "no_presence"),
            Presence::ConvenientPresence => write!(f, "convenient_presence"),
            Presence::RawPresence => write!(f, "raw_presence"),
        }
    }
}

impl std::str::FromStr for Presence {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_presence" => Ok(Presence::NoPresence),
            "convenient_presence" => Ok(Presence::ConvenientPresence),
            "raw_presence" => Ok(Presence::RawPresence),
            _ => Err(format!(
                "unknown presence {:?}; expected one of: \
                 no_presence, convenient_presence, raw_presence",
                s
            )),
        }
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_empty_states() {
        assert_eq!(Resolution::default(), Resolution::Unresolved);
        assert_eq!(Presence::default(), Presence::NoPresence);
    }

    #[test]
    fn display_matches_serde() {
        for r in [
            Resolution::Unresolved,
            Resolution::Resolved,
            Resolution::RawResolutionNeeded,
        ] {
            let json = serde_json::to_string(&r).unwrap();
            assert_eq!(json, format!("\"{}\"", r));
            assert_eq!(r.to_string().parse::<Resolution>(), Ok(r));
        }
        for p in [
            Presence::NoPresence,
            Presence::ConvenientPresence,
            Presence::RawPresence,
        ] {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p));
            assert_eq!(p.to_string().parse::<Presence>(), Ok(p));
        }
    }

    #[test]
    fn unknown_strings_rejected() {
        assert!("Resolved".parse::<Resolution>().is_err());
        assert!("present".parse::<Presence>().is_err());
    }

    #[test]
    fn predicates() {
        assert!(Resolution::Resolved.is_resolved());
        assert!(!Resolution::RawResolutionNeeded.is_resolved());
        assert!(Presence::RawPresence.is_present());
        assert!(!Presence::NoPresence.is_present());
    }
}
