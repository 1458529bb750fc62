//! Convenience wrapper for `Note`.

use weftstreams_vocab as vocab;
use weftstreams_vocab::Properties;

use super::ObjectAccessors;

/// A short written work, typically a single paragraph.
#[derive(Debug, Clone, Default)]
pub struct Note {
    raw: vocab::Note,
}

impl Note {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: vocab::Note) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &vocab::Note {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut vocab::Note {
        &mut self.raw
    }

    pub fn into_raw(self) -> vocab::Note {
        self.raw
    }
}

impl From<vocab::Note> for Note {
    fn from(raw: vocab::Note) -> Self {
        Self::from_raw(raw)
    }
}

impl ObjectAccessors for Note {
    fn properties(&self) -> &Properties {
        &self.raw.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.raw.properties
    }
}
