//! The document `weft report` classifies.
//!
//! Sally arrives at work: an intransitive activity whose `result` is a note
//! with an attached image and a mention, whose `instrument` is a node of the
//! `Drone` extension type that no built-in universe knows about, and whose
//! actor and second result are bare IRIs.

use chrono::DateTime;
use weftstreams::streams::IntransitiveActivity;
use weftstreams::{ActivityAccessors, ObjectAccessors};
use weftstreams_vocab::{
    props, DocumentNode, Image, Mention, Note, Place, Properties, Value, VocabularyType,
};

/// An extension node type, only resolvable once declared.
#[derive(Debug, Default)]
pub struct Drone {
    pub properties: Properties,
}

impl DocumentNode for Drone {
    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn properties(&self) -> Option<&Properties> {
        Some(&self.properties)
    }
}

impl VocabularyType for Drone {
    const TYPE_NAME: &'static str = "Drone";
}

pub fn arrival() -> IntransitiveActivity {
    let note = Note::new()
        .with(props::CONTENT, Value::text("Made it in before the rain"))
        .with(
            props::ATTACHMENT,
            Value::object(
                Image::new().with(props::URL, Value::iri("https://example.com/img/umbrella.png")),
            ),
        )
        .with(
            props::TAG,
            Value::link(Mention::new().with(props::HREF, Value::iri("https://example.com/users/sam"))),
        );

    let mut a = IntransitiveActivity::new();
    a.set_id("https://example.com/activities/arrival-1");
    a.actor_mut().append_iri("https://example.com/users/sally");
    a.property_mut(props::LOCATION)
        .append_object(Place::new().with(props::NAME, Value::text("Work")));
    a.origin_mut()
        .append_object(Place::new().with(props::NAME, Value::text("Home")));
    a.result_mut()
        .append_object(note)
        .append_iri("https://example.com/notes/2");
    a.instrument_mut().append_object(Drone {
        properties: Properties::new().with(props::ALTITUDE, Value::Float(120.0)),
    });
    if let Some(published) = DateTime::from_timestamp(1_771_416_000, 0) {
        a.property_mut(props::PUBLISHED)
            .set_date_time(published.fixed_offset());
    }
    a
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use weftstreams::Presence;

    #[test]
    fn sample_shape() {
        let a = arrival();
        assert_eq!(a.actor().has(0), Presence::ConvenientPresence);
        assert_eq!(a.result().len(), 2);
        assert_eq!(a.result().has(1), Presence::RawPresence);
        assert_eq!(
            a.instrument().node(0).map(|n| n.type_name()),
            Some(Drone::TYPE_NAME)
        );
        assert_eq!(a.published().has(), Presence::ConvenientPresence);
    }
}
