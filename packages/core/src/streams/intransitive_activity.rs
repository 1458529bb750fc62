//! Convenience wrapper for `IntransitiveActivity`.

use weftstreams_vocab as vocab;
use weftstreams_vocab::Properties;

use super::{ActivityAccessors, ObjectAccessors};

/// An activity that has no `object`: the actor arrives, travels, or asks.
///
/// Wraps the raw [`vocab::IntransitiveActivity`]. Accessing it through
/// [`raw_mut`](Self::raw_mut) allows direct manipulation, without the
/// classification guarantees of the accessors.
#[derive(Debug, Clone, Default)]
pub struct IntransitiveActivity {
    raw: vocab::IntransitiveActivity,
}

impl IntransitiveActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: vocab::IntransitiveActivity) -> Self {
        Self { raw }
    }

    /// The raw node, for manual handling.
    pub fn raw(&self) -> &vocab::IntransitiveActivity {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut vocab::IntransitiveActivity {
        &mut self.raw
    }

    pub fn into_raw(self) -> vocab::IntransitiveActivity {
        self.raw
    }
}

impl From<vocab::IntransitiveActivity> for IntransitiveActivity {
    fn from(raw: vocab::IntransitiveActivity) -> Self {
        Self::from_raw(raw)
    }
}

impl ObjectAccessors for IntransitiveActivity {
    fn properties(&self) -> &Properties {
        &self.raw.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.raw.properties
    }
}

impl ActivityAccessors for IntransitiveActivity {}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use chrono::DateTime;
    use weftstreams_vocab::{props, Image, Link, Note, Person, Place, Value};

    use crate::{Context, Handler, Presence, ResolveError, Resolution, Resolver};

    fn arrival() -> IntransitiveActivity {
        let mut a = IntransitiveActivity::new();
        a.set_id("https://example.com/activities/1");
        a.actor_mut()
            .append_iri("https://example.com/users/sally")
            .append_object(Person::new());
        a.target_mut().append_link(Link::new());
        a.result_mut()
            .append_object(Note::new())
            .append_link(Link::new())
            .append_iri("https://example.com/notes/2");
        a.origin_mut().append_object(Place::new());
        a.property_mut(props::NAME).append_text("Sally arrived");
        a.property_mut(props::PUBLISHED)
            .set_date_time(DateTime::parse_from_rfc3339("2026-02-18T12:00:00Z").unwrap());
        a
    }

    #[test]
    fn iri_accessors() {
        let a = arrival();
        assert_eq!(a.actor().len(), 2);
        assert_eq!(a.actor().has(0), Presence::ConvenientPresence);
        assert_eq!(
            a.actor().get(0),
            (Resolution::Resolved, Some("https://example.com/users/sally"))
        );
        assert_eq!(a.actor().has(1), Presence::RawPresence);
        assert_eq!(a.actor().get(1), (Resolution::RawResolutionNeeded, None));
        assert_eq!(a.target().has(0), Presence::RawPresence);
        assert_eq!(a.id().1, Some("https://example.com/activities/1"));
        assert_eq!(a.has_id(), Presence::ConvenientPresence);
    }

    #[test]
    fn resolve_result_routes_through_resolver() {
        let a = arrival();
        let notes = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&notes);
        let r = Resolver::new([Handler::on(move |_: &Note| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })])
        .unwrap();
        let ctx = Context::background();

        assert_eq!(a.result().len(), 3);
        assert_eq!(a.result().resolve(&ctx, &r, 0).unwrap(), Resolution::Resolved);
        assert_eq!(
            a.result().resolve(&ctx, &r, 1).unwrap(),
            Resolution::RawResolutionNeeded
        );
        assert_eq!(
            a.result().resolve(&ctx, &r, 2).unwrap(),
            Resolution::RawResolutionNeeded
        );
        assert_eq!(a.result().resolve(&ctx, &r, 3).unwrap(), Resolution::Unresolved);
        assert_eq!(notes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn presence_and_resolution_are_coherent() {
        let a = arrival();
        let r = Resolver::new([
            Handler::on(|_: &Note| Ok(())),
            Handler::on(|_: &Link| Ok(())),
            Handler::on(|_: &Place| Ok(())),
            Handler::on(|_: &Image| Ok(())),
        ])
        .unwrap();
        let ctx = Context::background();

        for prop in [a.result(), a.origin(), a.instrument(), a.tag(), a.location()] {
            for i in 0..=prop.len() {
                let resolution = prop.resolve(&ctx, &r, i).unwrap();
                match prop.has(i) {
                    Presence::NoPresence => assert_eq!(resolution, Resolution::Unresolved),
                    Presence::RawPresence => assert_ne!(resolution, Resolution::Resolved),
                    Presence::ConvenientPresence => assert_eq!(resolution, Resolution::Resolved),
                }
            }
        }

        for prop in [a.actor(), a.target(), a.to(), a.url()] {
            for i in 0..=prop.len() {
                let (resolution, value) = prop.get(i);
                match prop.has(i) {
                    Presence::NoPresence => {
                        assert_eq!(resolution, Resolution::Unresolved);
                        assert!(value.is_none());
                    }
                    Presence::RawPresence => assert_ne!(resolution, Resolution::Resolved),
                    Presence::ConvenientPresence => assert!(value.is_some()),
                }
            }
        }
    }

    #[test]
    fn callback_failure_surfaces_from_accessor() {
        let a = arrival();
        let r = Resolver::new([Handler::on(|_: &Place| Err("no such place".into()))]).unwrap();
        let err = a
            .origin()
            .resolve(&Context::background(), &r, 0)
            .unwrap_err();
        assert!(matches!(err, ResolveError::Callback(_)));
        assert_eq!(err.to_string(), "no such place");
    }

    #[test]
    fn literals() {
        let a = arrival();
        assert_eq!(a.name().get(0), (Resolution::Resolved, Some("Sally arrived")));
        assert_eq!(a.summary().has(0), Presence::NoPresence);
        let (r, t) = a.published().get();
        assert_eq!(r, Resolution::Resolved);
        assert_eq!(t.map(|t| t.to_rfc3339()), Some("2026-02-18T12:00:00+00:00".into()));
        assert_eq!(a.updated().get(), (Resolution::Unresolved, None));
    }

    #[test]
    fn raw_access_round_trips() {
        let mut a = arrival();
        a.raw_mut()
            .properties
            .append(props::INSTRUMENT, Value::Unknown(serde_json::json!(42)));
        assert_eq!(a.instrument().has(0), Presence::RawPresence);
        let raw = a.into_raw();
        assert_eq!(raw.properties.len(props::ACTOR), 2);
        let back = IntransitiveActivity::from(raw);
        assert_eq!(back.instrument().len(), 1);
    }

    #[test]
    fn remove_and_prepend() {
        let mut a = arrival();
        a.actor_mut().prepend_iri("https://example.com/users/first");
        assert_eq!(a.actor().get(0).1, Some("https://example.com/users/first"));
        assert!(a.actor_mut().remove(0).is_some());
        assert_eq!(a.actor().get(0).1, Some("https://example.com/users/sally"));
        a.actor_mut().clear();
        assert_eq!(a.actor().has(0), Presence::NoPresence);
    }
}
