//! Convenience wrappers over raw vocabulary nodes.
//!
//! A wrapper owns its raw node and exposes each property through the view
//! matching the property's accessor family (see [`property`]). Every view
//! answers two questions per index: [`Presence`](crate::Presence) without
//! dispatch, and [`Resolution`](crate::Resolution) by actually producing the
//! value, routing embedded nodes through a caller-supplied
//! [`Resolver`](crate::Resolver).
//!
//! The wrappers never hide the raw node: [`IntransitiveActivity::raw`] and
//! friends give manual access for whatever the views report as raw.

pub mod intransitive_activity;
pub mod note;
pub mod property;

pub use intransitive_activity::IntransitiveActivity;
pub use note::Note;
pub use property::{
    DateTimeProperty, FloatProperty, IriProperty, ObjectProperty, PropertyMut, TextProperty,
};

use weftstreams_vocab::{props, Properties};

use crate::resolution::{Presence, Resolution};

/// Accessors shared by every member of the Object family.
///
/// Implementors supply the property bag; everything else is provided.
pub trait ObjectAccessors {
    fn properties(&self) -> &Properties;

    fn properties_mut(&mut self) -> &mut Properties;

    /// Write access to any property by name.
    fn property_mut<'a>(&'a mut self, name: &'a str) -> PropertyMut<'a> {
        PropertyMut::new(self.properties_mut(), name)
    }

    /// The node's own IRI (functional).
    fn id(&self) -> (Resolution, Option<&str>) {
        IriProperty::new(self.properties().values(props::ID)).get(0)
    }

    fn has_id(&self) -> Presence {
        IriProperty::new(self.properties().values(props::ID)).has(0)
    }

    fn set_id(&mut self, iri: impl Into<String>)
    where
        Self: Sized,
    {
        self.property_mut(props::ID).set_iri(iri);
    }

    // --- IRI-typed -----------------------------------------------------------

    fn attributed_to(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::ATTRIBUTED_TO))
    }

    fn audience(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::AUDIENCE))
    }

    fn in_reply_to(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::IN_REPLY_TO))
    }

    fn to(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::TO))
    }

    fn bto(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::BTO))
    }

    fn cc(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::CC))
    }

    fn bcc(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::BCC))
    }

    fn url(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::URL))
    }

    // --- Object-typed --------------------------------------------------------

    fn attachment(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::ATTACHMENT))
    }

    fn tag(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::TAG))
    }

    fn generator(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::GENERATOR))
    }

    fn location(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::LOCATION))
    }

    fn preview(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::PREVIEW))
    }

    fn context(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::CONTEXT))
    }

    fn icon(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::ICON))
    }

    fn image(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::IMAGE))
    }

    // --- Literals ------------------------------------------------------------

    fn name(&self) -> TextProperty<'_> {
        TextProperty::new(self.properties().values(props::NAME))
    }

    fn summary(&self) -> TextProperty<'_> {
        TextProperty::new(self.properties().values(props::SUMMARY))
    }

    fn content(&self) -> TextProperty<'_> {
        TextProperty::new(self.properties().values(props::CONTENT))
    }

    /// The MIME type of the content (functional).
    fn media_type(&self) -> (Resolution, Option<&str>) {
        TextProperty::new(self.properties().values(props::MEDIA_TYPE)).get(0)
    }

    fn has_media_type(&self) -> Presence {
        TextProperty::new(self.properties().values(props::MEDIA_TYPE)).has(0)
    }

    fn published(&self) -> DateTimeProperty<'_> {
        DateTimeProperty::new(self.properties().values(props::PUBLISHED))
    }

    fn updated(&self) -> DateTimeProperty<'_> {
        DateTimeProperty::new(self.properties().values(props::UPDATED))
    }

    fn start_time(&self) -> DateTimeProperty<'_> {
        DateTimeProperty::new(self.properties().values(props::START_TIME))
    }

    fn end_time(&self) -> DateTimeProperty<'_> {
        DateTimeProperty::new(self.properties().values(props::END_TIME))
    }

    fn altitude(&self) -> FloatProperty<'_> {
        FloatProperty::new(self.properties().values(props::ALTITUDE))
    }
}

/// Accessors of the Activity family, on top of [`ObjectAccessors`].
pub trait ActivityAccessors: ObjectAccessors {
    fn actor(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::ACTOR))
    }

    fn target(&self) -> IriProperty<'_> {
        IriProperty::new(self.properties().values(props::TARGET))
    }

    fn result(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::RESULT))
    }

    fn origin(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::ORIGIN))
    }

    fn instrument(&self) -> ObjectProperty<'_> {
        ObjectProperty::new(self.properties().values(props::INSTRUMENT))
    }

    fn actor_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::new(self.properties_mut(), props::ACTOR)
    }

    fn target_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::new(self.properties_mut(), props::TARGET)
    }

    fn result_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::new(self.properties_mut(), props::RESULT)
    }

    fn origin_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::new(self.properties_mut(), props::ORIGIN)
    }

    fn instrument_mut(&mut self) -> PropertyMut<'_> {
        PropertyMut::new(self.properties_mut(), props::INSTRUMENT)
    }
}
