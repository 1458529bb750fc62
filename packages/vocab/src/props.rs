//! Well-known property names.
//!
//! Properties are stored by name in a [`Properties`](crate::Properties) bag;
//! these constants keep accessors and callers from drifting apart on spelling.

pub const ID: &str = "id";

// Activity
pub const ACTOR: &str = "actor";
pub const TARGET: &str = "target";
pub const RESULT: &str = "result";
pub const ORIGIN: &str = "origin";
pub const INSTRUMENT: &str = "instrument";

// Object
pub const ATTACHMENT: &str = "attachment";
pub const ATTRIBUTED_TO: &str = "attributedTo";
pub const AUDIENCE: &str = "audience";
pub const CONTENT: &str = "content";
pub const CONTEXT: &str = "context";
pub const NAME: &str = "name";
pub const END_TIME: &str = "endTime";
pub const GENERATOR: &str = "generator";
pub const ICON: &str = "icon";
pub const IMAGE: &str = "image";
pub const IN_REPLY_TO: &str = "inReplyTo";
pub const LOCATION: &str = "location";
pub const PREVIEW: &str = "preview";
pub const PUBLISHED: &str = "published";
pub const START_TIME: &str = "startTime";
pub const SUMMARY: &str = "summary";
pub const TAG: &str = "tag";
pub const UPDATED: &str = "updated";
pub const URL: &str = "url";
pub const TO: &str = "to";
pub const BTO: &str = "bto";
pub const CC: &str = "cc";
pub const BCC: &str = "bcc";
pub const MEDIA_TYPE: &str = "mediaType";
pub const ALTITUDE: &str = "altitude";

// Link
pub const HREF: &str = "href";
