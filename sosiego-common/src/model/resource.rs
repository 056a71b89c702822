use crate::model::{Document, Draft, Id};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct ResourceMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub id: Id<ResourceMarker>,
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct NewResource {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl Resource {
    /// Host of the link without a leading `www.`, if the link parses.
    #[must_use]
    pub fn domain(&self) -> Option<String> {
        let url = Url::parse(&self.url).ok()?;
        let host = url.host_str()?;
        Some(host.strip_prefix("www.").unwrap_or(host).to_owned())
    }

    /// The link, if it is safe to hand to a browser.
    #[must_use]
    pub fn web_link(&self) -> Option<&str> {
        is_web_link(&self.url).then_some(self.url.as_str())
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        domain_icon(self.domain().as_deref().unwrap_or_default())
    }
}

/// Whether `url` parses as an absolute `http` or `https` link.
#[must_use]
pub fn is_web_link(url: &str) -> bool {
    Url::parse(url.trim()).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[must_use]
pub fn domain_icon(domain: &str) -> &'static str {
    if domain.contains("youtube") {
        "🎬"
    } else if domain.contains("psychologytoday") {
        "🧠"
    } else if domain.contains("apa") {
        "📚"
    } else if domain.contains("nimh.nih.gov") {
        "🏥"
    } else if domain.contains("who.int") {
        "🌍"
    } else {
        "🔗"
    }
}

impl Draft for NewResource {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("url", self.url.as_str()),
            ("description", self.description.as_str()),
        ]
    }

    fn invalid_fields(&self) -> Vec<&'static str> {
        if self.url.trim().is_empty() || is_web_link(&self.url) {
            Vec::new()
        } else {
            vec!["url"]
        }
    }
}

impl Document for Resource {
    type Marker = ResourceMarker;
    type Draft = NewResource;

    const COLLECTION: &'static str = "resources";

    fn id(&self) -> Id<ResourceMarker> {
        self.id
    }

    fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }
}
