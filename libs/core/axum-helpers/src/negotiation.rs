//! `Accept`-header content negotiation between JSON and XML.
//!
//! Handlers declare what they produce with a [`Producible`] marker, extract
//! the selected [`MediaType`] with [`Accept`], and return a [`Negotiated`]
//! body that serializes accordingly.
//!
//! ```ignore
//! use axum_helpers::negotiation::{Accept, JsonOrXml, Negotiated};
//!
//! async fn show(Accept(format, _): Accept<JsonOrXml>) -> Negotiated<Item> {
//!     Negotiated::new(format, item)
//! }
//! ```

use crate::errors::AppError;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// Media types the API can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Xml,
}

impl MediaType {
    pub fn essence(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Xml => "application/xml",
        }
    }

    fn type_and_subtype(&self) -> (&'static str, &'static str) {
        match self {
            MediaType::Json => ("application", "json"),
            MediaType::Xml => ("application", "xml"),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.essence())
    }
}

/// Declares the media types an endpoint produces, in order of preference.
pub trait Producible {
    const PRODUCES: &'static [MediaType];
}

/// Endpoint producing JSON only.
pub struct JsonOnly;

impl Producible for JsonOnly {
    const PRODUCES: &'static [MediaType] = &[MediaType::Json];
}

/// Endpoint producing JSON (preferred) or XML.
pub struct JsonOrXml;

impl Producible for JsonOrXml {
    const PRODUCES: &'static [MediaType] = &[MediaType::Json, MediaType::Xml];
}

/// One entry of an `Accept` header.
#[derive(Debug, Clone, PartialEq)]
struct MediaRange<'a> {
    kind: &'a str,
    subtype: &'a str,
    quality: f32,
}

impl<'a> MediaRange<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split(';').map(str::trim);
        let (kind, subtype) = parts.next()?.split_once('/')?;
        let (kind, subtype) = (kind.trim(), subtype.trim());
        if kind.is_empty() || subtype.is_empty() || (kind == "*" && subtype != "*") {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            if let Some((name, value)) = param.split_once('=') {
                if name.trim().eq_ignore_ascii_case("q") {
                    quality = value.trim().parse::<f32>().ok()?.clamp(0.0, 1.0);
                }
            }
        }

        Some(Self {
            kind,
            subtype,
            quality,
        })
    }

    fn matches(&self, media_type: MediaType) -> bool {
        let (kind, subtype) = media_type.type_and_subtype();
        (self.kind == "*" || self.kind.eq_ignore_ascii_case(kind))
            && (self.subtype == "*" || self.subtype.eq_ignore_ascii_case(subtype))
    }

    /// `type/subtype` > `type/*` > `*/*`
    fn specificity(&self) -> u8 {
        match (self.kind, self.subtype) {
            ("*", _) => 0,
            (_, "*") => 1,
            _ => 2,
        }
    }
}

/// Selects the representation to send for an `Accept` header value.
///
/// Ranges are tried by descending quality, then by descending specificity
/// (`application/xml` before `application/*` before `*/*`), then in header
/// order; the first range compatible with a producible type wins. A missing or blank header,
/// or one with no parseable range, selects the first producible type.
/// Returns `None` when valid ranges exist but none is compatible.
pub fn negotiate(accept: Option<&str>, produces: &[MediaType]) -> Option<MediaType> {
    let default = produces.first().copied();

    let Some(accept) = accept.map(str::trim).filter(|value| !value.is_empty()) else {
        return default;
    };

    let mut ranges: Vec<MediaRange<'_>> =
        accept.split(',').filter_map(MediaRange::parse).collect();
    if ranges.is_empty() {
        return default;
    }

    // stable sort keeps header order among equal keys
    ranges.sort_by(|a, b| {
        b.quality
            .total_cmp(&a.quality)
            .then_with(|| b.specificity().cmp(&a.specificity()))
    });

    ranges
        .iter()
        .filter(|range| range.quality > 0.0)
        .find_map(|range| produces.iter().copied().find(|media| range.matches(*media)))
}

/// Extractor resolving the response [`MediaType`] for an endpoint.
///
/// Rejects with `406 Not Acceptable` when the client accepts none of
/// `P::PRODUCES`.
pub struct Accept<P: Producible>(pub MediaType, pub PhantomData<P>);

impl<P: Producible> Accept<P> {
    pub fn media_type(&self) -> MediaType {
        self.0
    }

    fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let accept = headers
            .get_all(header::ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(",");

        negotiate(Some(&accept), P::PRODUCES)
            .map(|media| Accept(media, PhantomData))
            .ok_or_else(|| {
                let produced = P::PRODUCES
                    .iter()
                    .map(MediaType::essence)
                    .collect::<Vec<_>>()
                    .join(", ");
                AppError::NotAcceptable(format!("Acceptable representations: {}", produced))
            })
    }
}

impl<P, S> FromRequestParts<S> for Accept<P>
where
    P: Producible,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).map_err(IntoResponse::into_response)
    }
}

/// Response body serialized in the negotiated media type.
pub struct Negotiated<T> {
    media_type: MediaType,
    body: T,
}

impl<T: Serialize> Negotiated<T> {
    pub fn new(media_type: MediaType, body: T) -> Self {
        Self { media_type, body }
    }

    fn to_xml(&self) -> Result<String, AppError> {
        quick_xml::se::to_string(&self.body).map_err(|e| AppError::XmlSerialization(e.to_string()))
    }
}

impl<T: Serialize> IntoResponse for Negotiated<T> {
    fn into_response(self) -> Response {
        match self.media_type {
            MediaType::Json => Json(self.body).into_response(),
            MediaType::Xml => match self.to_xml() {
                Ok(xml) => (
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static(MediaType::Xml.essence()),
                    )],
                    xml,
                )
                    .into_response(),
                Err(e) => e.into_response(),
            },
        }
    }
}
