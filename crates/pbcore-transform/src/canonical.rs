//! Canonical values derived from several type-qualified candidates.
//!
//! PBCore records routinely carry several titles, descriptions, and dates
//! for one asset, and the asset's media type is only recorded on its
//! copies. The rules here collapse those candidates into the single display
//! value each output column needs.

use pbcore_model::vocabulary::{PROXY_GENERATION, media_type};

/// Type-qualified titles of one asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleParts {
    pub series: String,
    pub program: String,
    pub episode: String,
    pub episode_number: String,
    pub segment: String,
    pub raw_footage: String,
    pub promo: String,
    pub clip: String,
    /// Title without a `titleType`.
    pub untyped: String,
}

impl TitleParts {
    /// `"<series>: "` + `"No. <n>: "` + episode, program, segment,
    /// raw footage, promo and clip concatenated, then the untyped title.
    pub fn consolidate(&self) -> String {
        let mut title = String::new();
        if !self.series.is_empty() {
            title.push_str(&self.series);
            title.push_str(": ");
        }
        if !self.episode_number.is_empty() {
            title.push_str("No. ");
            title.push_str(&self.episode_number);
            title.push_str(": ");
        }
        for part in [
            &self.episode,
            &self.program,
            &self.segment,
            &self.raw_footage,
            &self.promo,
            &self.clip,
        ] {
            title.push_str(part);
        }
        append_untyped(title, &self.untyped)
    }
}

/// Type-qualified descriptions of one asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionParts {
    pub series: String,
    pub program: String,
    pub episode: String,
    pub segment: String,
    pub raw_footage: String,
    pub promo: String,
    pub clip: String,
    /// Description without a `descriptionType`.
    pub untyped: String,
}

impl DescriptionParts {
    /// Same shape as [`TitleParts::consolidate`] without the episode number.
    pub fn consolidate(&self) -> String {
        let mut description = String::new();
        if !self.series.is_empty() {
            description.push_str(&self.series);
            description.push_str(": ");
        }
        for part in [
            &self.episode,
            &self.program,
            &self.segment,
            &self.raw_footage,
            &self.promo,
            &self.clip,
        ] {
            description.push_str(part);
        }
        append_untyped(description, &self.untyped)
    }
}

fn append_untyped(mut accumulated: String, untyped: &str) -> String {
    if untyped.is_empty() {
        return accumulated;
    }
    if !accumulated.is_empty() {
        accumulated.push(' ');
    }
    accumulated.push_str(untyped);
    accumulated
}

/// Dates of one asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub broadcast: String,
    pub created: String,
    pub copyright: String,
    /// Date without a `dateType`.
    pub untyped: String,
}

impl DateParts {
    /// First non-empty of untyped, copyright, created, broadcast.
    pub fn canonical(&self) -> String {
        [&self.untyped, &self.copyright, &self.created, &self.broadcast]
            .into_iter()
            .find(|date| !date.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}

/// Digital or physical, by marker sub-element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    /// Has `instantiationDigital` (checked first).
    Digital,
    /// Has `instantiationPhysical` and no digital marker.
    Physical,
    /// Neither marker.
    Unclassified,
}

/// Media types of an asset's copies, split by kind, in document order.
///
/// Only copies that carry a media type element contribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTypeCandidates {
    pub digital: Vec<String>,
    pub physical: Vec<String>,
}

impl MediaTypeCandidates {
    pub fn push(&mut self, kind: CopyKind, value: &str) {
        match kind {
            CopyKind::Digital => self.digital.push(value.to_string()),
            CopyKind::Physical => self.physical.push(value.to_string()),
            CopyKind::Unclassified => {}
        }
    }

    /// Moving image over sound, digital over physical; otherwise the first
    /// digital value, then the first physical value, then empty.
    pub fn best(&self) -> String {
        let preferences = [
            (&self.digital, media_type::MOVING_IMAGE),
            (&self.digital, media_type::SOUND),
            (&self.physical, media_type::MOVING_IMAGE),
            (&self.physical, media_type::SOUND),
        ];
        for (values, wanted) in preferences {
            if values.iter().any(|value| value == wanted) {
                return wanted.to_string();
            }
        }
        self.digital
            .first()
            .or_else(|| self.physical.first())
            .cloned()
            .unwrap_or_default()
    }
}

/// Duration of the first digital copy whose generation is exactly `Proxy`.
///
/// Items are `(kind, generation, duration)` in document order. Stops at the
/// first proxy even when its duration is empty.
pub fn proxy_duration<'a, I>(copies: I) -> String
where
    I: IntoIterator<Item = (CopyKind, &'a str, &'a str)>,
{
    copies
        .into_iter()
        .find(|(kind, generation, _)| *kind == CopyKind::Digital && *generation == PROXY_GENERATION)
        .map(|(_, _, duration)| duration.to_string())
        .unwrap_or_default()
}

/// First non-empty value.
///
/// Used for the archival-inventory and Sony Ci identifiers, where empty
/// identifier elements are common and must not shadow a later real one.
pub fn first_non_empty(values: &[String]) -> String {
    values
        .iter()
        .find(|value| !value.is_empty())
        .cloned()
        .unwrap_or_default()
}

/// Creator name of the last `(role, name)` pair whose role matches exactly.
///
/// Later matches overwrite earlier ones, unlike [`first_non_empty`].
pub fn last_with_role<'a, I>(creators: I, role: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut found = String::new();
    for (creator_role, name) in creators {
        if creator_role == role {
            found = name.to_string();
        }
    }
    found
}
