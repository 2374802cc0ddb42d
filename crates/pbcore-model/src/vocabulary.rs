//! PBCore element names and attribute values the extractor relies on.
//!
//! Only the subset of the PBCore 2.x vocabulary that feeds a column is
//! listed here. Values are matched exactly (case-sensitive).

/// XML namespace of every PBCore element.
pub const PBCORE_NAMESPACE: &str = "http://www.pbcore.org/PBCore/PBCoreNamespace.html";

/// Local name of the root element of one asset record.
pub const DESCRIPTION_DOCUMENT: &str = "pbcoreDescriptionDocument";

/// Asset-level element names.
pub mod element {
    pub const IDENTIFIER: &str = "pbcoreIdentifier";
    pub const ANNOTATION: &str = "pbcoreAnnotation";
    pub const ASSET_DATE: &str = "pbcoreAssetDate";
    pub const TITLE: &str = "pbcoreTitle";
    pub const DESCRIPTION: &str = "pbcoreDescription";
    pub const ASSET_TYPE: &str = "pbcoreAssetType";
    pub const CREATOR: &str = "pbcoreCreator";
    pub const CREATOR_NAME: &str = "creator";
    pub const CREATOR_ROLE: &str = "creatorRole";
    pub const INSTANTIATION: &str = "pbcoreInstantiation";
}

/// Element names nested under `pbcoreInstantiation`.
pub mod instantiation {
    pub const IDENTIFIER: &str = "instantiationIdentifier";
    pub const MEDIA_TYPE: &str = "instantiationMediaType";
    pub const DATE: &str = "instantiationDate";
    pub const DIGITAL: &str = "instantiationDigital";
    pub const PHYSICAL: &str = "instantiationPhysical";
    pub const GENERATIONS: &str = "instantiationGenerations";
    pub const DURATION: &str = "instantiationDuration";
    pub const LOCATION: &str = "instantiationLocation";
}

/// Discriminator attribute names.
pub mod attribute {
    pub const SOURCE: &str = "source";
    pub const ANNOTATION_TYPE: &str = "annotationType";
    pub const DATE_TYPE: &str = "dateType";
    pub const TITLE_TYPE: &str = "titleType";
    pub const DESCRIPTION_TYPE: &str = "descriptionType";
}

/// Values of `pbcoreIdentifier/@source`.
pub mod source {
    /// Archival inventory; its identifier is the asset's primary id.
    pub const ARCHIVE_INVENTORY: &str = "http://americanarchiveinventory.org";
    /// External media-hosting service.
    pub const SONY_CI: &str = "Sony Ci";
}

/// Values of `pbcoreAnnotation/@annotationType`.
pub mod annotation {
    pub const ORGANIZATION: &str = "organization";
    pub const LEVEL_OF_USER_ACCESS: &str = "Level of User Access";
    pub const SPECIAL_COLLECTIONS: &str = "special_collections";
    pub const TRANSCRIPT_STATUS: &str = "Transcript Status";
    pub const TRANSCRIPT_URL: &str = "Transcript URL";
    pub const PROXY_START_TIME: &str = "Proxy Start Time";
}

/// Values of `pbcoreAssetDate/@dateType`.
pub mod date {
    pub const BROADCAST: &str = "Broadcast";
    pub const CREATED: &str = "Created";
    pub const COPYRIGHT: &str = "Copyright";
}

/// Values shared by `@titleType` and `@descriptionType`.
pub mod title {
    pub const SERIES: &str = "Series";
    pub const PROGRAM: &str = "Program";
    pub const EPISODE: &str = "Episode";
    pub const EPISODE_NUMBER: &str = "Episode Number";
    pub const SEGMENT: &str = "Segment";
    pub const RAW_FOOTAGE: &str = "Raw Footage";
    pub const PROMO: &str = "Promo";
    pub const CLIP: &str = "Clip";
}

/// Media type values that drive the asset media-type rule.
pub mod media_type {
    pub const MOVING_IMAGE: &str = "Moving Image";
    pub const SOUND: &str = "Sound";
}

/// Creator role naming the producing organization.
pub const PRODUCING_ORGANIZATION_ROLE: &str = "Producing Organization";

/// Generation label of an access proxy.
pub const PROXY_GENERATION: &str = "Proxy";
