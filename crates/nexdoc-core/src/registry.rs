//! Canonical type tables
//!
//! Fixed, versioned data for the well-known NEX types: the mapping from DDL
//! source tokens to canonical display names, the hyperlink anchors into the
//! wiki reference, and the recognized container spellings. Not user
//! configurable.

/// Base URL of the external type reference
pub const WIKI_BASE: &str = "https://github.com/kinnay/NintendoClients/wiki";

/// Canonical base type every structure without an explicit parent inherits from
pub const BASE_STRUCTURE: &str = "Structure";

/// Placeholder used when the source never yields a real protocol identifier
pub const UNKNOWN_PROTOCOL_ID: &str = "Unknown ID";

/// The single display label all source container spellings collapse to
pub const LIST_DISPLAY: &str = "List";

/// Source container spellings, each written `Name<ElementType>`
pub const CONTAINER_SPELLINGS: &[&str] = &["std_list", "qlist", "qvector", "List"];

/// Map a DDL source token to its canonical display name.
///
/// Unmatched tokens pass through the resolver unchanged, so this table only
/// carries the spellings the DDL grammar actually produces.
pub fn canonical_name(raw: &str) -> Option<&'static str> {
    Some(match raw {
        "byte" | "uint8" => "Uint8",
        "uint16" => "Uint16",
        "uint32" => "Uint32",
        "uint64" => "Uint64",
        "int8" => "Sint8",
        "int16" => "Sint16",
        "int32" => "Sint32",
        "int64" => "Sint64",
        "bool" => "Bool",
        "float" => "Float",
        "double" => "Double",
        "string" => "String",
        "buffer" => "Buffer",
        "qbuffer" => "qBuffer",
        "datetime" => "DateTime",
        "stationurl" => "StationURL",
        "qresult" => "Result",
        "variant" => "Variant",
        "any" => "AnyDataHolder",
        _ => return None,
    })
}

/// Hyperlink target for a canonical display name, if the wiki documents it.
pub fn link_target(display: &str) -> Option<String> {
    let anchor = match display {
        "Uint8" | "Uint16" | "Uint32" | "Uint64" | "Sint8" | "Sint16" | "Sint32"
        | "Sint64" | "Bool" | "Float" | "Double" => "primitive-types",
        "String" => "string",
        "Buffer" => "buffer",
        "qBuffer" => "qbuffer",
        "List" => "list",
        "Map" => "map",
        "DateTime" => "datetime",
        "StationURL" => "stationurl",
        "Result" => "result",
        "Variant" => "variant",
        "Structure" => "structure",
        "Data" => "data",
        "AnyDataHolder" => "anydataholder",
        "RVConnectionData" => "rvconnectiondata",
        _ => return None,
    };
    Some(format!("{WIKI_BASE}/NEX-Common-Types#{anchor}"))
}
