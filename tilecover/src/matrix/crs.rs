//! Coordinate reference system identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized coordinate reference system identifier.
///
/// Capabilities documents spell the same CRS many ways: `EPSG:3857`,
/// `urn:ogc:def:crs:EPSG::3857`, `urn:ogc:def:crs:EPSG:6.18:3857`, or a
/// legacy alias such as `EPSG:900913`. Matrix-set selection must treat all
/// of those as the same system, so parsing keeps only the authority and
/// code, folds well-known aliases, and uppercases both parts. Two `Crs`
/// values are equal exactly when they normalize identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Crs {
    authority: String,
    code: String,
}

impl Crs {
    /// Parses an identifier in authority:code, URN, or alias form.
    pub fn parse(input: &str) -> Crs {
        let spelled = input.trim().to_ascii_uppercase();
        let spelled = ["URN:OGC:DEF:CRS:", "URN:X-OGC:DEF:CRS:"]
            .iter()
            .find_map(|prefix| spelled.strip_prefix(prefix))
            .unwrap_or(&spelled);

        let parts: Vec<&str> = spelled.split(':').filter(|p| !p.is_empty()).collect();
        let (authority, code) = match parts.as_slice() {
            [] => ("EPSG", ""),
            [code] => ("EPSG", *code),
            // a middle part, when present, is an authority version
            [authority, .., code] => (*authority, *code),
        };

        match (authority, code) {
            // legacy spherical-Mercator aliases
            ("EPSG", "900913") | ("EPSG", "102100") | ("EPSG", "102113") | ("OSGEO", "41001") => {
                Crs::epsg("3857")
            }
            ("OGC", "CRS84") | ("CRS", "84") => Crs::epsg("4326"),
            _ => Crs {
                authority: authority.to_string(),
                code: code.to_string(),
            },
        }
    }

    fn epsg(code: &str) -> Crs {
        Crs {
            authority: "EPSG".to_string(),
            code: code.to_string(),
        }
    }

    /// The geographic longitude/latitude system, `EPSG:4326`.
    pub fn geographic() -> Crs {
        Crs::epsg("4326")
    }

    /// The normalized authority, e.g. `EPSG`.
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The normalized code, e.g. `3857`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// True when coordinates in this system are geographic degrees.
    ///
    /// Every other system is assumed to use meters, the common case for
    /// projected systems.
    pub fn is_geographic(&self) -> bool {
        self.authority == "EPSG" && self.code == "4326"
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.authority, self.code)
    }
}

impl From<String> for Crs {
    fn from(input: String) -> Crs {
        Crs::parse(&input)
    }
}

impl From<&str> for Crs {
    fn from(input: &str) -> Crs {
        Crs::parse(input)
    }
}

impl From<Crs> for String {
    fn from(crs: Crs) -> String {
        crs.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authority_code_form() {
        let crs = Crs::parse("EPSG:3857");
        assert_eq!(crs.authority(), "EPSG");
        assert_eq!(crs.code(), "3857");
    }

    #[test]
    fn test_parse_urn_forms() {
        assert_eq!(Crs::parse("urn:ogc:def:crs:EPSG::3857"), Crs::parse("EPSG:3857"));
        assert_eq!(
            Crs::parse("urn:ogc:def:crs:EPSG:6.18:3857"),
            Crs::parse("EPSG:3857")
        );
        assert_eq!(
            Crs::parse("urn:x-ogc:def:crs:EPSG:4326"),
            Crs::parse("EPSG:4326")
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Crs::parse("epsg:4326"), Crs::parse("EPSG:4326"));
        assert_eq!(Crs::parse(" EPSG:4326 "), Crs::parse("EPSG:4326"));
    }

    #[test]
    fn test_parse_bare_code_assumes_epsg() {
        assert_eq!(Crs::parse("4326"), Crs::parse("EPSG:4326"));
    }

    #[test]
    fn test_legacy_mercator_aliases_fold_to_3857() {
        for alias in ["EPSG:900913", "EPSG:102100", "EPSG:102113", "OSGEO:41001"] {
            assert_eq!(Crs::parse(alias), Crs::parse("EPSG:3857"), "{alias}");
        }
    }

    #[test]
    fn test_crs84_aliases_fold_to_4326() {
        assert_eq!(Crs::parse("CRS:84"), Crs::parse("EPSG:4326"));
        assert_eq!(Crs::parse("OGC:CRS84"), Crs::parse("EPSG:4326"));
        assert_eq!(Crs::parse("urn:ogc:def:crs:OGC:1.3:CRS84"), Crs::parse("EPSG:4326"));
    }

    #[test]
    fn test_distinct_systems_stay_distinct() {
        assert_ne!(Crs::parse("EPSG:4326"), Crs::parse("EPSG:3857"));
        assert_ne!(Crs::parse("EPSG:32631"), Crs::parse("EPSG:3857"));
    }

    #[test]
    fn test_is_geographic() {
        assert!(Crs::parse("EPSG:4326").is_geographic());
        assert!(Crs::parse("CRS:84").is_geographic());
        assert!(!Crs::parse("EPSG:3857").is_geographic());
        assert!(!Crs::parse("EPSG:32631").is_geographic());
    }

    #[test]
    fn test_geographic_constructor_is_4326() {
        assert_eq!(Crs::geographic(), Crs::parse("EPSG:4326"));
        assert!(Crs::geographic().is_geographic());
    }

    #[test]
    fn test_display_prints_normalized_form() {
        assert_eq!(Crs::parse("urn:ogc:def:crs:EPSG::3857").to_string(), "EPSG:3857");
    }

    #[test]
    fn test_serde_round_trip_normalizes() {
        let crs: Crs = serde_json::from_str("\"urn:ogc:def:crs:EPSG::3857\"").unwrap();
        assert_eq!(crs, Crs::parse("EPSG:3857"));
        assert_eq!(serde_json::to_string(&crs).unwrap(), "\"EPSG:3857\"");
    }
}
