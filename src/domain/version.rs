use semver::Version;

use crate::domain::IncrementType;
use crate::error::Result;

/// Parse a strict semver string into a [Version].
///
/// The grammar is the `semver` crate's: `MAJOR.MINOR.PATCH[-pre][+build]`,
/// no `v` prefix, no partial versions. Anything else is a parse error.
pub fn parse_version(input: &str) -> Result<Version> {
    Ok(Version::parse(input)?)
}

/// Return a copy of `current` with the segment named by `increment` bumped.
///
/// Lower segments reset to zero and pre-release/build metadata is cleared
/// whenever any segment moves. `IncrementType::None` returns the version
/// unchanged.
pub fn apply_increment(current: &Version, increment: IncrementType) -> Version {
    match increment {
        IncrementType::Major => Version::new(current.major + 1, 0, 0),
        IncrementType::Minor => Version::new(current.major, current.minor + 1, 0),
        IncrementType::Patch => Version::new(current.major, current.minor, current.patch + 1),
        IncrementType::None => current.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_parse_round_trip() {
        for input in ["0.1.0", "1.2.3", "10.20.30", "1.0.0-alpha.1", "2.0.0+build.5"] {
            let v = parse_version(input).unwrap();
            assert_eq!(v.to_string(), input);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_version("1.2").is_err());
        assert!(parse_version("v1.2.3").is_err());
        assert!(parse_version("1.2.3.4").is_err());
        assert!(parse_version("release-1").is_err());
        assert!(parse_version("").is_err());
    }

    #[test]
    fn test_increment_major() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!(apply_increment(&v, IncrementType::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_increment_minor() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!(apply_increment(&v, IncrementType::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_increment_patch() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!(apply_increment(&v, IncrementType::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_increment_none_is_identity() {
        let v = parse_version("1.2.3").unwrap();
        assert_eq!(apply_increment(&v, IncrementType::None), v);
    }

    #[test]
    fn test_increment_strictly_grows() {
        let v = parse_version("1.2.3").unwrap();
        for increment in [
            IncrementType::Major,
            IncrementType::Minor,
            IncrementType::Patch,
        ] {
            assert!(apply_increment(&v, increment) > v);
        }
    }

    #[test]
    fn test_increment_clears_prerelease() {
        let v = parse_version("1.2.3-rc.1").unwrap();
        assert_eq!(apply_increment(&v, IncrementType::Patch), Version::new(1, 2, 4));
    }
}
