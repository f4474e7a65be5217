//! The `NAME/MAJOR.MINOR` protocol token.

use std::fmt;

use http::Version;

/// A protocol name with its numeric version.
///
/// A token whose version part is missing or not numeric is kept with `major` and `minor` set to
/// [`ProtoVersion::UNKNOWN`] instead of being rejected. The sentinel is rendered as is, so such
/// a token formats as `NAME/-1.-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtoVersion {
    pub prefix: String,
    pub major: i32,
    pub minor: i32,
}

impl ProtoVersion {
    pub const UNKNOWN: i32 = -1;

    pub fn new<S: Into<String>>(prefix: S, major: i32, minor: i32) -> Self {
        Self { prefix: prefix.into(), major, minor }
    }

    /// Parses a protocol token; never fails.
    pub fn parse(s: &str) -> Self {
        let Some((prefix, version)) = s.split_once('/') else {
            return Self::new(s, Self::UNKNOWN, Self::UNKNOWN);
        };

        let numbers = version
            .split_once('.')
            .and_then(|(major, minor)| Some((major.parse::<i32>().ok()?, minor.parse::<i32>().ok()?)));

        match numbers {
            Some((major, minor)) => Self::new(prefix, major, minor),
            None => Self::new(prefix, Self::UNKNOWN, Self::UNKNOWN),
        }
    }

    pub fn is_known(&self) -> bool {
        self.major != Self::UNKNOWN && self.minor != Self::UNKNOWN
    }

    /// Maps an `HTTP/x.y` token onto [`http::Version`], if it names one.
    pub fn http_version(&self) -> Option<Version> {
        if self.prefix != "HTTP" {
            return None;
        }
        match (self.major, self.minor) {
            (0, 9) => Some(Version::HTTP_09),
            (1, 0) => Some(Version::HTTP_10),
            (1, 1) => Some(Version::HTTP_11),
            (2, 0) => Some(Version::HTTP_2),
            (3, 0) => Some(Version::HTTP_3),
            _ => None,
        }
    }
}

/// `HTTP/1.1`
impl Default for ProtoVersion {
    fn default() -> Self {
        Self::new("HTTP", 1, 1)
    }
}

impl fmt::Display for ProtoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}.{}", self.prefix, self.major, self.minor)
    }
}

impl From<Version> for ProtoVersion {
    fn from(version: Version) -> Self {
        match version {
            Version::HTTP_09 => Self::new("HTTP", 0, 9),
            Version::HTTP_10 => Self::new("HTTP", 1, 0),
            Version::HTTP_2 => Self::new("HTTP", 2, 0),
            Version::HTTP_3 => Self::new("HTTP", 3, 0),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_http_11() {
        assert_eq!(ProtoVersion::parse("HTTP/1.1"), ProtoVersion::new("HTTP", 1, 1));
    }

    #[test]
    fn parse_without_slash() {
        let proto = ProtoVersion::parse("HTTP");
        assert_eq!(proto, ProtoVersion::new("HTTP", -1, -1));
        assert!(!proto.is_known());
    }

    #[test]
    fn parse_non_numeric() {
        assert_eq!(ProtoVersion::parse("HTTP/x.y"), ProtoVersion::new("HTTP", -1, -1));
        assert_eq!(ProtoVersion::parse("HTTP/1.y"), ProtoVersion::new("HTTP", -1, -1));
        assert_eq!(ProtoVersion::parse("HTTP/2"), ProtoVersion::new("HTTP", -1, -1));
    }

    #[test]
    fn parse_other_prefix() {
        assert_eq!(ProtoVersion::parse("RTSP/2.0"), ProtoVersion::new("RTSP", 2, 0));
        assert_eq!(ProtoVersion::parse("RTSP/2.0").http_version(), None);
    }

    #[test]
    fn display() {
        assert_eq!(ProtoVersion::default().to_string(), "HTTP/1.1");
        assert_eq!(ProtoVersion::parse("HTTP").to_string(), "HTTP/-1.-1");
        assert_eq!(ProtoVersion::parse("HTTP/1.0").to_string(), "HTTP/1.0");
    }

    #[test]
    fn to_http_version() {
        assert_eq!(ProtoVersion::parse("HTTP/1.0").http_version(), Some(Version::HTTP_10));
        assert_eq!(ProtoVersion::parse("HTTP/1.1").http_version(), Some(Version::HTTP_11));
        assert_eq!(ProtoVersion::parse("HTTP/x.y").http_version(), None);
        assert_eq!(ProtoVersion::from(Version::HTTP_2).to_string(), "HTTP/2.0");
    }
}
