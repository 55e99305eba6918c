use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

///
/// Wire format of a single value, using the Postgres format codes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum Format {
    Text = 0,
    Binary = 1,
}

impl Format {
    /// The format code sent on the wire.
    pub fn code(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for Format {
    type Error = DispatchError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Format::Text),
            1 => Ok(Format::Binary),
            _ => Err(DispatchError::UnknownFormat(code)),
        }
    }
}

impl FromStr for Format {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "binary" => Ok(Format::Binary),
            _ => Err(DispatchError::UnknownFormatName(s.to_string())),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Binary => write!(f, "binary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, Format::Text)]
    #[case(1, Format::Binary)]
    fn test_from_code(#[case] code: i16, #[case] format: Format) {
        assert_eq!(Format::try_from(code).unwrap(), format);
        assert_eq!(format.code(), code);
    }

    #[rstest]
    fn test_unknown_code() {
        assert!(matches!(
            Format::try_from(2),
            Err(DispatchError::UnknownFormat(2))
        ));
    }

    #[rstest]
    #[case("binary", Format::Binary)]
    #[case("Text", Format::Text)]
    fn test_from_str(#[case] name: &str, #[case] format: Format) {
        assert_eq!(name.parse::<Format>().unwrap(), format);
    }

    #[rstest]
    fn test_display_round_trip() {
        for format in [Format::Text, Format::Binary] {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }
}
