// DevFunding Registry
// Copyright (C) 2019 Monadic GmbH <radicle@monadic.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Length-bounded UTF-8 strings used for all user supplied text.

use core::convert::TryFrom;
use parity_scale_codec::{Decode, Encode, EncodeLike, Error as CodecError, Input, Output};

/// A [String] that is at most `MAX` bytes long.
///
/// The bound is enforced on construction and when decoding. An empty [Text] is valid; whether
/// empty text is acceptable is decided by the transaction that receives it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Text<const MAX: usize>(String);

impl<const MAX: usize> Text<MAX> {
    pub const MAXIMUM_SUPPORTED_LENGTH: usize = MAX;

    /// Returns an error if [String::len] of the provided string is greater than `MAX`.
    pub fn from_string(s: String) -> Result<Self, InordinateTextError> {
        if s.len() > MAX {
            Err(InordinateTextError {
                length: s.len(),
                maximum: MAX,
            })
        } else {
            Ok(Text(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const MAX: usize> From<Text<MAX>> for String {
    fn from(text: Text<MAX>) -> Self {
        text.0
    }
}

impl<const MAX: usize> TryFrom<String> for Text<MAX> {
    type Error = InordinateTextError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::from_string(input)
    }
}

impl<const MAX: usize> TryFrom<&str> for Text<MAX> {
    type Error = InordinateTextError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::from_string(input.to_string())
    }
}

impl<const MAX: usize> core::str::FromStr for Text<MAX> {
    type Err = InordinateTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s.to_string())
    }
}

impl<const MAX: usize> core::fmt::Display for Text<MAX> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const MAX: usize> Encode for Text<MAX> {
    fn size_hint(&self) -> usize {
        self.0.size_hint()
    }

    fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
        self.0.encode_to(dest)
    }
}

impl<const MAX: usize> EncodeLike for Text<MAX> {}

impl<const MAX: usize> Decode for Text<MAX> {
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let decoded: String = String::decode(input)?;
        if decoded.len() > MAX {
            Err(From::from("Text length exceeds its bound."))
        } else {
            Ok(Text(decoded))
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InordinateTextError {
    pub length: usize,
    pub maximum: usize,
}

impl std::fmt::Display for InordinateTextError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "The provided string's length is {} while the text is limited to {} bytes",
            self.length, self.maximum
        )
    }
}

impl std::error::Error for InordinateTextError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn long_text() {
        fn long_text(n: usize) -> Result<Text<32>, InordinateTextError> {
            Text::from_string(std::iter::repeat("X").take(n).collect::<String>())
        }
        let wrong = long_text(33);
        let right = long_text(32);

        assert_eq!(
            wrong,
            Err(InordinateTextError {
                length: 33,
                maximum: 32
            })
        );
        assert!(
            right.is_ok(),
            "Error: string with acceptable length failed conversion to Text."
        )
    }

    #[test]
    fn multibyte_length_is_counted_in_bytes() {
        // Four characters, eight bytes.
        assert!(Text::<7>::try_from("αφδв").is_err());
        assert!(Text::<8>::try_from("αφδв").is_ok());
    }

    #[test]
    fn decode_rejects_inordinate_text() {
        let encoded = String::from("too long for four").encode();
        assert!(Text::<4>::decode(&mut &encoded[..]).is_err());

        let decoded = Text::<32>::decode(&mut &encoded[..]).unwrap();
        assert_eq!(decoded.as_str(), "too long for four");
    }
}
