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

use core::convert::TryFrom;
use parity_scale_codec::{Decode, Encode, Error as CodecError, Input};

/// Opaque data attached to a token transfer.
#[derive(Encode, Clone, Debug, Eq, PartialEq)]
pub struct Memo(Vec<u8>);

impl Memo {
    pub const MAXIMUM_SUPPORTED_LENGTH: usize = 34;

    /// Smart constructor that attempts to build a Memo from a Vec<u8> with an arbitrary size.
    /// It fails if the input vector is larger than Memo::MAXIMUM_SUPPORTED_LENGTH.
    pub fn from_vec(vector: Vec<u8>) -> Result<Self, InordinateMemoError> {
        if vector.len() > Self::MAXIMUM_SUPPORTED_LENGTH {
            Err(InordinateMemoError())
        } else {
            Ok(Memo(vector))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Memo {
    type Error = InordinateMemoError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Memo::from_vec(value)
    }
}

impl TryFrom<&[u8]> for Memo {
    type Error = InordinateMemoError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Memo::from_vec(value.to_vec())
    }
}

impl From<Memo> for Vec<u8> {
    fn from(value: Memo) -> Self {
        value.0
    }
}

impl Decode for Memo {
    fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
        let decoded: Vec<u8> = Vec::decode(input)?;
        Memo::from_vec(decoded)
            .map_err(|_| CodecError::from("Failed to decode an inordinate Memo."))
    }
}

#[derive(Encode, Clone, Debug, Eq, PartialEq)]
pub struct InordinateMemoError();

impl core::fmt::Display for InordinateMemoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "The provided vector exceeds the Memo limit of {} bytes.",
            Memo::MAXIMUM_SUPPORTED_LENGTH,
        )
    }
}

impl std::error::Error for InordinateMemoError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn memo_bound() {
        assert!(Memo::from_vec(vec![7u8; 34]).is_ok());
        assert_eq!(Memo::from_vec(vec![7u8; 35]), Err(InordinateMemoError()));
    }

    #[test]
    fn decode_rejects_inordinate_memo() {
        let encoded = vec![0u8; 35].encode();
        assert!(Memo::decode(&mut &encoded[..]).is_err());
    }
}
