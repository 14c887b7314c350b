//! National identity code validation and decoding
//!
//! A citizen identity code is exactly 12 ASCII digits:
//!
//! - digits 0..3: region (province) code, checked against a fixed table
//! - digit 3: combined sex/century code (even male, odd female; pairs
//!   0-1, 2-3, 4-5, 6-7, 8-9 select the 1900s through 2300s)
//! - digits 4..6: two-digit year within that century
//! - digits 6..12: personal serial, treated as opaque
//!
//! Both the 12-digit shape and a known region prefix are required for
//! validity. Decoding helpers return `None` as the "invalid code" sentinel
//! so callers can choose their own display text.

use crate::types::LedgerError;
use std::fmt;

/// Region (province) code table: 3-digit prefix to display name.
///
/// Transcribed verbatim from the issuing authority's list; the set of
/// prefixes is closed, so membership here is the validity check.
const REGIONS: [(&str, &str); 63] = [
    ("001", "Hà Nội"),
    ("002", "Hà Giang"),
    ("004", "Cao Bằng"),
    ("006", "Bắc Kạn"),
    ("008", "Tuyên Quang"),
    ("010", "Lào Cai"),
    ("011", "Điện Biên"),
    ("012", "Lai Châu"),
    ("014", "Sơn La"),
    ("015", "Yên Bái"),
    ("017", "Hoà Bình"),
    ("019", "Thái Nguyên"),
    ("020", "Lạng Sơn"),
    ("022", "Quảng Ninh"),
    ("024", "Bắc Giang"),
    ("025", "Phú Thọ"),
    ("026", "Vĩnh Phúc"),
    ("027", "Bắc Ninh"),
    ("030", "Hải Dương"),
    ("031", "Hải Phòng"),
    ("033", "Hưng Yên"),
    ("034", "Thái Bình"),
    ("035", "Hà Nam"),
    ("036", "Nam Định"),
    ("037", "Ninh Bình"),
    ("038", "Thanh Hoá"),
    ("040", "Nghệ An"),
    ("042", "Hà Tĩnh"),
    ("044", "Quảng Bình"),
    ("045", "Quảng Trị"),
    ("046", "Thừa Thiên Huế"),
    ("048", "Đà Nẵng"),
    ("049", "Quảng Nam"),
    ("051", "Quảng Ngãi"),
    ("052", "Bình Định"),
    ("054", "Phú Yên"),
    ("056", "Khánh Hoà"),
    ("058", "Ninh Thuận"),
    ("060", "Bình Thuận"),
    ("062", "Kon Tum"),
    ("064", "Gia Lai"),
    ("066", "Đắk Lắk"),
    ("067", "Đắk Nông"),
    ("068", "Lâm Đồng"),
    ("070", "Bình Phước"),
    ("072", "Tây Ninh"),
    ("074", "Bình Dương"),
    ("075", "Đồng Nai"),
    ("077", "Bà Rịa - Vũng Tàu"),
    ("079", "TP. Hồ Chí Minh"),
    ("080", "Long An"),
    ("082", "Tiền Giang"),
    ("083", "Bến Tre"),
    ("084", "Trà Vinh"),
    ("086", "Vĩnh Long"),
    ("087", "Đồng Tháp"),
    ("089", "An Giang"),
    ("091", "Kiên Giang"),
    ("092", "Cần Thơ"),
    ("093", "Hậu Giang"),
    ("094", "Sóc Trăng"),
    ("095", "Bạc Liêu"),
    ("096", "Cà Mau"),
];

/// Sex decoded from the identity code's fourth digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Check whether a string is a valid identity code
///
/// True iff the string is exactly 12 ASCII digits and its 3-digit prefix
/// appears in the region table.
pub fn is_valid(code: &str) -> bool {
    code.len() == 12
        && code.bytes().all(|b| b.is_ascii_digit())
        && region_name(&code[0..3]).is_some()
}

/// Look up the display name for a 3-digit region prefix
///
/// `None` is the "invalid code" sentinel for prefixes outside the table.
pub fn region_name(prefix: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(code, _)| *code == prefix)
        .map(|(_, name)| *name)
}

/// Decode the sex and four-digit birth year from an identity code
///
/// The digit at index 3 selects both: even values are male, odd female,
/// and each pair of values moves the century forward from 1900. The year
/// is the century base plus digits 4..6.
///
/// Returns `None` if the relevant characters are not digits. After
/// [`IdentityCode::parse`] that branch is unreachable; it is kept for
/// callers decoding unvalidated input.
pub fn decode_sex_and_birth_year(code: &str) -> Option<(Sex, u16)> {
    let sex_century = code.as_bytes().get(3)?;
    if !sex_century.is_ascii_digit() {
        return None;
    }
    let digit = sex_century - b'0';
    let sex = if digit % 2 == 0 { Sex::Male } else { Sex::Female };
    let century = 1900 + u16::from(digit / 2) * 100;
    let year_in_century: u16 = code.get(4..6)?.parse().ok()?;
    Some((sex, century + year_in_century))
}

/// A validated 12-digit national identity code
///
/// Can only be obtained through [`IdentityCode::parse`], so every instance
/// satisfies the shape and region-prefix invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityCode(String);

impl IdentityCode {
    /// Parse and validate an identity code
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidIdentityCode`] if the input is not
    /// exactly 12 digits or its region prefix is not in the table.
    pub fn parse(code: &str) -> Result<Self, LedgerError> {
        if is_valid(code) {
            Ok(IdentityCode(code.to_string()))
        } else {
            Err(LedgerError::invalid_identity_code(code))
        }
    }

    /// The raw 12-digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name of the issuing region
    pub fn region(&self) -> Option<&'static str> {
        region_name(&self.0[0..3])
    }

    /// Sex and four-digit birth year encoded in the code
    pub fn sex_and_birth_year(&self) -> Option<(Sex, u16)> {
        decode_sex_and_birth_year(&self.0)
    }

    /// The opaque 6-digit personal serial (digits 6..12)
    pub fn serial(&self) -> &str {
        &self.0[6..12]
    }
}

impl fmt::Display for IdentityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
