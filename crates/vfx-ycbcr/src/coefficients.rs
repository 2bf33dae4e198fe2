//! Luma coefficient standards.
//!
//! Each ITU luma coefficient family fixes the weights `Kr`, `Kg`, `Kb` with
//! which R'G'B' are summed into Y'. Everything else in a Y'CbCr encoding
//! (the chroma scaling, the inverse transform) follows from those three
//! numbers.
//!
//! | Standard  | Kr     | Kg     | Kb     | Source               |
//! |-----------|--------|--------|--------|----------------------|
//! | Rec.601   | 0.299  | 0.587  | 0.114  | BT.601-7, page 2     |
//! | Rec.709   | 0.2126 | 0.7152 | 0.0722 | BT.709-6, item 3.2   |
//! | Rec.2020  | 0.2627 | 0.6780 | 0.0593 | BT.2020-2, table 4   |

use std::fmt;
use std::str::FromStr;

use vfx_core::{Error, Result};
use vfx_math::Mat3;

/// Supported luma coefficient standards.
///
/// The set is closed: an encoding with any other coefficients cannot be
/// described, so an unsupported standard is rejected where raw codes enter
/// the system ([`LumaStandard::from_h273`], [`FromStr`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LumaStandard {
    /// ITU-R BT.601 (SDTV, JPEG/JFIF).
    #[default]
    Rec601,
    /// ITU-R BT.709 (HDTV).
    Rec709,
    /// ITU-R BT.2020 non-constant luminance (UHDTV).
    Rec2020,
}

/// Luma weights of one standard. `kr + kg + kb == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaCoefficients {
    /// Red weight
    pub kr: f64,
    /// Green weight
    pub kg: f64,
    /// Blue weight
    pub kb: f64,
}

const REC601: LumaCoefficients = LumaCoefficients { kr: 0.299, kg: 0.587, kb: 0.114 };
const REC709: LumaCoefficients = LumaCoefficients { kr: 0.2126, kg: 0.7152, kb: 0.0722 };
const REC2020: LumaCoefficients = LumaCoefficients { kr: 0.2627, kg: 0.6780, kb: 0.0593 };

impl LumaStandard {
    /// All supported standards.
    pub const ALL: [LumaStandard; 3] = [Self::Rec601, Self::Rec709, Self::Rec2020];

    /// Returns the luma weights of this standard.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vfx_ycbcr::LumaStandard;
    ///
    /// let k = LumaStandard::Rec709.coefficients();
    /// assert_eq!(k.kb, 0.0722);
    /// ```
    #[inline]
    pub const fn coefficients(self) -> LumaCoefficients {
        match self {
            Self::Rec601 => REC601,
            Self::Rec709 => REC709,
            Self::Rec2020 => REC2020,
        }
    }

    /// Maps an ITU-T H.273 `MatrixCoefficients` code point to a standard.
    ///
    /// Codes 5 and 6 (BT.470BG, SMPTE 170M) share the Rec.601 weights.
    /// Every other code, constant-luminance Rec.2020 (10) included, has no
    /// supported coefficient set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vfx_ycbcr::LumaStandard;
    ///
    /// assert_eq!(LumaStandard::from_h273(1).unwrap(), LumaStandard::Rec709);
    /// assert!(LumaStandard::from_h273(10).is_err());
    /// ```
    pub fn from_h273(code: u32) -> Result<Self> {
        match code {
            1 => Ok(Self::Rec709),
            5 | 6 => Ok(Self::Rec601),
            9 => Ok(Self::Rec2020),
            other => Err(Error::UnsupportedStandard(other)),
        }
    }

    /// The H.273 code point written for this standard.
    #[inline]
    pub const fn h273_code(self) -> u32 {
        match self {
            Self::Rec601 => 6,
            Self::Rec709 => 1,
            Self::Rec2020 => 9,
        }
    }

    /// Short lowercase name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rec601 => "rec601",
            Self::Rec709 => "rec709",
            Self::Rec2020 => "rec2020",
        }
    }
}

impl fmt::Display for LumaStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LumaStandard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "rec601" | "bt601" | "601" | "smpte170m" | "jpeg" => Ok(Self::Rec601),
            "rec709" | "bt709" | "709" => Ok(Self::Rec709),
            "rec2020" | "bt2020" | "2020" | "bt2020ncl" => Ok(Self::Rec2020),
            _ => Err(Error::UnknownStandard(s.to_string())),
        }
    }
}

impl LumaCoefficients {
    /// Builds the R'G'B' -> Y'CbCr matrix with unit excursions.
    ///
    /// Rows are `Y'`, `Cb`, `Cr`; Y' spans [0, 1], Cb and Cr span
    /// [-0.5, 0.5]:
    ///
    /// ```text
    /// Y' =  Kr R' + Kg G' + Kb B'
    /// Cb = (B' - Y') / (2 (1 - Kb))
    /// Cr = (R' - Y') / (2 (1 - Kr))
    /// ```
    pub fn rgb_to_ycbcr_matrix(&self) -> Mat3 {
        let cb_fac = 1.0 / (2.0 * (1.0 - self.kb));
        let cr_fac = 1.0 / (2.0 * (1.0 - self.kr));
        Mat3::from_rows([
            [self.kr, self.kg, self.kb],
            [-self.kr * cb_fac, -self.kg * cb_fac, (1.0 - self.kb) * cb_fac],
            [(1.0 - self.kr) * cr_fac, -self.kg * cr_fac, -self.kb * cr_fac],
        ])
    }
}
