//! Asset kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of marketing asset kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_kind", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    /// Marketing email body.
    Email,
    /// Landing page copy.
    LandingPage,
    /// Short-form ad copy.
    AdCopy,
    /// Product brochure text.
    ProductBrochure,
}

impl AssetKind {
    /// Return the kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::LandingPage => "landing-page",
            Self::AdCopy => "ad-copy",
            Self::ProductBrochure => "product-brochure",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = adforge_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "landing-page" => Ok(Self::LandingPage),
            "ad-copy" => Ok(Self::AdCopy),
            "product-brochure" => Ok(Self::ProductBrochure),
            _ => Err(adforge_core::AppError::validation(format!(
                "Invalid asset kind: '{s}'. Expected one of: email, landing-page, ad-copy, product-brochure"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for kind in [
            AssetKind::Email,
            AssetKind::LandingPage,
            AssetKind::AdCopy,
            AssetKind::ProductBrochure,
        ] {
            assert_eq!(kind.as_str().parse::<AssetKind>().unwrap(), kind);
        }
        assert!("poster".parse::<AssetKind>().is_err());
    }
}
