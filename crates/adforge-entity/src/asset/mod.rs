//! Asset entity: model, enums, and version history.

pub mod kind;
pub mod model;
pub mod status;
pub mod version;

pub use kind::AssetKind;
pub use model::{Asset, AssetFilter, CreateAsset, UpdateAsset};
pub use status::AssetStatus;
pub use version::VersionEntry;
