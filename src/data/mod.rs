/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → GdpDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ GdpDataset  │  Vec<GdpPoint>, year → GDP lookup
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
