/// Data layer: core types, loading, and the filter/query engine.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<Record>, column names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  pure queries: option sets, link resolution
///   └──────────┘
/// ```
///
/// Everything in `filter` is a side-effect-free function of `(catalog,
/// selection)`; the catalog never changes after loading.

pub mod filter;
pub mod loader;
pub mod model;
