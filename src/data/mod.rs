/// Data layer: core types, loading, echo and statistics.
///
/// Architecture:
/// ```text
///   frame;time_ms .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → TimingDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ TimingDataset │  Vec<Sample>, columns() → (x, y)
///   └───────────────┘
///        │
///        ├──► echo     x / y listing on stdout
///        └──► summary  mean, variance, range
/// ```

pub mod echo;
pub mod loader;
pub mod model;
pub mod summary;
