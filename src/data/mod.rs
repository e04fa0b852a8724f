/// Data layer: the in-memory frame, CSV reading and writing.
///
/// Architecture:
/// ```text
///   test.csv / sample_submission.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV (ReadOptions) → Frame
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Frame    │  ordered columns of typed Values
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  Frame → submission.csv (no index column)
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod options;
pub mod writer;
