//! Data layer: ordering, alignment, assembly, and array transforms.
//!
//! Architecture:
//! ```text
//!   day-directory file URLs
//!            │
//!            ▼
//!      ┌──────────┐
//!      │ sequence  │  circular acquisition order from a UTC offset
//!      └──────────┘
//!            │
//!            ▼
//!      ┌──────────┐      ┌────────┐
//!      │ assemble  │ ───▶ │ burst  │  intervals → index ranges at the cursor
//!      └──────────┘      └────────┘
//!            │
//!            ▼
//!      ┌─────────────┐
//!      │ DayAssembly  │  Array2<f32> + Vec<BurstIndexRange>
//!      └─────────────┘
//!            │
//!            ▼
//!      ┌──────────┐  ┌──────┐
//!      │ denoise   │  │ snr  │  optional post-processing
//!      └──────────┘  └──────┘
//! ```

pub mod assemble;
pub mod burst;
pub mod denoise;
pub mod model;
pub mod sequence;
pub mod snr;
pub mod time;
