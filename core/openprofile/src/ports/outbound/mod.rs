//! Outbound ポート: ワークフロー固有の外界（ダンプの用意・応答の送出）

pub mod dump_source;
pub mod feedback_sink;

pub use dump_source::{DumpSource, StagedDump};
pub use feedback_sink::FeedbackSink;
